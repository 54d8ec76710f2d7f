//! Genetic-algorithm solver for the N-Queens problem.
//!
//! Places N queens on an N×N board so that no two share a row, column or
//! diagonal, by evolving a population of candidate boards:
//!
//! - **Encoding**: one queen per column, the gene is its row
//! - **Fitness**: double-counted attacking pairs, turned into a score
//! - **Selection**: roulette wheel or tournament
//! - **Reproduction**: single-point crossover at a fixed column, then
//!   random-reset mutation
//! - **Termination**: a collision-free board, or the generation cap
//!
//! All randomness flows through an explicit generator, so every run is
//! reproducible from its seed.
//!
//! ```
//! use u_nqueens::ga::{GaConfig, GaRunner};
//!
//! let config = GaConfig::tournament(6, 3)
//!     .with_population_size(40)
//!     .with_max_generations(100)
//!     .with_seed(1);
//! let result = GaRunner::run(&config).unwrap();
//! println!("{result}");
//! ```

pub mod ga;
pub mod random;
