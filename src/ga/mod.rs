//! Genetic Algorithm for N-Queens.
//!
//! Boards use the one-queen-per-column encoding: gene `i` is the row of the
//! queen in column `i`. Each generation is scored, parents are chosen by
//! roulette or tournament selection, spliced at a fixed crossover point and
//! mutated, and the offspring replace the whole population.
//!
//! # Key Types
//!
//! - [`Board`]: a candidate placement
//! - [`Scoring`]: collision count → score, and the perfect score
//! - [`Selection`] / [`Mutation`]: strategy choices for a run
//! - [`GaConfig`]: run parameters (board size, population, crossover point, cap)
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: outcome, best board, score history
//!
//! # Submodules
//!
//! - [`fitness`]: collision counting and scoring rules
//! - [`operators`]: single-point crossover and reset mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod error;
pub mod fitness;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use error::{BoardError, ConfigError, GaError, SelectionError};
pub use fitness::{collisions, Scoring};
pub use operators::Mutation;
pub use runner::{evolve_generation, GaResult, GaRunner, Generation, GenerationStats, Outcome};
pub use selection::{Distribution, MatingPool, Selection};
pub use types::{random_population, Board};
