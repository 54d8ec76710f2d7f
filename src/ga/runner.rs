//! GA evolutionary loop execution.
//!
//! [`evolve_generation`] performs one cycle: score → select → crossover →
//! mutate → replace. [`GaRunner`] repeats it from a random population until a
//! collision-free board appears or the generation cap is reached.

use super::config::GaConfig;
use super::error::{BoardError, GaError, SelectionError};
use super::operators::crossover;
use super::selection::MatingPool;
use super::types::{random_population, Board};
use crate::random::create_rng;
use rand::Rng;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::instrument;

/// Output of one generational step.
#[derive(Debug, Clone)]
pub struct Generation {
    /// Generation counter after this step (input counter + 1).
    pub number: usize,

    /// Highest score in the population that was just evaluated.
    pub best_score: f64,

    /// The board holding `best_score`; the first one on ties.
    pub best: Board,

    /// The offspring that replace the evaluated population.
    pub population: Vec<Board>,
}

/// Runs one generation over `population`.
///
/// Every board is scored, the champion recorded, and parent pairs are
/// selected, spliced at `config.crossover_point` and mutated until the new
/// population is as large as the old one.
///
/// # Errors
/// - [`SelectionError::EmptyPopulation`] if `population` is empty
/// - [`BoardError::SizeMismatch`] if a board does not have
///   `config.board_size` columns
#[instrument(level = "trace", skip(population, config, rng), fields(population_size = population.len()))]
pub fn evolve_generation<R: Rng>(
    population: &[Board],
    generation: usize,
    config: &GaConfig,
    rng: &mut R,
) -> Result<Generation, GaError> {
    if let Some(board) = population.iter().find(|b| b.size() != config.board_size) {
        return Err(BoardError::SizeMismatch {
            expected: config.board_size,
            found: board.size(),
        }
        .into());
    }

    let pool = MatingPool::new(population, config.scoring);
    let (champion, best_score) = pool.champion().ok_or(SelectionError::EmptyPopulation)?;

    let target = population.len();
    let mut next_gen: Vec<Board> = Vec::with_capacity(target + 1);
    while next_gen.len() < target {
        let (p1, p2) = config.selection.select_pair(&pool, rng)?;
        let (mut child1, mut child2) =
            crossover(config.crossover_point, &population[p1], &population[p2])?;
        config.mutation.apply(&mut child1, rng);
        config.mutation.apply(&mut child2, rng);
        next_gen.push(child1);
        next_gen.push(child2);
    }
    // an odd target overshoots by one child
    next_gen.truncate(target);

    Ok(Generation {
        number: generation + 1,
        best_score,
        best: population[champion].clone(),
        population: next_gen,
    })
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// A collision-free board was found.
    Solved,

    /// The generation cap was reached first.
    CapReached,

    /// The caller raised the cancellation flag of
    /// [`GaRunner::run_with_cancel`]. Never produced by the other entry points.
    Cancelled,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Why the run stopped.
    pub outcome: Outcome,

    /// The best board seen during the entire run.
    pub best: Board,

    /// Score of `best`.
    pub best_score: f64,

    /// Score a collision-free board reaches under the run's scoring rule.
    pub perfect_score: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best score of each evaluated generation.
    pub score_history: Vec<f64>,
}

impl GaResult {
    /// Returns `true` if the run found a collision-free board.
    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }
}

impl fmt::Display for GaResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Solved => {
                writeln!(f, "Solution: {}", self.best)?;
                write!(f, "Number of iterations: {}", self.generations)
            }
            Outcome::CapReached => {
                writeln!(f, "Maximum iterations reached")?;
                writeln!(f, "Best solution: {}", self.best)?;
                write!(f, "Best score: {}", self.best_score)
            }
            Outcome::Cancelled => {
                writeln!(f, "Cancelled after {} iterations", self.generations)?;
                writeln!(f, "Best solution: {}", self.best)?;
                write!(f, "Best score: {}", self.best_score)
            }
        }
    }
}

/// Progress snapshot passed to observers after every generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Generations completed so far.
    pub generation: usize,

    /// Best score of the generation just evaluated.
    pub best_score: f64,

    /// Best score seen since the run started.
    pub best_so_far: f64,

    /// Score of a collision-free board.
    pub perfect_score: f64,
}

/// Executes the N-Queens GA.
///
/// A run stops when a board reaches the perfect score or when
/// `max_generations` is used up. Nothing else ends it, with one exception:
/// [`GaRunner::run_with_cancel`] lets the caller abort from outside. That
/// hook is opt-in and never fires on its own; `run`, `run_with_rng` and
/// `run_with_observer` pass no flag.
///
/// # Usage
///
/// ```
/// use u_nqueens::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::baseline(4)
///     .with_population_size(20)
///     .with_max_generations(200)
///     .with_seed(42);
/// let result = GaRunner::run(&config).unwrap();
/// assert!(result.generations <= 200);
/// assert!(result.best_score <= result.perfect_score);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA, seeding the generator from `config.seed`.
    ///
    /// # Errors
    /// [`GaError::Config`] if the configuration is invalid.
    pub fn run(config: &GaConfig) -> Result<GaResult, GaError> {
        Self::run_with_cancel(config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA stops at
    /// the end of the current generation and reports the best board so far.
    /// The flag is read after the solved and cap checks, so at least one
    /// generation always runs. With `None` this is exactly [`GaRunner::run`].
    pub fn run_with_cancel(
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult, GaError> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        evolve(config, &mut rng, cancel.as_deref(), |_| {})
    }

    /// Runs the GA with a caller-supplied generator; `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(config: &GaConfig, rng: &mut R) -> Result<GaResult, GaError> {
        evolve(config, rng, None, |_| {})
    }

    /// Runs the GA, calling `observer` after every generation.
    pub fn run_with_observer<R, F>(
        config: &GaConfig,
        rng: &mut R,
        observer: F,
    ) -> Result<GaResult, GaError>
    where
        R: Rng,
        F: FnMut(&GenerationStats),
    {
        evolve(config, rng, None, observer)
    }
}

#[instrument(
    level = "debug",
    skip(config, rng, cancel, observer),
    fields(
        board_size = config.board_size,
        population_size = config.population_size,
        max_generations = config.max_generations,
        selection = ?config.selection,
    )
)]
fn evolve<R, F>(
    config: &GaConfig,
    rng: &mut R,
    cancel: Option<&AtomicBool>,
    mut observer: F,
) -> Result<GaResult, GaError>
where
    R: Rng,
    F: FnMut(&GenerationStats),
{
    config.validate()?;

    let perfect_score = config.perfect_score();
    if !config.scoring.matches_board_size(config.board_size) {
        tracing::warn!(
            board_size = config.board_size,
            perfect_score,
            "scoring constant was derived for a different board size"
        );
    }

    let mut population = random_population(config.board_size, config.population_size, rng);
    let mut champion: Option<(Board, f64)> = None;
    let mut score_history = Vec::new();
    let mut generation = 0;

    let outcome = loop {
        let step = evolve_generation(&population, generation, config, rng)?;
        generation = step.number;
        score_history.push(step.best_score);

        let improved = champion
            .as_ref()
            .map_or(true, |(_, score)| step.best_score > *score);
        if improved {
            tracing::debug!(generation, score = step.best_score, board = %step.best, "new best board");
            champion = Some((step.best, step.best_score));
        }

        let best_so_far = champion.as_ref().map_or(step.best_score, |(_, s)| *s);
        observer(&GenerationStats {
            generation,
            best_score: step.best_score,
            best_so_far,
            perfect_score,
        });

        population = step.population;

        if step.best_score >= perfect_score {
            break Outcome::Solved;
        }
        if generation >= config.max_generations {
            break Outcome::CapReached;
        }
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            break Outcome::Cancelled;
        }
    };

    let (best, best_score) = champion.ok_or(SelectionError::EmptyPopulation)?;
    tracing::info!(
        ?outcome,
        generations = generation,
        best_score,
        board = %best,
        "run finished"
    );

    Ok(GaResult {
        outcome,
        best,
        best_score,
        perfect_score,
        generations: generation,
        score_history,
    })
}

// ============================================================================
// Tests
// ============================================================================
