//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of one run. It is passed explicitly to
//! the runner and never changes while a run is in progress.

use super::error::ConfigError;
use super::fitness::Scoring;
use super::operators::Mutation;
use super::selection::Selection;

/// Configuration for one N-Queens GA run.
///
/// # Defaults
///
/// ```
/// use u_nqueens::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.board_size, 8);
/// assert_eq!(config.population_size, 150);
/// assert_eq!(config.crossover_point, 3);
/// assert_eq!(config.max_generations, 5000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_nqueens::ga::{GaConfig, Mutation, Selection};
///
/// let config = GaConfig::default()
///     .with_board_size(9)
///     .with_crossover_point(5)
///     .with_selection(Selection::Tournament(2))
///     .with_mutation(Mutation::Rate(0.05))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of columns (and rows) on the board.
    pub board_size: usize,

    /// Number of boards per generation. Must be even: offspring come in pairs.
    pub population_size: usize,

    /// Column at which parents are spliced, in `[0, board_size]`.
    pub crossover_point: usize,

    /// Generation cap. The run reports its best board when this is reached.
    pub max_generations: usize,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Offspring mutation policy.
    pub mutation: Mutation,

    /// Rule that converts collisions into a score.
    pub scoring: Scoring,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            population_size: 150,
            crossover_point: 3,
            max_generations: 5000,
            selection: Selection::default(),
            mutation: Mutation::default(),
            scoring: Scoring::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the board size.
    pub fn with_board_size(mut self, n: usize) -> Self {
        self.board_size = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover point.
    pub fn with_crossover_point(mut self, point: usize) -> Self {
        self.crossover_point = point;
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the mutation policy.
    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    /// Sets the scoring rule.
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Convenience builder for tournament selection.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Preset: roulette selection, every child mutated.
    ///
    /// The crossover point is the middle column.
    pub fn baseline(board_size: usize) -> Self {
        Self {
            board_size,
            crossover_point: board_size / 2,
            selection: Selection::Roulette,
            mutation: Mutation::Always,
            ..Self::default()
        }
    }

    /// Preset: tournament selection of size `k`, children mutated at 5%.
    pub fn tournament(board_size: usize, k: usize) -> Self {
        Self {
            selection: Selection::Tournament(k),
            mutation: Mutation::gated(),
            ..Self::baseline(board_size)
        }
    }

    /// Score a collision-free board reaches under this configuration.
    pub fn perfect_score(&self) -> f64 {
        self.scoring.perfect_score(self.board_size)
    }

    /// Validates the configuration.
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < 1 {
            return Err(ConfigError::BoardSizeTooSmall);
        }
        if self.crossover_point > self.board_size {
            return Err(ConfigError::CrossoverPointOutOfRange {
                point: self.crossover_point,
                board_size: self.board_size,
            });
        }
        if self.population_size == 0 || self.population_size % 2 != 0 {
            return Err(ConfigError::InvalidPopulationSize(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if let Selection::Tournament(0) = self.selection {
            return Err(ConfigError::TournamentSizeTooSmall);
        }
        if let Mutation::Rate(rate) = self.mutation {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::MutationRateOutOfRange(rate));
            }
        }
        Ok(())
    }
}
