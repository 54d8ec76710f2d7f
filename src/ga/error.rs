//! Error types for the N-Queens GA.
//!
//! Configuration problems are caught once by
//! [`GaConfig::validate`](super::GaConfig::validate) before the first
//! generation; after that the loop only works with validated bounds.

/// Invalid run parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The board must have at least one column.
    #[error("board_size must be at least 1")]
    BoardSizeTooSmall,

    /// The crossover point must lie within the gene sequence.
    #[error("crossover_point {point} is outside [0, {board_size}]")]
    CrossoverPointOutOfRange { point: usize, board_size: usize },

    /// Offspring are produced in pairs, so the population must be even.
    #[error("population_size must be a positive even number, got {0}")]
    InvalidPopulationSize(usize),

    /// A tournament needs at least one contender.
    #[error("tournament size must be at least 1")]
    TournamentSizeTooSmall,

    /// The run cap must allow at least one generation.
    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    /// Mutation probability is not a probability.
    #[error("mutation rate must lie in [0, 1], got {0}")]
    MutationRateOutOfRange(f64),
}

/// Errors raised while choosing parents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// There is nobody to select from.
    #[error("cannot select from empty population")]
    EmptyPopulation,
}

/// A gene sequence that does not describe a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A board needs at least one column.
    #[error("a board needs at least one column")]
    Empty,

    /// A row index does not fit on the board.
    #[error("row {row} in column {column} is outside [0, {size})")]
    RowOutOfRange {
        column: usize,
        row: usize,
        size: usize,
    },

    /// Two boards that must share a size do not.
    #[error("board has {found} columns, expected {expected}")]
    SizeMismatch { expected: usize, found: usize },
}

/// Top-level error returned by the runner.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("selection failed: {0}")]
    Selection(#[from] SelectionError),

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
}
