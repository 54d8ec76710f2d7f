//! Fitness evaluation.
//!
//! Fitness counts collisions with a pairwise scan over **ordered** column
//! pairs, so every attacking pair is counted twice. The score is
//! `(K - collisions) / 2` where `K` is the largest possible double-counted
//! collision total; a collision-free board therefore scores `K / 2`, the
//! number of non-attacking pairs.
//!
//! Two rules pick `K`:
//!
//! | Rule | K | Perfect score |
//! |------|---|---------------|
//! | [`Scoring::Scaled`] | `N·(N-1)` | `N·(N-1)/2` |
//! | [`Scoring::Reference`] | `56` (8×8 board) | `28` |
//!
//! `Reference` keeps the fixed constant of the classic 8-queens formulation.
//! On other board sizes its scores are not comparable across sizes and can
//! go negative for N > 8.

use super::types::Board;

/// Board size the fixed scoring constant was derived for.
pub const REFERENCE_BOARD_SIZE: usize = 8;

/// Counts attacking queen pairs, each pair counted once per ordering.
///
/// Queens in columns `i != j` attack each other when they share a row or
/// when `|i - j| == |row_i - row_j|`.
///
/// # Complexity
/// O(N²)
pub fn collisions(board: &Board) -> usize {
    let genes = board.genes();
    let mut count = 0;
    for (i, &row_i) in genes.iter().enumerate() {
        for (j, &row_j) in genes.iter().enumerate() {
            if i != j && (row_i == row_j || i.abs_diff(j) == row_i.abs_diff(row_j)) {
                count += 1;
            }
        }
    }
    count
}

/// Largest double-counted collision total on an `n`-column board.
fn max_collisions(n: usize) -> usize {
    n * n.saturating_sub(1)
}

/// Rule that turns a collision count into a score. Higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scoring {
    /// `K = N·(N-1)`: the perfect score scales with the board.
    #[default]
    Scaled,

    /// `K = 56` regardless of board size; perfect score is always 28.
    Reference,
}

impl Scoring {
    /// The constant `K` for the given board size.
    pub fn collision_budget(&self, board_size: usize) -> usize {
        match self {
            Scoring::Scaled => max_collisions(board_size),
            Scoring::Reference => max_collisions(REFERENCE_BOARD_SIZE),
        }
    }

    /// Score of a collision-free board.
    ///
    /// ```
    /// use u_nqueens::ga::Scoring;
    ///
    /// assert_eq!(Scoring::Scaled.perfect_score(8), 28.0);
    /// assert_eq!(Scoring::Scaled.perfect_score(5), 10.0);
    /// assert_eq!(Scoring::Reference.perfect_score(5), 28.0);
    /// ```
    pub fn perfect_score(&self, board_size: usize) -> f64 {
        self.collision_budget(board_size) as f64 / 2.0
    }

    /// Scores a board: `(K - collisions) / 2`.
    pub fn evaluate(&self, board: &Board) -> f64 {
        let budget = self.collision_budget(board.size()) as f64;
        (budget - collisions(board) as f64) / 2.0
    }

    /// Whether the perfect score of this rule tracks the board size.
    pub fn matches_board_size(&self, board_size: usize) -> bool {
        match self {
            Scoring::Scaled => true,
            Scoring::Reference => board_size == REFERENCE_BOARD_SIZE,
        }
    }
}
