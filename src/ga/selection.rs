//! Parent selection.
//!
//! Each generation is scored once into a [`MatingPool`]: the population,
//! one score per board (same index), and the cumulative
//! [`Distribution`] used by roulette selection. Scores live next to the
//! boards, never inside them.
//!
//! # Strategies
//!
//! - [`Selection::Roulette`]: fitness-proportionate, via the cumulative table
//! - [`Selection::Tournament`]: best of `k` uniform draws with replacement
//!
//! Both return a pair of population indices; a board may be picked for
//! both slots.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::error::SelectionError;
use super::fitness::Scoring;
use super::types::Board;
use rand::Rng;

/// Selection strategy for choosing parent pairs.
///
/// All strategies assume **maximization** (higher score = better).
///
/// # Examples
///
/// ```
/// use u_nqueens::ga::Selection;
///
/// // Fitness-proportionate selection
/// let sel = Selection::Roulette;
///
/// // Best of two random contenders per parent
/// let sel = Selection::Tournament(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Roulette wheel selection over the cumulative score distribution.
    ///
    /// # Complexity
    /// O(n) per parent (linear bucket scan)
    #[default]
    Roulette,

    /// Tournament selection: draw `k` boards with replacement, keep the best.
    ///
    /// Ties go to the first contender drawn.
    ///
    /// # Complexity
    /// O(k) per parent
    Tournament(usize),
}

impl Selection {
    /// Selects two parent indices from the pool.
    ///
    /// # Errors
    /// [`SelectionError::EmptyPopulation`] if the pool holds no boards.
    pub fn select_pair<R: Rng>(
        &self,
        pool: &MatingPool<'_>,
        rng: &mut R,
    ) -> Result<(usize, usize), SelectionError> {
        if pool.is_empty() {
            return Err(SelectionError::EmptyPopulation);
        }

        let pick = |rng: &mut R| match self {
            Selection::Roulette => pool.distribution.spin(rng.random::<f64>()),
            Selection::Tournament(k) => Some(tournament(&pool.scores, *k, rng)),
        };
        let first = pick(rng).ok_or(SelectionError::EmptyPopulation)?;
        let second = pick(rng).ok_or(SelectionError::EmptyPopulation)?;
        Ok((first, second))
    }
}

/// Tournament: `k` uniform draws, strict `>` keeps the first best seen.
fn tournament<R: Rng>(scores: &[f64], k: usize, rng: &mut R) -> usize {
    let n = scores.len();
    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k.max(1) {
        let idx = rng.random_range(0..n);
        if scores[idx] > scores[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

/// Cumulative, normalized score distribution aligned with a population.
///
/// Entry `i` is the probability of picking any of boards `0..=i`; the last
/// entry is 1 up to rounding. Negative scores weigh zero. When no board has
/// positive weight every bucket gets the same width.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    cumulative: Vec<f64>,
}

impl Distribution {
    /// Builds the prefix-summed distribution from raw scores.
    pub fn from_scores(scores: &[f64]) -> Self {
        let n = scores.len();
        let total: f64 = scores.iter().map(|s| s.max(0.0)).sum();

        let cumulative = if total > 0.0 {
            let mut acc = 0.0;
            scores
                .iter()
                .map(|s| {
                    acc += s.max(0.0) / total;
                    acc
                })
                .collect()
        } else {
            (1..=n).map(|i| i as f64 / n as f64).collect()
        };

        Self { cumulative }
    }

    /// The prefix sums, one per board.
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    /// Returns `true` if there are no buckets.
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Maps a draw `r` in `[0, 1)` to a board index.
    ///
    /// Index 0 if `r` is below the first bucket, otherwise the first `i`
    /// with `cumulative[i-1] <= r <= cumulative[i]`. A draw above the last
    /// bucket (rounding) lands on the last index. `None` if there are no
    /// buckets.
    pub fn spin(&self, r: f64) -> Option<usize> {
        let probs = &self.cumulative;
        if r < *probs.first()? {
            return Some(0);
        }
        let index = probs
            .windows(2)
            .position(|w| w[0] <= r && r <= w[1])
            .map_or(probs.len() - 1, |i| i + 1);
        Some(index)
    }
}

/// One generation's population together with its scores.
#[derive(Debug, Clone)]
pub struct MatingPool<'a> {
    population: &'a [Board],
    scores: Vec<f64>,
    distribution: Distribution,
}

impl<'a> MatingPool<'a> {
    /// Scores every board and builds the roulette distribution.
    pub fn new(population: &'a [Board], scoring: Scoring) -> Self {
        let scores: Vec<f64> = population.iter().map(|b| scoring.evaluate(b)).collect();
        let distribution = Distribution::from_scores(&scores);
        Self {
            population,
            scores,
            distribution,
        }
    }

    /// The scored boards.
    pub fn population(&self) -> &'a [Board] {
        self.population
    }

    /// Score per board, aligned by index.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// The roulette distribution.
    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    /// Number of boards.
    pub fn len(&self) -> usize {
        self.population.len()
    }

    /// Returns `true` if the pool holds no boards.
    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }

    /// Index and score of the best board; the first one wins ties.
    pub fn champion(&self) -> Option<(usize, f64)> {
        let mut iter = self.scores.iter().copied().enumerate();
        let first = iter.next()?;
        Some(iter.fold(first, |best, cur| if cur.1 > best.1 { cur } else { best }))
    }
}
