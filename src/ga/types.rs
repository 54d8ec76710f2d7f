//! Board and population model.
//!
//! A [`Board`] places exactly one queen per column: `genes[column] = row`.
//! Column clashes are impossible by construction, so only shared rows and
//! diagonals count as collisions.

use super::error::BoardError;
use rand::Rng;
use std::fmt;

/// A candidate N-Queens placement.
///
/// # Invariants
///
/// - `genes.len()` equals the board size and is at least 1
/// - every gene lies in `[0, board_size)`
///
/// Rows may repeat; a repeated row is a collision that fitness penalizes.
///
/// With the `serde` feature a board (de)serializes as its plain row list and
/// goes through [`Board::new`] on the way in.
///
/// # Examples
///
/// ```
/// use u_nqueens::ga::Board;
///
/// let board = Board::new(vec![1, 3, 0, 2]).unwrap();
/// assert_eq!(board.size(), 4);
/// assert!(board.is_solution());
/// assert_eq!(board.to_string(), "[1, 3, 0, 2]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Board {
    genes: Vec<usize>,
}

impl Board {
    /// Builds a board from row indices, checking that every row fits.
    pub fn new(genes: Vec<usize>) -> Result<Self, BoardError> {
        let size = genes.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }
        let misplaced = genes.iter().enumerate().find(|&(_, &row)| row >= size);
        if let Some((column, &row)) = misplaced {
            return Err(BoardError::RowOutOfRange { column, row, size });
        }
        Ok(Self { genes })
    }

    /// Creates a board with every row drawn uniformly from `[0, size)`.
    ///
    /// `size` must be at least 1.
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> Self {
        let genes = (0..size).map(|_| rng.random_range(0..size)).collect();
        Self { genes }
    }

    /// Assembles a board from pieces already known to be in range.
    pub(crate) fn from_valid(genes: Vec<usize>) -> Self {
        debug_assert!(genes.iter().all(|&row| row < genes.len()));
        Self { genes }
    }

    /// Board size (number of columns).
    pub fn size(&self) -> usize {
        self.genes.len()
    }

    /// Row index per column.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Overwrites the row of one column. Both indices must be in range.
    pub(crate) fn set_row(&mut self, column: usize, row: usize) {
        debug_assert!(row < self.genes.len());
        self.genes[column] = row;
    }

    /// Returns `true` if no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        super::fitness::collisions(self) == 0
    }
}

impl TryFrom<Vec<usize>> for Board {
    type Error = BoardError;

    fn try_from(genes: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(genes)
    }
}

impl From<Board> for Vec<usize> {
    fn from(board: Board) -> Self {
        board.genes
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.genes)
    }
}

/// Creates `count` random boards of the given size.
pub fn random_population<R: Rng>(board_size: usize, count: usize, rng: &mut R) -> Vec<Board> {
    (0..count).map(|_| Board::random(board_size, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_new_accepts_in_range_rows() {
        let board = Board::new(vec![0, 0, 2]).unwrap();
        assert_eq!(board.genes(), &[0, 0, 2]);
        assert_eq!(board.size(), 3);
    }

    #[test]
    fn test_new_rejects_row_out_of_range() {
        let err = Board::new(vec![0, 4, 1, 2]).unwrap_err();
        assert_eq!(
            err,
            BoardError::RowOutOfRange {
                column: 1,
                row: 4,
                size: 4
            }
        );
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(Board::new(vec![]).unwrap_err(), BoardError::Empty);
    }

    #[test]
    fn test_try_from_validates_rows() {
        let board = Board::try_from(vec![1, 3, 0, 2]).unwrap();
        assert_eq!(Vec::from(board), vec![1, 3, 0, 2]);

        assert_eq!(
            Board::try_from(vec![0, 5]),
            Err(BoardError::RowOutOfRange {
                column: 1,
                row: 5,
                size: 2
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_invalid_rows() {
        let board: Board = serde_json::from_str("[1, 3, 0, 2]").unwrap();
        assert_eq!(board.genes(), &[1, 3, 0, 2]);
        assert_eq!(serde_json::to_string(&board).unwrap(), "[1,3,0,2]");

        let err = serde_json::from_str::<Board>("[0, 5]").unwrap_err();
        assert!(err.to_string().contains("row 5 in column 1"), "{err}");
        assert!(serde_json::from_str::<Board>("[]").is_err());
    }

    #[test]
    fn test_random_board_respects_bounds() {
        let mut rng = create_rng(42);
        for size in 1..12 {
            let board = Board::random(size, &mut rng);
            assert_eq!(board.size(), size);
            assert!(board.genes().iter().all(|&row| row < size));
        }
    }

    #[test]
    fn test_random_population_shape() {
        let mut rng = create_rng(7);
        let population = random_population(8, 150, &mut rng);
        assert_eq!(population.len(), 150);
        assert!(population.iter().all(|b| b.size() == 8));
    }

    #[test]
    fn test_display_lists_rows() {
        let board = Board::new(vec![2, 0, 3, 1]).unwrap();
        assert_eq!(format!("{board}"), "[2, 0, 3, 1]");
    }

    #[test]
    fn test_is_solution() {
        assert!(Board::new(vec![1, 3, 0, 2]).unwrap().is_solution());
        assert!(!Board::new(vec![0, 1, 2, 3]).unwrap().is_solution());
    }
}
