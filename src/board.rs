//! Core board model for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Direction`: the four ways the blank can move, in the fixed order used
//!   everywhere successors are generated.
//! - `Board`: a full 3x3 tile arrangement with successor generation, the
//!   goal predicate, display formatting, and deterministic scrambling for
//!   reproducible experiments.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Number of cells on the board. The board is always 3x3.
pub const CELL_COUNT: usize = 9;

/// Side length of the square board.
pub const SIDE: usize = 3;

/// A single move of the blank cell, named from the blank's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in the fixed successor generation order.
    ///
    /// Every place that enumerates moves iterates this array, so the order
    /// in which successors appear is a stable part of the crate's behavior:
    /// hill-climbing tie-breaks and IDDFS branch order both depend on it.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the cell index the blank lands on when it moves from `pos`
    /// in this direction, or `None` when the move would leave the grid.
    ///
    /// # Examples
    /// ```
    /// use eightpuzzle_solver::board::Direction;
    /// // The blank in the top-left corner can only move down or right.
    /// assert_eq!(Direction::Up.apply(0), None);
    /// assert_eq!(Direction::Left.apply(0), None);
    /// assert_eq!(Direction::Down.apply(0), Some(3));
    /// assert_eq!(Direction::Right.apply(0), Some(1));
    /// ```
    pub fn apply(self, pos: usize) -> Option<usize> {
        let (row, col) = (pos / SIDE, pos % SIDE);
        match self {
            Direction::Up if row > 0 => Some(pos - SIDE),
            Direction::Down if row < SIDE - 1 => Some(pos + SIDE),
            Direction::Left if col > 0 => Some(pos - 1),
            Direction::Right if col < SIDE - 1 => Some(pos + 1),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// A full board configuration.
///
/// Cells are stored row-major; the value 0 marks the blank and 1-8 are the
/// tiles. A `Board` is assumed to hold each of 0..=8 exactly once. The
/// search algorithms never re-validate this invariant; parsing in
/// [`crate::utils`] enforces it at the construction boundary.
///
/// Two boards are equal iff their cells are equal element-wise; this
/// equality (and the derived `Hash`) underlies all visited-set membership
/// in the solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; CELL_COUNT],
}

impl Board {
    /// The solved configuration: tiles 1-8 in row-major order, blank last.
    ///
    /// # Examples
    /// ```
    /// use eightpuzzle_solver::board::Board;
    /// let goal = Board::solved();
    /// assert!(goal.is_goal(&goal));
    /// assert_eq!(goal.blank_position(), 8);
    /// ```
    pub fn solved() -> Self {
        Board {
            cells: [1, 2, 3, 4, 5, 6, 7, 8, 0],
        }
    }

    /// Creates a board directly from a raw cell array.
    ///
    /// The caller is responsible for the permutation invariant (each of
    /// 0..=8 exactly once). Use [`crate::utils::board_from_str`] for
    /// validated construction from text.
    pub fn from_cells(cells: [u8; CELL_COUNT]) -> Self {
        Board { cells }
    }

    /// Returns the value stored at cell index `pos` (0-8, row-major).
    pub fn cell(&self, pos: usize) -> u8 {
        self.cells[pos]
    }

    /// Returns the raw cell array.
    pub fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// Index of the blank cell.
    pub fn blank_position(&self) -> usize {
        self.cells
            .iter()
            .position(|&v| v == 0)
            .expect("a well-formed board holds exactly one blank")
    }

    /// Positions adjacent to `pos`, in [`Direction::ALL`] order.
    ///
    /// Up to four entries; directions blocked by a grid edge are skipped
    /// (top row blocks Up, bottom row blocks Down, left column blocks Left,
    /// right column blocks Right).
    pub fn neighbor_positions(pos: usize) -> Vec<usize> {
        Direction::ALL.iter().filter_map(|d| d.apply(pos)).collect()
    }

    /// Returns a copy of this board with the values at `a` and `b`
    /// exchanged. The receiver is not mutated.
    pub fn with_swapped(&self, a: usize, b: usize) -> Board {
        let mut cells = self.cells;
        cells.swap(a, b);
        Board { cells }
    }

    /// All boards reachable in one legal blank move, in generation order.
    pub fn successors(&self) -> Vec<Board> {
        let blank = self.blank_position();
        Self::neighbor_positions(blank)
            .into_iter()
            .map(|target| self.with_swapped(blank, target))
            .collect()
    }

    /// True iff this board equals `goal` cell for cell.
    pub fn is_goal(&self, goal: &Board) -> bool {
        self == goal
    }

    /// Walks `steps` random legal moves away from the solved board.
    ///
    /// The walk is driven by a `SmallRng` seeded with `seed`, so the same
    /// seed always produces the same board. The move that would immediately
    /// undo the previous one is never chosen, so short scrambles do not
    /// collapse back toward the start. Every board produced this way is
    /// reachable from the goal, hence solvable.
    pub fn scrambled_with_seed(seed: u64, steps: usize) -> Board {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::solved();
        let mut previous_blank = None;

        for _ in 0..steps {
            let blank = board.blank_position();
            let candidates: Vec<usize> = Self::neighbor_positions(blank)
                .into_iter()
                .filter(|&target| Some(target) != previous_blank)
                .collect();
            // Every cell has at least two neighbors, so at least one
            // candidate survives the no-undo filter.
            let target = candidates[rng.gen_range(0..candidates.len())];
            board = board.with_swapped(blank, target);
            previous_blank = Some(blank);
        }
        board
    }
}

impl fmt::Display for Board {
    /// Formats the board as three rows of three values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            for col in 0..SIDE {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[row * SIDE + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_order_is_up_down_left_right() {
        assert_eq!(
            Direction::ALL,
            [
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right
            ]
        );
    }

    #[test]
    fn test_neighbor_positions_corner_edge_center() {
        // Top-left corner: Down, Right.
        assert_eq!(Board::neighbor_positions(0), vec![3, 1]);
        // Top edge: Down, Left, Right.
        assert_eq!(Board::neighbor_positions(1), vec![4, 0, 2]);
        // Center: all four, in Up, Down, Left, Right order.
        assert_eq!(Board::neighbor_positions(4), vec![1, 7, 3, 5]);
        // Bottom-right corner: Up, Left.
        assert_eq!(Board::neighbor_positions(8), vec![5, 7]);
    }

    #[test]
    fn test_with_swapped_does_not_mutate_the_receiver() {
        let board = Board::from_cells([1, 2, 0, 4, 5, 3, 7, 8, 6]);
        let swapped = board.with_swapped(2, 5);
        assert_eq!(board.cells(), &[1, 2, 0, 4, 5, 3, 7, 8, 6]);
        assert_eq!(swapped.cells(), &[1, 2, 3, 4, 5, 0, 7, 8, 6]);
    }

    #[test]
    fn test_successors_counts_by_blank_position() {
        let corner = Board::from_cells([0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(corner.successors().len(), 2);

        let edge = Board::from_cells([1, 0, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(edge.successors().len(), 3);

        let center = Board::from_cells([1, 2, 3, 4, 0, 5, 6, 7, 8]);
        assert_eq!(center.successors().len(), 4);
    }

    #[test]
    fn test_successors_each_differ_by_one_swap_with_the_blank() {
        let board = Board::from_cells([1, 2, 3, 4, 0, 5, 6, 7, 8]);
        let blank = board.blank_position();
        for successor in board.successors() {
            let moved = successor.blank_position();
            assert!(
                Board::neighbor_positions(blank).contains(&moved),
                "blank moved to a non-adjacent cell"
            );
            assert_eq!(board.with_swapped(blank, moved), successor);
        }
    }

    #[test]
    fn test_solved_board_is_its_own_goal() {
        let goal = Board::solved();
        assert!(goal.is_goal(&goal));
        assert!(!Board::from_cells([1, 2, 0, 4, 5, 3, 7, 8, 6]).is_goal(&goal));
    }

    #[test]
    fn test_scrambled_with_seed_determinism() {
        let seed = 123;
        let board1 = Board::scrambled_with_seed(seed, 12);
        let board2 = Board::scrambled_with_seed(seed, 12);
        assert_eq!(board1, board2, "Boards with the same seed must be identical.");

        let board3 = Board::scrambled_with_seed(seed + 1, 12);
        assert_ne!(board1, board3, "Boards with different seeds should differ.");
    }

    #[test]
    fn test_scrambled_board_is_a_permutation() {
        for seed in 0..8 {
            let board = Board::scrambled_with_seed(seed, 20);
            let mut values: Vec<u8> = board.cells().to_vec();
            values.sort_unstable();
            assert_eq!(values, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
        }
    }

    #[test]
    fn test_scramble_of_zero_steps_is_the_solved_board() {
        assert_eq!(Board::scrambled_with_seed(7, 0), Board::solved());
    }

    #[test]
    fn test_display_formats_three_rows() {
        let board = Board::from_cells([1, 2, 0, 4, 5, 3, 7, 8, 6]);
        assert_eq!(format!("{}", board), "1 2 0\n4 5 3\n7 8 6\n");
    }
}
