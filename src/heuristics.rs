//! Heuristic estimates of the remaining distance to a goal board.
//!
//! Two estimates are provided side by side: the misplaced-tile count used
//! by the classic formulation, and the Manhattan distance as a more
//! informed alternative. Hill climbing and A* take a [`Heuristic`] selector
//! so either can drive the search.

use crate::board::{Board, CELL_COUNT, SIDE};

/// Counts the cells whose value differs from `goal`.
///
/// The blank is counted like any other cell when it is out of place, so the
/// result ranges over 0-9 and is 0 iff `board` equals `goal`.
///
/// # Arguments
/// * `board`: The board to evaluate.
/// * `goal`: The target configuration.
///
/// # Returns
/// The number of positions `i` with `board[i] != goal[i]`, as `u32`.
pub fn misplaced_tiles(board: &Board, goal: &Board) -> u32 {
    (0..CELL_COUNT)
        .filter(|&i| board.cell(i) != goal.cell(i))
        .count() as u32
}

/// Sums, over every non-blank tile, the grid distance between the tile's
/// cell and its cell in `goal`.
///
/// Never overestimates the true move count: each move changes one tile's
/// grid distance by exactly one.
///
/// # Arguments
/// * `board`: The board to evaluate.
/// * `goal`: The target configuration.
///
/// # Returns
/// The total Manhattan distance as `u32`; 0 iff `board` equals `goal`.
pub fn manhattan_distance(board: &Board, goal: &Board) -> u32 {
    let mut goal_position = [0usize; CELL_COUNT];
    for i in 0..CELL_COUNT {
        goal_position[goal.cell(i) as usize] = i;
    }

    let mut total = 0u32;
    for i in 0..CELL_COUNT {
        let value = board.cell(i);
        if value == 0 {
            continue;
        }
        let target = goal_position[value as usize];
        let row_diff = (i / SIDE).abs_diff(target / SIDE);
        let col_diff = (i % SIDE).abs_diff(target % SIDE);
        total += (row_diff + col_diff) as u32;
    }
    total
}

/// Selectable heuristic strategy for the informed searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// Count of cells out of place, blank included.
    MisplacedTiles,
    /// Summed grid distance of every tile to its goal cell.
    ManhattanDistance,
}

impl Heuristic {
    /// Evaluates this heuristic for `board` against `goal`.
    pub fn evaluate(self, board: &Board, goal: &Board) -> u32 {
        match self {
            Heuristic::MisplacedTiles => misplaced_tiles(board, goal),
            Heuristic::ManhattanDistance => manhattan_distance(board, goal),
        }
    }
}
