//! # 8-Puzzle Search Library
//!
//! This library provides the state model for the 8-puzzle (a 3x3
//! sliding-tile board) and four classical search strategies for solving it:
//! breadth-first search, iterative-deepening depth-first search, greedy
//! hill climbing, and A*.
//!
//! It is used by three binaries:
//! - `demo`: solves one fixed configuration with every strategy in turn.
//! - `board_solver`: solves a board read from a file with a chosen strategy.
//! - `algorithm_evaluator`: compares the strategies across seeded scrambles.
//!
//! ## Modules
//! - `board`: the board representation (`Board`), blank moves (`Direction`),
//!   successor generation, the goal predicate, and deterministic scrambling.
//! - `heuristics`: distance-to-goal estimates used by hill climbing and A*.
//! - `solver`: the four search algorithms and the `Solution` type they return.
//! - `utils`: board parsing and path rendering for the binaries.

pub mod board;
pub mod heuristics;
pub mod solver;
pub mod utils;

// Items from sub-modules, if public, are accessed via their full path,
// e.g. `eightpuzzle_solver::solver::solve_bfs`. This keeps the top-level
// library namespace cleaner.
