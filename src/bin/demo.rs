//! Fixed demonstration driver: solves one hard-coded board with every
//! strategy in turn. Takes no arguments and always exits 0; "no solution"
//! is a printed outcome, not a failure.

use eightpuzzle_solver::board::Board;
use eightpuzzle_solver::heuristics::Heuristic;
use eightpuzzle_solver::solver::{
    solve_astar, solve_bfs, solve_hill_climb, solve_iddfs, Solution,
};
use eightpuzzle_solver::utils::render_path;

/// Depth bound for the iterative-deepening search.
const MAX_IDDFS_DEPTH: usize = 50;

fn report(name: &str, outcome: Option<Solution>) {
    println!("{} Solution:", name);
    match outcome {
        Some(solution) => println!("{}", render_path(&solution.path)),
        None => println!("No solution found for {}.\n", name),
    }
}

fn main() {
    let initial = Board::from_cells([1, 2, 0, 4, 5, 3, 7, 8, 6]);
    let goal = Board::solved();

    println!("Initial State:");
    println!("{}", initial);

    report("BFS", solve_bfs(initial, goal));
    report("IDDFS", solve_iddfs(initial, goal, MAX_IDDFS_DEPTH));
    report(
        "Hill Climbing",
        solve_hill_climb(initial, goal, Heuristic::MisplacedTiles),
    );
    report("A*", solve_astar(initial, goal, Heuristic::MisplacedTiles));
}
