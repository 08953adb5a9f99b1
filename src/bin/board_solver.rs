use clap::Parser;
use eightpuzzle_solver::board::Board;
use eightpuzzle_solver::heuristics::Heuristic;
use eightpuzzle_solver::solver::{
    solve_astar, solve_bfs, solve_hill_climb, solve_iddfs, Solution,
};
use eightpuzzle_solver::utils::{board_from_str, render_path};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Search algorithm: bfs, iddfs, hill-climb, or astar
    #[clap(short, long, default_value = "astar")]
    algorithm: String,

    /// Depth bound used by iddfs
    #[clap(short, long, default_value_t = 50)]
    depth: usize,

    /// Heuristic for hill-climb and astar: misplaced or manhattan
    #[clap(long, default_value = "misplaced")]
    heuristic: String,

    /// Path to the board file (nine cells 0-8; '.' or '_' also mark the blank)
    board_file: PathBuf,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
    board_from_str(&content).map_err(|e| format!("Invalid board format: {}", e))
}

fn parse_heuristic(name: &str) -> Result<Heuristic, String> {
    match name {
        "misplaced" => Ok(Heuristic::MisplacedTiles),
        "manhattan" => Ok(Heuristic::ManhattanDistance),
        other => Err(format!(
            "Unknown heuristic '{}' (expected misplaced or manhattan)",
            other
        )),
    }
}

fn run_algorithm(args: &Args, initial: Board, goal: Board) -> Result<Option<Solution>, String> {
    let heuristic = parse_heuristic(&args.heuristic)?;
    match args.algorithm.as_str() {
        "bfs" => Ok(solve_bfs(initial, goal)),
        "iddfs" => Ok(solve_iddfs(initial, goal, args.depth)),
        "hill-climb" => Ok(solve_hill_climb(initial, goal, heuristic)),
        "astar" => Ok(solve_astar(initial, goal, heuristic)),
        other => Err(format!(
            "Unknown algorithm '{}' (expected bfs, iddfs, hill-climb, or astar)",
            other
        )),
    }
}

fn main() {
    let args = Args::parse();

    let initial = read_board_file(&args.board_file).unwrap_or_else(|e| {
        eprintln!(
            "Failed to load board from {}: {}",
            args.board_file.display(),
            e
        );
        std::process::exit(2);
    });
    let goal = Board::solved();

    println!("Loaded board from {}\n", args.board_file.display());
    println!("Initial board state:\n{}", initial);
    println!("Searching with {}...\n", args.algorithm);

    match run_algorithm(&args, initial, goal) {
        Ok(Some(solution)) => {
            println!(
                "Solution found: {} moves, {} states expanded.\n",
                solution.moves(),
                solution.expanded
            );
            println!("{}", render_path(&solution.path));
        }
        Ok(None) => println!("No solution found.\n"),
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    }
}
