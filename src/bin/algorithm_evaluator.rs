//! Runs every search strategy across a batch of seeded scrambles and
//! reports path lengths and expansion counts, per board and on average.

use clap::Parser;
use eightpuzzle_solver::board::Board;
use eightpuzzle_solver::heuristics::Heuristic;
use eightpuzzle_solver::solver::{
    solve_astar, solve_bfs, solve_hill_climb, solve_iddfs, Solution,
};
use std::collections::HashMap;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of scrambled boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: usize,

    /// Scramble length in random legal moves from the solved board
    #[clap(short, long, default_value_t = 12)]
    steps: usize,

    /// Seed of the first board; board i uses start_seed + i
    #[clap(long, default_value_t = 0)]
    start_seed: u64,

    /// Depth bound for IDDFS
    #[clap(short, long, default_value_t = 20)]
    depth: usize,
}

/// Per-algorithm accumulators: boards solved, total moves over solved
/// boards, total states expanded over all boards.
#[derive(Default)]
struct Tally {
    solved: usize,
    total_moves: usize,
    total_expanded: usize,
}

fn main() {
    let args = Args::parse();
    let goal = Board::solved();
    let depth = args.depth;

    let algorithms: Vec<(&str, Box<dyn Fn(Board) -> Option<Solution>>)> = vec![
        ("BFS", Box::new(move |b| solve_bfs(b, goal))),
        ("IDDFS", Box::new(move |b| solve_iddfs(b, goal, depth))),
        (
            "HillClimb",
            Box::new(move |b| solve_hill_climb(b, goal, Heuristic::MisplacedTiles)),
        ),
        (
            "A*-misplaced",
            Box::new(move |b| solve_astar(b, goal, Heuristic::MisplacedTiles)),
        ),
        (
            "A*-manhattan",
            Box::new(move |b| solve_astar(b, goal, Heuristic::ManhattanDistance)),
        ),
    ];

    let mut tallies: HashMap<&str, Tally> = HashMap::new();
    for (name, _) in &algorithms {
        tallies.insert(*name, Tally::default());
    }

    println!(
        "Evaluating {} boards scrambled with {} moves...",
        args.boards, args.steps
    );

    for board_idx in 0..args.boards {
        let seed = args.start_seed + board_idx as u64;
        let initial = Board::scrambled_with_seed(seed, args.steps);

        println!("\nBoard {} (seed {}):", board_idx, seed);

        for (name, solve) in &algorithms {
            let tally = tallies.get_mut(name).expect("tally registered above");
            match solve(initial) {
                Some(solution) => {
                    println!(
                        "  {:<14} moves: {:<4} expanded: {}",
                        name,
                        solution.moves(),
                        solution.expanded
                    );
                    tally.solved += 1;
                    tally.total_moves += solution.moves();
                    tally.total_expanded += solution.expanded;
                }
                None => {
                    println!("  {:<14} no solution", name);
                }
            }
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Boards evaluated: {}", args.boards);

    let mut summary: Vec<(&str, &Tally)> = algorithms
        .iter()
        .map(|(name, _)| (*name, &tallies[name]))
        .collect();
    // Most effective first: most boards solved, then fewest states expanded.
    summary.sort_by_key(|(_, tally)| (args.boards - tally.solved, tally.total_expanded));

    for (name, tally) in summary {
        if tally.solved == 0 {
            println!("{:<14} solved 0/{}", name, args.boards);
            continue;
        }
        println!(
            "{:<14} solved {}/{}, avg moves {:.2}, avg expanded {:.1}",
            name,
            tally.solved,
            args.boards,
            tally.total_moves as f64 / tally.solved as f64,
            tally.total_expanded as f64 / args.boards as f64
        );
    }
}
