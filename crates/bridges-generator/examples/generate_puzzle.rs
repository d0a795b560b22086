//! Example demonstrating Bridges puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` with a `BacktrackSolver`
//! - Generate a puzzle for a given grid size, optionally from a fixed seed
//! - Display the puzzle, a solution, and the seed
//! - Pick the puzzle that needs the most search out of many samples
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- --columns 10 --rows 8
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```
//!
//! Sample many puzzles in parallel and keep the hardest one for the
//! fundamental techniques:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --solver fundamental --samples 500
//! ```
//!
//! Set `RUST_LOG=debug` to see generation attempts.

use std::process;

use bridges_generator::{
    GeneratedPuzzle, GenerationError, GeneratorConfig, PuzzleGenerator, PuzzleSeed,
};
use bridges_solver::{BacktrackSolver, BacktrackSolverStats, TechniqueSolver, technique};
use clap::{Parser, ValueEnum};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SolverKind {
    All,
    Fundamental,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of grid columns (4-25).
    #[arg(long, default_value_t = 7)]
    columns: u8,

    /// Number of grid rows (4-25).
    #[arg(long, default_value_t = 7)]
    rows: u8,

    /// Exact number of islands. Random within the grid's bounds if omitted.
    #[arg(long)]
    islands: Option<usize>,

    /// Seed to reproduce, as 64 hex digits.
    #[arg(long, conflicts_with = "samples")]
    seed: Option<PuzzleSeed>,

    /// Solver technique set used to validate and score puzzles.
    #[arg(long, value_name = "KIND", default_value = "all")]
    solver: SolverKind,

    /// Number of puzzles to sample; the one needing the most search nodes wins.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    samples: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let solver = build_solver(args.solver);
    let generator = PuzzleGenerator::new(&solver);
    let mut config = GeneratorConfig::new(args.columns, args.rows);
    if let Some(islands) = args.islands {
        config = config.with_island_count(islands);
    }
    if let Err(err) = config.validate() {
        eprintln!("Invalid configuration: {err}");
        process::exit(2);
    }
    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(2);
    }

    let result = match args.seed {
        Some(seed) => generator
            .generate_with_seed(&config, seed)
            .map(|puzzle| {
                let stats = solve_stats(&solver, &puzzle);
                (puzzle, stats)
            }),
        None => (0..args.samples)
            .into_par_iter()
            .map(|_| {
                let puzzle = generator.generate(&config)?;
                let stats = solve_stats(&solver, &puzzle);
                Ok::<_, GenerationError>((puzzle, stats))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|samples| {
                samples
                    .into_iter()
                    .max_by_key(|(_, stats)| stats.nodes())
                    .expect("at least one sample")
            }),
    };

    match result {
        Ok((puzzle, stats)) => print_puzzle(&puzzle, &solver, &stats),
        Err(err) => {
            eprintln!("Generation failed: {err}");
            process::exit(1);
        }
    }
}

fn build_solver(kind: SolverKind) -> BacktrackSolver {
    let techniques = match kind {
        SolverKind::All => technique::all_techniques(),
        SolverKind::Fundamental => technique::fundamental_techniques(),
    };
    BacktrackSolver::new(TechniqueSolver::new(techniques))
}

fn solve_stats(solver: &BacktrackSolver, puzzle: &GeneratedPuzzle) -> BacktrackSolverStats {
    let mut work = puzzle.problem.clone();
    let outcome = solver.solve(&mut work).unwrap();
    assert!(outcome.status().is_solved());
    outcome.stats().clone()
}

fn print_puzzle(puzzle: &GeneratedPuzzle, solver: &BacktrackSolver, stats: &BacktrackSolverStats) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Problem:");
    for line in puzzle.problem.to_string().lines() {
        println!("  {line}");
    }
    println!();
    println!("Solution:");
    for line in puzzle.solution.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Stats:");
    let techniques = solver.technique_solver().techniques();
    for (technique, count) in techniques.iter().zip(stats.techniques().applications()) {
        println!("  {}: {count}", technique.name());
    }
    println!("  search nodes: {}", stats.nodes());
    println!("  backtracks: {}", stats.backtracks());
}
