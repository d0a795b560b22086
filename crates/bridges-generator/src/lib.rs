//! Seeded generator of solvable Bridges puzzles.
//!
//! [`PuzzleGenerator`] places islands on a grid by growing a random bridge
//! network, turns the network's degrees into required counts, and checks the
//! result with a [`BacktrackSolver`](bridges_solver::BacktrackSolver).
//! Generation is driven by a [`GeneratorConfig`] and a [`PuzzleSeed`]; the same
//! pair always yields the same puzzle.
//!
//! # Examples
//!
//! ```
//! use bridges_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed};
//! use bridges_solver::BacktrackSolver;
//!
//! let solver = BacktrackSolver::with_all_techniques();
//! let generator = PuzzleGenerator::new(&solver);
//! let config = GeneratorConfig::new(10, 8);
//!
//! let seed: PuzzleSeed =
//!     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef".parse()?;
//! let puzzle = generator.generate_with_seed(&config, seed)?;
//! assert!(config.island_count_range().contains(&puzzle.problem.island_count()));
//! println!("{}", puzzle.problem);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{config::*, error::*, generator::*, seed::*};

mod config;
mod error;
mod generator;
mod layout;
mod seed;
