//! Deduction and search solvers for Bridges puzzles.
//!
//! - [`TechniqueSolver`] applies human-style deduction
//!   [techniques](technique) and never guesses. It also powers hints through
//!   [`TechniqueSolver::next_safe_move`].
//! - [`BacktrackSolver`] combines deduction with depth-first search and
//!   decides every puzzle: solved, unsolvable, or abandoned at a node limit.
//!
//! # Examples
//!
//! ```
//! use bridges_core::Puzzle;
//! use bridges_solver::{BacktrackSolver, TechniqueSolver};
//!
//! let mut puzzle: Puzzle = "
//!     1.3.2
//!     .....
//!     ..1.1
//! "
//! .parse()?;
//!
//! let hint = TechniqueSolver::with_all_techniques().find_step(&puzzle);
//! assert_eq!(hint.map(|step| step.technique_name()), Some("isolation avoidance"));
//!
//! let outcome = BacktrackSolver::with_all_techniques().solve(&mut puzzle)?;
//! assert!(outcome.status().is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    backtrack_solver::*, error::*, technique::Technique, technique_solver::*, technique_step::*,
};

mod backtrack_solver;
mod error;
pub mod technique;
mod technique_solver;
mod technique_step;

#[cfg(test)]
mod testing;
