//! Game session management for Bridges puzzles.
//!
//! A [`Game`] owns the puzzle being played and the solver used for hints. All
//! commands address islands by grid [`Position`](bridges_core::Position), the
//! way a front end receives them from clicks, and report rejected input through
//! [`GameError`].
//!
//! # Examples
//!
//! ```
//! use bridges_core::{Position, PuzzleRecord};
//! use bridges_game::Game;
//!
//! let puzzle: bridges_core::Puzzle = "
//!     2.2
//!     ...
//!     1.1
//! "
//! .parse()?;
//! let mut game = Game::from_record(&puzzle.to_record())?;
//!
//! game.cycle_bridge(Position::new(0, 0), Position::new(2, 0))?;
//! game.cycle_bridge(Position::new(0, 0), Position::new(0, 2))?;
//! game.cycle_bridge(Position::new(2, 0), Position::new(2, 2))?;
//! assert!(game.status().is_solved());
//!
//! let record: PuzzleRecord = game.to_record();
//! assert_eq!(record.bridges.len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{error::*, game::*};

mod error;
mod game;
