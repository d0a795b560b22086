//! Core data structures for Bridges (Hashiwokakero) puzzles.
//!
//! This crate provides the grid model shared by the solver, the generator and
//! game sessions.
//!
//! # Overview
//!
//! 1. **Geometry** - [`Position`], [`Direction`] and [`Orientation`].
//! 2. **Grid model** - [`Puzzle`] owns an arena of [`Island`]s addressed by
//!    [`IslandId`] and the [`Bridge`]s built between them. Mutations go
//!    through [`Puzzle::build_bridge`], [`Puzzle::tear_down_bridge`] and
//!    [`Puzzle::remove_all_bridges`], which reject anything that would break
//!    the puzzle rules.
//! 3. **Analysis** - [`Puzzle::status`] classifies the current bridges as
//!    [`PuzzleStatus::Solved`], [`PuzzleStatus::Unsolved`] or
//!    [`PuzzleStatus::Unsolvable`], using union-find ([`DisjointSet`]) for
//!    connectivity.
//! 4. **Records** - [`PuzzleBuilder`] and [`PuzzleRecord`] for the
//!    persistence layer, plus a plain-text grid form via `FromStr`/`Display`.
//!
//! # Examples
//!
//! ```
//! use bridges_core::{Direction, Position, Puzzle, PuzzleStatus};
//!
//! let mut puzzle: Puzzle = "
//!     2.2
//!     ...
//!     1.1
//! "
//! .parse()?;
//!
//! let top_left = puzzle.island_at(Position::new(0, 0)).unwrap();
//! assert!(puzzle.is_valid_move(top_left, Direction::East));
//! assert_eq!(puzzle.status(), PuzzleStatus::Unsolved);
//!
//! let top_right = puzzle.neighbor(top_left, Direction::East).unwrap();
//! puzzle.build_bridge(top_left, top_right, false)?;
//! assert_eq!(puzzle.remaining_capacity(top_left), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    analysis::PuzzleStatus,
    connectivity::{Components, DisjointSet},
    error::{InvalidMoveError, ParsePuzzleError, PuzzleError},
    island::{Bridge, Island, IslandId, MAX_BRIDGES_PER_PAIR, MAX_REQUIRED, MIN_REQUIRED},
    position::{Direction, Orientation, Position},
    puzzle::Puzzle,
    record::{BridgeRecord, IslandRecord, PuzzleBuilder, PuzzleRecord},
};

mod analysis;
mod connectivity;
mod error;
mod island;
mod position;
mod puzzle;
mod record;
mod text;
