use bridges_core::{InvalidMoveError, Position, PuzzleError};
use bridges_solver::SolverError;

/// Errors that can occur during game operations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum GameError {
    /// No island stands at the given position.
    #[display("no island at {position}")]
    UnknownIsland {
        /// Position that was addressed.
        position: Position,
    },
    /// The grid model rejected the move.
    #[display("invalid move: {_0}")]
    #[from]
    InvalidMove(InvalidMoveError),
    /// A stored puzzle could not be restored.
    #[display("invalid puzzle record: {_0}")]
    #[from]
    InvalidRecord(PuzzleError),
    /// The solver failed while applying its own moves.
    #[display("{_0}")]
    #[from]
    Solver(SolverError),
}
