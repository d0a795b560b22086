use bridges_core::InvalidMoveError;

/// Errors that can occur while applying solver moves.
///
/// Moves produced by the techniques in this crate are always accepted by the
/// grid model, so this error signals a broken technique rather than a property
/// of the puzzle. Unsolvable puzzles are reported through
/// [`PuzzleStatus`](bridges_core::PuzzleStatus), not through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SolverError {
    /// The grid model rejected a move.
    #[display("solver produced a rejected move: {_0}")]
    InvalidMove(InvalidMoveError),
}
