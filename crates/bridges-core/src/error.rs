use crate::{IslandId, Position};

/// Errors raised while constructing a [`Puzzle`](crate::Puzzle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// The grid has a zero dimension.
    #[display("invalid grid dimensions {columns}x{rows}")]
    InvalidDimensions {
        /// Requested number of columns.
        columns: u8,
        /// Requested number of rows.
        rows: u8,
    },
    /// The puzzle has no islands.
    #[display("puzzle has no islands")]
    NoIslands,
    /// An island lies outside the grid.
    #[display("island at {position} lies outside the grid")]
    OutOfBounds {
        /// Offending position.
        position: Position,
    },
    /// Two islands share a cell.
    #[display("more than one island at {position}")]
    DuplicatePosition {
        /// Offending position.
        position: Position,
    },
    /// An island's required count is outside `1..=8`.
    #[display("island at {position} requires {required} bridges, expected 1..=8")]
    InvalidRequired {
        /// Island position.
        position: Position,
        /// Requested bridge count.
        required: u8,
    },
    /// An island requires more bridges than its neighbours could ever carry.
    #[display("island at {position} requires {required} bridges but at most {capacity} fit")]
    ExceedsCapacity {
        /// Island position.
        position: Position,
        /// Requested bridge count.
        required: u8,
        /// Two bridges per neighbour.
        capacity: u8,
    },
    /// A bridge endpoint does not name an island.
    #[display("no island at bridge endpoint {position}")]
    NotAnIsland {
        /// Endpoint position.
        position: Position,
    },
    /// A bridge record could not be built.
    #[display("invalid bridge: {_0}")]
    InvalidBridge(InvalidMoveError),
}

/// Reasons a bridge cannot be built.
///
/// The puzzle is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMoveError {
    /// The id does not belong to this puzzle.
    #[display("unknown island {island}")]
    UnknownIsland {
        /// Offending id.
        island: IslandId,
    },
    /// Both endpoints are the same island.
    #[display("island at {position} cannot be bridged to itself")]
    SameIsland {
        /// Island position.
        position: Position,
    },
    /// The islands do not see each other along a row or column.
    #[display("islands at {from} and {to} are not neighbors")]
    NotNeighbors {
        /// First endpoint.
        from: Position,
        /// Second endpoint.
        to: Position,
    },
    /// A bridge of equal or greater multiplicity already exists.
    #[display("a bridge between {from} and {to} already exists")]
    AlreadyBuilt {
        /// First endpoint.
        from: Position,
        /// Second endpoint.
        to: Position,
    },
    /// Building would push an island past its required count.
    #[display("island at {position} already has its {required} bridges")]
    ExceedsRequired {
        /// Island position.
        position: Position,
        /// Required bridge count of that island.
        required: u8,
    },
    /// The segment would cross an existing bridge.
    #[display("bridge between {from} and {to} would cross an existing bridge")]
    CrossesBridge {
        /// First endpoint.
        from: Position,
        /// Second endpoint.
        to: Position,
    },
}

/// Errors raised while parsing the text form of a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePuzzleError {
    /// The input has no grid rows.
    #[display("puzzle text is empty")]
    Empty,
    /// The grid does not fit in 255 columns or rows.
    #[display("puzzle text is larger than 255x255")]
    TooLarge,
    /// A row has a different length than the first one.
    #[display("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Length of the first row.
        expected: usize,
    },
    /// A character is not part of the grid alphabet.
    #[display("unexpected character {ch:?} at {position}")]
    InvalidCharacter {
        /// Offending character.
        ch: char,
        /// Cell of the character.
        position: Position,
    },
    /// A bridge cell is not part of a bridge between two islands.
    #[display("bridge at {position} does not join two islands")]
    DanglingBridge {
        /// Cell of the bridge character.
        position: Position,
    },
    /// The islands or bridges violate the puzzle rules.
    #[display("{_0}")]
    Puzzle(PuzzleError),
}
