//! Builder and persisted record layout of a puzzle.

use serde::{Deserialize, Serialize};

use crate::{Position, Puzzle, PuzzleError};

/// Builds a [`Puzzle`] from its islands and, optionally, bridges.
///
/// Bridges are applied in the order they were added, through the same checks
/// as [`Puzzle::build_bridge`].
///
/// # Examples
///
/// ```
/// use bridges_core::{Position, PuzzleBuilder};
///
/// let puzzle = PuzzleBuilder::new(5, 5)
///     .island(Position::new(0, 0), 1)
///     .island(Position::new(4, 0), 1)
///     .bridge(Position::new(0, 0), Position::new(4, 0), false)
///     .build()?;
/// assert_eq!(puzzle.bridges().count(), 1);
/// assert!(puzzle.status().is_solved());
/// # Ok::<(), bridges_core::PuzzleError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PuzzleBuilder {
    columns: u8,
    rows: u8,
    islands: Vec<(Position, u8)>,
    bridges: Vec<(Position, Position, bool)>,
}

impl PuzzleBuilder {
    /// Starts a puzzle of the given size.
    #[must_use]
    pub fn new(columns: u8, rows: u8) -> Self {
        Self {
            columns,
            rows,
            islands: Vec::new(),
            bridges: Vec::new(),
        }
    }

    /// Adds an island.
    #[must_use]
    pub fn island(mut self, position: Position, required: u8) -> Self {
        self.islands.push((position, required));
        self
    }

    /// Adds a bridge between two island positions.
    #[must_use]
    pub fn bridge(mut self, from: Position, to: Position, is_double: bool) -> Self {
        self.bridges.push((from, to, is_double));
        self
    }

    /// Validates the input and creates the puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError`] for malformed islands (see
    /// [`Puzzle::with_islands`]), for bridge endpoints without an island
    /// ([`PuzzleError::NotAnIsland`]) and for bridges the grid model rejects
    /// ([`PuzzleError::InvalidBridge`]).
    pub fn build(self) -> Result<Puzzle, PuzzleError> {
        let mut puzzle = Puzzle::with_islands(self.columns, self.rows, self.islands)?;
        for (from, to, is_double) in self.bridges {
            let a = puzzle
                .island_at(from)
                .ok_or(PuzzleError::NotAnIsland { position: from })?;
            let b = puzzle
                .island_at(to)
                .ok_or(PuzzleError::NotAnIsland { position: to })?;
            puzzle
                .build_bridge(a, b, is_double)
                .map_err(PuzzleError::InvalidBridge)?;
        }
        Ok(puzzle)
    }
}

/// Logical layout of a stored puzzle.
///
/// The byte-level encoding is left to the serialization collaborator; this
/// type only fixes the fields. An unsolved puzzle has an empty bridge list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRecord {
    /// Number of grid columns.
    pub columns: u8,
    /// Number of grid rows.
    pub rows: u8,
    /// All islands.
    pub islands: Vec<IslandRecord>,
    /// Built bridges, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bridges: Vec<BridgeRecord>,
}

/// Stored form of an island.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IslandRecord {
    /// Grid cell of the island.
    pub position: Position,
    /// Required bridge count.
    pub required: u8,
}

/// Stored form of a bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeRecord {
    /// First endpoint.
    pub from: Position,
    /// Second endpoint.
    pub to: Position,
    /// `true` for a double bridge.
    pub is_double: bool,
}

impl Puzzle {
    /// Creates a puzzle from a stored record.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError`] under the same conditions as
    /// [`PuzzleBuilder::build`].
    pub fn from_record(record: &PuzzleRecord) -> Result<Self, PuzzleError> {
        let builder = record
            .islands
            .iter()
            .fold(PuzzleBuilder::new(record.columns, record.rows), |b, i| {
                b.island(i.position, i.required)
            });
        record
            .bridges
            .iter()
            .fold(builder, |b, br| b.bridge(br.from, br.to, br.is_double))
            .build()
    }

    /// Returns the stored form of this puzzle, including built bridges.
    #[must_use]
    pub fn to_record(&self) -> PuzzleRecord {
        PuzzleRecord {
            columns: self.columns(),
            rows: self.rows(),
            islands: self
                .islands()
                .iter()
                .map(|island| IslandRecord {
                    position: island.position(),
                    required: island.required(),
                })
                .collect(),
            bridges: self
                .bridges()
                .map(|bridge| BridgeRecord {
                    from: self.island(bridge.first()).position(),
                    to: self.island(bridge.second()).position(),
                    is_double: bridge.is_double(),
                })
                .collect(),
        }
    }

    /// Returns a copy of this puzzle with every bridge removed.
    #[must_use]
    pub fn to_unsolved(&self) -> Self {
        let mut puzzle = self.clone();
        puzzle.remove_all_bridges();
        puzzle
    }
}

impl TryFrom<&PuzzleRecord> for Puzzle {
    type Error = PuzzleError;

    fn try_from(record: &PuzzleRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}
