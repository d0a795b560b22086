//! Islands and bridges.

use std::fmt::{self, Display};

use crate::{Orientation, Position};

/// Smallest number of bridges an island may require.
pub const MIN_REQUIRED: u8 = 1;

/// Largest number of bridges an island may require (two bridges in each of
/// the four directions).
pub const MAX_REQUIRED: u8 = 8;

/// Largest number of bridges between one pair of islands.
pub const MAX_BRIDGES_PER_PAIR: u8 = 2;

/// Stable handle of an island inside its [`Puzzle`](crate::Puzzle).
///
/// Islands live in an arena owned by the puzzle; an `IslandId` is the index of
/// an island in that arena and stays valid for the whole lifetime of the
/// puzzle because the island set never changes after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IslandId(usize);

impl IslandId {
    /// Creates an id from an arena index.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index of this island.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl Display for IslandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A numbered island.
///
/// Position and required count are fixed at construction. The number of
/// bridges actually built is tracked by the owning puzzle, see
/// [`Puzzle::built_count`](crate::Puzzle::built_count).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Island {
    position: Position,
    required: u8,
}

impl Island {
    pub(crate) const fn new(position: Position, required: u8) -> Self {
        Self { position, required }
    }

    /// Returns the grid cell of this island.
    #[must_use]
    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns how many bridges must end at this island in a solution.
    #[must_use]
    #[inline]
    pub const fn required(&self) -> u8 {
        self.required
    }
}

/// A single or double bridge between two neighbouring islands.
///
/// The pair is unordered; `first()` is always the island with the smaller id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bridge {
    first: IslandId,
    second: IslandId,
    orientation: Orientation,
    is_double: bool,
}

impl Bridge {
    pub(crate) fn new(a: IslandId, b: IslandId, orientation: Orientation, is_double: bool) -> Self {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Self {
            first,
            second,
            orientation,
            is_double,
        }
    }

    /// Returns the endpoint with the smaller id.
    #[must_use]
    #[inline]
    pub const fn first(&self) -> IslandId {
        self.first
    }

    /// Returns the endpoint with the larger id.
    #[must_use]
    #[inline]
    pub const fn second(&self) -> IslandId {
        self.second
    }

    /// Returns both endpoints.
    #[must_use]
    #[inline]
    pub const fn islands(&self) -> (IslandId, IslandId) {
        (self.first, self.second)
    }

    /// Returns `true` if the bridge is doubled.
    #[must_use]
    #[inline]
    pub const fn is_double(&self) -> bool {
        self.is_double
    }

    /// Returns the number of bridges this counts as (1 or 2).
    #[must_use]
    #[inline]
    pub const fn count(&self) -> u8 {
        if self.is_double { 2 } else { 1 }
    }

    /// Returns whether the bridge runs along a row or a column.
    #[must_use]
    #[inline]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns `true` if `island` is one of the endpoints.
    #[must_use]
    pub fn connects(&self, island: IslandId) -> bool {
        self.first == island || self.second == island
    }

    /// Returns the endpoint opposite `island`, or `None` if `island` is not an
    /// endpoint.
    #[must_use]
    pub fn other(&self, island: IslandId) -> Option<IslandId> {
        if self.first == island {
            Some(self.second)
        } else if self.second == island {
            Some(self.first)
        } else {
            None
        }
    }
}
