//! Grid positions and compass directions.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A cell on the puzzle grid, addressed by column (`x`) and row (`y`).
///
/// The origin `(0, 0)` is the top-left cell; `x` grows to the east and `y`
/// grows to the south.
///
/// # Examples
///
/// ```
/// use bridges_core::{Direction, Position};
///
/// let pos = Position::new(3, 1);
/// assert_eq!(pos.x(), 3);
/// assert_eq!(pos.y(), 1);
/// assert_eq!(pos.step(Direction::North), Some(Position::new(3, 0)));
/// assert_eq!(pos.step(Direction::North).and_then(|p| p.step(Direction::North)), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns the column of this position.
    #[must_use]
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row of this position.
    #[must_use]
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the adjacent position in `direction`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant or
    /// overflow the coordinate type. Upper grid bounds are not checked here.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Self { x, y })
    }

    /// Returns the direction from `self` to `other` if both lie on the same
    /// row or column and differ.
    #[must_use]
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        match (self.x.cmp(&other.x), self.y.cmp(&other.y)) {
            (std::cmp::Ordering::Equal, std::cmp::Ordering::Greater) => Some(Direction::North),
            (std::cmp::Ordering::Equal, std::cmp::Ordering::Less) => Some(Direction::South),
            (std::cmp::Ordering::Less, std::cmp::Ordering::Equal) => Some(Direction::East),
            (std::cmp::Ordering::Greater, std::cmp::Ordering::Equal) => Some(Direction::West),
            _ => None,
        }
    }

    /// Returns the Manhattan distance between two positions.
    #[must_use]
    pub fn distance(self, other: Self) -> usize {
        usize::from(self.x.abs_diff(other.x)) + usize::from(self.y.abs_diff(other.y))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four compass directions a bridge can leave an island in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::IsVariant)]
pub enum Direction {
    /// Towards row 0.
    North,
    /// Towards larger columns.
    East,
    /// Towards larger rows.
    South,
    /// Towards column 0.
    West,
}

impl Direction {
    /// All directions in clockwise order starting at north.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Returns the index of this direction in [`Direction::ALL`].
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Returns the direction pointing the other way.
    #[must_use]
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Returns the orientation of a bridge running in this direction.
    #[must_use]
    #[inline]
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::North | Self::South => Orientation::Vertical,
            Self::East | Self::West => Orientation::Horizontal,
        }
    }

    /// Returns the `(dx, dy)` unit step of this direction.
    #[must_use]
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(s)
    }
}

/// Orientation of a bridge segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Orientation {
    /// A bridge along a row.
    Horizontal,
    /// A bridge along a column.
    Vertical,
}
