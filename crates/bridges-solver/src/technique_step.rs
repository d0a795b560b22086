use std::fmt::{self, Display};

use bridges_core::{Bridge, InvalidMoveError, IslandId, MAX_BRIDGES_PER_PAIR, Puzzle};

/// A bridge placement, named by the multiplicity it leaves between two islands.
///
/// Applying [`Move::BuildDouble`] where a single bridge already exists upgrades
/// it; applying it on an empty slot builds both bridges at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Move {
    /// Leaves a single bridge between the islands.
    BuildSingle {
        /// Island the move starts from.
        from: IslandId,
        /// Neighbouring island.
        to: IslandId,
    },
    /// Leaves a double bridge between the islands.
    BuildDouble {
        /// Island the move starts from.
        from: IslandId,
        /// Neighbouring island.
        to: IslandId,
    },
}

impl Move {
    /// Creates the move that leaves `total` bridges between `from` and `to`.
    ///
    /// Any `total` of two or more yields [`Move::BuildDouble`].
    #[must_use]
    pub const fn with_total(from: IslandId, to: IslandId, total: u8) -> Self {
        if total >= MAX_BRIDGES_PER_PAIR {
            Self::BuildDouble { from, to }
        } else {
            Self::BuildSingle { from, to }
        }
    }

    /// Returns the two islands, starting island first.
    #[must_use]
    pub const fn islands(self) -> (IslandId, IslandId) {
        match self {
            Self::BuildSingle { from, to } | Self::BuildDouble { from, to } => (from, to),
        }
    }

    /// Returns the multiplicity left between the islands (1 or 2).
    #[must_use]
    pub const fn total(self) -> u8 {
        match self {
            Self::BuildSingle { .. } => 1,
            Self::BuildDouble { .. } => MAX_BRIDGES_PER_PAIR,
        }
    }

    /// Returns `true` if applying this move to `puzzle` would succeed.
    #[must_use]
    pub fn is_applicable(self, puzzle: &Puzzle) -> bool {
        let (from, to) = self.islands();
        puzzle.check_build(from, to, self.is_build_double()).is_ok()
    }

    /// Applies the move through [`Puzzle::build_bridge`].
    ///
    /// # Errors
    ///
    /// Returns the [`InvalidMoveError`] raised by the grid model; the puzzle is
    /// unchanged in that case.
    pub fn apply(self, puzzle: &mut Puzzle) -> Result<Bridge, InvalidMoveError> {
        let (from, to) = self.islands();
        puzzle.build_bridge(from, to, self.is_build_double())
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (from, to) = self.islands();
        match self {
            Self::BuildSingle { .. } => write!(f, "single bridge {from}-{to}"),
            Self::BuildDouble { .. } => write!(f, "double bridge {from}={to}"),
        }
    }
}

/// A hint step produced by a technique.
///
/// Pairs the [`Move`] to make with the technique that justified it and the
/// islands its reasoning looked at, so hint systems can highlight them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechniqueStep {
    technique_name: &'static str,
    condition_islands: Vec<IslandId>,
    application: Move,
}

impl TechniqueStep {
    /// Creates a new `TechniqueStep`.
    #[must_use]
    pub fn new(
        technique_name: &'static str,
        condition_islands: Vec<IslandId>,
        application: Move,
    ) -> Self {
        Self {
            technique_name,
            condition_islands,
            application,
        }
    }

    /// Returns the name of the technique that produced this step.
    #[must_use]
    pub fn technique_name(&self) -> &'static str {
        self.technique_name
    }

    /// Returns the islands that justify the step.
    #[must_use]
    pub fn condition_islands(&self) -> &[IslandId] {
        &self.condition_islands
    }

    /// Returns the move to make.
    #[must_use]
    pub fn application(&self) -> Move {
        self.application
    }
}
