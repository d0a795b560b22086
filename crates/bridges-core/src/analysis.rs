//! Connectivity analysis and puzzle status.

use crate::{Components, Direction, DisjointSet, IslandId, MAX_BRIDGES_PER_PAIR, Puzzle};

/// Classification of a puzzle's current bridge configuration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum PuzzleStatus {
    /// Every island is saturated and all islands form one network.
    #[display("solved")]
    Solved,
    /// Bridges remain to be placed and no contradiction has been found.
    #[display("unsolved")]
    Unsolved,
    /// The current bridges cannot be extended to a solution.
    #[display("unsolvable")]
    Unsolvable,
}

impl Puzzle {
    /// Returns how many more bridges can legally be added between `id` and its
    /// neighbour in `direction` (0, 1 or 2).
    ///
    /// The limit accounts for the existing multiplicity, the neighbour's
    /// remaining capacity and bridges the new segment would cross. The
    /// remaining capacity of `id` itself is not applied.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this puzzle.
    #[must_use]
    pub fn slot_capacity(&self, id: IslandId, direction: Direction) -> u8 {
        let Some(other) = self.neighbor(id, direction) else {
            return 0;
        };
        let current = self.bridge_count(id, direction);
        if current >= MAX_BRIDGES_PER_PAIR || (current == 0 && self.would_cross(id, other)) {
            return 0;
        }
        (MAX_BRIDGES_PER_PAIR - current).min(self.remaining_capacity(other))
    }

    /// Returns the total number of bridges that could still be added at `id`,
    /// summed over its four slots.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this puzzle.
    #[must_use]
    pub fn potential_capacity(&self, id: IslandId) -> u8 {
        Direction::ALL
            .into_iter()
            .map(|dir| self.slot_capacity(id, dir))
            .sum()
    }

    /// Returns `true` if one more bridge can be built from `id` towards
    /// `direction`: a new single bridge, or an upgrade of an existing single
    /// bridge to a double.
    ///
    /// This is exactly when [`build_bridge`](Self::build_bridge) would succeed.
    #[must_use]
    pub fn is_valid_move(&self, id: IslandId, direction: Direction) -> bool {
        if !self.contains(id) {
            return false;
        }
        let Some(other) = self.neighbor(id, direction) else {
            return false;
        };
        let is_double = match self.bridge_count(id, direction) {
            0 => false,
            1 => true,
            _ => return false,
        };
        self.check_build(id, other, is_double).is_ok()
    }

    /// Returns the connected components formed by the built bridges.
    #[must_use]
    pub fn components(&self) -> Components {
        let mut sets = DisjointSet::new(self.island_count());
        for bridge in self.bridges() {
            sets.union(bridge.first(), bridge.second());
        }
        sets.into_components()
    }

    /// Returns the number of networks formed by the built bridges.
    #[must_use]
    pub fn component_count(&self) -> usize {
        let mut sets = DisjointSet::new(self.island_count());
        for bridge in self.bridges() {
            sets.union(bridge.first(), bridge.second());
        }
        sets.count()
    }

    /// Classifies the current bridge configuration.
    ///
    /// [`PuzzleStatus::Unsolvable`] is reported when an island cannot reach its
    /// required count with the bridges that are still addable, or when the
    /// built bridges together with every addable bridge cannot join all
    /// islands into one network. The check is conservative: a puzzle reported
    /// as [`PuzzleStatus::Unsolved`] may still turn out to have no solution,
    /// which only a full search can tell.
    #[must_use]
    pub fn status(&self) -> PuzzleStatus {
        let mut all_saturated = true;
        for id in self.island_ids() {
            let island = self.island(id);
            if self.built_count(id) > island.required() {
                return PuzzleStatus::Unsolvable;
            }
            let remaining = self.remaining_capacity(id);
            if remaining == 0 {
                continue;
            }
            all_saturated = false;
            if remaining > self.potential_capacity(id) {
                return PuzzleStatus::Unsolvable;
            }
        }

        if all_saturated {
            return if self.component_count() == 1 {
                PuzzleStatus::Solved
            } else {
                PuzzleStatus::Unsolvable
            };
        }

        if self.reachable_component_count() > 1 {
            return PuzzleStatus::Unsolvable;
        }
        PuzzleStatus::Unsolved
    }

    /// Counts components of the graph made of built bridges plus every
    /// bridge that could still be added.
    fn reachable_component_count(&self) -> usize {
        let mut sets = DisjointSet::new(self.island_count());
        for id in self.island_ids() {
            for dir in [Direction::East, Direction::South] {
                let Some(other) = self.neighbor(id, dir) else {
                    continue;
                };
                let addable = self.remaining_capacity(id) > 0 && self.slot_capacity(id, dir) > 0;
                if self.bridge_count(id, dir) > 0 || addable {
                    sets.union(id, other);
                }
            }
        }
        sets.count()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Position, PuzzleBuilder, PuzzleStatus};

    use super::*;

    #[test]
    fn test_disjoint_pairs_are_unsolvable() {
        let puzzle = PuzzleBuilder::new(6, 6)
            .island(Position::new(0, 0), 1)
            .island(Position::new(0, 1), 1)
            .island(Position::new(4, 4), 1)
            .island(Position::new(4, 5), 1)
            .build()
            .unwrap();
        assert_eq!(puzzle.status(), PuzzleStatus::Unsolvable);

        let mut puzzle = puzzle;
        let a = puzzle.island_at(Position::new(0, 0)).unwrap();
        let b = puzzle.island_at(Position::new(0, 1)).unwrap();
        let c = puzzle.island_at(Position::new(4, 4)).unwrap();
        let d = puzzle.island_at(Position::new(4, 5)).unwrap();
        puzzle.build_bridge(a, b, false).unwrap();
        puzzle.build_bridge(c, d, false).unwrap();
        assert!(puzzle.island_ids().all(|id| puzzle.is_saturated(id)));
        assert_eq!(puzzle.component_count(), 2);
        assert_eq!(puzzle.status(), PuzzleStatus::Unsolvable);
    }

    #[test]
    fn test_status_follows_mutations() {
        let mut puzzle = PuzzleBuilder::new(3, 3)
            .island(Position::new(0, 0), 2)
            .island(Position::new(2, 0), 3)
            .island(Position::new(0, 2), 1)
            .island(Position::new(2, 2), 2)
            .build()
            .unwrap();
        let tl = puzzle.island_at(Position::new(0, 0)).unwrap();
        let tr = puzzle.island_at(Position::new(2, 0)).unwrap();
        let bl = puzzle.island_at(Position::new(0, 2)).unwrap();
        let br = puzzle.island_at(Position::new(2, 2)).unwrap();

        assert_eq!(puzzle.status(), PuzzleStatus::Unsolved);
        puzzle.build_bridge(tl, tr, false).unwrap();
        puzzle.build_bridge(tl, bl, false).unwrap();
        assert_eq!(puzzle.status(), PuzzleStatus::Unsolved);

        puzzle.build_bridge(tr, br, true).unwrap();
        assert_eq!(puzzle.component_count(), 1);
        assert_eq!(puzzle.status(), PuzzleStatus::Solved);

        puzzle.tear_down_bridge(br, tr).unwrap();
        assert_eq!(puzzle.status(), PuzzleStatus::Unsolved);
        assert_eq!(puzzle.slot_capacity(tr, Direction::South), 2);
        assert!(puzzle.is_valid_move(tr, Direction::South));
        assert!(!puzzle.is_valid_move(tr, Direction::West));
        assert!(!puzzle.is_valid_move(tr, Direction::North));
        assert!(!puzzle.is_valid_move(bl, Direction::East));
    }

    #[test]
    fn test_solved_when_all_saturated_and_connected() {
        let mut puzzle = PuzzleBuilder::new(3, 3)
            .island(Position::new(0, 0), 2)
            .island(Position::new(2, 0), 2)
            .island(Position::new(0, 2), 2)
            .island(Position::new(2, 2), 2)
            .build()
            .unwrap();
        let tl = puzzle.island_at(Position::new(0, 0)).unwrap();
        let tr = puzzle.island_at(Position::new(2, 0)).unwrap();
        let bl = puzzle.island_at(Position::new(0, 2)).unwrap();
        let br = puzzle.island_at(Position::new(2, 2)).unwrap();

        puzzle.build_bridge(tl, tr, false).unwrap();
        puzzle.build_bridge(tr, br, false).unwrap();
        puzzle.build_bridge(br, bl, false).unwrap();
        assert_eq!(puzzle.status(), PuzzleStatus::Unsolved);
        puzzle.build_bridge(bl, tl, false).unwrap();
        assert_eq!(puzzle.status(), PuzzleStatus::Solved);
        assert_eq!(puzzle.status().to_string(), "solved");
    }

    #[test]
    fn test_saturated_sub_network_is_unsolvable() {
        let mut puzzle = PuzzleBuilder::new(3, 3)
            .island(Position::new(0, 0), 1)
            .island(Position::new(2, 0), 1)
            .island(Position::new(0, 2), 2)
            .island(Position::new(2, 2), 2)
            .build()
            .unwrap();
        let tl = puzzle.island_at(Position::new(0, 0)).unwrap();
        let tr = puzzle.island_at(Position::new(2, 0)).unwrap();
        let bl = puzzle.island_at(Position::new(0, 2)).unwrap();

        assert_eq!(puzzle.status(), PuzzleStatus::Unsolved);
        puzzle.build_bridge(tl, tr, false).unwrap();
        assert_eq!(puzzle.potential_capacity(bl), 2);
        assert_eq!(puzzle.status(), PuzzleStatus::Unsolvable);
    }

    #[test]
    fn test_remaining_over_potential_is_unsolvable() {
        let puzzle = PuzzleBuilder::new(5, 3)
            .island(Position::new(0, 0), 1)
            .island(Position::new(2, 0), 4)
            .island(Position::new(4, 0), 1)
            .island(Position::new(2, 2), 1)
            .build()
            .unwrap();
        let center = puzzle.island_at(Position::new(2, 0)).unwrap();
        assert_eq!(puzzle.potential_capacity(center), 3);
        assert_eq!(puzzle.status(), PuzzleStatus::Unsolvable);
    }

    #[test]
    fn test_slot_capacity_tracks_neighbor_remaining() {
        let mut puzzle = PuzzleBuilder::new(5, 3)
            .island(Position::new(0, 0), 1)
            .island(Position::new(2, 0), 3)
            .island(Position::new(4, 0), 1)
            .island(Position::new(2, 2), 1)
            .build()
            .unwrap();
        let west = puzzle.island_at(Position::new(0, 0)).unwrap();
        let center = puzzle.island_at(Position::new(2, 0)).unwrap();
        let south = puzzle.island_at(Position::new(2, 2)).unwrap();
        assert_eq!(puzzle.potential_capacity(center), 3);
        assert_eq!(puzzle.status(), PuzzleStatus::Unsolved);

        puzzle.build_bridge(center, south, false).unwrap();
        assert_eq!(puzzle.potential_capacity(center), 2);
        assert_eq!(puzzle.slot_capacity(center, Direction::South), 0);
        assert_eq!(puzzle.slot_capacity(west, Direction::East), 2);
        assert_eq!(puzzle.status(), PuzzleStatus::Unsolved);
    }

    #[test]
    fn test_crossing_blocks_capacity() {
        let mut puzzle = PuzzleBuilder::new(3, 3)
            .island(Position::new(1, 0), 1)
            .island(Position::new(1, 2), 1)
            .island(Position::new(0, 1), 1)
            .island(Position::new(2, 1), 1)
            .build()
            .unwrap();
        let top = puzzle.island_at(Position::new(1, 0)).unwrap();
        let bottom = puzzle.island_at(Position::new(1, 2)).unwrap();
        let left = puzzle.island_at(Position::new(0, 1)).unwrap();

        assert_eq!(puzzle.slot_capacity(left, Direction::East), 1);
        puzzle.build_bridge(top, bottom, false).unwrap();
        assert_eq!(puzzle.slot_capacity(left, Direction::East), 0);
        assert!(!puzzle.is_valid_move(left, Direction::East));
        assert_eq!(puzzle.status(), PuzzleStatus::Unsolvable);
    }
}
