use bridges_core::{IslandId, Puzzle};
use tinyvec::ArrayVec;

use super::{BoxedTechnique, Slot, Technique, open_slots};
use crate::{Move, TechniqueStep};

const NAME: &str = "sealed network avoidance";

/// A technique that avoids bridges which would close off a network.
///
/// A bridge that saturates both of its islands while every other island of
/// their joined network is already saturated seals that network off. Unless
/// the network holds every island, no solution contains such a bridge, so the
/// slot can take one bridge less. With those reduced limits the technique
/// reasons like [`ForcedMinimum`](super::ForcedMinimum).
///
/// The classic case is two islands needing one bridge each: they can never be
/// joined to each other.
#[derive(Debug, Default, Clone, Copy)]
pub struct SealedNetworkAvoidance;

impl SealedNetworkAvoidance {
    /// Creates a new `SealedNetworkAvoidance` technique.
    #[must_use]
    pub const fn new() -> Self {
        SealedNetworkAvoidance
    }
}

struct Networks {
    labels: Vec<usize>,
    remaining: Vec<usize>,
    sizes: Vec<usize>,
    island_count: usize,
}

impl Networks {
    fn new(puzzle: &Puzzle) -> Self {
        let components = puzzle.components();
        let mut remaining = vec![0; components.count()];
        let mut sizes = vec![0; components.count()];
        let labels = puzzle
            .island_ids()
            .map(|id| {
                let label = components.label(id);
                remaining[label] += usize::from(puzzle.remaining_capacity(id));
                sizes[label] += 1;
                label
            })
            .collect();
        Self {
            labels,
            remaining,
            sizes,
            island_count: puzzle.island_count(),
        }
    }

    /// Returns `true` if adding `count` bridges between `a` and `b` leaves
    /// their joined network saturated without holding every island.
    fn seals(&self, puzzle: &Puzzle, a: IslandId, b: IslandId, count: u8) -> bool {
        if puzzle.remaining_capacity(a) != count || puzzle.remaining_capacity(b) != count {
            return false;
        }
        let (la, lb) = (self.labels[a.index()], self.labels[b.index()]);
        let (remaining, size) = if la == lb {
            (self.remaining[la], self.sizes[la])
        } else {
            (
                self.remaining[la] + self.remaining[lb],
                self.sizes[la] + self.sizes[lb],
            )
        };
        remaining == 2 * usize::from(count) && size < self.island_count
    }

    fn limit(&self, puzzle: &Puzzle, id: IslandId, slot: Slot) -> u8 {
        let top = slot.capacity.min(puzzle.remaining_capacity(id));
        if top > 0 && self.seals(puzzle, id, slot.neighbor, top) {
            top - 1
        } else {
            top
        }
    }
}

impl Technique for SealedNetworkAvoidance {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_step(&self, puzzle: &Puzzle) -> Option<TechniqueStep> {
        let networks = Networks::new(puzzle);
        for id in puzzle.island_ids() {
            let remaining = puzzle.remaining_capacity(id);
            if remaining == 0 {
                continue;
            }
            let slots = open_slots(puzzle, id);
            let limits: ArrayVec<[u8; 4]> = slots
                .iter()
                .map(|&slot| networks.limit(puzzle, id, slot))
                .collect();
            let potential: u8 = limits.iter().sum();
            if remaining > potential {
                continue;
            }
            for (slot, &limit) in slots.iter().zip(limits.iter()) {
                let others = potential - limit;
                if remaining <= others {
                    continue;
                }
                let needed = remaining - others;
                return Some(TechniqueStep::new(
                    NAME,
                    vec![id, slot.neighbor],
                    Move::with_total(id, slot.neighbor, slot.total_with(needed)),
                ));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use bridges_core::{Position, PuzzleStatus};

    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_never_joins_two_single_islands() {
        TechniqueTester::from_str(
            "
            1.1
            ...
            2.2
        ",
        )
        .assert_step(
            &SealedNetworkAvoidance::new(),
            Position::new(0, 0),
            Position::new(0, 2),
            1,
        );
    }

    #[test]
    fn test_square_of_twos_becomes_a_ring() {
        TechniqueTester::from_str(
            "
            2.2
            ...
            2.2
        ",
        )
        .assert_step(
            &SealedNetworkAvoidance::new(),
            Position::new(0, 0),
            Position::new(2, 0),
            1,
        )
        .apply_until_stuck(&SealedNetworkAvoidance::new())
        .assert_bridge(Position::new(0, 0), Position::new(2, 0), 1)
        .assert_bridge(Position::new(0, 2), Position::new(2, 2), 1)
        .assert_status(PuzzleStatus::Solved);
    }

    #[test]
    fn test_avoids_closing_partial_network() {
        TechniqueTester::from_str(
            "
            1.3.2
            .....
            ..1.1
        ",
        )
        .build(Position::new(0, 0), Position::new(2, 0), false)
        .build(Position::new(2, 0), Position::new(4, 0), false)
        .assert_step(
            &SealedNetworkAvoidance::new(),
            Position::new(2, 0),
            Position::new(2, 2),
            1,
        );
    }

    #[test]
    fn test_allows_closing_whole_puzzle() {
        TechniqueTester::from_str("1.1")
            .assert_step(
                &SealedNetworkAvoidance::new(),
                Position::new(0, 0),
                Position::new(2, 0),
                1,
            );
    }
}
