use bridges_core::{Direction, IslandId, Puzzle};
use tinyvec::ArrayVec;

/// An edge from an island towards its neighbour that can still take bridges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Slot {
    pub(crate) direction: Direction,
    pub(crate) neighbor: IslandId,
    pub(crate) current: u8,
    pub(crate) capacity: u8,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            direction: Direction::North,
            neighbor: IslandId::new(0),
            current: 0,
            capacity: 0,
        }
    }
}

impl Slot {
    /// Multiplicity after adding `additional` bridges.
    pub(crate) fn total_with(self, additional: u8) -> u8 {
        self.current + additional
    }
}

/// Returns the slots of `id` with a non-zero capacity, in direction order.
pub(crate) fn open_slots(puzzle: &Puzzle, id: IslandId) -> ArrayVec<[Slot; 4]> {
    let mut slots = ArrayVec::new();
    for (direction, neighbor) in puzzle.neighbors(id) {
        let capacity = puzzle.slot_capacity(id, direction);
        if capacity == 0 {
            continue;
        }
        slots.push(Slot {
            direction,
            neighbor,
            current: puzzle.bridge_count(id, direction),
            capacity,
        });
    }
    slots
}
