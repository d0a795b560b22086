use bridges_core::Puzzle;

use super::{BoxedTechnique, Technique, open_slots};
use crate::{Move, TechniqueStep};

const NAME: &str = "isolation avoidance";

/// A technique that routes all remaining bridges of an island through its only
/// open slot.
///
/// If an island can still take bridges towards a single neighbour, every
/// bridge it still needs has to go there.
#[derive(Debug, Default, Clone, Copy)]
pub struct IsolationAvoidance;

impl IsolationAvoidance {
    /// Creates a new `IsolationAvoidance` technique.
    #[must_use]
    pub const fn new() -> Self {
        IsolationAvoidance
    }
}

impl Technique for IsolationAvoidance {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_step(&self, puzzle: &Puzzle) -> Option<TechniqueStep> {
        for id in puzzle.island_ids() {
            let remaining = puzzle.remaining_capacity(id);
            if remaining == 0 {
                continue;
            }
            let slots = open_slots(puzzle, id);
            let [slot] = slots.as_slice() else {
                continue;
            };
            // more than the slot can take is a contradiction, not a deduction
            if remaining > slot.capacity {
                continue;
            }
            return Some(TechniqueStep::new(
                NAME,
                vec![id],
                Move::with_total(id, slot.neighbor, slot.total_with(remaining)),
            ));
        }
        None
    }
}
