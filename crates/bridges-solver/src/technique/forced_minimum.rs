use bridges_core::Puzzle;

use super::{BoxedTechnique, Technique, open_slots};
use crate::{Move, TechniqueStep};

const NAME: &str = "forced minimum";

/// A technique that adds the bridges a slot must carry because the other
/// slots of its island cannot take enough.
///
/// If an island still needs `r` bridges and its other slots can take at most
/// `o` of them, the remaining slot needs at least `r - o` more.
#[derive(Debug, Default, Clone, Copy)]
pub struct ForcedMinimum;

impl ForcedMinimum {
    /// Creates a new `ForcedMinimum` technique.
    #[must_use]
    pub const fn new() -> Self {
        ForcedMinimum
    }
}

impl Technique for ForcedMinimum {
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
            let potential: u8 = slots.iter().map(|slot| slot.capacity).sum();
            if remaining > potential {
                continue;
            }
            for slot in slots {
                let others = potential - slot.capacity;
                if remaining <= others {
                    continue;
                }
                let needed = remaining - others;
                return Some(TechniqueStep::new(
                    NAME,
                    vec![id],
                    Move::with_total(id, slot.neighbor, slot.total_with(needed)),
                ));
            }
        }
        None
    }
}
