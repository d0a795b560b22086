use bridges_core::Puzzle;

use super::{BoxedTechnique, Technique, open_slots};
use crate::{Move, TechniqueStep};

const NAME: &str = "exact match";

/// A technique that fills every slot of an island whose remaining count equals
/// what its slots can still take.
///
/// When the bridges still addable around an island add up to exactly the
/// bridges it still needs, each of those slots must be filled to its limit.
/// One slot is reported per step, in direction order.
///
/// # Examples
///
/// ```
/// use bridges_core::Puzzle;
/// use bridges_solver::technique::{ExactMatch, Technique};
///
/// let mut puzzle: Puzzle = "2.2".parse()?;
/// assert!(ExactMatch::new().apply(&mut puzzle)?);
/// assert!(puzzle.status().is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactMatch;

impl ExactMatch {
    /// Creates a new `ExactMatch` technique.
    #[must_use]
    pub const fn new() -> Self {
        ExactMatch
    }
}

impl Technique for ExactMatch {
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
            if potential != remaining {
                continue;
            }
            let slot = slots[0];
            return Some(TechniqueStep::new(
                NAME,
                vec![id],
                Move::with_total(id, slot.neighbor, slot.total_with(slot.capacity)),
            ));
        }
        None
    }
}
