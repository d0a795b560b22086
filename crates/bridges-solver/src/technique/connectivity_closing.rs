use bridges_core::{IslandId, Puzzle};

use super::{BoxedTechnique, Technique, open_slots};
use crate::{Move, TechniqueStep};

const NAME: &str = "connectivity closing";

/// A technique that takes the only way out of a network.
///
/// While the built bridges form more than one network, every network must
/// eventually be joined to the rest. If exactly one bridge can still be built
/// from a network to an island outside it, that bridge belongs to every
/// solution. This covers the last two networks with a single connecting
/// bridge between them.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConnectivityClosing;

impl ConnectivityClosing {
    /// Creates a new `ConnectivityClosing` technique.
    #[must_use]
    pub const fn new() -> Self {
        ConnectivityClosing
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Exits {
    count: usize,
    first: Option<(IslandId, IslandId)>,
}

impl Technique for ConnectivityClosing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_step(&self, puzzle: &Puzzle) -> Option<TechniqueStep> {
        let components = puzzle.components();
        if components.count() < 2 {
            return None;
        }

        let mut exits = vec![Exits::default(); components.count()];
        for id in puzzle.island_ids() {
            if puzzle.is_saturated(id) {
                continue;
            }
            let label = components.label(id);
            for slot in open_slots(puzzle, id) {
                if components.label(slot.neighbor) == label {
                    continue;
                }
                let exit = &mut exits[label];
                exit.count += 1;
                exit.first.get_or_insert((id, slot.neighbor));
            }
        }

        let (label, (from, to)) = exits
            .iter()
            .enumerate()
            .find_map(|(label, exit)| (exit.count == 1).then_some((label, exit.first?)))?;
        let members = components
            .groups()
            .into_iter()
            .nth(label)
            .unwrap_or_default();
        Some(TechniqueStep::new(
            NAME,
            members,
            Move::BuildSingle { from, to },
        ))
    }
}
