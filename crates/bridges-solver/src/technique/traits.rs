use std::fmt::Debug;

use bridges_core::Puzzle;

use crate::{SolverError, TechniqueStep};

/// A deduction rule for Bridges puzzles.
///
/// A technique inspects a [`Puzzle`] and reports a move that holds in every
/// solution consistent with the bridges already built.
pub trait Technique: Debug + Send + Sync {
    /// Returns the name of the technique.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the technique.
    fn clone_box(&self) -> BoxedTechnique;

    /// Finds the next step without mutating the puzzle.
    ///
    /// Returns `None` when this technique has no applicable step.
    fn find_step(&self, puzzle: &Puzzle) -> Option<TechniqueStep>;

    /// Applies the technique to a puzzle.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - A bridge was built
    /// * `Ok(false)` - The technique found nothing to do
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidMove`] if the grid model rejects the
    /// produced move.
    fn apply(&self, puzzle: &mut Puzzle) -> Result<bool, SolverError> {
        let Some(step) = self.find_step(puzzle) else {
            return Ok(false);
        };
        step.application().apply(puzzle)?;
        Ok(true)
    }
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
