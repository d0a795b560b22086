use bridges_core::{Puzzle, PuzzleStatus};

use crate::{
    Move, SolverError, TechniqueStep,
    technique::{self, BoxedTechnique},
};

/// Statistics collected during technique-based solving.
///
/// This structure tracks which techniques were applied and how many times,
/// as well as the total number of solving steps taken.
///
/// # Examples
///
/// ```
/// use bridges_core::Puzzle;
/// use bridges_solver::TechniqueSolver;
///
/// let solver = TechniqueSolver::with_all_techniques();
/// let mut puzzle: Puzzle = "1.3.2".parse()?;
///
/// let (_solved, stats) = solver.solve(&mut puzzle)?;
/// for (technique, count) in solver.techniques().iter().zip(stats.applications()) {
///     println!("{}: {count}", technique.name());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct TechniqueSolverStats {
    applications: Vec<usize>,
    total_steps: usize,
}

impl TechniqueSolverStats {
    /// Returns technique application counts in solver order.
    ///
    /// Includes techniques that were never applied with a count of `0`.
    #[must_use]
    pub fn applications(&self) -> &[usize] {
        &self.applications
    }

    /// Returns the total number of solving steps taken.
    ///
    /// This is the sum of all technique applications.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Returns `true` if any technique was applied at least once.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.total_steps > 0
    }
}

/// A solver that applies deduction techniques to a puzzle.
///
/// `TechniqueSolver` tries its techniques in order and builds the bridge
/// reported by the first one that finds a step. Every bridge it builds holds
/// in all solutions consistent with the current bridges, so it never needs to
/// undo anything. Puzzles that are already solved or
/// [`Unsolvable`](PuzzleStatus::Unsolvable) yield no steps.
///
/// # Examples
///
/// ```
/// use bridges_core::Puzzle;
/// use bridges_solver::TechniqueSolver;
///
/// let solver = TechniqueSolver::with_all_techniques();
/// let mut puzzle: Puzzle = "
///     1.3.2
///     .....
///     ..1.1
/// "
/// .parse()?;
///
/// let (solved, stats) = solver.solve(&mut puzzle)?;
/// assert!(solved);
/// assert!(stats.has_progress());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Step-by-step solving
///
/// ```
/// use bridges_core::Puzzle;
/// use bridges_solver::TechniqueSolver;
///
/// let solver = TechniqueSolver::with_all_techniques();
/// let mut puzzle: Puzzle = "2.2".parse()?;
///
/// while let Some(mv) = solver.next_safe_move(&puzzle) {
///     mv.apply(&mut puzzle)?;
/// }
/// assert!(puzzle.status().is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct TechniqueSolver {
    techniques: Vec<BoxedTechnique>,
}

impl Default for TechniqueSolver {
    fn default() -> Self {
        Self::with_all_techniques()
    }
}

impl TechniqueSolver {
    /// Creates a new solver with the specified techniques.
    ///
    /// Techniques are tried in the order they appear in the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use bridges_solver::{
    ///     TechniqueSolver,
    ///     technique::{BoxedTechnique, ExactMatch},
    /// };
    ///
    /// let techniques: Vec<BoxedTechnique> = vec![Box::new(ExactMatch::new())];
    /// let solver = TechniqueSolver::new(techniques);
    /// ```
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates a new solver with all available techniques, as ordered by
    /// [`technique::all_techniques`].
    #[must_use]
    pub fn with_all_techniques() -> Self {
        Self::new(technique::all_techniques())
    }

    /// Creates a statistics object aligned with this solver's technique order.
    #[must_use]
    pub fn new_stats(&self) -> TechniqueSolverStats {
        TechniqueSolverStats {
            applications: vec![0; self.techniques.len()],
            total_steps: 0,
        }
    }

    /// Returns the configured techniques in application order.
    ///
    /// The returned slice defines the index mapping used by
    /// [`TechniqueSolverStats::applications`].
    #[must_use]
    pub fn techniques(&self) -> &[BoxedTechnique] {
        &self.techniques
    }

    /// Finds the next step without mutating the puzzle.
    ///
    /// Returns `None` when the puzzle is solved, is known to be unsolvable, or
    /// no technique has a step.
    #[must_use]
    pub fn find_step(&self, puzzle: &Puzzle) -> Option<TechniqueStep> {
        self.find_index(puzzle).map(|(_, step)| step)
    }

    /// Returns the next safe move, if the techniques can find one.
    ///
    /// A safe move is part of every solution consistent with the bridges
    /// already built.
    #[must_use]
    pub fn next_safe_move(&self, puzzle: &Puzzle) -> Option<Move> {
        self.find_step(puzzle).map(|step| step.application())
    }

    fn find_index(&self, puzzle: &Puzzle) -> Option<(usize, TechniqueStep)> {
        if puzzle.status() != PuzzleStatus::Unsolved {
            return None;
        }
        self.techniques
            .iter()
            .enumerate()
            .find_map(|(i, technique)| technique.find_step(puzzle).map(|step| (i, step)))
    }

    /// Applies one step of solving by trying each technique in order.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - A technique built a bridge
    /// * `Ok(false)` - No technique could make progress
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidMove`] if the grid model rejects a move.
    pub fn step(
        &self,
        puzzle: &mut Puzzle,
        stats: &mut TechniqueSolverStats,
    ) -> Result<bool, SolverError> {
        debug_assert_eq!(self.techniques.len(), stats.applications.len());
        let Some((i, step)) = self.find_index(puzzle) else {
            return Ok(false);
        };
        step.application().apply(puzzle)?;
        stats.applications[i] += 1;
        stats.total_steps += 1;
        Ok(true)
    }

    /// Applies techniques repeatedly until the puzzle is solved or no progress
    /// can be made.
    ///
    /// Returns `(solved, stats)`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidMove`] if the grid model rejects a move.
    pub fn solve(&self, puzzle: &mut Puzzle) -> Result<(bool, TechniqueSolverStats), SolverError> {
        let mut stats = self.new_stats();
        let solved = self.solve_with_stats(puzzle, &mut stats)?;
        Ok((solved, stats))
    }

    /// Same as [`solve`](Self::solve), accumulating into an existing
    /// statistics object.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidMove`] if the grid model rejects a move.
    pub fn solve_with_stats(
        &self,
        puzzle: &mut Puzzle,
        stats: &mut TechniqueSolverStats,
    ) -> Result<bool, SolverError> {
        while self.step(puzzle, stats)? {}
        Ok(puzzle.status().is_solved())
    }
}
