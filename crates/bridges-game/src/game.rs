use bridges_core::{Bridge, Direction, IslandId, Position, Puzzle, PuzzleRecord, PuzzleStatus};
use bridges_generator::{GeneratedPuzzle, PuzzleSeed};
use bridges_solver::{BacktrackSolver, TechniqueStep};

use crate::GameError;

/// A Bridges game session.
///
/// Owns the puzzle being played and the solver used for hints and for solving
/// on request. Islands are addressed by grid position; every command either
/// succeeds or leaves the session unchanged.
///
/// # Example
///
/// ```
/// use bridges_game::Game;
/// use bridges_generator::{GeneratorConfig, PuzzleGenerator};
/// use bridges_solver::BacktrackSolver;
///
/// let solver = BacktrackSolver::with_all_techniques();
/// let generator = PuzzleGenerator::new(&solver);
/// let puzzle = generator.generate(&GeneratorConfig::new(7, 7))?;
/// let game = Game::new(puzzle);
///
/// assert!(!game.is_solved());
/// assert!(game.puzzle().has_no_bridges());
/// # Ok::<(), bridges_generator::GenerationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    puzzle: Puzzle,
    seed: Option<PuzzleSeed>,
    solver: BacktrackSolver,
}

impl Game {
    /// Creates a new game from a generated puzzle.
    ///
    /// The game starts from the problem without any bridges. The generator's
    /// solution is not kept; [`Game::solve`] searches again from the current
    /// bridges.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution: _,
            seed,
        } = puzzle;
        Self {
            puzzle: problem.to_unsolved(),
            seed: Some(seed),
            solver: BacktrackSolver::with_all_techniques(),
        }
    }

    /// Restores a game from a stored record, including the bridges built so
    /// far.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidRecord`] if the record describes an invalid
    /// puzzle or contains bridges the puzzle rules reject.
    pub fn from_record(record: &PuzzleRecord) -> Result<Self, GameError> {
        let puzzle = Puzzle::from_record(record)?;
        Ok(Self {
            puzzle,
            seed: None,
            solver: BacktrackSolver::with_all_techniques(),
        })
    }

    /// Replaces the solver used by [`Game::hint`] and [`Game::solve`].
    #[must_use]
    pub fn with_solver(mut self, solver: BacktrackSolver) -> Self {
        self.solver = solver;
        self
    }

    /// Returns the puzzle in its current state.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the seed the puzzle was generated from, if it came from the
    /// generator.
    #[must_use]
    pub fn seed(&self) -> Option<PuzzleSeed> {
        self.seed
    }

    /// Returns the status of the current bridges.
    #[must_use]
    pub fn status(&self) -> PuzzleStatus {
        self.puzzle.status()
    }

    /// Returns whether the puzzle is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.status().is_solved()
    }

    /// Returns the stored form of the current game, including built bridges.
    #[must_use]
    pub fn to_record(&self) -> PuzzleRecord {
        self.puzzle.to_record()
    }

    /// Returns whether a single bridge could be built from the island at
    /// `position` towards `direction`.
    ///
    /// Returns `false` if no island stands at `position`.
    ///
    /// # Example
    ///
    /// ```
    /// use bridges_core::{Direction, Position};
    /// use bridges_game::Game;
    ///
    /// let puzzle: bridges_core::Puzzle = "1.1".parse()?;
    /// let game = Game::from_record(&puzzle.to_record())?;
    ///
    /// assert!(game.is_valid_move(Position::new(0, 0), Direction::East));
    /// assert!(!game.is_valid_move(Position::new(0, 0), Direction::West));
    /// assert!(!game.is_valid_move(Position::new(1, 0), Direction::East));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn is_valid_move(&self, position: Position, direction: Direction) -> bool {
        self.puzzle
            .island_at(position)
            .is_some_and(|id| self.puzzle.is_valid_move(id, direction))
    }

    /// Builds a single or double bridge between the islands at `a` and `b`.
    ///
    /// A double bridge may upgrade an existing single one.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownIsland`] if either position is not an
    /// island and [`GameError::InvalidMove`] if the puzzle rules reject the
    /// bridge.
    pub fn build_bridge(
        &mut self,
        a: Position,
        b: Position,
        is_double: bool,
    ) -> Result<Bridge, GameError> {
        let (a, b) = self.islands(a, b)?;
        Ok(self.puzzle.build_bridge(a, b, is_double)?)
    }

    /// Removes the bridge between the islands at `a` and `b`.
    ///
    /// Returns `Ok(None)` if there was no bridge.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownIsland`] if either position is not an
    /// island.
    pub fn tear_down_bridge(
        &mut self,
        a: Position,
        b: Position,
    ) -> Result<Option<Bridge>, GameError> {
        let (a, b) = self.islands(a, b)?;
        Ok(self.puzzle.tear_down_bridge(a, b))
    }

    /// Advances the bridge between the islands at `a` and `b` through
    /// none, single and double, then back to none.
    ///
    /// A single bridge that cannot become double is removed instead. Returns
    /// the bridge after the change, or `None` if it was removed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownIsland`] if either position is not an
    /// island and [`GameError::InvalidMove`] if not even a single bridge can be
    /// built.
    pub fn cycle_bridge(
        &mut self,
        a: Position,
        b: Position,
    ) -> Result<Option<Bridge>, GameError> {
        let (a, b) = self.islands(a, b)?;
        let current = self
            .puzzle
            .bridge_between(a, b)
            .map_or(0, |bridge| bridge.count());
        match current {
            0 => Ok(Some(self.puzzle.build_bridge(a, b, false)?)),
            1 => match self.puzzle.build_bridge(a, b, true) {
                Ok(bridge) => Ok(Some(bridge)),
                Err(_) => {
                    self.puzzle.tear_down_bridge(a, b);
                    Ok(None)
                }
            },
            _ => {
                self.puzzle.tear_down_bridge(a, b);
                Ok(None)
            }
        }
    }

    /// Removes every bridge, returning to the initial puzzle.
    pub fn restart(&mut self) {
        self.puzzle.remove_all_bridges();
    }

    /// Returns the next move the solver can deduce from the current bridges.
    ///
    /// Returns `None` if the puzzle is already solved or known to be
    /// unsolvable, and when no technique applies.
    #[must_use]
    pub fn hint(&self) -> Option<TechniqueStep> {
        self.solver.technique_solver().find_step(&self.puzzle)
    }

    /// Applies the move returned by [`Game::hint`] and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] if the grid model rejects the
    /// deduced move.
    pub fn apply_hint(&mut self) -> Result<Option<TechniqueStep>, GameError> {
        let Some(step) = self.hint() else {
            return Ok(None);
        };
        step.application().apply(&mut self.puzzle)?;
        Ok(Some(step))
    }

    /// Solves the puzzle and returns the resulting status.
    ///
    /// The search starts from the bridges already built. If they cannot be
    /// completed, it starts over from an empty grid. The current bridges are
    /// only replaced when a solution is found.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Solver`] if the solver fails while applying its own
    /// moves.
    pub fn solve(&mut self) -> Result<PuzzleStatus, GameError> {
        let outcome = self.solver.solve(&mut self.puzzle)?;
        if outcome.status().is_solved() || self.puzzle.has_no_bridges() {
            return Ok(outcome.status());
        }

        log::debug!(
            "current bridges ended as {}, solving from an empty grid",
            outcome.status()
        );
        let mut fresh = self.puzzle.to_unsolved();
        let outcome = self.solver.solve(&mut fresh)?;
        if outcome.status().is_solved() {
            self.puzzle = fresh;
        }
        Ok(outcome.status())
    }

    fn island(&self, position: Position) -> Result<IslandId, GameError> {
        self.puzzle
            .island_at(position)
            .ok_or(GameError::UnknownIsland { position })
    }

    fn islands(&self, a: Position, b: Position) -> Result<(IslandId, IslandId), GameError> {
        Ok((self.island(a)?, self.island(b)?))
    }
}
