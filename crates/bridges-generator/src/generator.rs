use bridges_core::Puzzle;
use bridges_solver::BacktrackSolver;
use rand::Rng as _;

use crate::{GenerationError, GeneratorConfig, PuzzleSeed, layout::Layout};

/// A generated puzzle together with a solution and the seed that produced it.
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    /// The puzzle to solve, without bridges.
    pub problem: Puzzle,
    /// A solution found by the validating solver.
    pub solution: Puzzle,
    /// Seed that reproduces this puzzle with the same configuration.
    pub seed: PuzzleSeed,
}

/// Generates solvable Bridges puzzles.
///
/// Each attempt grows a random crossing-free bridge network over the grid and
/// uses the degree of every island as its required count, so the network is a
/// solution by construction. The bridges are then removed and the solver must
/// find a solution on its own; attempts it cannot solve, for example because of
/// a node limit, are discarded and retried with a fresh derived seed.
///
/// # Examples
///
/// ```
/// use bridges_generator::{GeneratorConfig, PuzzleGenerator};
/// use bridges_solver::BacktrackSolver;
///
/// let solver = BacktrackSolver::with_all_techniques();
/// let generator = PuzzleGenerator::new(&solver);
///
/// let puzzle = generator.generate(&GeneratorConfig::new(7, 7))?;
/// assert!(puzzle.problem.has_no_bridges());
/// assert!(puzzle.solution.status().is_solved());
/// # Ok::<(), bridges_generator::GenerationError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator<'a> {
    solver: &'a BacktrackSolver,
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator that validates puzzles with `solver`.
    #[must_use]
    pub fn new(solver: &'a BacktrackSolver) -> Self {
        Self { solver }
    }

    /// Generates a puzzle from a random seed.
    ///
    /// # Errors
    ///
    /// See [`generate_with_seed`](Self::generate_with_seed).
    pub fn generate(&self, config: &GeneratorConfig) -> Result<GeneratedPuzzle, GenerationError> {
        self.generate_with_seed(config, PuzzleSeed::random())
    }

    /// Generates a puzzle from the given seed.
    ///
    /// The same seed and configuration always produce the same puzzle.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`GeneratorConfig::validate`],
    /// [`GenerationError::Exhausted`] if no attempt produced a puzzle the
    /// solver could solve, and [`GenerationError::Solver`] if the solver
    /// fails.
    pub fn generate_with_seed(
        &self,
        config: &GeneratorConfig,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerationError> {
        config.validate()?;

        for attempt in 0..config.max_attempts() {
            let mut rng = seed.attempt_rng(attempt);
            let island_count = rng.random_range(config.island_count_range());
            let Some(layout) = Layout::grow(config, &mut rng, island_count) else {
                log::debug!("attempt {attempt}: could not place {island_count} islands");
                continue;
            };
            let placed = layout.island_count();
            let network = match layout.into_puzzle() {
                Ok(network) => network,
                Err(err) => {
                    log::debug!("attempt {attempt}: rejected layout: {err}");
                    continue;
                }
            };

            let problem = network.to_unsolved();
            let mut solution = problem.clone();
            let outcome = self.solver.solve(&mut solution)?;
            if outcome.status().is_solved() {
                log::debug!(
                    "attempt {attempt}: generated {}x{} puzzle with {placed} islands ({} search nodes)",
                    config.columns(),
                    config.rows(),
                    outcome.stats().nodes()
                );
                return Ok(GeneratedPuzzle {
                    problem,
                    solution,
                    seed,
                });
            }
            log::debug!(
                "attempt {attempt}: solver reported {} after {} nodes",
                outcome.status(),
                outcome.stats().nodes()
            );
        }

        Err(GenerationError::Exhausted {
            attempts: config.max_attempts(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use bridges_solver::{TechniqueSolver, technique};

    use super::*;

    const SEED: &str = "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3";

    #[test]
    fn test_generate_with_seed_is_reproducible() {
        let solver = BacktrackSolver::with_all_techniques();
        let generator = PuzzleGenerator::new(&solver);
        let config = GeneratorConfig::new(8, 6);
        let seed = PuzzleSeed::from_str(SEED).unwrap();

        let first = generator.generate_with_seed(&config, seed).unwrap();
        let second = generator.generate_with_seed(&config, seed).unwrap();
        assert_eq!(first.problem, second.problem);
        assert_eq!(first.solution, second.solution);
        assert_eq!(first.seed, seed);
    }

    #[test]
    fn test_generated_puzzle_matches_config() {
        let solver = BacktrackSolver::with_all_techniques();
        let generator = PuzzleGenerator::new(&solver);
        let config = GeneratorConfig::new(9, 5).with_island_count(8);

        let puzzle = generator.generate(&config).unwrap();
        assert_eq!(puzzle.problem.columns(), 9);
        assert_eq!(puzzle.problem.rows(), 5);
        assert_eq!(puzzle.problem.island_count(), 8);
        assert!(puzzle.problem.has_no_bridges());
        assert_eq!(puzzle.solution.to_unsolved(), puzzle.problem);
        assert!(puzzle.solution.status().is_solved());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let solver = BacktrackSolver::with_all_techniques();
        let generator = PuzzleGenerator::new(&solver);
        assert_eq!(
            generator
                .generate(&GeneratorConfig::new(30, 5))
                .unwrap_err(),
            GenerationError::InvalidDimensions {
                columns: 30,
                rows: 5
            }
        );
    }

    #[test]
    fn test_exhausted_when_solver_gives_up() {
        // a solver that may not even finish deducing rejects every candidate
        let solver =
            BacktrackSolver::new(TechniqueSolver::new(technique::fundamental_techniques()))
                .with_node_limit(0);
        let generator = PuzzleGenerator::new(&solver);
        let config = GeneratorConfig::new(6, 6).with_max_attempts(3);
        assert_eq!(
            generator.generate(&config).unwrap_err(),
            GenerationError::Exhausted { attempts: 3 }
        );
    }
}
