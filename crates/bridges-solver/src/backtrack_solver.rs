use bridges_core::{Direction, InvalidMoveError, IslandId, Puzzle, PuzzleStatus};
use tinyvec::ArrayVec;

use crate::{SolverError, TechniqueSolver, TechniqueSolverStats, technique::open_slots};

/// Bridges added towards each direction, indexed by [`Direction::index`].
type Distribution = [u8; 4];

/// Statistics collected by [`BacktrackSolver`].
#[derive(Debug, Clone)]
pub struct BacktrackSolverStats {
    techniques: TechniqueSolverStats,
    nodes: usize,
    backtracks: usize,
}

impl BacktrackSolverStats {
    /// Returns the statistics of the deductions made during the search.
    #[must_use]
    pub fn techniques(&self) -> &TechniqueSolverStats {
        &self.techniques
    }

    /// Returns the number of search nodes visited.
    ///
    /// The root counts as a node, so a puzzle solved by deduction alone
    /// reports `1`.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the number of branches that turned out to be dead ends.
    #[must_use]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Returns `true` if the search had to guess.
    #[must_use]
    pub fn has_guessed(&self) -> bool {
        self.nodes > 1
    }
}

/// Result of [`BacktrackSolver::solve`].
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    status: PuzzleStatus,
    stats: BacktrackSolverStats,
}

impl SolveOutcome {
    /// Returns the final status.
    ///
    /// - [`PuzzleStatus::Solved`]: the solution was written to the puzzle.
    /// - [`PuzzleStatus::Unsolvable`]: no solution exists.
    /// - [`PuzzleStatus::Unsolved`]: the node limit stopped the search.
    #[must_use]
    pub fn status(&self) -> PuzzleStatus {
        self.status
    }

    /// Returns the search statistics.
    #[must_use]
    pub fn stats(&self) -> &BacktrackSolverStats {
        &self.stats
    }
}

enum Search {
    Solved,
    Exhausted,
    Abandoned,
}

/// A complete solver: deduction first, then depth-first search.
///
/// At each search node the [`TechniqueSolver`] builds every bridge it can
/// deduce. If the puzzle is still open, the solver picks the unsaturated
/// island with the fewest ways to spread its remaining bridges over its slots
/// and tries each way in turn on a copy of the puzzle.
///
/// On success the solution is written back to the puzzle. Otherwise the puzzle
/// is left exactly as it was passed in.
///
/// # Examples
///
/// ```
/// use bridges_core::{Puzzle, PuzzleStatus};
/// use bridges_solver::BacktrackSolver;
///
/// let solver = BacktrackSolver::with_all_techniques();
/// let mut puzzle: Puzzle = "
///     2.2
///     ...
///     2.2
/// "
/// .parse()?;
///
/// let outcome = solver.solve(&mut puzzle)?;
/// assert_eq!(outcome.status(), PuzzleStatus::Solved);
/// assert_eq!(puzzle.bridges().count(), 4);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BacktrackSolver {
    techniques: TechniqueSolver,
    node_limit: Option<usize>,
}

impl BacktrackSolver {
    /// Creates a solver that deduces with the given technique solver.
    #[must_use]
    pub fn new(techniques: TechniqueSolver) -> Self {
        Self {
            techniques,
            node_limit: None,
        }
    }

    /// Creates a solver that deduces with all available techniques.
    #[must_use]
    pub fn with_all_techniques() -> Self {
        Self::new(TechniqueSolver::with_all_techniques())
    }

    /// Limits the number of search nodes.
    ///
    /// When the limit is exceeded the search is abandoned and
    /// [`solve`](Self::solve) reports [`PuzzleStatus::Unsolved`].
    #[must_use]
    pub fn with_node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Returns the node limit, if any.
    #[must_use]
    pub fn node_limit(&self) -> Option<usize> {
        self.node_limit
    }

    /// Returns the technique solver used at each node.
    #[must_use]
    pub fn technique_solver(&self) -> &TechniqueSolver {
        &self.techniques
    }

    /// Solves the puzzle, starting from the bridges already built.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidMove`] if the grid model rejects a
    /// deduced move.
    pub fn solve(&self, puzzle: &mut Puzzle) -> Result<SolveOutcome, SolverError> {
        let mut stats = BacktrackSolverStats {
            techniques: self.techniques.new_stats(),
            nodes: 0,
            backtracks: 0,
        };
        let mut work = puzzle.clone();
        let status = match self.search(&mut work, &mut stats, 0)? {
            Search::Solved => {
                *puzzle = work;
                PuzzleStatus::Solved
            }
            Search::Exhausted => PuzzleStatus::Unsolvable,
            Search::Abandoned => PuzzleStatus::Unsolved,
        };
        log::debug!(
            "search finished as {status} after {} nodes, {} backtracks, {} deductions",
            stats.nodes,
            stats.backtracks,
            stats.techniques.total_steps()
        );
        Ok(SolveOutcome { status, stats })
    }

    fn search(
        &self,
        puzzle: &mut Puzzle,
        stats: &mut BacktrackSolverStats,
        depth: usize,
    ) -> Result<Search, SolverError> {
        stats.nodes += 1;
        if self.node_limit.is_some_and(|limit| stats.nodes > limit) {
            log::trace!("node limit reached at depth {depth}");
            return Ok(Search::Abandoned);
        }

        self.techniques
            .solve_with_stats(puzzle, &mut stats.techniques)?;
        match puzzle.status() {
            PuzzleStatus::Solved => return Ok(Search::Solved),
            PuzzleStatus::Unsolvable => return Ok(Search::Exhausted),
            PuzzleStatus::Unsolved => {}
        }

        let Some((island, choices)) = choose_branch(puzzle) else {
            return Ok(Search::Exhausted);
        };
        log::trace!(
            "depth {depth}: branching on island {island} with {} choices",
            choices.len()
        );
        for distribution in choices {
            let mut child = puzzle.clone();
            if apply_distribution(&mut child, island, distribution).is_err() {
                continue;
            }
            match self.search(&mut child, stats, depth + 1)? {
                Search::Solved => {
                    *puzzle = child;
                    return Ok(Search::Solved);
                }
                Search::Abandoned => return Ok(Search::Abandoned),
                Search::Exhausted => stats.backtracks += 1,
            }
        }
        Ok(Search::Exhausted)
    }
}

/// Picks the unsaturated island with the fewest distributions, lowest id
/// first on ties.
fn choose_branch(puzzle: &Puzzle) -> Option<(IslandId, Vec<Distribution>)> {
    let mut best: Option<(IslandId, Vec<Distribution>)> = None;
    for id in puzzle.island_ids() {
        if puzzle.is_saturated(id) {
            continue;
        }
        let choices = distributions(puzzle, id);
        if choices.is_empty() {
            return Some((id, choices));
        }
        if best.as_ref().is_none_or(|(_, b)| choices.len() < b.len()) {
            best = Some((id, choices));
        }
    }
    best
}

/// Lists every way to spread the remaining bridges of `id` over its slots.
fn distributions(puzzle: &Puzzle, id: IslandId) -> Vec<Distribution> {
    let remaining = puzzle.remaining_capacity(id);
    let mut caps = [0; 4];
    for slot in open_slots(puzzle, id) {
        caps[slot.direction.index()] = slot.capacity.min(remaining);
    }

    let mut result = Vec::new();
    let mut current: ArrayVec<[u8; 4]> = ArrayVec::new();
    collect_distributions(&caps, remaining, &mut current, &mut result);
    result
}

fn collect_distributions(
    caps: &[u8; 4],
    remaining: u8,
    current: &mut ArrayVec<[u8; 4]>,
    result: &mut Vec<Distribution>,
) {
    let index = current.len();
    if index == caps.len() {
        if remaining == 0 {
            let mut distribution = [0; 4];
            distribution.copy_from_slice(current.as_slice());
            result.push(distribution);
        }
        return;
    }
    // larger counts first
    for count in (0..=caps[index].min(remaining)).rev() {
        current.push(count);
        collect_distributions(caps, remaining - count, current, result);
        current.pop();
    }
}

fn apply_distribution(
    puzzle: &mut Puzzle,
    id: IslandId,
    distribution: Distribution,
) -> Result<(), InvalidMoveError> {
    for direction in Direction::ALL {
        let count = distribution[direction.index()];
        if count == 0 {
            continue;
        }
        let Some(neighbor) = puzzle.neighbor(id, direction) else {
            continue;
        };
        let total = puzzle.bridge_count(id, direction) + count;
        puzzle.build_bridge(id, neighbor, total >= 2)?;
    }
    Ok(())
}
