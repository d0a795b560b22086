//! The grid model: islands, bridges and the mutation primitives.

use crate::{
    Bridge, Direction, InvalidMoveError, Island, IslandId, MAX_BRIDGES_PER_PAIR, MAX_REQUIRED,
    MIN_REQUIRED, Orientation, Position, PuzzleError,
};

/// Content of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Water,
    Island(IslandId),
    /// Interior cell of a built bridge.
    Span(Orientation),
}

/// A Bridges puzzle: a fixed set of islands on a grid plus the bridges built
/// between them so far.
///
/// The puzzle owns every island and bridge. Islands are stored in an arena and
/// addressed by [`IslandId`]; their positions and required counts never change
/// after construction, so the neighbour table is computed once. Bridges are
/// created and destroyed through [`build_bridge`](Self::build_bridge),
/// [`tear_down_bridge`](Self::tear_down_bridge) and
/// [`remove_all_bridges`](Self::remove_all_bridges), each of which keeps the
/// invariants below:
///
/// - no island has more bridges than it requires,
/// - no two bridges cross,
/// - at most one (single or double) bridge joins any pair of neighbours.
///
/// # Examples
///
/// ```
/// use bridges_core::{Position, PuzzleBuilder};
///
/// let mut puzzle = PuzzleBuilder::new(4, 4)
///     .island(Position::new(0, 0), 2)
///     .island(Position::new(3, 0), 2)
///     .build()?;
///
/// let a = puzzle.island_at(Position::new(0, 0)).unwrap();
/// let b = puzzle.island_at(Position::new(3, 0)).unwrap();
/// puzzle.build_bridge(a, b, true)?;
///
/// assert!(puzzle.is_saturated(a));
/// assert!(puzzle.status().is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    columns: u8,
    rows: u8,
    islands: Vec<Island>,
    /// Row-major grid, `cells[y * columns + x]`.
    cells: Vec<Cell>,
    neighbors: Vec<[Option<IslandId>; 4]>,
    /// Bridge multiplicity per island and direction, indexed by [`Direction::index`].
    links: Vec<[u8; 4]>,
    built: Vec<u8>,
}

impl Puzzle {
    /// Creates a puzzle without bridges from `(position, required)` pairs.
    ///
    /// Islands receive ids in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError`] if the grid has a zero dimension, if there are
    /// no islands, if an island lies outside the grid or shares a cell with
    /// another, if a required count is outside `1..=8`, or if an island
    /// requires more than two bridges per neighbour.
    pub fn with_islands<I>(columns: u8, rows: u8, islands: I) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = (Position, u8)>,
    {
        if columns == 0 || rows == 0 {
            return Err(PuzzleError::InvalidDimensions { columns, rows });
        }

        let mut cells = vec![Cell::Water; usize::from(columns) * usize::from(rows)];
        let mut arena = Vec::new();
        for (position, required) in islands {
            if position.x() >= columns || position.y() >= rows {
                return Err(PuzzleError::OutOfBounds { position });
            }
            let cell = &mut cells[usize::from(position.y()) * usize::from(columns)
                + usize::from(position.x())];
            if *cell != Cell::Water {
                return Err(PuzzleError::DuplicatePosition { position });
            }
            if !(MIN_REQUIRED..=MAX_REQUIRED).contains(&required) {
                return Err(PuzzleError::InvalidRequired { position, required });
            }
            *cell = Cell::Island(IslandId::new(arena.len()));
            arena.push(Island::new(position, required));
        }
        if arena.is_empty() {
            return Err(PuzzleError::NoIslands);
        }

        let neighbors = (0..arena.len())
            .map(|i| Direction::ALL.map(|dir| scan_neighbor(&arena, IslandId::new(i), dir)))
            .collect::<Vec<_>>();

        for (island, slots) in arena.iter().zip(&neighbors) {
            let count = slots.iter().flatten().count();
            #[expect(clippy::cast_possible_truncation)]
            let capacity = count as u8 * MAX_BRIDGES_PER_PAIR;
            if island.required() > capacity {
                return Err(PuzzleError::ExceedsCapacity {
                    position: island.position(),
                    required: island.required(),
                    capacity,
                });
            }
        }

        let len = arena.len();
        Ok(Self {
            columns,
            rows,
            islands: arena,
            cells,
            neighbors,
            links: vec![[0; 4]; len],
            built: vec![0; len],
        })
    }

    /// Returns the number of columns of the grid.
    #[must_use]
    #[inline]
    pub fn columns(&self) -> u8 {
        self.columns
    }

    /// Returns the number of rows of the grid.
    #[must_use]
    #[inline]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Returns all islands in id order.
    #[must_use]
    #[inline]
    pub fn islands(&self) -> &[Island] {
        &self.islands
    }

    /// Returns the number of islands.
    #[must_use]
    #[inline]
    pub fn island_count(&self) -> usize {
        self.islands.len()
    }

    /// Returns the ids of all islands.
    pub fn island_ids(&self) -> impl ExactSizeIterator<Item = IslandId> + use<> {
        (0..self.islands.len()).map(IslandId::new)
    }

    /// Returns the island with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this puzzle.
    #[must_use]
    #[inline]
    pub fn island(&self, id: IslandId) -> &Island {
        &self.islands[id.index()]
    }

    /// Returns `true` if `id` belongs to this puzzle.
    #[must_use]
    #[inline]
    pub fn contains(&self, id: IslandId) -> bool {
        id.index() < self.islands.len()
    }

    /// Returns the island at `position`, if any.
    #[must_use]
    pub fn island_at(&self, position: Position) -> Option<IslandId> {
        match self.cell(position)? {
            Cell::Island(id) => Some(id),
            Cell::Water | Cell::Span(_) => None,
        }
    }

    /// Returns the orientation of the bridge passing over `position`, if the
    /// cell is the interior of a built bridge.
    #[must_use]
    pub fn span_at(&self, position: Position) -> Option<Orientation> {
        match self.cell(position)? {
            Cell::Span(orientation) => Some(orientation),
            Cell::Water | Cell::Island(_) => None,
        }
    }

    /// Returns the nearest island visible from `id` in `direction`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this puzzle.
    #[must_use]
    #[inline]
    pub fn neighbor(&self, id: IslandId, direction: Direction) -> Option<IslandId> {
        self.neighbors[id.index()][direction.index()]
    }

    /// Returns every `(direction, neighbour)` pair of an island.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this puzzle.
    pub fn neighbors(&self, id: IslandId) -> impl Iterator<Item = (Direction, IslandId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbor(id, dir).map(|n| (dir, n)))
    }

    /// Returns the direction from `a` to `b` if they are neighbours.
    #[must_use]
    pub fn direction_between(&self, a: IslandId, b: IslandId) -> Option<Direction> {
        if !self.contains(a) || !self.contains(b) {
            return None;
        }
        let dir = self.island(a).position().direction_to(self.island(b).position())?;
        (self.neighbor(a, dir) == Some(b)).then_some(dir)
    }

    /// Returns the number of bridges (0, 1 or 2) leaving `id` in `direction`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this puzzle.
    #[must_use]
    #[inline]
    pub fn bridge_count(&self, id: IslandId, direction: Direction) -> u8 {
        self.links[id.index()][direction.index()]
    }

    /// Returns the bridge between `a` and `b`, if one is built.
    #[must_use]
    pub fn bridge_between(&self, a: IslandId, b: IslandId) -> Option<Bridge> {
        let dir = self.direction_between(a, b)?;
        match self.bridge_count(a, dir) {
            0 => None,
            count => Some(Bridge::new(a, b, dir.orientation(), count == 2)),
        }
    }

    /// Returns every built bridge, each pair reported once.
    pub fn bridges(&self) -> impl Iterator<Item = Bridge> + '_ {
        self.island_ids().flat_map(move |id| {
            [Direction::East, Direction::South]
                .into_iter()
                .filter_map(move |dir| {
                    let count = self.bridge_count(id, dir);
                    let other = self.neighbor(id, dir)?;
                    (count > 0).then(|| Bridge::new(id, other, dir.orientation(), count == 2))
                })
        })
    }

    /// Returns `true` if no bridge is built.
    #[must_use]
    pub fn has_no_bridges(&self) -> bool {
        self.built.iter().all(|&b| b == 0)
    }

    /// Returns the number of bridges ending at `id`, a double counting as two.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this puzzle.
    #[must_use]
    #[inline]
    pub fn built_count(&self, id: IslandId) -> u8 {
        self.built[id.index()]
    }

    /// Returns how many more bridges `id` needs.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this puzzle.
    #[must_use]
    #[inline]
    pub fn remaining_capacity(&self, id: IslandId) -> u8 {
        self.island(id).required().saturating_sub(self.built_count(id))
    }

    /// Returns `true` if `id` has all the bridges it requires.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this puzzle.
    #[must_use]
    #[inline]
    pub fn is_saturated(&self, id: IslandId) -> bool {
        self.remaining_capacity(id) == 0
    }

    /// Returns `true` if a new bridge between the neighbours `a` and `b` would
    /// cross a bridge that is already built.
    ///
    /// An existing bridge between `a` and `b` themselves never counts as a
    /// crossing.
    #[must_use]
    pub fn would_cross(&self, a: IslandId, b: IslandId) -> bool {
        let Some(dir) = self.direction_between(a, b) else {
            return false;
        };
        let orientation = dir.orientation();
        self.interior(a, dir).any(|pos| {
            matches!(self.cell(pos), Some(Cell::Span(o)) if o != orientation)
        })
    }

    /// Checks whether [`build_bridge`](Self::build_bridge) would succeed
    /// without changing anything.
    ///
    /// Returns the direction from `a` to `b` on success.
    ///
    /// # Errors
    ///
    /// Returns the same [`InvalidMoveError`] that `build_bridge` would return.
    pub fn check_build(
        &self,
        a: IslandId,
        b: IslandId,
        is_double: bool,
    ) -> Result<Direction, InvalidMoveError> {
        for id in [a, b] {
            if !self.contains(id) {
                return Err(InvalidMoveError::UnknownIsland { island: id });
            }
        }
        let from = self.island(a).position();
        let to = self.island(b).position();
        if a == b {
            return Err(InvalidMoveError::SameIsland { position: from });
        }
        let dir = self
            .direction_between(a, b)
            .ok_or(InvalidMoveError::NotNeighbors { from, to })?;

        let current = self.bridge_count(a, dir);
        let target = if is_double { 2 } else { 1 };
        if current >= target {
            return Err(InvalidMoveError::AlreadyBuilt { from, to });
        }
        let delta = target - current;
        for id in [a, b] {
            if self.remaining_capacity(id) < delta {
                let island = self.island(id);
                return Err(InvalidMoveError::ExceedsRequired {
                    position: island.position(),
                    required: island.required(),
                });
            }
        }
        if current == 0 && self.would_cross(a, b) {
            return Err(InvalidMoveError::CrossesBridge { from, to });
        }
        Ok(dir)
    }

    /// Builds a single or double bridge between two neighbouring islands.
    ///
    /// Building a double bridge where a single one exists upgrades it. Both
    /// islands are updated together; on error nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMoveError`] if the islands are not neighbours, if a
    /// bridge of the same or greater multiplicity exists, if either island
    /// would exceed its required count, or if the bridge would cross another.
    pub fn build_bridge(
        &mut self,
        a: IslandId,
        b: IslandId,
        is_double: bool,
    ) -> Result<Bridge, InvalidMoveError> {
        let dir = self.check_build(a, b, is_double)?;
        let current = self.bridge_count(a, dir);
        let target = if is_double { 2 } else { 1 };
        if current == 0 {
            self.paint(a, dir, Cell::Span(dir.orientation()));
        }
        self.set_links(a, b, dir, target);
        Ok(Bridge::new(a, b, dir.orientation(), is_double))
    }

    /// Removes the bridge between `a` and `b`, returning it.
    ///
    /// Returns `None` and leaves the puzzle untouched if there is no bridge
    /// between them.
    pub fn tear_down_bridge(&mut self, a: IslandId, b: IslandId) -> Option<Bridge> {
        let bridge = self.bridge_between(a, b)?;
        let dir = self.direction_between(a, b)?;
        self.paint(a, dir, Cell::Water);
        self.set_links(a, b, dir, 0);
        Some(bridge)
    }

    /// Removes every bridge. Islands and their required counts are kept.
    pub fn remove_all_bridges(&mut self) {
        for cell in &mut self.cells {
            if let Cell::Span(_) = cell {
                *cell = Cell::Water;
            }
        }
        self.links.fill([0; 4]);
        self.built.fill(0);
    }

    fn set_links(&mut self, a: IslandId, b: IslandId, dir: Direction, count: u8) {
        let old = self.links[a.index()][dir.index()];
        self.links[a.index()][dir.index()] = count;
        self.links[b.index()][dir.opposite().index()] = count;
        for id in [a, b] {
            let built = &mut self.built[id.index()];
            *built = *built - old + count;
        }
    }

    fn paint(&mut self, from: IslandId, dir: Direction, cell: Cell) {
        let positions = self.interior(from, dir).collect::<Vec<_>>();
        for pos in positions {
            let index = self.cell_index(pos);
            self.cells[index] = cell;
        }
    }

    /// Cells strictly between `from` and its neighbour in `dir`.
    pub(crate) fn interior(
        &self,
        from: IslandId,
        dir: Direction,
    ) -> impl Iterator<Item = Position> + '_ {
        let end = self
            .neighbor(from, dir)
            .map(|to| self.island(to).position());
        let mut pos = self.island(from).position();
        std::iter::from_fn(move || {
            let end = end?;
            pos = pos.step(dir)?;
            (pos != end).then_some(pos)
        })
    }

    fn cell_index(&self, pos: Position) -> usize {
        usize::from(pos.y()) * usize::from(self.columns) + usize::from(pos.x())
    }

    fn cell(&self, pos: Position) -> Option<Cell> {
        (pos.x() < self.columns && pos.y() < self.rows).then(|| self.cells[self.cell_index(pos)])
    }
}

/// Finds the nearest island aligned with `id` in `dir` by scanning all islands.
fn scan_neighbor(islands: &[Island], id: IslandId, dir: Direction) -> Option<IslandId> {
    let origin = islands[id.index()].position();
    islands
        .iter()
        .enumerate()
        .filter(|(_, island)| origin.direction_to(island.position()) == Some(dir))
        .min_by_key(|(_, island)| origin.distance(island.position()))
        .map(|(i, _)| IslandId::new(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PuzzleBuilder;

    fn id(puzzle: &Puzzle, x: u8, y: u8) -> IslandId {
        puzzle.island_at(Position::new(x, y)).unwrap()
    }

    fn cross_puzzle() -> Puzzle {
        PuzzleBuilder::new(3, 3)
            .island(Position::new(1, 0), 1)
            .island(Position::new(1, 2), 1)
            .island(Position::new(0, 1), 1)
            .island(Position::new(2, 1), 1)
            .build()
            .unwrap()
    }

    #[test]
    fn test_neighbors_pick_nearest_island() {
        let puzzle = PuzzleBuilder::new(7, 5)
            .island(Position::new(0, 0), 1)
            .island(Position::new(3, 0), 2)
            .island(Position::new(6, 0), 1)
            .island(Position::new(3, 4), 1)
            .build()
            .unwrap();
        let left = id(&puzzle, 0, 0);
        let middle = id(&puzzle, 3, 0);
        let right = id(&puzzle, 6, 0);
        let bottom = id(&puzzle, 3, 4);

        assert_eq!(puzzle.neighbor(left, Direction::East), Some(middle));
        assert_eq!(puzzle.neighbor(middle, Direction::East), Some(right));
        assert_eq!(puzzle.neighbor(middle, Direction::West), Some(left));
        assert_eq!(puzzle.neighbor(middle, Direction::South), Some(bottom));
        assert_eq!(puzzle.neighbor(middle, Direction::North), None);
        assert_eq!(puzzle.neighbor(left, Direction::South), None);

        assert_eq!(puzzle.direction_between(left, middle), Some(Direction::East));
        assert_eq!(puzzle.direction_between(left, right), None);
        assert_eq!(puzzle.neighbors(middle).count(), 3);
    }

    #[test]
    fn test_build_single_then_upgrade() {
        let mut puzzle = PuzzleBuilder::new(4, 1)
            .island(Position::new(0, 0), 2)
            .island(Position::new(3, 0), 2)
            .build()
            .unwrap();
        let a = id(&puzzle, 0, 0);
        let b = id(&puzzle, 3, 0);

        let bridge = puzzle.build_bridge(a, b, false).unwrap();
        assert!(!bridge.is_double());
        assert_eq!(puzzle.built_count(a), 1);
        assert_eq!(puzzle.remaining_capacity(b), 1);
        assert_eq!(
            puzzle.build_bridge(b, a, false),
            Err(InvalidMoveError::AlreadyBuilt {
                from: Position::new(3, 0),
                to: Position::new(0, 0),
            })
        );

        let bridge = puzzle.build_bridge(b, a, true).unwrap();
        assert!(bridge.is_double());
        assert_eq!(puzzle.built_count(a), 2);
        assert_eq!(puzzle.built_count(b), 2);
        assert!(puzzle.is_saturated(a));
        assert_eq!(puzzle.bridges().count(), 1);
        assert_eq!(puzzle.span_at(Position::new(1, 0)), Some(Orientation::Horizontal));
    }

    #[test]
    fn test_build_rejects_exceeding_required() {
        let mut puzzle = PuzzleBuilder::new(4, 1)
            .island(Position::new(0, 0), 1)
            .island(Position::new(3, 0), 2)
            .build()
            .unwrap();
        let a = id(&puzzle, 0, 0);
        let b = id(&puzzle, 3, 0);
        let before = puzzle.clone();
        assert_eq!(
            puzzle.build_bridge(a, b, true),
            Err(InvalidMoveError::ExceedsRequired {
                position: Position::new(0, 0),
                required: 1,
            })
        );
        assert_eq!(puzzle, before);
    }

    #[test]
    fn test_build_rejects_non_neighbors() {
        let mut puzzle = PuzzleBuilder::new(5, 5)
            .island(Position::new(0, 0), 1)
            .island(Position::new(2, 0), 2)
            .island(Position::new(4, 0), 1)
            .island(Position::new(4, 4), 1)
            .island(Position::new(2, 4), 1)
            .build()
            .unwrap();
        let a = id(&puzzle, 0, 0);
        let c = id(&puzzle, 4, 0);
        let d = id(&puzzle, 4, 4);
        assert!(matches!(
            puzzle.build_bridge(a, c, false),
            Err(InvalidMoveError::NotNeighbors { .. })
        ));
        assert!(matches!(
            puzzle.build_bridge(a, d, false),
            Err(InvalidMoveError::NotNeighbors { .. })
        ));
        assert!(matches!(
            puzzle.build_bridge(a, a, false),
            Err(InvalidMoveError::SameIsland { .. })
        ));
        assert!(matches!(
            puzzle.build_bridge(a, IslandId::new(99), false),
            Err(InvalidMoveError::UnknownIsland { .. })
        ));
        assert!(puzzle.has_no_bridges());
    }

    #[test]
    fn test_crossing_bridge_is_rejected() {
        let mut puzzle = cross_puzzle();
        let top = id(&puzzle, 1, 0);
        let bottom = id(&puzzle, 1, 2);
        let left = id(&puzzle, 0, 1);
        let right = id(&puzzle, 2, 1);

        puzzle.build_bridge(top, bottom, false).unwrap();
        assert!(puzzle.would_cross(left, right));
        assert_eq!(
            puzzle.build_bridge(left, right, false),
            Err(InvalidMoveError::CrossesBridge {
                from: Position::new(0, 1),
                to: Position::new(2, 1),
            })
        );

        puzzle.tear_down_bridge(top, bottom).unwrap();
        assert!(!puzzle.would_cross(left, right));
        puzzle.build_bridge(left, right, false).unwrap();
        assert_eq!(puzzle.span_at(Position::new(1, 1)), Some(Orientation::Horizontal));
    }

    #[test]
    fn test_tear_down_missing_bridge_is_noop() {
        let mut puzzle = cross_puzzle();
        let top = id(&puzzle, 1, 0);
        let bottom = id(&puzzle, 1, 2);
        let left = id(&puzzle, 0, 1);
        let before = puzzle.clone();
        assert_eq!(puzzle.tear_down_bridge(top, bottom), None);
        assert_eq!(puzzle.tear_down_bridge(top, left), None);
        assert_eq!(puzzle, before);
    }

    #[test]
    fn test_tear_down_double_restores_capacity() {
        let mut puzzle = PuzzleBuilder::new(3, 1)
            .island(Position::new(0, 0), 2)
            .island(Position::new(2, 0), 2)
            .build()
            .unwrap();
        let a = id(&puzzle, 0, 0);
        let b = id(&puzzle, 2, 0);
        puzzle.build_bridge(a, b, true).unwrap();
        let removed = puzzle.tear_down_bridge(b, a).unwrap();
        assert!(removed.is_double());
        assert_eq!(puzzle.remaining_capacity(a), 2);
        assert_eq!(puzzle.remaining_capacity(b), 2);
        assert_eq!(puzzle.span_at(Position::new(1, 0)), None);
    }

    #[test]
    fn test_remove_all_bridges() {
        let mut puzzle = cross_puzzle();
        let empty = puzzle.clone();
        puzzle.remove_all_bridges();
        assert_eq!(puzzle, empty);

        let top = id(&puzzle, 1, 0);
        let bottom = id(&puzzle, 1, 2);
        puzzle.build_bridge(top, bottom, false).unwrap();
        puzzle.remove_all_bridges();
        assert_eq!(puzzle, empty);
        assert!(puzzle.has_no_bridges());
    }

    #[test]
    fn test_adjacent_islands_have_no_interior() {
        let mut puzzle = PuzzleBuilder::new(2, 2)
            .island(Position::new(0, 0), 1)
            .island(Position::new(1, 0), 1)
            .build()
            .unwrap();
        let a = id(&puzzle, 0, 0);
        let b = id(&puzzle, 1, 0);
        puzzle.build_bridge(a, b, false).unwrap();
        assert!(puzzle.status().is_solved());
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            Puzzle::with_islands(0, 4, [(Position::new(0, 0), 1)]),
            Err(PuzzleError::InvalidDimensions { columns: 0, rows: 4 })
        );
        assert_eq!(
            Puzzle::with_islands(4, 4, std::iter::empty()),
            Err(PuzzleError::NoIslands)
        );
        assert_eq!(
            Puzzle::with_islands(4, 4, [(Position::new(4, 0), 1)]),
            Err(PuzzleError::OutOfBounds {
                position: Position::new(4, 0)
            })
        );
        assert_eq!(
            Puzzle::with_islands(4, 4, [(Position::new(1, 1), 1), (Position::new(1, 1), 2)]),
            Err(PuzzleError::DuplicatePosition {
                position: Position::new(1, 1)
            })
        );
        assert_eq!(
            Puzzle::with_islands(4, 4, [(Position::new(1, 1), 9)]),
            Err(PuzzleError::InvalidRequired {
                position: Position::new(1, 1),
                required: 9
            })
        );
        assert_eq!(
            Puzzle::with_islands(4, 4, [(Position::new(0, 0), 3), (Position::new(0, 3), 2)]),
            Err(PuzzleError::ExceedsCapacity {
                position: Position::new(0, 0),
                required: 3,
                capacity: 2
            })
        );
    }

    mod properties {
        use proptest::prelude::*;

        use super::super::*;

        const GRID: &str = "
            .3.2.
            2...2
            .4.3.
        ";

        fn op_strategy() -> impl Strategy<Value = Vec<(usize, usize, u8)>> {
            prop::collection::vec((0usize..6, 0usize..4, 0u8..3), 0..40)
        }

        fn assert_invariants(puzzle: &Puzzle) {
            let mut total = 0;
            for id in puzzle.island_ids() {
                let built = puzzle.built_count(id);
                assert!(built <= puzzle.island(id).required());
                let per_dir: u8 = Direction::ALL
                    .into_iter()
                    .map(|dir| puzzle.bridge_count(id, dir))
                    .sum();
                assert_eq!(built, per_dir);
                total += u32::from(built);
            }
            let bridged: u32 = puzzle.bridges().map(|b| 2 * u32::from(b.count())).sum();
            assert_eq!(total, bridged);
            for bridge in puzzle.bridges() {
                let dir = puzzle
                    .direction_between(bridge.first(), bridge.second())
                    .unwrap();
                for pos in puzzle.interior(bridge.first(), dir) {
                    assert_eq!(puzzle.span_at(pos), Some(bridge.orientation()));
                }
            }
        }

        proptest! {
            #[test]
            fn mutations_keep_invariants(ops in op_strategy()) {
                let mut puzzle = GRID.parse::<Puzzle>().unwrap();
                for (index, dir, kind) in ops {
                    let id = IslandId::new(index);
                    let Some(other) = puzzle.neighbor(id, Direction::ALL[dir]) else {
                        continue;
                    };
                    let before = puzzle.clone();
                    match kind {
                        0 | 1 => {
                            let valid = kind == 0
                                && puzzle.is_valid_move(id, Direction::ALL[dir])
                                && puzzle.bridge_count(id, Direction::ALL[dir]) == 0;
                            let result = puzzle.build_bridge(id, other, kind == 1);
                            if result.is_err() {
                                prop_assert_eq!(&puzzle, &before);
                            } else if kind == 0 {
                                prop_assert!(valid);
                            }
                        }
                        _ => {
                            let removed = puzzle.tear_down_bridge(id, other);
                            prop_assert_eq!(removed, before.bridge_between(id, other));
                        }
                    }
                    assert_invariants(&puzzle);
                }
            }
        }
    }
}
