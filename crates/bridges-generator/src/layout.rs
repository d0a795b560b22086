//! Working grid used while placing islands.
//!
//! A layout grows a crossing-free bridge network one island at a time. The
//! network only exists to fix each island's required count; the puzzle handed
//! out has its bridges removed.

use bridges_core::{
    Direction, IslandId, MAX_BRIDGES_PER_PAIR, MAX_REQUIRED, Orientation, Position, Puzzle,
    PuzzleError,
};
use rand::{Rng, seq::IndexedRandom as _};

use crate::GeneratorConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Water,
    Island(usize),
    Span(Orientation),
}

#[derive(Debug, Clone)]
pub(crate) struct Layout {
    columns: u8,
    rows: u8,
    cells: Vec<Cell>,
    islands: Vec<Position>,
    degrees: Vec<u8>,
    links: Vec<[u8; 4]>,
    partners: Vec<[Option<usize>; 4]>,
}

impl Layout {
    fn new(columns: u8, rows: u8) -> Self {
        Self {
            columns,
            rows,
            cells: vec![Cell::Water; usize::from(columns) * usize::from(rows)],
            islands: Vec::new(),
            degrees: Vec::new(),
            links: Vec::new(),
            partners: Vec::new(),
        }
    }

    /// Grows a network of `island_count` islands.
    ///
    /// Islands are placed at random spots clear of other islands. Once
    /// `placement_retries` random placements in a row fail, the grid counts as
    /// crowded and every remaining spot is considered, preferring clear ones
    /// and accepting islands next to others when nothing else is left. Returns
    /// `None` only when no island can be placed at all.
    pub(crate) fn grow<R>(config: &GeneratorConfig, rng: &mut R, island_count: usize) -> Option<Self>
    where
        R: Rng + ?Sized,
    {
        let mut layout = Self::new(config.columns(), config.rows());
        let first = Position::new(
            rng.random_range(0..config.columns()),
            rng.random_range(0..config.rows()),
        );
        layout.add_island(first);

        let mut failures = 0;
        while layout.islands.len() < island_count {
            if failures < config.placement_retries() {
                if layout.try_place(rng, config.double_probability()) {
                    failures = 0;
                } else {
                    failures += 1;
                }
                continue;
            }
            if !layout.place_anywhere(rng, config.double_probability()) {
                log::trace!(
                    "placement dead end with {} of {island_count} islands",
                    layout.islands.len()
                );
                return None;
            }
        }
        layout.add_extra_bridges(rng, config.extra_bridge_probability());
        Some(layout)
    }

    pub(crate) fn island_count(&self) -> usize {
        self.islands.len()
    }

    fn index(&self, position: Position) -> Option<usize> {
        (position.x() < self.columns && position.y() < self.rows).then(|| {
            usize::from(position.y()) * usize::from(self.columns) + usize::from(position.x())
        })
    }

    fn cell(&self, position: Position) -> Option<Cell> {
        self.index(position).map(|i| self.cells[i])
    }

    fn set_cell(&mut self, position: Position, cell: Cell) {
        if let Some(i) = self.index(position) {
            self.cells[i] = cell;
        }
    }

    fn add_island(&mut self, position: Position) -> usize {
        let index = self.islands.len();
        self.set_cell(position, Cell::Island(index));
        self.islands.push(position);
        self.degrees.push(0);
        self.links.push([0; 4]);
        self.partners.push([None; 4]);
        index
    }

    /// Returns `true` if `position` or any of the eight cells around it holds
    /// an island.
    fn touches_island(&self, position: Position) -> bool {
        let (x, y) = (i16::from(position.x()), i16::from(position.y()));
        (-1..=1).any(|dy| {
            (-1..=1).any(|dx| {
                let (Ok(nx), Ok(ny)) = (u8::try_from(x + dx), u8::try_from(y + dy)) else {
                    return false;
                };
                matches!(self.cell(Position::new(nx, ny)), Some(Cell::Island(_)))
            })
        })
    }

    /// Water cells from `from` towards `direction`, up to the first cell that
    /// is not water.
    fn open_water(&self, from: Position, direction: Direction) -> Vec<Position> {
        let mut path = Vec::new();
        let mut position = from;
        while let Some(next) = position.step(direction) {
            if self.cell(next) != Some(Cell::Water) {
                break;
            }
            path.push(next);
            position = next;
        }
        path
    }

    /// Tries to place one island joined to a random existing island.
    fn try_place<R>(&mut self, rng: &mut R, double_probability: f64) -> bool
    where
        R: Rng + ?Sized,
    {
        let sources = (0..self.islands.len())
            .filter(|&i| self.degrees[i] < MAX_REQUIRED)
            .collect::<Vec<_>>();
        let (Some(&source), Some(&direction)) =
            (sources.choose(rng), Direction::ALL.choose(rng))
        else {
            return false;
        };

        let path = self.open_water(self.islands[source], direction);
        // the first cell would touch the source
        let candidates = (1..path.len())
            .filter(|&k| !self.touches_island(path[k]))
            .collect::<Vec<_>>();
        let Some(&k) = candidates.choose(rng) else {
            return false;
        };
        self.attach(rng, source, direction, &path, k, double_probability);
        true
    }

    /// Places one island at a spot chosen among every open water cell in line
    /// with an island that can take another bridge.
    ///
    /// Spots clear of other islands are preferred; spots next to an island are
    /// used only when no clear one is left.
    fn place_anywhere<R>(&mut self, rng: &mut R, double_probability: f64) -> bool
    where
        R: Rng + ?Sized,
    {
        let mut clear = Vec::new();
        let mut crowded = Vec::new();
        for source in (0..self.islands.len()).filter(|&i| self.degrees[i] < MAX_REQUIRED) {
            for direction in Direction::ALL {
                let path = self.open_water(self.islands[source], direction);
                for (k, &position) in path.iter().enumerate() {
                    if k > 0 && !self.touches_island(position) {
                        clear.push((source, direction, k));
                    } else {
                        crowded.push((source, direction, k));
                    }
                }
            }
        }
        let spots = if clear.is_empty() { &crowded } else { &clear };
        let Some(&(source, direction, k)) = spots.choose(rng) else {
            return false;
        };
        let path = self.open_water(self.islands[source], direction);
        self.attach(rng, source, direction, &path, k, double_probability);
        true
    }

    /// Adds an island at `path[k]` and bridges it to `source`.
    fn attach<R>(
        &mut self,
        rng: &mut R,
        source: usize,
        direction: Direction,
        path: &[Position],
        k: usize,
        double_probability: f64,
    ) where
        R: Rng + ?Sized,
    {
        let count = if self.degrees[source] + MAX_BRIDGES_PER_PAIR <= MAX_REQUIRED
            && rng.random_bool(double_probability)
        {
            MAX_BRIDGES_PER_PAIR
        } else {
            1
        };
        let target = self.add_island(path[k]);
        self.link(source, target, direction, count, &path[..k]);
    }

    /// Sets the multiplicity between `a` and its neighbour `b` towards
    /// `direction`, painting `interior` when the bridge is new.
    fn link(&mut self, a: usize, b: usize, direction: Direction, count: u8, interior: &[Position]) {
        let (i, j) = (direction.index(), direction.opposite().index());
        let current = self.links[a][i];
        if current == 0 {
            for &position in interior {
                self.set_cell(position, Cell::Span(direction.orientation()));
            }
        }
        self.links[a][i] = count;
        self.links[b][j] = count;
        self.partners[a][i] = Some(b);
        self.partners[b][j] = Some(a);
        self.degrees[a] += count - current;
        self.degrees[b] += count - current;
    }

    /// Finds the island visible from `a` towards `direction`, looking through
    /// the bridge between them if there is one.
    fn visible(&self, a: usize, direction: Direction) -> Option<(usize, Vec<Position>)> {
        let bridged = self.links[a][direction.index()] > 0;
        let mut interior = Vec::new();
        let mut position = self.islands[a];
        loop {
            position = position.step(direction)?;
            match self.cell(position)? {
                Cell::Water if !bridged => interior.push(position),
                Cell::Span(o) if bridged && o == direction.orientation() => {
                    interior.push(position);
                }
                Cell::Island(b) => return Some((b, interior)),
                Cell::Water | Cell::Span(_) => return None,
            }
        }
    }

    /// Adds or doubles bridges between visible neighbours with the given
    /// probability.
    fn add_extra_bridges<R>(&mut self, rng: &mut R, probability: f64)
    where
        R: Rng + ?Sized,
    {
        for a in 0..self.islands.len() {
            for direction in [Direction::East, Direction::South] {
                let Some((b, interior)) = self.visible(a, direction) else {
                    continue;
                };
                let current = self.links[a][direction.index()];
                if current >= MAX_BRIDGES_PER_PAIR
                    || self.degrees[a] >= MAX_REQUIRED
                    || self.degrees[b] >= MAX_REQUIRED
                {
                    continue;
                }
                if rng.random_bool(probability) {
                    self.link(a, b, direction, current + 1, &interior);
                }
            }
        }
    }

    /// Creates the puzzle with the grown network built.
    pub(crate) fn into_puzzle(self) -> Result<Puzzle, PuzzleError> {
        let mut puzzle = Puzzle::with_islands(
            self.columns,
            self.rows,
            self.islands.iter().copied().zip(self.degrees.iter().copied()),
        )?;
        for (a, partners) in self.partners.iter().enumerate() {
            for direction in [Direction::East, Direction::South] {
                let Some(b) = partners[direction.index()] else {
                    continue;
                };
                let is_double = self.links[a][direction.index()] == MAX_BRIDGES_PER_PAIR;
                puzzle
                    .build_bridge(IslandId::new(a), IslandId::new(b), is_double)
                    .map_err(PuzzleError::InvalidBridge)?;
            }
        }
        Ok(puzzle)
    }
}
