//! Plain-text grid form of a puzzle.
//!
//! Each line is one grid row:
//!
//! - `.` water
//! - `1`-`8` an island and its required count
//! - `-` / `=` a single / double horizontal bridge cell
//! - `|` / `H` a single / double vertical bridge cell
//!
//! Blank lines and surrounding whitespace are ignored. A bridge between two
//! islands on adjacent cells has no interior cell and cannot be written in
//! this form.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Direction, Orientation, ParsePuzzleError, Position, Puzzle, PuzzleError};

fn bridge_char(orientation: Orientation, is_double: bool) -> char {
    match (orientation, is_double) {
        (Orientation::Horizontal, false) => '-',
        (Orientation::Horizontal, true) => '=',
        (Orientation::Vertical, false) => '|',
        (Orientation::Vertical, true) => 'H',
    }
}

fn char_orientation(ch: char) -> Option<(Orientation, bool)> {
    match ch {
        '-' => Some((Orientation::Horizontal, false)),
        '=' => Some((Orientation::Horizontal, true)),
        '|' => Some((Orientation::Vertical, false)),
        'H' => Some((Orientation::Vertical, true)),
        _ => None,
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = usize::from(self.columns());
        let mut grid = vec![vec!['.'; columns]; usize::from(self.rows())];
        for island in self.islands() {
            let pos = island.position();
            grid[usize::from(pos.y())][usize::from(pos.x())] =
                char::from(b'0' + island.required());
        }
        for bridge in self.bridges() {
            let Some(dir) = self.direction_between(bridge.first(), bridge.second()) else {
                continue;
            };
            let ch = bridge_char(bridge.orientation(), bridge.is_double());
            for pos in self.interior(bridge.first(), dir) {
                grid[usize::from(pos.y())][usize::from(pos.x())] = ch;
            }
        }
        for (i, row) in grid.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Puzzle {
    type Err = ParsePuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let grid = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let Some(first) = grid.first() else {
            return Err(ParsePuzzleError::Empty);
        };
        let expected = first.len();
        let columns = u8::try_from(expected).map_err(|_| ParsePuzzleError::TooLarge)?;
        let rows = u8::try_from(grid.len()).map_err(|_| ParsePuzzleError::TooLarge)?;

        let mut islands = Vec::new();
        for (y, row) in (0..rows).zip(&grid) {
            if row.len() != expected {
                return Err(ParsePuzzleError::RaggedRow {
                    row: usize::from(y),
                    len: row.len(),
                    expected,
                });
            }
            for (x, &ch) in (0..columns).zip(row) {
                let position = Position::new(x, y);
                match ch {
                    '1'..='8' => islands.push((position, ch as u8 - b'0')),
                    '.' => {}
                    _ if char_orientation(ch).is_some() => {}
                    _ => return Err(ParsePuzzleError::InvalidCharacter { ch, position }),
                }
            }
        }

        let at = |pos: Position| grid[usize::from(pos.y())][usize::from(pos.x())];
        let mut puzzle =
            Puzzle::with_islands(columns, rows, islands).map_err(ParsePuzzleError::Puzzle)?;
        for id in puzzle.island_ids() {
            for dir in [Direction::East, Direction::South] {
                let Some(next) = puzzle.island(id).position().step(dir) else {
                    continue;
                };
                if next.x() >= columns || next.y() >= rows {
                    continue;
                }
                let ch = at(next);
                let Some((orientation, is_double)) = char_orientation(ch) else {
                    continue;
                };
                if orientation != dir.orientation() {
                    continue;
                }
                let Some(other) = puzzle.neighbor(id, dir) else {
                    return Err(ParsePuzzleError::DanglingBridge { position: next });
                };
                if let Some(position) = puzzle.interior(id, dir).find(|&pos| at(pos) != ch) {
                    return Err(ParsePuzzleError::DanglingBridge { position });
                }
                puzzle
                    .build_bridge(id, other, is_double)
                    .map_err(|e| ParsePuzzleError::Puzzle(PuzzleError::InvalidBridge(e)))?;
            }
        }

        for (y, row) in (0..rows).zip(&grid) {
            for (x, &ch) in (0..columns).zip(row) {
                let position = Position::new(x, y);
                if let Some((orientation, _)) = char_orientation(ch)
                    && puzzle.span_at(position) != Some(orientation)
                {
                    return Err(ParsePuzzleError::DanglingBridge { position });
                }
            }
        }

        Ok(puzzle)
    }
}
