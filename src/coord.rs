//! Board coordinates.

use core::fmt;

use crate::config::BOARD_SIZE;

/// Offsets of the eight cells surrounding a coordinate.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A zero-based `(row, col)` position.
///
/// Components are signed so that positions off the board (for example a
/// human typing `0 0`) can still be expressed and rejected by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Grid indices of this coordinate, or `None` when it lies off the board.
    pub fn index(&self) -> Option<(usize, usize)> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&self.row) && (0..size).contains(&self.col) {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }

    pub fn in_bounds(&self) -> bool {
        self.index().is_some()
    }

    /// The eight surrounding coordinates, diagonals included. Not clipped.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .map(move |(dr, dc)| Coord::new(self.row + dr, self.col + dc))
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row as i32, col as i32)
    }
}

/// One-based `row col`, the form players type.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}
