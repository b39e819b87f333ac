//! Ship definitions and geometry.

use core::fmt;

use crate::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells advance along the row, column by column.
    Horizontal,
    /// Cells advance down the column, row by row.
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub const fn length(&self) -> usize {
        self.length
    }
}

/// A ship anchored at its bow, extending along its orientation.
///
/// A ship is pure geometry plus a health counter; whether its cells fit on a
/// board is decided by [`crate::Board::place_ship`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Orientation,
    bow: Coord,
    health: usize,
}

impl Ship {
    pub fn new(ship_type: ShipType, bow: Coord, orientation: Orientation) -> Self {
        Ship {
            ship_type,
            orientation,
            bow,
            health: ship_type.length(),
        }
    }

    /// Cells covered by the ship, starting at the bow.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let bow = self.bow;
        let orientation = self.orientation;
        (0..self.ship_type.length() as i32).map(move |i| match orientation {
            Orientation::Horizontal => Coord::new(bow.row, bow.col + i),
            Orientation::Vertical => Coord::new(bow.row + i, bow.col),
        })
    }

    /// Whether a shot at `coord` lands on this ship.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// On-board cells touching the ship, diagonals included, minus the
    /// ship's own cells. May contain duplicates.
    pub fn buffer(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells()
            .flat_map(Coord::neighbors)
            .filter(|c| c.in_bounds() && !self.contains(*c))
    }

    /// Take one point of damage. Returns `true` exactly when this hit sinks
    /// the ship.
    pub fn register_hit(&mut self) -> bool {
        if self.health == 0 {
            return false;
        }
        self.health -= 1;
        self.health == 0
    }

    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }

    pub fn health(&self) -> usize {
        self.health
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", bow: ({}, {}), orientation: {:?}, health: {}/{} }}",
            self.ship_type.name(),
            self.bow.row,
            self.bow.col,
            self.orientation,
            self.health,
            self.ship_type.length(),
        )
    }
}
