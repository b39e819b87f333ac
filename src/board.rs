//! Game board state: ship placement, shot resolution and rendering.

use alloc::vec::Vec;
use core::fmt;

use log::debug;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, ShotOutcome};
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS, SHIPS};
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

type BB = BitBoard<u64, { BOARD_SIZE as usize }>;

const GRID_SIZE: usize = BOARD_SIZE as usize;

const _: () = assert!(GRID_SIZE * GRID_SIZE <= u64::BITS as usize);

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied,
    Hit,
    Miss,
    /// Water revealed around a sunk ship.
    MarkedEmpty,
}

impl Cell {
    fn symbol(self, concealed: bool) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied if concealed => '.',
            Cell::Occupied => '█',
            Cell::Hit => 'X',
            Cell::Miss => 'o',
            Cell::MarkedEmpty => '·',
        }
    }
}

/// One side's board: the grid, its fleet and the blocked cell set.
///
/// While ships are being placed, `blocked` holds every ship cell plus the
/// ring around it so that ships never touch. [`Board::begin`] clears it and
/// from then on it records cells that have been fired upon.
#[derive(Clone)]
pub struct Board {
    grid: [[Cell; GRID_SIZE]; GRID_SIZE],
    ships: Vec<Ship>,
    blocked: BB,
    sunk: usize,
    concealed: bool,
    started: bool,
}

impl Board {
    /// Create an empty board with no ships placed.
    pub fn new() -> Self {
        Board {
            grid: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
            ships: Vec::with_capacity(NUM_SHIPS),
            blocked: BB::new(),
            sunk: 0,
            concealed: false,
            started: false,
        }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Returns `true` when every ship of the standard fleet is sunk.
    pub fn all_sunk(&self) -> bool {
        self.sunk == NUM_SHIPS
    }

    /// Full fleet placed and play begun.
    pub fn is_ready(&self) -> bool {
        self.started && self.ships.len() == NUM_SHIPS
    }

    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    /// Hide the fleet when rendering, for boards viewed by the opponent.
    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    /// State of the cell at `coord`, or `None` off the board.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        coord.index().map(|(r, c)| self.grid[r][c])
    }

    /// Cells currently blocked, row-major.
    pub fn blocked(&self) -> impl Iterator<Item = Coord> + '_ {
        self.blocked.iter()
    }

    fn set_cell(&mut self, coord: Coord, cell: Cell) {
        if let Some((r, c)) = coord.index() {
            self.grid[r][c] = cell;
        }
    }

    /// Place a ship. It must have at least one cell, and every cell must be
    /// on the board and clear of other ships and their surrounding ring;
    /// nothing changes on failure.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if self.started {
            return Err(BoardError::AlreadyStarted);
        }
        if ship.ship_type().length() == 0 {
            return Err(BoardError::EmptyShip);
        }
        for cell in ship.cells() {
            if !cell.in_bounds() {
                return Err(BoardError::OutOfBounds);
            }
            if self.blocked.contains(cell) {
                return Err(BoardError::OverlapOrAdjacency);
            }
        }
        let footprint = BB::from_iter(ship.cells())?;
        let buffer = BB::from_iter(ship.buffer())?;
        for cell in footprint.iter() {
            self.set_cell(cell, Cell::Occupied);
        }
        self.blocked |= footprint | buffer;
        self.ships.push(ship);
        Ok(())
    }

    /// Finish placement: forget the placement-time blocked cells so the set
    /// can track shots instead. Returns `false` if play had already begun.
    pub fn begin(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.blocked.clear_all();
        self.started = true;
        true
    }

    /// Fire at `coord`, updating the grid and reporting the outcome.
    pub fn fire_at(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        if !coord.in_bounds() {
            return Err(BoardError::OutOfBounds);
        }
        if !self.blocked.insert(coord)? {
            return Err(BoardError::AlreadyFired);
        }

        let Some(idx) = self.ships.iter().position(|s| s.contains(coord)) else {
            self.set_cell(coord, Cell::Miss);
            debug!("shot at {:?} missed", coord);
            return Ok(ShotOutcome::Miss);
        };

        self.set_cell(coord, Cell::Hit);
        let ship = self.ships[idx];
        if !self.ships[idx].register_hit() {
            debug!("shot at {:?} hit {}", coord, ship.ship_type().name());
            return Ok(ShotOutcome::Hit);
        }

        self.sunk += 1;
        for cell in ship.buffer() {
            if self.blocked.insert(cell)? {
                self.set_cell(cell, Cell::MarkedEmpty);
            }
        }
        debug!(
            "shot at {:?} sank {} ({} of {} sunk)",
            coord,
            ship.ship_type().name(),
            self.sunk,
            NUM_SHIPS
        );
        Ok(ShotOutcome::Sunk(ship.ship_type().name()))
    }

    /// Try to lay out the standard fleet at random and begin play.
    ///
    /// A single attempt budget of [`MAX_PLACEMENT_ATTEMPTS`] covers the whole
    /// fleet; running out yields [`BoardError::GenerationFailed`] and the
    /// partial board is dropped.
    pub fn try_generate<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, BoardError> {
        let mut board = Board::new();
        let mut attempts = 0;
        for def in SHIPS {
            loop {
                attempts += 1;
                if attempts > MAX_PLACEMENT_ATTEMPTS {
                    return Err(BoardError::GenerationFailed);
                }
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let bow = Coord::from((
                    rng.random_range(0..GRID_SIZE),
                    rng.random_range(0..GRID_SIZE),
                ));
                match board.place_ship(Ship::new(def, bow, orientation)) {
                    Ok(()) => break,
                    Err(BoardError::OutOfBounds | BoardError::OverlapOrAdjacency) => continue,
                    Err(e) => return Err(e),
                }
            }
        }
        board.begin();
        Ok(board)
    }

    /// Generate random boards until one holds the whole fleet.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut discarded = 0usize;
        loop {
            match Board::try_generate(rng) {
                Ok(board) => return board,
                Err(e) => {
                    discarded += 1;
                    debug!("discarding board #{}: {}", discarded, e);
                }
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  blocked: {:?},\n  sunk: {},\n  started: {},\n  ships: {:?}\n}}",
            self.blocked, self.sunk, self.started, self.ships
        )
    }
}

/// Text grid with 1-based headers. Ships are hidden when the board is
/// concealed.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  |")?;
        for c in 0..GRID_SIZE {
            write!(f, " {} |", c + 1)?;
        }
        for (r, row) in self.grid.iter().enumerate() {
            write!(f, "\n{} |", r + 1)?;
            for cell in row {
                write!(f, " {} |", cell.symbol(self.concealed))?;
            }
        }
        Ok(())
    }
}
