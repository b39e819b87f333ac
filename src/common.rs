//! Common types for the engine: board errors and shot outcomes.

use crate::bitboard::BitBoardError;

/// Result of a shot that landed on a fresh cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot missed all ships.
    Miss,
    /// Shot sank a ship, carrying its name.
    Sunk(&'static str),
}

impl ShotOutcome {
    /// Hits and sinkings earn the shooter another shot.
    pub fn retains_turn(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Target or ship cell lies outside the grid.
    OutOfBounds,
    /// Ship type with no cells.
    EmptyShip,
    /// Ship would overlap or touch (diagonals included) another ship.
    OverlapOrAdjacency,
    /// Target was already fired upon.
    AlreadyFired,
    /// Random fleet placement ran out of attempts.
    GenerationFailed,
    /// Ships cannot be placed once play has begun.
    AlreadyStarted,
    /// Board is missing ships or has not begun play.
    NotReady,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { .. } => BoardError::OutOfBounds,
            // boards never call try_new; their bitboard size is asserted at
            // compile time in board.rs
            BitBoardError::SizeTooLarge { .. } => {
                unreachable!("bitboard size is fixed at compile time")
            }
        }
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Cell is outside the board"),
            BoardError::OverlapOrAdjacency => {
                write!(f, "Ship overlaps or touches another ship")
            }
            BoardError::EmptyShip => write!(f, "Ship must be at least one cell long"),
            BoardError::AlreadyFired => write!(f, "Cell has already been fired upon"),
            BoardError::GenerationFailed => write!(f, "Unable to place the fleet"),
            BoardError::AlreadyStarted => write!(f, "Play has already begun on this board"),
            BoardError::NotReady => write!(f, "Board is not ready for play"),
        }
    }
}

impl core::error::Error for BoardError {}
