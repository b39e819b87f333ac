//! Commonly used types and utilities for ease of import.

pub use crate::{AiPlayer, Board, Combatant, Coord, GameStatus, Match, Player, ShotOutcome, Side};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
