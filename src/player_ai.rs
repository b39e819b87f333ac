use crate::{common::BoardError, config::BOARD_SIZE, coord::Coord};
use log::trace;
use rand::{rngs::SmallRng, Rng};

use crate::player::Player;

/// Computer opponent that fires at uniformly random cells.
///
/// It keeps no memory of earlier shots; cells already fired upon are simply
/// refused by the board and resampled.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Coord> {
        Ok(Coord::from((
            rng.random_range(0..BOARD_SIZE as usize),
            rng.random_range(0..BOARD_SIZE as usize),
        )))
    }

    fn handle_rejected_shot(&mut self, target: Coord, err: &BoardError) {
        trace!("ai resampling after {:?}: {}", target, err);
    }
}
