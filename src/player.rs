use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    coord::Coord,
};
use rand::rngs::SmallRng;

/// Interface implemented by the two kinds of combatant.
///
/// Only [`Player::select_target`] is required; the remaining hooks let a
/// player show progress and are no-ops by default.
pub trait Player {
    /// Choose the next coordinate to fire at. Bounds and repeat shots are
    /// checked by the board, not here.
    fn select_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Coord>;

    /// Called before the player's move with its own board and the board it
    /// is about to fire on.
    fn handle_turn_start(&mut self, _own: &Board, _opponent: &Board) {}

    /// The board refused a target; another will be requested.
    fn handle_rejected_shot(&mut self, _target: Coord, _err: &BoardError) {}

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coord, _outcome: ShotOutcome) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _target: Coord, _outcome: ShotOutcome) {}

    /// Called once when the match is decided.
    fn handle_match_end(&mut self, _won: bool, _own: &Board, _opponent: &Board) {}
}
