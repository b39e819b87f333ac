use alloc::boxed::Box;

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    config::NUM_SHIPS,
    coord::Coord,
    player::Player,
};

/// One side of a match: its own board and whoever picks its targets.
pub struct Combatant {
    board: Board,
    player: Box<dyn Player>,
}

impl Combatant {
    pub fn new(board: Board, player: Box<dyn Player>) -> Self {
        Self { board, player }
    }

    /// The combatant's own board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Fire on `opponent` until the board accepts a shot.
    ///
    /// Off-board and repeated targets are reported to the player and a new
    /// target is requested; they never end the turn. Only a failure of the
    /// player itself (e.g. closed input) is returned as an error.
    pub fn take_turn(
        &mut self,
        opponent: &mut Board,
        rng: &mut SmallRng,
    ) -> anyhow::Result<(Coord, ShotOutcome)> {
        loop {
            let target = self.player.select_target(rng)?;
            match opponent.fire_at(target) {
                Ok(outcome) => {
                    self.player.handle_shot_result(target, outcome);
                    return Ok((target, outcome));
                }
                Err(err @ (BoardError::OutOfBounds | BoardError::AlreadyFired)) => {
                    self.player.handle_rejected_shot(target, &err);
                }
                Err(err) => return Err(anyhow::anyhow!(err)),
            }
        }
    }
}

/// Either side of a match. `A` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    WonByA,
    WonByB,
}

impl GameStatus {
    fn won_by(side: Side) -> Self {
        match side {
            Side::A => GameStatus::WonByA,
            Side::B => GameStatus::WonByB,
        }
    }

    /// The winning side, once the match is decided.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::WonByA => Some(Side::A),
            GameStatus::WonByB => Some(Side::B),
        }
    }
}

/// Summary of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchReport {
    pub winner: Side,
    /// Moves taken, extra shots after a hit included.
    pub turns: usize,
    /// Accepted shots fired by side A and side B.
    pub shots: [usize; 2],
}

/// Turn-alternation state machine over two combatants.
pub struct Match {
    sides: [Combatant; 2],
    turn: Side,
    status: GameStatus,
    turns: usize,
    shots: [usize; 2],
}

impl Match {
    /// Both boards must carry the full fleet and have begun play.
    pub fn new(a: Combatant, b: Combatant) -> Result<Self, BoardError> {
        if !a.board.is_ready() || !b.board.is_ready() {
            return Err(BoardError::NotReady);
        }
        info!("match started");
        Ok(Self {
            sides: [a, b],
            turn: Side::A,
            status: GameStatus::InProgress,
            turns: 0,
            shots: [0; 2],
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side that acts on the next step.
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.sides[side.index()]
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Accepted shots fired by `side`.
    pub fn shots(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// Advance the match by one move.
    ///
    /// The active side first checks whether it has already sunk the whole
    /// enemy fleet; if so the match ends without a move. Otherwise it fires,
    /// keeping the turn after a hit or a sinking.
    pub fn step(&mut self, rng: &mut SmallRng) -> anyhow::Result<GameStatus> {
        if self.status != GameStatus::InProgress {
            return Ok(self.status);
        }

        let side = self.turn;
        let [a, b] = &mut self.sides;
        let (active, passive) = match side {
            Side::A => (a, b),
            Side::B => (b, a),
        };

        if passive.board.sunk_count() == NUM_SHIPS {
            self.status = GameStatus::won_by(side);
            info!("match won by side {:?} after {} turns", side, self.turns);
            active.player.handle_match_end(true, &active.board, &passive.board);
            passive.player.handle_match_end(false, &passive.board, &active.board);
            return Ok(self.status);
        }

        active.player.handle_turn_start(&active.board, &passive.board);
        let (target, outcome) = active.take_turn(&mut passive.board, rng)?;
        passive.player.handle_opponent_shot(target, outcome);
        debug!("side {:?} fired at {:?}: {:?}", side, target, outcome);

        self.turns += 1;
        self.shots[side.index()] += 1;
        if !outcome.retains_turn() {
            self.turn = side.other();
        }
        Ok(self.status)
    }

    /// Run the match to completion.
    pub fn play(&mut self, rng: &mut SmallRng) -> anyhow::Result<MatchReport> {
        loop {
            if let Some(winner) = self.step(rng)?.winner() {
                return Ok(MatchReport {
                    winner,
                    turns: self.turns,
                    shots: self.shots,
                });
            }
        }
    }
}
