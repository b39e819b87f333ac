#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rand::rngs::SmallRng;
use seabattle::{Board, BoardError, Coord, Orientation, Player, Ship, ShotOutcome, SHIPS};

/// Bow and orientation for each entry of `SHIPS`, laid out so no two ships
/// touch on a 6×6 board.
pub const LAYOUT: [((i32, i32), Orientation); 7] = [
    ((0, 0), Orientation::Horizontal),
    ((0, 5), Orientation::Vertical),
    ((3, 0), Orientation::Vertical),
    ((3, 2), Orientation::Horizontal),
    ((3, 4), Orientation::Horizontal),
    ((5, 2), Orientation::Horizontal),
    ((5, 5), Orientation::Vertical),
];

pub fn layout_ships() -> Vec<Ship> {
    SHIPS
        .iter()
        .zip(LAYOUT)
        .map(|(def, ((r, c), o))| Ship::new(*def, Coord::new(r, c), o))
        .collect()
}

/// Every ship cell of the fixed layout, ship by ship.
pub fn layout_cells() -> Vec<Coord> {
    layout_ships().iter().flat_map(|s| s.cells()).collect()
}

/// A board holding the fixed layout, ready for play.
pub fn ready_board() -> Board {
    let mut board = Board::new();
    for ship in layout_ships() {
        board.place_ship(ship).unwrap();
    }
    assert!(board.begin());
    board
}

/// What a scripted player was told.
#[derive(Debug, Default)]
pub struct Log {
    pub rejected: Vec<(Coord, BoardError)>,
    pub results: Vec<(Coord, ShotOutcome)>,
    pub incoming: Vec<(Coord, ShotOutcome)>,
    pub ended: Option<bool>,
}

pub type SharedLog = Rc<RefCell<Log>>;

/// Player firing at a fixed list of targets; fails once the list runs out.
pub struct Scripted {
    targets: VecDeque<Coord>,
    log: SharedLog,
}

impl Scripted {
    pub fn new(targets: impl IntoIterator<Item = Coord>) -> (Self, SharedLog) {
        let log = Rc::new(RefCell::new(Log::default()));
        let player = Scripted {
            targets: targets.into_iter().collect(),
            log: Rc::clone(&log),
        };
        (player, log)
    }
}

impl Player for Scripted {
    fn select_target(&mut self, _rng: &mut SmallRng) -> anyhow::Result<Coord> {
        self.targets
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }

    fn handle_rejected_shot(&mut self, target: Coord, err: &BoardError) {
        self.log.borrow_mut().rejected.push((target, err.clone()));
    }

    fn handle_shot_result(&mut self, target: Coord, outcome: ShotOutcome) {
        self.log.borrow_mut().results.push((target, outcome));
    }

    fn handle_opponent_shot(&mut self, target: Coord, outcome: ShotOutcome) {
        self.log.borrow_mut().incoming.push((target, outcome));
    }

    fn handle_match_end(&mut self, won: bool, _own: &Board, _opponent: &Board) {
        self.log.borrow_mut().ended = Some(won);
    }
}
