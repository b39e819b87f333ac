mod common;

use common::{layout_cells, layout_ships, ready_board};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    Board, BoardError, Cell, Coord, Orientation, Ship, ShipType, ShotOutcome, NUM_SHIPS, SHIPS,
    TOTAL_SHIP_CELLS,
};

fn boat(row: i32, col: i32) -> Ship {
    Ship::new(ShipType::new("Boat", 1), Coord::new(row, col), Orientation::Horizontal)
}

#[test]
fn test_single_boat_scenario() {
    let mut board = Board::new();
    board.place_ship(boat(0, 0)).unwrap();
    assert!(board.begin());

    assert_eq!(board.fire_at(Coord::new(0, 0)), Ok(ShotOutcome::Sunk("Boat")));
    assert_eq!(board.sunk_count(), 1);
    assert_eq!(
        board.fire_at(Coord::new(0, 0)),
        Err(BoardError::AlreadyFired)
    );
    assert_eq!(
        board.fire_at(Coord::new(6, 0)),
        Err(BoardError::OutOfBounds)
    );
    assert_eq!(
        board.fire_at(Coord::new(0, -1)),
        Err(BoardError::OutOfBounds)
    );
}

#[test]
fn test_place_rejects_out_of_bounds() {
    let mut board = Board::new();
    let cruiser = Ship::new(SHIPS[0], Coord::new(4, 0), Orientation::Vertical);
    assert_eq!(board.place_ship(cruiser), Err(BoardError::OutOfBounds));
    assert_eq!(board.place_ship(boat(-1, 2)), Err(BoardError::OutOfBounds));
    assert!(board.ships().is_empty());
}

#[test]
fn test_place_rejects_touching_ships() {
    let mut board = Board::new();
    board.place_ship(boat(2, 2)).unwrap();

    // overlap, edge contact and diagonal contact
    for (r, c) in [(2, 2), (2, 3), (1, 2), (3, 3), (1, 1)] {
        assert_eq!(
            board.place_ship(boat(r, c)),
            Err(BoardError::OverlapOrAdjacency),
            "boat at ({}, {}) should be refused",
            r,
            c
        );
    }
    // one empty cell in between is enough
    board.place_ship(boat(2, 4)).unwrap();
    board.place_ship(boat(4, 2)).unwrap();
    assert_eq!(board.ships().len(), 3);
}

#[test]
fn test_place_rejects_zero_length_ship() {
    let mut board = Board::new();
    let ghost = Ship::new(ShipType::new("Ghost", 0), Coord::new(2, 2), Orientation::Vertical);
    assert_eq!(board.place_ship(ghost), Err(BoardError::EmptyShip));
    assert!(board.ships().is_empty());
    assert_eq!(board.blocked().count(), 0);

    // six boats plus a refused empty ship is not a full fleet
    for (r, c) in [(0, 0), (0, 2), (0, 4), (2, 0), (4, 0), (4, 4)] {
        board.place_ship(boat(r, c)).unwrap();
    }
    assert_eq!(board.place_ship(ghost), Err(BoardError::EmptyShip));
    board.begin();
    assert!(!board.is_ready());
}

#[test]
fn test_buffer_cells_are_not_occupied() {
    let mut board = Board::new();
    board.place_ship(boat(2, 2)).unwrap();
    assert_eq!(board.cell(Coord::new(2, 2)), Some(Cell::Occupied));
    assert_eq!(board.cell(Coord::new(1, 1)), Some(Cell::Empty));
    // ship cell plus its full ring
    assert_eq!(board.blocked().count(), 9);
}

#[test]
fn test_begin_clears_blocked_once() {
    let mut board = Board::new();
    board.place_ship(boat(0, 0)).unwrap();
    assert!(board.blocked().count() > 0);

    assert!(board.begin());
    assert_eq!(board.blocked().count(), 0);
    // a former buffer cell is open water now
    assert_eq!(board.fire_at(Coord::new(1, 1)), Ok(ShotOutcome::Miss));

    assert!(!board.begin());
    assert_eq!(board.blocked().collect::<Vec<_>>(), vec![Coord::new(1, 1)]);
    assert_eq!(board.place_ship(boat(4, 4)), Err(BoardError::AlreadyStarted));
}

#[test]
fn test_sink_on_last_hit_only() {
    let mut board = ready_board();
    let cruiser = layout_ships()[0];
    let cells: Vec<Coord> = cruiser.cells().collect();

    assert_eq!(board.ships()[0].health(), 3);
    assert_eq!(board.fire_at(cells[0]), Ok(ShotOutcome::Hit));
    assert_eq!(board.fire_at(cells[1]), Ok(ShotOutcome::Hit));
    assert_eq!(board.ships()[0].health(), 1);
    assert_eq!(board.sunk_count(), 0);
    assert_eq!(board.fire_at(cells[2]), Ok(ShotOutcome::Sunk("Cruiser")));
    assert_eq!(board.sunk_count(), 1);
    assert!(board.ships()[0].is_sunk());
    assert_eq!(board.ships()[0].health(), 0);

    for cell in cells {
        assert_eq!(board.cell(cell), Some(Cell::Hit));
    }
    // water next to the sunk cruiser is revealed and counts as fired upon
    assert_eq!(board.cell(Coord::new(1, 3)), Some(Cell::MarkedEmpty));
    assert_eq!(
        board.fire_at(Coord::new(1, 3)),
        Err(BoardError::AlreadyFired)
    );
}

#[test]
fn test_miss_marks_cell() {
    let mut board = ready_board();
    assert_eq!(board.fire_at(Coord::new(2, 2)), Ok(ShotOutcome::Miss));
    assert_eq!(board.cell(Coord::new(2, 2)), Some(Cell::Miss));
    assert!(!ShotOutcome::Miss.retains_turn());
    assert!(ShotOutcome::Hit.retains_turn());
    assert!(ShotOutcome::Sunk("Boat").retains_turn());
}

#[test]
fn test_whole_fleet_sinks() {
    let mut board = ready_board();
    assert_eq!(layout_cells().len(), TOTAL_SHIP_CELLS);
    let sunk = layout_cells()
        .into_iter()
        .filter(|&c| matches!(board.fire_at(c), Ok(ShotOutcome::Sunk(_))))
        .count();
    assert_eq!(sunk, NUM_SHIPS);
    assert!(board.all_sunk());
}

#[test]
fn test_generate_full_fleet() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = Board::generate(&mut rng);
    assert!(board.is_ready());
    assert_eq!(board.ships().len(), NUM_SHIPS);
    assert_eq!(board.blocked().count(), 0);
    let lengths: Vec<usize> = board.ships().iter().map(|s| s.ship_type().length()).collect();
    assert_eq!(lengths, vec![3, 2, 2, 1, 1, 1, 1]);
    assert_eq!(lengths.iter().sum::<usize>(), TOTAL_SHIP_CELLS);
}

#[test]
fn test_render_conceals_fleet() {
    let mut board = Board::new();
    board.place_ship(boat(0, 0)).unwrap();
    board.begin();
    board.fire_at(Coord::new(5, 5)).unwrap();

    let shown = board.to_string();
    let mut lines = shown.lines();
    assert_eq!(lines.next(), Some("  | 1 | 2 | 3 | 4 | 5 | 6 |"));
    assert_eq!(lines.next(), Some("1 | █ | . | . | . | . | . |"));
    assert!(shown.ends_with("6 | . | . | . | . | . | o |"));

    board.set_concealed(true);
    assert!(board.is_concealed());
    assert!(!board.to_string().contains('█'));
}
