use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 6;
pub const NUM_SHIPS: usize = 7;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Cruiser", 3),
    ShipType::new("Destroyer", 2),
    ShipType::new("Destroyer", 2),
    ShipType::new("Boat", 1),
    ShipType::new("Boat", 1),
    ShipType::new("Boat", 1),
    ShipType::new("Boat", 1),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&SHIPS);

const fn fleet_cells(fleet: &[ShipType]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].length();
        i += 1;
    }
    total
}

/// Placement attempts allowed for a whole fleet before the board is discarded.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;
