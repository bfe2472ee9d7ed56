/// Default side length of a square board.
pub const BOARD_SIZE: usize = 6;
pub const NUM_SHIPS: usize = 7;

/// Ship sizes placed on every board, in placement order.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&FLEET);

const fn fleet_cells(fleet: &[usize]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i];
        i += 1;
    }
    total
}

/// Placement attempts allowed across the whole fleet in one generation pass.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;
