// neighbors.rs - Moore neighborhood counting, no wraparound

use crate::grid::Grid;

/// Offsets of the 8 cells surrounding a cell.
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Number of live cells among the up to 8 neighbors of (row, col).
///
/// Neighbors that fall outside the grid are absent and count as dead; the
/// edges do not wrap around.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?)))
        .filter(|&(r, c)| grid.get(r, c).is_alive())
        .count() as u8
}
