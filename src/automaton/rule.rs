//! The B3/S23 transition rule.

use super::cell::Cell;

/// Next state of a cell given its current state and live-neighbor count.
///
/// Birth on exactly 3, survival on 2 or 3. Counts above 8 cannot come out of
/// a neighbor pass but are still defined here: they yield a dead cell.
#[inline]
pub fn next_state(current: Cell, neighbor_count: u8) -> Cell {
    match neighbor_count {
        3 => Cell::Live,
        2 => current,
        _ => Cell::Dead,
    }
}

/// Byte form of [`next_state`] used by the stepping loops.
#[inline]
pub fn next_byte(current: u8, neighbor_count: u8) -> u8 {
    ((neighbor_count == 3) | ((current != 0) & (neighbor_count == 2))) as u8
}
