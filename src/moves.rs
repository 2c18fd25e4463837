//! Pure move application on a position pair
//!
//! A position pair is the stones of one tracked side plus the mask of all
//! occupied cells. Dropping a stone uses the carry trick: adding the bottom
//! bit of a column to the occupancy mask ripples up to the first empty cell.

use crate::{bitboard::bottom_mask, HEIGHT, WIDTH};

/// Occupancy mask with one more stone dropped into `column`
fn drop_stone(occupied: u64, column: usize) -> u64 {
    occupied | (occupied + bottom_mask(column))
}

/// Plays `column` for the tracked side
///
/// Returns the tracked side's stones including the new one, and the new occupancy mask
pub fn apply_move(stones: u64, occupied: u64, column: usize) -> (u64, u64) {
    let opponent = stones ^ occupied;
    let occupied = drop_stone(occupied, column);
    // everything that is not the opponent's belongs to the side that just moved
    (opponent ^ occupied, occupied)
}

/// Plays `column` for the untracked side, leaving the tracked stones as they are
pub fn apply_move_track_mask_only(stones: u64, occupied: u64, column: usize) -> (u64, u64) {
    (stones, drop_stone(occupied, column))
}

/// Recovers the column a stone was added to between two masks of the same side
///
/// Returns `None` if the masks are identical
pub fn column_from_move(previous: u64, next: u64) -> Option<usize> {
    let changed = previous ^ next;
    if changed == 0 {
        return None;
    }
    let column = changed.trailing_zeros() as usize / (HEIGHT + 1);
    if column < WIDTH {
        Some(column)
    } else {
        None
    }
}
