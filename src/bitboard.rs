//! Bitboard helpers for a 7x6 board
//!
//! Column `c` owns bits `c * (HEIGHT + 1)` to `c * (HEIGHT + 1) + HEIGHT - 1`,
//! bottom to top. The extra bit above each column is never set and keeps
//! alignments from wrapping into the next column.

use crate::{HEIGHT, WIDTH};

mod static_masks {
    use crate::{HEIGHT, WIDTH};

    pub const fn bottom_mask() -> u64 {
        let mut mask = 0;
        let mut column = 0;
        while column < WIDTH {
            mask |= 1 << (column * (HEIGHT + 1));
            column += 1;
        }
        mask
    }
    pub const fn top_mask() -> u64 {
        bottom_mask() << (HEIGHT - 1)
    }
    pub const fn full_board_mask() -> u64 {
        bottom_mask() * ((1 << HEIGHT as u64) - 1)
    }
}

/// Mask of every playable cell on the board
pub const FULL_BOARD_MASK: u64 = static_masks::full_board_mask();

/// Mask of the top playable cell of every column
pub const TOP_ROW_MASK: u64 = static_masks::top_mask();

/// The bit of the top playable cell of `column`
pub fn top_mask(column: usize) -> u64 {
    1 << (column * (HEIGHT + 1) + (HEIGHT - 1))
}

/// The bit of the bottom cell of `column`
pub fn bottom_mask(column: usize) -> u64 {
    1 << (column * (HEIGHT + 1))
}

/// All playable cells of `column`
pub fn column_mask(column: usize) -> u64 {
    ((1 << HEIGHT) - 1) << (column * (HEIGHT + 1))
}

/// The bit of the cell at `column`, `row` (row 0 is the bottom)
pub fn cell_mask(column: usize, row: usize) -> u64 {
    bottom_mask(column) << row
}

/// Whether `column` still has an empty cell in the occupancy mask
pub fn playable(occupied: u64, column: usize) -> bool {
    top_mask(column) & occupied == 0
}

/// Checks a set of stones for an alignment of four in any direction
pub fn is_winning(position: u64) -> bool {
    // check horizontal alignment
    // mark all horizontal runs of 2
    let mut m = position & (position >> (HEIGHT + 1));
    // check for runs of 2 * (runs of 2)
    if m & (m >> (2 * (HEIGHT + 1))) != 0 {
        return true;
    }

    // check diagonal alignment \
    m = position & (position >> HEIGHT);
    if m & (m >> (2 * HEIGHT)) != 0 {
        return true;
    }

    // check diagonal alignment /
    m = position & (position >> (HEIGHT + 2));
    if m & (m >> (2 * (HEIGHT + 2))) != 0 {
        return true;
    }

    // check vertical alignment
    m = position & (position >> 1);
    if m & (m >> 2) != 0 {
        return true;
    }

    // no alignments
    false
}

/// A board is drawn once the top cell of every column is taken
pub fn is_draw(occupied: u64) -> bool {
    (0..WIDTH).all(|column| occupied & top_mask(column) != 0)
}
