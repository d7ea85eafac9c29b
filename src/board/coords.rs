//! 0x88 board coordinates.
//!
//! One byte holds a whole square: the low three bits are the file and bits
//! 4..=6 are the rank. The two spare bits (3 and 7) flag the 64 unplayable
//! byte values, so a single mask test catches any off-board result of
//! coordinate arithmetic with no per-axis bounds checks.

/// One board square in the 0x88 scheme.
pub type Coords0x88 = u8;

/// Slot count of a full 0x88 board, off-board slots included.
pub const BOARD_SLOTS: usize = 128;

/// Exclusive upper bound for board scans; every byte at or above it is
/// off-board.
pub const SCAN_END: Coords0x88 = 0x78;

pub const OFF_BOARD_MASK: u8 = 0x88;

#[inline]
pub const fn off_the_board(coords: Coords0x88) -> bool {
    (coords & OFF_BOARD_MASK) != 0
}

#[inline]
pub const fn file(coords: Coords0x88) -> u8 {
    coords & 7
}

#[inline]
pub const fn rank(coords: Coords0x88) -> u8 {
    coords >> 4
}

#[inline]
pub const fn coords_from_file_rank(file: u8, rank: u8) -> Coords0x88 {
    (rank << 4) | file
}

/// Compresses an on-board coordinate to its dense `0..64` index.
#[inline]
pub const fn coords_to_8x8(coords: Coords0x88) -> u8 {
    (coords + (coords & 7)) >> 1
}

/// Expands a dense `0..64` index back to its 0x88 byte. Inverse of
/// [`coords_to_8x8`] for every on-board value.
#[inline]
pub const fn coords_from_8x8(index: u8) -> Coords0x88 {
    index + (index & !7)
}
