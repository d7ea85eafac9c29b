//! Direction algebra over 0x88 coordinates.
//!
//! A direction is a byte offset biased by [`DIRECTION_BIAS`], so negative
//! steps stay representable in an unsigned byte and two directions compose
//! with plain modular arithmetic. Applying a direction may step off the
//! board; the result then carries the 0x88 mask, and callers test it with
//! [`off_the_board`](crate::board::coords::off_the_board) instead of
//! branching per axis.

use crate::board::coords::Coords0x88;

pub type Direction = u8;

/// Offset added to every direction so negative steps fit in a byte.
/// Direction bytes live in a fixed modular range around this bias; the
/// wrapping operations below are deliberate, not incidental overflow.
pub const DIRECTION_BIAS: u8 = 0x77;

/// Toward increasing rank; the Light pawns' forward direction.
pub const UP: Direction = DIRECTION_BIAS + 0x10;
/// Toward decreasing rank; the Dark pawns' forward direction.
pub const DOWN: Direction = DIRECTION_BIAS - 0x10;
pub const RIGHT: Direction = DIRECTION_BIAS + 0x01;
pub const LEFT: Direction = DIRECTION_BIAS - 0x01;

/// Composes two directions into a single step, e.g. `combine(UP, RIGHT)`
/// for a diagonal or `combine(combine(UP, RIGHT), RIGHT)` for a knight
/// jump. Associative for every compound this engine uses.
#[inline]
pub const fn combine(first: Direction, second: Direction) -> Direction {
    first.wrapping_add(second).wrapping_sub(DIRECTION_BIAS)
}

/// Moves a coordinate one step along a direction. The result may be
/// off-board and must be checked by the caller.
#[inline]
pub const fn apply(coords: Coords0x88, direction: Direction) -> Coords0x88 {
    coords.wrapping_add(direction).wrapping_sub(DIRECTION_BIAS)
}

pub const UP_RIGHT: Direction = combine(UP, RIGHT);
pub const UP_LEFT: Direction = combine(UP, LEFT);
pub const DOWN_RIGHT: Direction = combine(DOWN, RIGHT);
pub const DOWN_LEFT: Direction = combine(DOWN, LEFT);

pub const ROOK_DIRECTIONS: [Direction; 4] = [UP, DOWN, RIGHT, LEFT];

pub const BISHOP_DIRECTIONS: [Direction; 4] = [UP_RIGHT, DOWN_RIGHT, UP_LEFT, DOWN_LEFT];

pub const QUEEN_DIRECTIONS: [Direction; 8] = [
    UP, DOWN, RIGHT, LEFT, UP_RIGHT, DOWN_RIGHT, UP_LEFT, DOWN_LEFT,
];

/// The king shares the queen's eight unit steps, tested once each rather
/// than ray-cast.
pub const KING_DIRECTIONS: [Direction; 8] = QUEEN_DIRECTIONS;

pub const KNIGHT_DIRECTIONS: [Direction; 8] = [
    combine(combine(UP, RIGHT), RIGHT),
    combine(combine(DOWN, RIGHT), RIGHT),
    combine(combine(UP, LEFT), LEFT),
    combine(combine(DOWN, LEFT), LEFT),
    combine(combine(RIGHT, UP), UP),
    combine(combine(LEFT, UP), UP),
    combine(combine(RIGHT, DOWN), DOWN),
    combine(combine(LEFT, DOWN), DOWN),
];
