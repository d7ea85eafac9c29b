//! Validation and stepping helpers shared by every piece generator.

use crate::board::coords::{self, Coords0x88};
use crate::board::direction::{self, Direction};
use crate::board::piece::PieceRecord;
use crate::game_state::chess_move::{ChessMove, MoveStage};
use crate::game_state::game_state::GameState;

/// Maximum ray length on an 8x8 board.
const RAY_LIMIT: u8 = 7;

/// Occupancy/board-edge validation: the destination must be on-board and
/// either empty or holding an enemy piece. A composite move's second stage
/// is held to the same rule. King safety is out of scope here.
pub fn move_is_valid(game_state: &GameState, chess_move: &ChessMove) -> bool {
    stage_is_valid(game_state, &chess_move.first)
        && chess_move
            .second
            .as_ref()
            .map_or(true, |second| stage_is_valid(game_state, second))
}

fn stage_is_valid(game_state: &GameState, stage: &MoveStage) -> bool {
    if coords::off_the_board(stage.to) {
        return false;
    }
    match game_state.cell(stage.to) {
        Some(occupant) => occupant.color != stage.piece.color,
        None => true,
    }
}

/// One leap along `direction`, kept when the validator accepts it.
pub fn push_step(
    game_state: &GameState,
    piece: PieceRecord,
    from: Coords0x88,
    step: Direction,
    out: &mut Vec<ChessMove>,
) {
    let candidate = ChessMove::single(MoveStage::new(piece, from, direction::apply(from, step)));
    if move_is_valid(game_state, &candidate) {
        out.push(candidate);
    }
}

/// One sliding ray: walks `direction` until the board edge or a blocker.
/// An enemy blocker's square is kept as a capture before the ray stops; an
/// own-colour blocker stops the ray without being kept.
pub fn push_ray(
    game_state: &GameState,
    piece: PieceRecord,
    from: Coords0x88,
    step: Direction,
    out: &mut Vec<ChessMove>,
) {
    let mut to = from;
    for _ in 0..RAY_LIMIT {
        to = direction::apply(to, step);
        if coords::off_the_board(to) {
            break;
        }
        match game_state.cell(to) {
            Some(occupant) => {
                if occupant.color != piece.color {
                    out.push(ChessMove::single(MoveStage::new(piece, from, to)));
                }
                break;
            }
            None => out.push(ChessMove::single(MoveStage::new(piece, from, to))),
        }
    }
}
