use crate::board::coords::Coords0x88;
use crate::board::direction::QUEEN_DIRECTIONS;
use crate::board::piece::PieceRecord;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::game_state::GameState;
use crate::move_generation::shared::push_ray;

pub fn generate_queen_moves(
    game_state: &GameState,
    piece: PieceRecord,
    from: Coords0x88,
    out: &mut Vec<ChessMove>,
) {
    for step in QUEEN_DIRECTIONS {
        push_ray(game_state, piece, from, step, out);
    }
}
