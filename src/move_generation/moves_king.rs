use crate::board::coords::Coords0x88;
use crate::board::direction::KING_DIRECTIONS;
use crate::board::piece::PieceRecord;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::game_state::GameState;
use crate::move_generation::shared::push_step;

/// Castling is a rules-layer concern and is not produced here; it would
/// arrive as a composite move with the rook in the second stage.
pub fn generate_king_moves(
    game_state: &GameState,
    piece: PieceRecord,
    from: Coords0x88,
    out: &mut Vec<ChessMove>,
) {
    for step in KING_DIRECTIONS {
        push_step(game_state, piece, from, step, out);
    }
}
