//! Pseudo-legal move enumeration.
//!
//! Walks the board in increasing coordinate order and dispatches each piece
//! of the side to move to its generator. Results respect board edges and
//! occupancy only; whether a move leaves the mover's own king exposed is a
//! rules-layer question, answered elsewhere.

use crate::board::coords::{self, Coords0x88, SCAN_END};
use crate::board::piece::{PieceKind, PieceRecord};
use crate::game_state::chess_move::ChessMove;
use crate::game_state::game_state::GameState;
use crate::move_generation::moves_bishop::generate_bishop_moves;
use crate::move_generation::moves_king::generate_king_moves;
use crate::move_generation::moves_knight::generate_knight_moves;
use crate::move_generation::moves_pawn::generate_pawn_moves;
use crate::move_generation::moves_queen::generate_queen_moves;
use crate::move_generation::moves_rook::generate_rook_moves;

/// Every pseudo-legal move for the side to move, in board-scan order then
/// per-piece direction-list order. Never fails; an empty result is a valid
/// outcome awaiting external mate/stalemate adjudication.
pub fn available_moves(game_state: &GameState) -> Vec<ChessMove> {
    let mut out = Vec::new();
    for from in 0..SCAN_END {
        if coords::off_the_board(from) {
            continue;
        }
        let Some(piece) = game_state.cell(from) else {
            continue;
        };
        if piece.color != game_state.side_to_move() {
            continue;
        }
        generate_piece_moves(game_state, piece, from, &mut out);
    }
    out
}

fn generate_piece_moves(
    game_state: &GameState,
    piece: PieceRecord,
    from: Coords0x88,
    out: &mut Vec<ChessMove>,
) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, piece, from, out),
        PieceKind::Knight => generate_knight_moves(game_state, piece, from, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, piece, from, out),
        PieceKind::Rook => generate_rook_moves(game_state, piece, from, out),
        PieceKind::Queen => generate_queen_moves(game_state, piece, from, out),
        PieceKind::King => generate_king_moves(game_state, piece, from, out),
    }
}
