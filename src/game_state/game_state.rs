//! Persistent game position chain.
//!
//! `GameState` is the central model for the crate. A position is either a
//! full snapshot (a whole `PieceRegister`) or a delta: one move layered on
//! top of a shared ancestor. Applying a move allocates a single delta node
//! and never copies the board, so many hypothetical continuations share
//! memory with the line they branched from. The trade-off runs the other
//! way on reads: `cell` on a deep delta chain walks back to the nearest
//! snapshot, O(chain depth) in the worst case.
//!
//! Ancestors are held through `Arc`, never the reverse; a state does not
//! know which futures derive from it, and independent consumers may branch
//! from the same position across threads without coordination.

use std::sync::Arc;

use crate::board::coords::Coords0x88;
use crate::board::piece::{Color, PieceRecord};
use crate::board::register::PieceRegister;
use crate::game_state::chess_move::ChessMove;
use crate::move_generation::move_generator;

pub struct GameState {
    side_to_move: Color,
    repr: Repr,
}

enum Repr {
    Snapshot {
        register: PieceRegister,
        previous: Option<Arc<GameState>>,
    },
    Delta {
        chess_move: ChessMove,
        previous: Arc<GameState>,
    },
}

impl GameState {
    /// Wraps a fully populated register as a root position. The register
    /// must have its 64 off-board slots empty, which `PieceRegister`
    /// guarantees by construction.
    pub fn from_register(register: PieceRegister, side_to_move: Color) -> Arc<Self> {
        Arc::new(Self {
            side_to_move,
            repr: Repr::Snapshot {
                register,
                previous: None,
            },
        })
    }

    pub fn new_game() -> Arc<Self> {
        Self::from_register(PieceRegister::standard_arrangement(), Color::Light)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn previous_state(&self) -> Option<&Arc<GameState>> {
        match &self.repr {
            Repr::Snapshot { previous, .. } => previous.as_ref(),
            Repr::Delta { previous, .. } => Some(previous),
        }
    }

    /// Piece on `coords`, resolved through the delta chain. A delta node
    /// answers from its own move's stages — vacated origin first, then the
    /// occupied destination, first stage before second — and defers
    /// everything else to its ancestor.
    pub fn cell(&self, coords: Coords0x88) -> Option<PieceRecord> {
        let mut state = self;
        loop {
            match &state.repr {
                Repr::Snapshot { register, .. } => return register.view(coords),
                Repr::Delta {
                    chess_move,
                    previous,
                } => {
                    if chess_move.first.from == coords {
                        return None;
                    }
                    if chess_move.first.to == coords {
                        return Some(chess_move.first.piece);
                    }
                    if let Some(second) = &chess_move.second {
                        if second.from == coords {
                            return None;
                        }
                        if second.to == coords {
                            return Some(second.piece);
                        }
                    }
                    state = previous;
                }
            }
        }
    }

    /// Applies a move as a new delta node. Always succeeds: the receiver is
    /// shared as the ancestor, never mutated, and the side to move flips
    /// every ply. No legality check happens here.
    pub fn with_move(self: &Arc<Self>, chess_move: ChessMove) -> Arc<GameState> {
        Arc::new(GameState {
            side_to_move: self.side_to_move.opposite(),
            repr: Repr::Delta {
                chess_move,
                previous: Arc::clone(self),
            },
        })
    }

    /// Every pseudo-legal move for the side to move in this position.
    pub fn available_moves(&self) -> Vec<ChessMove> {
        move_generator::available_moves(self)
    }
}
