//! Crate root module declarations for the Quince Chess board core.
//!
//! This file exposes the board primitives (coordinates, directions, pieces,
//! the 128-slot register), the persistent game state chain, and pseudo-legal
//! move generation so rules layers, search layers, and external tooling can
//! import stable module paths.

pub mod errors;

pub mod board {
    pub mod coords;
    pub mod direction;
    pub mod piece;
    pub mod register;
}

pub mod game_state {
    pub mod chess_move;
    pub mod game_state;
}

pub mod move_generation {
    pub mod move_generator;
    pub mod moves_bishop;
    pub mod moves_king;
    pub mod moves_knight;
    pub mod moves_pawn;
    pub mod moves_queen;
    pub mod moves_rook;
    pub mod shared;
}

pub mod utils {
    pub mod render_game_state;
}
