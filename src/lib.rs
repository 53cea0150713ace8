//! Crate root for the tilechess rules engine.
//!
//! Exposes the board model, legal move generation, the player aggregate,
//! minimax search, computer players, the game record and FEN/rendering
//! helpers so the binary, tests and benches share stable module paths.

pub mod config;
pub mod errors;

pub mod board {
    pub mod board;
    pub mod board_utils;
    pub mod chess_rules;
    pub mod piece;
    pub mod tile;
}

pub mod moves {
    pub mod chess_move;
    pub mod notation;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod player {
    pub mod player;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod game {
    pub mod game;
    pub mod game_status;
    pub mod move_history;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_board;
}
