//! Crate root module declarations for the ray_chess move generator.
//!
//! Exposes the game state model, ray-based check and pin detection, per-piece
//! move generation, notation utilities, and a random-move engine so that the
//! terminal binary, benches, and any other consumer share stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_filter;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}

pub use chess_errors::ChessError;
pub use game_state::chess_types::{Color, Direction, Piece, PieceKind, Square};
pub use game_state::game_state::{GameState, GameStatus};
pub use moves::move_descriptions::Move;
