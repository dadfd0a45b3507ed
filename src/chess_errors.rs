//! Errors used by the fallible input surfaces of the crate.
//!
//! Move generation itself is infallible on a consistent position. Parsing
//! (FEN, algebraic squares, long algebraic moves) and matching user input
//! against the legal move list report failures through `ChessError`.

use thiserror::Error;

use crate::game_state::chess_types::Color;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A square string such as `"e4"` could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicSquare(String),

    /// A move string such as `"e2e4"` could not be parsed.
    #[error("invalid long algebraic move: {0}")]
    InvalidLongAlgebraic(String),

    #[error("invalid FEN ({reason}): {fen}")]
    InvalidFen { fen: String, reason: String },

    /// The position does not hold exactly one king of the given color.
    #[error("position must contain exactly one {color} king, found {count}")]
    KingCount { color: Color, count: usize },

    /// Parsed input names a move that is not in the current legal move list.
    #[error("move {0} is not legal in this position")]
    IllegalMove(String),
}
