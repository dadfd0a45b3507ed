//! Canonical chess-rule constants.
//!
//! Starting layout (as a grid and as FEN), home and promotion rows, and the
//! fixed promotion choice.

use crate::game_state::chess_types::PieceKind::{
    Bishop as B, King as K, Knight as N, Pawn as P, Queen as Q, Rook as R,
};
use crate::game_state::chess_types::{Color, Piece, PieceKind};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Promotion always yields a queen.
pub const PROMOTION_KIND: PieceKind = PieceKind::Queen;

const fn w(kind: PieceKind) -> Option<Piece> {
    Some(Piece::new(Color::White, kind))
}

const fn b(kind: PieceKind) -> Option<Piece> {
    Some(Piece::new(Color::Black, kind))
}

/// Row 0 is rank 8 (black's back rank), row 7 is rank 1.
pub const INITIAL_LAYOUT: [[Option<Piece>; 8]; 8] = [
    [b(R), b(N), b(B), b(Q), b(K), b(B), b(N), b(R)],
    [b(P), b(P), b(P), b(P), b(P), b(P), b(P), b(P)],
    [None; 8],
    [None; 8],
    [None; 8],
    [None; 8],
    [w(P), w(P), w(P), w(P), w(P), w(P), w(P), w(P)],
    [w(R), w(N), w(B), w(Q), w(K), w(B), w(N), w(R)],
];

/// Row from which a pawn of `color` may advance two squares.
#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row on which a pawn of `color` promotes.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}
