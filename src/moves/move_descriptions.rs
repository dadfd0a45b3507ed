//! The `Move` value type.
//!
//! A move snapshots what it needs from the board when it is built (moved piece,
//! captured piece, promotion flag), so it never borrows the board. Equality
//! and hashing use only the coordinate identity, which lets a UI match a
//! two-click `(from, to)` selection against the legal list.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::board::Board;
use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::{Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy)]
pub struct Move {
    from: Square,
    to: Square,
    moved_piece: Piece,
    captured_piece: Option<Piece>,
    is_promotion: bool,
    is_en_passant: bool,
    identity: u16,
}

impl Move {
    /// Builds a move of `moved_piece` using `board` as it stands before the move.
    pub fn new(from: Square, to: Square, moved_piece: Piece, board: &Board) -> Self {
        let is_promotion = moved_piece.kind == PieceKind::Pawn
            && to.row() == promotion_row(moved_piece.color);
        Self {
            from,
            to,
            moved_piece,
            captured_piece: board.get(to),
            is_promotion,
            is_en_passant: false,
            identity: move_identity(from, to),
        }
    }

    /// Builds a move of whatever stands on `from`; `None` if the square is empty.
    pub fn from_board(from: Square, to: Square, board: &Board) -> Option<Self> {
        board
            .get(from)
            .map(|moved_piece| Self::new(from, to, moved_piece, board))
    }

    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }

    #[inline]
    pub fn moved_piece(&self) -> Piece {
        self.moved_piece
    }

    #[inline]
    pub fn captured_piece(&self) -> Option<Piece> {
        self.captured_piece
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.is_promotion
    }

    /// Always false: en passant captures are not generated.
    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    #[inline]
    pub fn is_king_move(&self) -> bool {
        self.moved_piece.kind == PieceKind::King
    }

    /// `from.row*1000 + from.col*100 + to.row*10 + to.col`.
    #[inline]
    pub fn identity(&self) -> u16 {
        self.identity
    }

    /// Origin and destination in algebraic form, e.g. `e2e4`.
    pub fn to_notation(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

#[inline]
pub const fn move_identity(from: Square, to: Square) -> u16 {
    from.row() as u16 * 1000 + from.col() as u16 * 100 + to.row() as u16 * 10 + to.col() as u16
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
