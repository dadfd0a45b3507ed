//! Core value types shared by the board, scanner, and move generators.
//!
//! Squares are `(row, col)` pairs on an 8x8 grid. Row 0 is black's back rank
//! (rank 8) and row 7 is white's back rank (rank 1); column 0 is the a-file.

use std::fmt;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Single-letter code used in piece codes and FEN (`w` / `b`).
    #[inline]
    pub const fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind. Move generation dispatches on this with an exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Upper-case letter used in piece codes (`P`, `N`, `B`, `R`, `Q`, `K`).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece. Empty squares are represented as `Option<Piece>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN letter: upper case for white, lower case for black.
    pub fn fen_char(self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };
        PieceKind::from_letter(ch).map(|kind| Piece::new(color, kind))
    }
}

impl fmt::Display for Piece {
    /// Two-character code such as `wP` or `bK`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.code(), self.kind.letter())
    }
}

/// A step vector `(d_row, d_col)` used for rays, pins, and checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    #[inline]
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        Self::new(-self.d_row, -self.d_col)
    }

    #[inline]
    pub const fn is_orthogonal(self) -> bool {
        (self.d_row == 0) != (self.d_col == 0)
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.d_row != 0 && self.d_row.abs() == self.d_col.abs()
    }

    /// True when `other` lies on the same line as `self` (same or opposite way).
    #[inline]
    pub fn is_aligned_with(self, other: Direction) -> bool {
        other == self || other == self.opposite()
    }
}

/// A board square. Construction panics on coordinates outside `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square coordinates out of range");
        Self { row, col }
    }

    #[inline]
    pub const fn try_new(row: i8, col: i8) -> Option<Self> {
        if row < 0 || row > 7 || col < 0 || col > 7 {
            None
        } else {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The square `distance` steps away along `direction`, if it is on the board.
    #[inline]
    pub const fn offset(self, direction: Direction, distance: i8) -> Option<Self> {
        Self::try_new(
            self.row as i8 + direction.d_row * distance,
            self.col as i8 + direction.d_col * distance,
        )
    }

    /// All 64 squares in row-major order (a8, b8, ..., h1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    /// Algebraic form, e.g. row 6 col 4 is `e2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'8' - self.row);
        write!(f, "{file}{rank}")
    }
}

/// Compact castling rights bitmask. Carried for FEN round-trips only.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
