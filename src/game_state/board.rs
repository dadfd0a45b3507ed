//! 8x8 mailbox board.
//!
//! Pure data: indexed access by `Square`, no rules. The game state owns the
//! only live board; moves and the king-safety scanner work on copies.

use crate::game_state::chess_rules::INITIAL_LAYOUT;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting layout, black on rows 0-1 and white on rows 6-7.
    pub const fn standard() -> Self {
        Self {
            squares: INITIAL_LAYOUT,
        }
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Color of the piece on `square`, if any.
    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|piece| piece.color)
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    /// Every square holding the king of `color`.
    pub fn king_squares(&self, color: Color) -> Vec<Square> {
        self.pieces()
            .filter(|(_, piece)| *piece == Piece::new(color, PieceKind::King))
            .map(|(square, _)| square)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn standard_board_places_kings_on_e_file() {
        let board = Board::standard();
        assert_eq!(board.king_squares(Color::White), vec![Square::new(7, 4)]);
        assert_eq!(board.king_squares(Color::Black), vec![Square::new(0, 4)]);
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn set_and_get_agree() {
        let mut board = Board::empty();
        let d4 = Square::new(4, 3);
        board.set(d4, Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert_eq!(board.get(d4), Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert_eq!(board.color_at(d4), Some(Color::Black));
        board.set(d4, None);
        assert!(board.is_empty(d4));
    }
}
