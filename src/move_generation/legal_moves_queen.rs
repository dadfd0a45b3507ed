use crate::game_state::board::Board;
use crate::game_state::chess_types::{Direction, Piece, Square};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::Move;

/// Rook moves followed by bishop moves from the same square.
pub fn generate_queen_moves(
    board: &Board,
    from: Square,
    queen: Piece,
    pin: Option<Direction>,
    out: &mut Vec<Move>,
) {
    generate_rook_moves(board, from, queen, pin, out);
    generate_bishop_moves(board, from, queen, pin, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Direction, Piece, PieceKind, Square};

    const WHITE_QUEEN: Piece = Piece::new(Color::White, PieceKind::Queen);

    #[test]
    fn queen_on_d4_reaches_twenty_seven_squares() {
        let mut board = Board::empty();
        let d4 = Square::new(4, 3);
        board.set(d4, Some(WHITE_QUEEN));
        let mut out = Vec::new();
        generate_queen_moves(&board, d4, WHITE_QUEEN, None, &mut out);
        assert_eq!(out.len(), 27);
        // Orthogonal moves come first.
        assert_eq!(out[0].to(), Square::new(3, 3));
    }

    #[test]
    fn pinned_queen_keeps_only_the_pin_line() {
        let mut board = Board::empty();
        let d4 = Square::new(4, 3);
        board.set(d4, Some(WHITE_QUEEN));
        let mut out = Vec::new();
        generate_queen_moves(&board, d4, WHITE_QUEEN, Some(Direction::new(0, 1)), &mut out);
        assert_eq!(out.len(), 7);
        assert!(out.iter().all(|mv| mv.to().row() == 4));
    }
}
