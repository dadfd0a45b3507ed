//! Full legal move generation pipeline.
//!
//! Scans the side to move's king for checks and pins, runs the per-piece
//! generators over every friendly square in row-major order, and filters the
//! result against the checks. In double check only the king is generated.

use log::trace;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::move_generation::legal_move_checks::{scan_king, KingScan};
use crate::move_generation::legal_move_filter::filter_by_check;
use crate::move_generation::legal_move_shared::PinMap;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::Move;

/// Legal moves plus the scan they were derived from.
#[derive(Debug, Clone)]
pub struct LegalMoves {
    pub moves: Vec<Move>,
    pub scan: KingScan,
}

pub fn generate_legal_moves(board: &Board, side_to_move: Color, king_square: Square) -> LegalMoves {
    let scan = scan_king(board, king_square, side_to_move);

    let moves = if scan.is_double_check() {
        let mut king_only = Vec::with_capacity(8);
        if let Some(king) = board.get(king_square) {
            generate_king_moves(board, king_square, king, &mut king_only);
        }
        king_only
    } else {
        let pseudo = generate_pseudo_legal_moves(board, side_to_move, &scan.pins);
        filter_by_check(pseudo, &scan.checks, king_square)
    };

    trace!(
        "{side_to_move} to move: {} checks, {} pins, {} legal moves",
        scan.checks.len(),
        scan.pins.len(),
        moves.len()
    );

    LegalMoves { moves, scan }
}

/// Pin-aware moves for every piece of `side_to_move`, king moves already
/// safety-checked, in row-major square order.
pub fn generate_pseudo_legal_moves(board: &Board, side_to_move: Color, pins: &PinMap) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (square, piece) in board.pieces() {
        if piece.color == side_to_move {
            generate_piece_moves(board, square, piece, pins, &mut out);
        }
    }
    out
}

pub fn generate_piece_moves(
    board: &Board,
    square: Square,
    piece: Piece,
    pins: &PinMap,
    out: &mut Vec<Move>,
) {
    let pin = pins.direction_for(square);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, square, piece, pin, out),
        PieceKind::Knight => generate_knight_moves(board, square, piece, pin, out),
        PieceKind::Bishop => generate_bishop_moves(board, square, piece, pin, out),
        PieceKind::Rook => generate_rook_moves(board, square, piece, pin, out),
        PieceKind::Queen => generate_queen_moves(board, square, piece, pin, out),
        PieceKind::King => generate_king_moves(board, square, piece, out),
    }
}

#[cfg(test)]
mod tests {
    use super::generate_legal_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::move_generation::legal_move_checks::{king_move_is_safe, scan_king};

    fn place(board: &mut Board, row: u8, col: u8, color: Color, kind: PieceKind) {
        board.set(Square::new(row, col), Some(Piece::new(color, kind)));
    }

    const E1: Square = Square::new(7, 4);

    #[test]
    fn starting_position_has_twenty_moves() {
        let legal = generate_legal_moves(&Board::standard(), Color::White, E1);
        assert_eq!(legal.moves.len(), 20);
        let pawn_moves = legal
            .moves
            .iter()
            .filter(|mv| mv.moved_piece().kind == PieceKind::Pawn)
            .count();
        assert_eq!(pawn_moves, 16);
        assert!(!legal.scan.in_check);
    }

    #[test]
    fn moves_come_out_in_row_major_order() {
        let legal = generate_legal_moves(&Board::standard(), Color::White, E1);
        let origins: Vec<Square> = legal.moves.iter().map(|mv| mv.from()).collect();
        let mut sorted = origins.clone();
        sorted.sort();
        assert_eq!(origins, sorted);
        assert_eq!(legal.moves[0].to_notation(), "a2a3");
    }

    #[test]
    fn knight_check_cannot_be_blocked() {
        let mut board = Board::empty();
        place(&mut board, 7, 4, Color::White, PieceKind::King);
        place(&mut board, 0, 0, Color::Black, PieceKind::King);
        place(&mut board, 5, 5, Color::Black, PieceKind::Knight);
        // A bishop that can capture the knight and a rook that could only "block".
        place(&mut board, 7, 7, Color::White, PieceKind::Bishop);
        place(&mut board, 3, 4, Color::White, PieceKind::Rook);

        let legal = generate_legal_moves(&board, Color::White, E1);
        assert!(legal.scan.in_check);
        for mv in &legal.moves {
            assert!(mv.is_king_move() || mv.to() == Square::new(5, 5), "unexpected {mv}");
        }
        assert!(legal.moves.iter().any(|mv| mv.to_notation() == "h1f3"));
        assert!(legal.moves.iter().all(|mv| mv.from() != Square::new(3, 4)));
    }

    #[test]
    fn single_slider_check_allows_block_capture_or_king_move() {
        let mut board = Board::empty();
        place(&mut board, 7, 4, Color::White, PieceKind::King);
        place(&mut board, 0, 0, Color::Black, PieceKind::King);
        place(&mut board, 3, 4, Color::Black, PieceKind::Rook);
        // Knight on c2 can block on e3; rook on h5 can capture on e5.
        place(&mut board, 6, 2, Color::White, PieceKind::Knight);
        place(&mut board, 3, 7, Color::White, PieceKind::Rook);

        let legal = generate_legal_moves(&board, Color::White, E1);
        let notation: Vec<String> = legal.moves.iter().map(|mv| mv.to_notation()).collect();
        assert!(notation.contains(&"h5e5".to_owned()));
        assert!(notation.contains(&"c2e3".to_owned()));
        assert!(!notation.contains(&"c2a3".to_owned()));
        for mv in &legal.moves {
            if !mv.is_king_move() {
                assert_eq!(mv.to().col(), 4, "non-king move {mv} must land on the e-file");
            }
        }
    }

    #[test]
    fn double_check_allows_only_king_moves() {
        let mut board = Board::empty();
        place(&mut board, 7, 4, Color::White, PieceKind::King);
        place(&mut board, 0, 0, Color::Black, PieceKind::King);
        place(&mut board, 0, 4, Color::Black, PieceKind::Rook);
        place(&mut board, 5, 3, Color::Black, PieceKind::Knight);
        // The queen could capture either checker, but not both.
        place(&mut board, 5, 1, Color::White, PieceKind::Queen);

        let legal = generate_legal_moves(&board, Color::White, E1);
        assert!(legal.scan.is_double_check());
        assert!(!legal.moves.is_empty());
        assert!(legal.moves.iter().all(|mv| mv.is_king_move()));

        let king_moves = crate::moves::king_moves::king_targets(E1)
            .filter(|to| board.color_at(*to) != Some(Color::White))
            .filter(|to| king_move_is_safe(&board, E1, *to, Color::White))
            .count();
        assert_eq!(legal.moves.len(), king_moves);
    }

    #[test]
    fn pinned_rook_moves_only_along_the_file() {
        let mut board = Board::empty();
        place(&mut board, 7, 4, Color::White, PieceKind::King);
        place(&mut board, 0, 0, Color::Black, PieceKind::King);
        place(&mut board, 5, 4, Color::White, PieceKind::Rook);
        place(&mut board, 1, 4, Color::Black, PieceKind::Rook);

        let legal = generate_legal_moves(&board, Color::White, E1);
        let rook_moves: Vec<String> = legal
            .moves
            .iter()
            .filter(|mv| mv.moved_piece().kind == PieceKind::Rook)
            .map(|mv| mv.to_notation())
            .collect();
        assert_eq!(rook_moves, ["e3e4", "e3e5", "e3e6", "e3e7", "e3e2"]);
    }

    #[test]
    fn every_generated_move_keeps_the_king_safe() {
        let mut board = Board::standard();
        // An undefended queen checking from f7.
        place(&mut board, 1, 5, Color::White, PieceKind::Queen);

        let black_king = Square::new(0, 4);
        let legal = generate_legal_moves(&board, Color::Black, black_king);
        assert!(legal.scan.in_check);
        let notation: Vec<String> = legal.moves.iter().map(|mv| mv.to_notation()).collect();
        assert_eq!(notation, ["e8f7"]);
        for mv in &legal.moves {
            let mut after = board;
            after.set(mv.from(), None);
            after.set(mv.to(), Some(mv.moved_piece()));
            let king = if mv.is_king_move() { mv.to() } else { black_king };
            assert!(
                !scan_king(&after, king, Color::Black).in_check,
                "{mv} leaves the king in check"
            );
        }
    }
}
