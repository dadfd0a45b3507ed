//! Reduces pseudo-legal moves using the check records of a king scan.
//!
//! Pins and king safety are already enforced during generation, so this stage
//! only deals with check: with one checker a non-king move must capture it or
//! land between it and the king; with two checkers only the king may move.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::move_generation::legal_move_checks::CheckRecord;
use crate::moves::move_descriptions::Move;

pub fn filter_by_check(
    mut moves: Vec<Move>,
    checks: &[CheckRecord],
    king_square: Square,
) -> Vec<Move> {
    match checks {
        [] => moves,
        [check] => {
            let resolving = resolving_squares(check, king_square);
            moves.retain(|mv| mv.is_king_move() || resolving.contains(&mv.to()));
            moves
        }
        _ => {
            moves.retain(Move::is_king_move);
            moves
        }
    }
}

/// Squares where a non-king piece resolves a single check: the knight itself,
/// or the ray from the king up to and including any other checker.
pub fn resolving_squares(check: &CheckRecord, king_square: Square) -> Vec<Square> {
    if check.checker == PieceKind::Knight {
        return vec![check.square];
    }

    let mut squares = Vec::with_capacity(7);
    for distance in 1..8 {
        let Some(square) = king_square.offset(check.direction, distance) else {
            break;
        };
        squares.push(square);
        if square == check.square {
            break;
        }
    }
    squares
}
