//! Long algebraic move text (`e2e4`, `e7e8q`).
//!
//! Parsed moves are resolved against the legal move list, so the returned
//! `Move` always carries the board snapshot of the current position.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::PROMOTION_KIND;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::algebraic_to_square;

/// `from` and `to` in algebraic form, plus the promotion letter when the move
/// promotes.
pub fn move_to_long_algebraic(mv: &Move) -> String {
    let mut out = mv.to_notation();
    if mv.is_promotion() {
        out.push(PROMOTION_KIND.letter().to_ascii_lowercase());
    }
    out
}

/// Splits move text into its two squares. A fifth character must name the
/// only supported promotion piece.
pub fn parse_long_algebraic(long_algebraic: &str) -> ChessResult<(Square, Square)> {
    let invalid = || ChessError::InvalidLongAlgebraic(long_algebraic.to_owned());

    if !long_algebraic.is_ascii() {
        return Err(invalid());
    }

    let (squares, promotion) = match long_algebraic.len() {
        4 => (long_algebraic, None),
        5 => (&long_algebraic[..4], long_algebraic.chars().nth(4)),
        _ => return Err(invalid()),
    };

    if let Some(letter) = promotion {
        if PieceKind::from_letter(letter) != Some(PROMOTION_KIND) {
            return Err(invalid());
        }
    }

    let from = algebraic_to_square(&squares[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&squares[2..4]).map_err(|_| invalid())?;
    Ok((from, to))
}

/// Parses `long_algebraic` and returns the matching legal move.
pub fn long_algebraic_to_move(
    long_algebraic: &str,
    game_state: &mut GameState,
) -> ChessResult<Move> {
    let (from, to) = parse_long_algebraic(long_algebraic)?;
    let mv = game_state
        .find_legal_move(from, to)
        .ok_or_else(|| ChessError::IllegalMove(long_algebraic.to_owned()))?;

    // A promotion letter on a non-promoting move is rejected.
    if long_algebraic.len() == 5 && !mv.is_promotion() {
        return Err(ChessError::InvalidLongAlgebraic(long_algebraic.to_owned()));
    }

    Ok(mv)
}
