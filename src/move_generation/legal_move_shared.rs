//! Helpers shared by the per-piece generators.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Direction, Piece, Square};
use crate::moves::move_descriptions::Move;

/// A friendly piece that may only move along `direction` or its opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinRecord {
    pub square: Square,
    /// Direction from the king toward the pinned piece.
    pub direction: Direction,
}

/// Read-only pin lookup, built once per legal-move request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinMap {
    records: Vec<PinRecord>,
}

impl PinMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: PinRecord) {
        self.records.push(record);
    }

    /// Pin direction for the piece on `square`, if it is pinned.
    #[inline]
    pub fn direction_for(&self, square: Square) -> Option<Direction> {
        self.records
            .iter()
            .find(|record| record.square == square)
            .map(|record| record.direction)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Whether a move stepping along `step` respects `pin`.
#[inline]
pub fn allowed_by_pin(pin: Option<Direction>, step: Direction) -> bool {
    match pin {
        Some(direction) => direction.is_aligned_with(step),
        None => true,
    }
}

/// Pushes a move from `from` to `to` of `piece`, snapshotting the board.
#[inline]
pub fn push_move(board: &Board, from: Square, to: Square, piece: Piece, out: &mut Vec<Move>) {
    out.push(Move::new(from, to, piece, board));
}

/// Walks from `from` along each direction, pushing quiet moves onto empty
/// squares and one capture onto the first enemy piece. Directions not aligned
/// with `pin` are skipped.
pub fn generate_slider_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[Direction],
    pin: Option<Direction>,
    out: &mut Vec<Move>,
) {
    for &direction in directions {
        if !allowed_by_pin(pin, direction) {
            continue;
        }

        for distance in 1..8 {
            let Some(to) = from.offset(direction, distance) else {
                break;
            };
            match board.get(to) {
                None => push_move(board, from, to, piece, out),
                Some(target) if target.color != piece.color => {
                    push_move(board, from, to, piece, out);
                    break;
                }
                Some(_) => break,
            }
        }
    }
}
