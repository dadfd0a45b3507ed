//! King move generation.
//!
//! Unlike the other pieces, each king step is checked for safety here by
//! scanning an as-if board with the king on the destination.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};
use crate::move_generation::legal_move_checks::king_move_is_safe;
use crate::move_generation::legal_move_shared::push_move;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::Move;

pub fn generate_king_moves(board: &Board, from: Square, king: Piece, out: &mut Vec<Move>) {
    for to in king_targets(from) {
        if board.color_at(to) == Some(king.color) {
            continue;
        }
        if king_move_is_safe(board, from, to, king.color) {
            push_move(board, from, to, king, out);
        }
    }
}
