//! Rook move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Direction, Piece, Square};
use crate::move_generation::legal_move_shared::generate_slider_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(
    board: &Board,
    from: Square,
    rook: Piece,
    pin: Option<Direction>,
    out: &mut Vec<Move>,
) {
    generate_slider_moves(board, from, rook, &ROOK_DIRECTIONS, pin, out);
}
