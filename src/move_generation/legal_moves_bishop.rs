//! Bishop move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Direction, Piece, Square};
use crate::move_generation::legal_move_shared::generate_slider_moves;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(
    board: &Board,
    from: Square,
    bishop: Piece,
    pin: Option<Direction>,
    out: &mut Vec<Move>,
) {
    generate_slider_moves(board, from, bishop, &BISHOP_DIRECTIONS, pin, out);
}
