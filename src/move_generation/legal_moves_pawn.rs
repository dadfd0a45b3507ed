//! Pawn move generation: single and double pushes plus diagonal captures.
//!
//! A pinned pawn keeps only the moves whose step lies on the pin line, so it
//! may still push along a file pin or capture the pinner along a diagonal pin.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::{Direction, Piece, Square};
use crate::move_generation::legal_move_shared::{allowed_by_pin, push_move};
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::{pawn_capture_directions, pawn_forward};

pub fn generate_pawn_moves(
    board: &Board,
    from: Square,
    pawn: Piece,
    pin: Option<Direction>,
    out: &mut Vec<Move>,
) {
    let forward = pawn_forward(pawn.color);

    if allowed_by_pin(pin, forward) {
        if let Some(one_step) = from.offset(forward, 1).filter(|to| board.is_empty(*to)) {
            push_move(board, from, one_step, pawn, out);

            if from.row() == pawn_start_row(pawn.color) {
                if let Some(two_step) = from.offset(forward, 2).filter(|to| board.is_empty(*to)) {
                    push_move(board, from, two_step, pawn, out);
                }
            }
        }
    }

    let enemy = pawn.color.opposite();
    for capture in pawn_capture_directions(pawn.color) {
        if !allowed_by_pin(pin, capture) {
            continue;
        }
        let Some(to) = from.offset(capture, 1) else {
            continue;
        };
        if board.color_at(to) == Some(enemy) {
            push_move(board, from, to, pawn, out);
        }
    }
}
