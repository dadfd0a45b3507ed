use crate::game_state::board::Board;
use crate::game_state::chess_types::{Direction, Piece, Square};
use crate::move_generation::legal_move_shared::push_move;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::Move;

/// A pinned knight has no moves: every jump leaves the pin line.
pub fn generate_knight_moves(
    board: &Board,
    from: Square,
    knight: Piece,
    pin: Option<Direction>,
    out: &mut Vec<Move>,
) {
    if pin.is_some() {
        return;
    }

    for (_, to) in knight_targets(from) {
        if board.color_at(to) != Some(knight.color) {
            push_move(board, from, to, knight, out);
        }
    }
}
