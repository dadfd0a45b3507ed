//! Queen directions and the shared ray walker.
//!
//! The queen set is the rook set followed by the bishop set. The check and pin
//! scanner walks rays in this order.

use crate::game_state::chess_types::{Direction, Square};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub const QUEEN_DIRECTIONS: [Direction; 8] = generate_queen_directions();

const fn generate_queen_directions() -> [Direction; 8] {
    let mut table = [Direction::new(0, 0); 8];
    let mut i = 0usize;

    while i < 4 {
        table[i] = ROOK_DIRECTIONS[i];
        table[i + 4] = BISHOP_DIRECTIONS[i];
        i += 1;
    }

    table
}

/// Squares from `from` (exclusive) to the board edge along `direction`.
#[inline]
pub fn ray_squares(from: Square, direction: Direction) -> impl Iterator<Item = Square> {
    (1..8i8).map_while(move |distance| from.offset(direction, distance))
}
