//! King step offsets.

use crate::game_state::chess_types::{Direction, Square};

pub const KING_OFFSETS: [Direction; 8] = [
    Direction::new(-1, -1),
    Direction::new(-1, 0),
    Direction::new(-1, 1),
    Direction::new(0, -1),
    Direction::new(0, 1),
    Direction::new(1, -1),
    Direction::new(1, 0),
    Direction::new(1, 1),
];

#[inline]
pub fn king_targets(from: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |offset| from.offset(offset, 1))
}
