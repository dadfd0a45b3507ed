use crate::game_state::chess_types::{Direction, Square};

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    Direction::new(-2, -1),
    Direction::new(-2, 1),
    Direction::new(-1, -2),
    Direction::new(-1, 2),
    Direction::new(1, -2),
    Direction::new(1, 2),
    Direction::new(2, -1),
    Direction::new(2, 1),
];

/// On-board knight jump targets from `from`, in `KNIGHT_OFFSETS` order.
#[inline]
pub fn knight_targets(from: Square) -> impl Iterator<Item = (Direction, Square)> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |offset| from.offset(offset, 1).map(|to| (offset, to)))
}
