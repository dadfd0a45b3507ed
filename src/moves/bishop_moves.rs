//! Bishop movement directions.

use crate::game_state::chess_types::Direction;

pub const BISHOP_DIRECTIONS: [Direction; 4] = [
    Direction::new(-1, -1),
    Direction::new(1, 1),
    Direction::new(1, -1),
    Direction::new(-1, 1),
];
