//! Rook movement directions.

use crate::game_state::chess_types::Direction;

/// Up, left, down, right (row-major coordinates: up is toward rank 8).
pub const ROOK_DIRECTIONS: [Direction; 4] = [
    Direction::new(-1, 0),
    Direction::new(0, -1),
    Direction::new(1, 0),
    Direction::new(0, 1),
];
