//! Pawn step and capture geometry per color.

use crate::game_state::chess_types::{Color, Direction};

/// Single forward step: white moves toward row 0, black toward row 7.
#[inline]
pub const fn pawn_forward(color: Color) -> Direction {
    match color {
        Color::White => Direction::new(-1, 0),
        Color::Black => Direction::new(1, 0),
    }
}

/// Diagonal capture steps for a pawn of `color`, queenside first.
#[inline]
pub const fn pawn_capture_directions(color: Color) -> [Direction; 2] {
    let forward = pawn_forward(color).d_row;
    [Direction::new(forward, -1), Direction::new(forward, 1)]
}

/// True when an enemy pawn of `pawn_color`, standing one step from a king
/// along `king_to_pawn`, attacks that king.
#[inline]
pub fn pawn_attacks_along(pawn_color: Color, king_to_pawn: Direction) -> bool {
    pawn_capture_directions(pawn_color)
        .iter()
        .any(|capture| *capture == king_to_pawn.opposite())
}
