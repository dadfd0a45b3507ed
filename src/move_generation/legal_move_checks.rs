//! Check and pin detection by ray-casting from the king.
//!
//! `scan_king` walks the eight queen rays outward from a king square and tests
//! the eight knight jumps. It reports every checking piece and every friendly
//! piece pinned against the king. King-move safety is answered on an as-if
//! copy of the board so the live board is never touched.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Direction, Piece, PieceKind, Square};
use crate::move_generation::legal_move_shared::{PinMap, PinRecord};
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attacks_along;
use crate::moves::queen_moves::{ray_squares, QUEEN_DIRECTIONS};

/// An enemy piece giving check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckRecord {
    pub square: Square,
    /// Ray from the king to the checker, or the knight offset for knights.
    pub direction: Direction,
    pub checker: PieceKind,
}

/// Result of scanning from one king square.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KingScan {
    pub in_check: bool,
    pub pins: PinMap,
    pub checks: Vec<CheckRecord>,
}

impl KingScan {
    #[inline]
    pub fn is_double_check(&self) -> bool {
        self.checks.len() >= 2
    }
}

pub fn scan_king(board: &Board, king_square: Square, friendly: Color) -> KingScan {
    let enemy = friendly.opposite();
    let mut scan = KingScan::default();

    for direction in QUEEN_DIRECTIONS {
        let mut candidate_pin: Option<Square> = None;

        for (distance, square) in (1..).zip(ray_squares(king_square, direction)) {
            let Some(piece) = board.get(square) else {
                continue;
            };

            if piece.color == friendly {
                if piece.kind == PieceKind::King {
                    continue;
                }
                if candidate_pin.is_some() {
                    // Two friendly pieces: nothing behind them matters.
                    break;
                }
                candidate_pin = Some(square);
                continue;
            }

            if attacks_along_ray(piece, direction, distance) {
                match candidate_pin {
                    None => scan.checks.push(CheckRecord {
                        square,
                        direction,
                        checker: piece.kind,
                    }),
                    Some(pinned) => scan.pins.insert(PinRecord {
                        square: pinned,
                        direction,
                    }),
                }
            }
            break;
        }
    }

    let enemy_knight = Piece::new(enemy, PieceKind::Knight);
    for (offset, square) in knight_targets(king_square) {
        if board.get(square) == Some(enemy_knight) {
            scan.checks.push(CheckRecord {
                square,
                direction: offset,
                checker: PieceKind::Knight,
            });
        }
    }

    scan.in_check = !scan.checks.is_empty();
    scan
}

/// Whether `piece`, first met `distance` squares from the king along
/// `direction`, attacks the king down that ray.
fn attacks_along_ray(piece: Piece, direction: Direction, distance: u8) -> bool {
    match piece.kind {
        PieceKind::Rook => direction.is_orthogonal(),
        PieceKind::Bishop => direction.is_diagonal(),
        PieceKind::Queen => true,
        PieceKind::Pawn => distance == 1 && pawn_attacks_along(piece.color, direction),
        PieceKind::King => distance == 1,
        PieceKind::Knight => false,
    }
}

#[inline]
pub fn is_king_in_check(board: &Board, king_square: Square, color: Color) -> bool {
    scan_king(board, king_square, color).in_check
}

/// Whether the king of `color` on `from` would be safe on `to`. Evaluated on a
/// copy of the board with the king relocated (capturing whatever stood on `to`).
pub fn king_move_is_safe(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let mut as_if = *board;
    let king = as_if.get(from);
    as_if.set(from, None);
    as_if.set(to, king);
    !is_king_in_check(&as_if, to, color)
}
