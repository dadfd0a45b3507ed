//! Make/unmake on the live game state.
//!
//! `apply_move` trusts its input: the move must come from the latest legal
//! move list for this state. `undo_last` is its exact inverse for every field
//! except the cached king scan, which the next legal-move request recomputes.

use log::debug;

use crate::game_state::chess_rules::PROMOTION_KIND;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

pub fn apply_move(game_state: &mut GameState, mv: Move) {
    let moved = mv.moved_piece();

    game_state.board.set(mv.to(), Some(moved));
    game_state.board.set(mv.from(), None);

    if mv.is_promotion() {
        game_state
            .board
            .set(mv.to(), Some(Piece::new(moved.color, PROMOTION_KIND)));
    }

    if moved.kind == PieceKind::King {
        game_state.set_king_square(moved.color, mv.to());
    }

    if moved.color == Color::Black {
        game_state.fullmove_number += 1;
    }

    game_state.move_log.push(mv);
    game_state.side_to_move = game_state.side_to_move.opposite();

    debug!("applied {mv} ({moved}), {} plies in log", game_state.move_log.len());
}

/// Reverts the most recent move. Returns `None` (and changes nothing) when the
/// log is empty.
pub fn undo_last(game_state: &mut GameState) -> Option<Move> {
    let mv = game_state.move_log.pop()?;
    let moved = mv.moved_piece();

    game_state.board.set(mv.from(), Some(moved));
    game_state.board.set(mv.to(), mv.captured_piece());

    if moved.kind == PieceKind::King {
        game_state.set_king_square(moved.color, mv.from());
    }

    if moved.color == Color::Black {
        game_state.fullmove_number -= 1;
    }

    game_state.side_to_move = game_state.side_to_move.opposite();

    debug!("undid {mv} ({moved}), {} plies in log", game_state.move_log.len());
    Some(mv)
}

#[cfg(test)]
mod tests {
    use super::{apply_move, undo_last};
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn apply_moves_piece_and_flips_side() {
        let mut game = GameState::new_game();
        let mv = game
            .find_legal_move(Square::new(6, 4), Square::new(4, 4))
            .expect("e2e4 is legal");

        apply_move(&mut game, mv);
        assert_eq!(game.side_to_move(), Color::Black);
        assert!(game.board().is_empty(Square::new(6, 4)));
        assert_eq!(
            game.board().get(Square::new(4, 4)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(game.move_log(), &[mv]);
    }

    #[test]
    fn undo_on_empty_log_is_a_no_op() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert!(undo_last(&mut game).is_none());
        assert_eq!(game.board(), before.board());
        assert_eq!(game.side_to_move(), before.side_to_move());
        assert_eq!(game.fullmove_number(), 1);
    }

    #[test]
    fn king_move_updates_and_restores_king_square() {
        let mut game = parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mv = game
            .find_legal_move(Square::new(7, 4), Square::new(6, 3))
            .expect("Kd2 is legal");

        apply_move(&mut game, mv);
        assert_eq!(game.king_square(Color::White), Square::new(6, 3));
        undo_last(&mut game);
        assert_eq!(game.king_square(Color::White), Square::new(7, 4));
    }

    #[test]
    fn promotion_yields_queen_and_undo_restores_pawn() {
        let mut game = parse_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let capture = game
            .find_legal_move(Square::new(1, 0), Square::new(0, 1))
            .expect("axb8 is legal");
        assert!(capture.is_promotion());

        apply_move(&mut game, capture);
        assert_eq!(
            game.board().get(Square::new(0, 1)),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );

        undo_last(&mut game);
        assert_eq!(
            game.board().get(Square::new(1, 0)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(
            game.board().get(Square::new(0, 1)),
            Some(Piece::new(Color::Black, PieceKind::Knight))
        );
    }

    #[test]
    fn fullmove_number_advances_after_black_moves() {
        let mut game = GameState::new_game();
        for (from, to) in [((6, 4), (4, 4)), ((1, 4), (3, 4))] {
            let mv = game
                .find_legal_move(Square::new(from.0, from.1), Square::new(to.0, to.1))
                .expect("opening move is legal");
            apply_move(&mut game, mv);
        }
        assert_eq!(game.fullmove_number(), 2);
        undo_last(&mut game);
        assert_eq!(game.fullmove_number(), 1);
    }

    #[test]
    fn fullmove_number_round_trips_at_largest_fen_value() {
        let mut game = parse_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 65535").expect("FEN should parse");
        let mv = game.legal_moves()[0];

        apply_move(&mut game, mv);
        assert_eq!(game.fullmove_number(), 65_536);
        assert!(game.get_fen().ends_with(" 0 65536"));

        undo_last(&mut game);
        assert_eq!(game.fullmove_number(), 65_535);
        assert_eq!(game.get_fen(), "4k3/8/8/8/8/8/8/4K3 b - - 0 65535");
    }
}
