//! GameState-to-FEN writer.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// The halfmove clock is not tracked and is always written as `0`.
pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state);
    let castling = generate_castling_field(game_state.castling_rights());
    let en_passant = game_state
        .en_passant_target()
        .map_or_else(|| "-".to_owned(), |square| square.to_string());

    format!(
        "{} {} {} {} 0 {}",
        board,
        game_state.side_to_move().code(),
        castling,
        en_passant,
        game_state.fullmove_number()
    )
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            match game_state.board().get(Square::new(row, col)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if (rights & CASTLE_WHITE_KINGSIDE) != 0 {
        out.push('K');
    }
    if (rights & CASTLE_WHITE_QUEENSIDE) != 0 {
        out.push('Q');
    }
    if (rights & CASTLE_BLACK_KINGSIDE) != 0 {
        out.push('k');
    }
    if (rights & CASTLE_BLACK_QUEENSIDE) != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::Square;
    use crate::game_state::game_state::GameState;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn new_game_writes_starting_fen() {
        assert_eq!(generate_fen(&GameState::new_game()), STARTING_POSITION_FEN);
    }

    #[test]
    fn parsed_position_is_written_back() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let game_state = parse_fen(fen).expect("FEN should parse");
        assert_eq!(game_state.get_fen(), fen);

        let with_target = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 30";
        assert_eq!(parse_fen(with_target).expect("FEN should parse").get_fen(), with_target);
    }

    #[test]
    fn fen_follows_moves() {
        let mut game_state = GameState::new_game();
        let mv = game_state
            .find_legal_move(Square::new(6, 4), Square::new(4, 4))
            .expect("e2e4 is legal");
        game_state.apply_move(mv);
        assert_eq!(
            game_state.get_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
        );
    }
}
