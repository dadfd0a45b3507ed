//! FEN-to-GameState parser.
//!
//! Reads all six FEN fields. Castling rights and the en-passant target are
//! stored as flags only; the halfmove clock is validated and dropped. The
//! board must hold exactly one king per color.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let invalid = |reason: &str| ChessError::InvalidFen {
        fen: fen.to_owned(),
        reason: reason.to_owned(),
    };

    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part).map_err(|reason| invalid(&reason))?;
    let white_king = single_king(&board, Color::White)?;
    let black_king = single_king(&board, Color::Black)?;
    let side_to_move = parse_side_to_move(side_part).ok_or_else(|| invalid("bad side to move"))?;

    let mut game_state = GameState::from_parts(board, side_to_move, white_king, black_king);
    game_state.castling_rights =
        parse_castling_rights(castling_part).ok_or_else(|| invalid("bad castling rights"))?;
    game_state.en_passant_target = parse_en_passant_square(en_passant_part)?;

    halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid("bad halfmove clock"))?;
    // Parsed as u16, stored as u32: a black move may step past u16::MAX.
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .ok()
        .filter(|&number| number >= 1)
        .map(u32::from)
        .ok_or_else(|| invalid("bad fullmove number"))?;

    Ok(game_state)
}

fn parse_board(board_part: &str) -> Result<Board, String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("board layout must contain 8 ranks".to_owned());
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("invalid empty-square count '{ch}'"));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| format!("invalid piece character '{ch}'"))?;

            if col >= 8 {
                return Err("rank has too many files".to_owned());
            }

            board.set(Square::new(row as u8, col as u8), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err("rank does not sum to 8 files".to_owned());
        }
    }

    Ok(board)
}

fn single_king(board: &Board, color: Color) -> ChessResult<Square> {
    match board.king_squares(color).as_slice() {
        [square] => Ok(*square),
        squares => Err(ChessError::KingCount {
            color,
            count: squares.len(),
        }),
    }
}

fn parse_side_to_move(side_part: &str) -> Option<Color> {
    match side_part {
        "w" => Some(Color::White),
        "b" => Some(Color::Black),
        _ => None,
    }
}

fn parse_castling_rights(castling_part: &str) -> Option<CastlingRights> {
    if castling_part == "-" {
        return Some(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return None,
        }
    }

    Some(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_square(en_passant_part)?))
}
