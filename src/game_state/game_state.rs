//! Live game state: board, turn, king squares, and the move log.
//!
//! `GameState` is the single owner of the board. The board, side to move, king
//! squares, fullmove number, and move log change only through `apply_move` and
//! `undo_last`. The king scan (check, pins, checks) is recomputed on every
//! `legal_moves` call and describes the position as of that call.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_checks::{is_king_in_check, KingScan};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::{move_identity, Move};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::ChessError;

/// Outcome of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) white_king: Square,
    pub(crate) black_king: Square,
    pub(crate) move_log: Vec<Move>,

    // Flags carried for FEN round-trips; never generated or consumed.
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,

    pub(crate) fullmove_number: u32,
    pub(crate) king_scan: KingScan,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial position, white to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::standard(),
            side_to_move: Color::White,
            white_king: Square::new(7, 4),
            black_king: Square::new(0, 4),
            move_log: Vec::new(),
            castling_rights: CASTLE_WHITE_KINGSIDE
                | CASTLE_WHITE_QUEENSIDE
                | CASTLE_BLACK_KINGSIDE
                | CASTLE_BLACK_QUEENSIDE,
            en_passant_target: None,
            fullmove_number: 1,
            king_scan: KingScan::default(),
        }
    }

    /// Builds a state around an arbitrary board. The caller guarantees that
    /// each king square holds the king of that color.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        white_king: Square,
        black_king: Square,
    ) -> Self {
        Self {
            board,
            side_to_move,
            white_king,
            black_king,
            move_log: Vec::new(),
            castling_rights: 0,
            en_passant_target: None,
            fullmove_number: 1,
            king_scan: KingScan::default(),
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    pub(crate) fn set_king_square(&mut self, color: Color, square: Square) {
        match color {
            Color::White => self.white_king = square,
            Color::Black => self.black_king = square,
        }
    }

    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Check and pin data from the most recent `legal_moves` call.
    #[inline]
    pub fn last_scan(&self) -> &KingScan {
        &self.king_scan
    }

    /// Fresh check test for the side to move.
    pub fn is_in_check(&self) -> bool {
        is_king_in_check(&self.board, self.king_square(self.side_to_move), self.side_to_move)
    }

    /// Legal moves for the side to move, in generation order.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let king = self.king_square(self.side_to_move);
        let legal = generate_legal_moves(&self.board, self.side_to_move, king);
        self.king_scan = legal.scan;
        legal.moves
    }

    /// The legal move from `from` to `to`, matched by identity.
    pub fn find_legal_move(&mut self, from: Square, to: Square) -> Option<Move> {
        let identity = move_identity(from, to);
        self.legal_moves()
            .into_iter()
            .find(|mv| mv.identity() == identity)
    }

    #[inline]
    pub fn apply_move(&mut self, mv: Move) {
        legal_move_apply::apply_move(self, mv);
    }

    #[inline]
    pub fn undo_last(&mut self) -> Option<Move> {
        legal_move_apply::undo_last(self)
    }

    pub fn status(&mut self) -> GameStatus {
        if !self.legal_moves().is_empty() {
            return GameStatus::Ongoing;
        }
        if self.king_scan.in_check {
            GameStatus::Checkmate {
                winner: self.side_to_move.opposite(),
            }
        } else {
            GameStatus::Stalemate
        }
    }
}
