//! Complete position value.
//!
//! `GameState` bundles the board with every piece of derived state the rules
//! need: side to move, castling rights, en passant target, the two clocks and
//! the cached status. Values are only built through validated constructors,
//! so every `GameState` holds exactly one king per side.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::zobrist::compute_position_key;
use crate::move_generation::legal_move_checks::is_king_attacked;
use crate::move_generation::legal_move_generator::compute_status;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) status: GameStatus,
}

impl GameState {
    /// Standard initial position, White to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            turn: Color::White,
            castling: CastlingRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            status: GameStatus::Ongoing,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Assemble a position from its parts and compute its status.
    ///
    /// Fails with `InvariantViolation` unless each side has exactly one king,
    /// the side that just moved is not left in check, and the fullmove number
    /// is at least 1.
    pub fn from_parts(
        board: Board,
        turn: Color,
        castling: CastlingRights,
        en_passant: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> ChessResult<Self> {
        board.validate_kings()?;
        if fullmove_number == 0 {
            return Err(ChessError::InvariantViolation(
                "fullmove number must be at least 1".to_owned(),
            ));
        }

        let mut state = Self {
            board,
            turn,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            status: GameStatus::Ongoing,
        };

        if is_king_attacked(&state.board, turn.opposite())? {
            return Err(ChessError::InvariantViolation(format!(
                "{} is in check but it is {turn} to move",
                turn.opposite()
            )));
        }

        state.status = compute_status(&state)?;
        Ok(state)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// Zobrist key identifying the position for repetition purposes.
    #[inline]
    pub fn position_key(&self) -> u64 {
        compute_position_key(self)
    }

    /// King square of the side to move when that king is attacked.
    pub fn checked_king(&self) -> Option<Square> {
        match self.status {
            GameStatus::Check | GameStatus::Checkmate => self.board.find_king(self.turn).ok(),
            _ => None,
        }
    }
}
