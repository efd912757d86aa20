//! Turn sequencing and terminal-state tracking for one game.
//!
//! `GameController` is the caller-facing surface: a UI asks it for the legal
//! moves of a square, submits one, and reads back a snapshot. The controller
//! owns the only copy of the current `GameState` and layers the history-based
//! draw rules (fifty-move, insufficient material, threefold repetition) on top
//! of the positional status the move applier computes.

use std::fmt;

use log::{debug, error, info};

use crate::chess_errors::{ChessError, ChessResult};
use crate::controller::board_snapshot::BoardSnapshot;
use crate::controller::position_history::PositionHistory;
use crate::game_state::chess_rules::{
    has_insufficient_material, FIFTY_MOVE_RULE_PLIES, REPETITION_DRAW_COUNT,
};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::{all_legal_moves, legal_moves};
use crate::moves::move_description::Move;
use crate::utils::long_algebraic::long_algebraic_to_move;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone)]
pub struct GameController {
    state: GameState,
    played: Vec<Move>,
    previous: Vec<GameState>,
    history: PositionHistory,
}

impl GameController {
    pub fn new_game() -> Self {
        debug!("new game from the starting position");
        Self::from_state(GameState::new_game())
    }

    /// Start from an imported position. Draw rules are applied immediately.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let state = GameState::from_fen(fen).map_err(|err| {
            match &err {
                ChessError::InvariantViolation(reason) => error!("rejected position {fen}: {reason}"),
                _ => debug!("rejected position {fen}: {err}"),
            }
            err
        })?;
        debug!("new game from {fen}");
        Ok(Self::from_state(state))
    }

    fn from_state(state: GameState) -> Self {
        let mut controller = Self {
            history: PositionHistory::new(state.position_key()),
            state,
            played: Vec::new(),
            previous: Vec::new(),
        };
        controller.apply_draw_rules();
        controller
    }

    /// Legal moves of the piece on `square`; empty once the game is over.
    pub fn legal_moves_from(&self, square: Square) -> ChessResult<Vec<Move>> {
        if self.is_game_over() {
            return Ok(Vec::new());
        }
        legal_moves(&self.state, square)
    }

    /// Every legal move of the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> ChessResult<Vec<Move>> {
        if self.is_game_over() {
            return Ok(Vec::new());
        }
        all_legal_moves(&self.state)
    }

    /// Play `mv` and return the resulting position.
    ///
    /// A pawn reaching the last rank without a promotion kind becomes a queen.
    pub fn make_move(&mut self, mut mv: Move) -> ChessResult<GameState> {
        if mv.promotion.is_none()
            && mv.moving_piece.kind == PieceKind::Pawn
            && mv.to.rank() == mv.moving_piece.color.promotion_rank()
        {
            mv = mv.with_promotion(PieceKind::Queen);
        }

        if self.is_game_over() {
            debug!("rejected {mv}: game is over ({:?})", self.state.status());
            return Err(ChessError::illegal(mv, "the game is over"));
        }

        let next = apply_move(&self.state, &mv).map_err(|err| {
            match &err {
                ChessError::InvariantViolation(reason) => error!("applying {mv}: {reason}"),
                _ => debug!("rejected {mv}: {err}"),
            }
            err
        })?;

        self.history.push(next.position_key());
        self.previous.push(std::mem::replace(&mut self.state, next));
        self.played.push(mv);
        self.apply_draw_rules();

        debug!("{} played {mv}, status {:?}", mv.moving_piece.color, self.state.status());
        Ok(self.state.clone())
    }

    /// Play a move given in coordinate notation (`e2e4`, `e7e8q`).
    pub fn make_move_from_notation(&mut self, text: &str) -> ChessResult<GameState> {
        if self.is_game_over() {
            debug!("rejected {text}: game is over");
            return Err(ChessError::illegal(text, "the game is over"));
        }
        let mv = long_algebraic_to_move(text, &self.state)?;
        self.make_move(mv)
    }

    /// Map a from/to pair picked in a UI to the legal move it denotes.
    ///
    /// Promotions default to a queen when `promotion` is `None`.
    pub fn resolve_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> ChessResult<Move> {
        let notation = format!("{from}{to}");
        let candidates: Vec<Move> = self
            .legal_moves_from(from)?
            .into_iter()
            .filter(|mv| mv.to == to)
            .collect();

        let Some(first) = candidates.first().copied() else {
            return Err(ChessError::illegal(notation, "not a legal move in this position"));
        };
        if first.promotion.is_none() {
            return Ok(first);
        }

        let kind = promotion.unwrap_or(PieceKind::Queen);
        candidates
            .into_iter()
            .find(|mv| mv.promotion == Some(kind))
            .ok_or_else(|| ChessError::illegal(notation, "invalid promotion piece"))
    }

    /// Take back the last move and return it.
    pub fn undo(&mut self) -> ChessResult<Move> {
        let (Some(previous), Some(mv)) = (self.previous.pop(), self.played.pop()) else {
            return Err(ChessError::illegal("undo", "no move to take back"));
        };
        self.history.pop();
        self.state = previous;
        debug!("took back {mv}");
        Ok(mv)
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.state.status().is_terminal()
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn fen(&self) -> String {
        self.state.to_fen()
    }

    pub fn board_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_state(&self.state, self.played.last().copied())
    }

    #[inline]
    pub fn move_history(&self) -> &[Move] {
        &self.played
    }

    /// Checkmate and stalemate stand; otherwise a draw rule may end the game.
    fn apply_draw_rules(&mut self) {
        if matches!(
            self.state.status(),
            GameStatus::Checkmate | GameStatus::Stalemate
        ) {
            info!("game over: {:?}", self.state.status());
            return;
        }

        let reason = if self.state.halfmove_clock() >= FIFTY_MOVE_RULE_PLIES {
            Some(DrawReason::FiftyMoveRule)
        } else if has_insufficient_material(self.state.board()) {
            Some(DrawReason::InsufficientMaterial)
        } else if self.history.repetition_count(self.state.position_key()) >= REPETITION_DRAW_COUNT {
            Some(DrawReason::ThreefoldRepetition)
        } else {
            None
        };

        if let Some(reason) = reason {
            info!("game drawn: {reason:?}");
            self.state.set_status(GameStatus::Draw(reason));
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new_game()
    }
}

impl fmt::Display for GameController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(&self.state))
    }
}
