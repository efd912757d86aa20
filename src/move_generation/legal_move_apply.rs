//! Applying a move to produce the successor position.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::{compute_status, legal_moves};
use crate::move_generation::legal_move_shared::{castle_path_for, corner_right};
use crate::moves::move_description::Move;

/// Play `mv` on `game_state`, returning the new position.
///
/// Fails with `IllegalMove` unless `mv` is one of the legal moves of the
/// piece on `mv.from`. The input state is left untouched.
pub fn apply_move(game_state: &GameState, mv: &Move) -> ChessResult<GameState> {
    if game_state.status.is_terminal() {
        return Err(ChessError::illegal(mv, "the game is over"));
    }
    if !legal_moves(game_state, mv.from)?.contains(mv) {
        return Err(ChessError::illegal(mv, "not a legal move in this position"));
    }
    apply_legal_move(game_state, mv)
}

/// Apply a move already known to be legal.
pub(crate) fn apply_legal_move(game_state: &GameState, mv: &Move) -> ChessResult<GameState> {
    let mover = mv.moving_piece.color;
    let mut next = game_state.clone();

    play_on_board(&mut next.board, mv);

    if mv.moving_piece.kind == PieceKind::King {
        next.castling.revoke_color(mover);
    }
    // A rook leaving its corner, or anything landing there, ends that right.
    for square in [mv.from, mv.to] {
        if let Some((color, side)) = corner_right(square) {
            next.castling.revoke(color, side);
        }
    }

    next.en_passant = if mv.is_double_pawn_push() {
        mv.from.offset(0, mover.forward())
    } else {
        None
    };

    if mv.moving_piece.kind == PieceKind::Pawn || mv.is_capture() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.turn = mover.opposite();
    next.status = compute_status(&next)?;
    Ok(next)
}

/// Move the pieces of `mv` on `board` without touching any other state.
pub(crate) fn play_on_board(board: &mut Board, mv: &Move) {
    if let Some(square) = mv.capture_square() {
        board.set(square, None);
    }

    board.set(mv.from, None);
    let placed = match mv.promotion {
        Some(kind) => Piece::new(mv.moving_piece.color, kind),
        None => mv.moving_piece,
    };
    board.set(mv.to, Some(placed));

    if mv.is_castle {
        if let Some(path) = castle_path_for(mv.moving_piece.color, mv.to) {
            let rook = board.get(path.rook_from);
            board.set(path.rook_from, None);
            board.set(path.rook_to, rook);
        }
    }
}
