//! Rook move generation.
//!
//! Castling rights bookkeeping for rooks lives in the move applier; this
//! module only emits sliding moves and captures.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::move_description::Move;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(game_state: &GameState, from: Square, rook: Piece, out: &mut Vec<Move>) {
    let board = &game_state.board;
    push_target_moves(board, from, rook, rook_attacks(from, board.occupancy()), out);
}
