use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::move_description::Move;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(game_state: &GameState, from: Square, queen: Piece, out: &mut Vec<Move>) {
    let board = &game_state.board;
    push_target_moves(board, from, queen, queen_attacks(from, board.occupancy()), out);
}
