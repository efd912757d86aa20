use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::move_description::Move;

pub fn generate_bishop_moves(game_state: &GameState, from: Square, bishop: Piece, out: &mut Vec<Move>) {
    let board = &game_state.board;
    push_target_moves(board, from, bishop, bishop_attacks(from, board.occupancy()), out);
}
