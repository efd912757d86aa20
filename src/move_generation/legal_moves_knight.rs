use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::move_description::Move;

pub fn generate_knight_moves(game_state: &GameState, from: Square, knight: Piece, out: &mut Vec<Move>) {
    push_target_moves(&game_state.board, from, knight, knight_attacks(from), out);
}
