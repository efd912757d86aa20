use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{castle_path, push_target_moves};
use crate::moves::king_moves::king_attacks;
use crate::moves::move_description::Move;

pub fn generate_king_moves(game_state: &GameState, from: Square, king: Piece, out: &mut Vec<Move>) {
    push_target_moves(&game_state.board, from, king, king_attacks(from), out);
    generate_castling_moves(game_state, from, king, out);
}

fn generate_castling_moves(game_state: &GameState, from: Square, king: Piece, out: &mut Vec<Move>) {
    let board = &game_state.board;
    let color = king.color;
    let enemy = color.opposite();
    let rook = Piece::new(color, PieceKind::Rook);

    for side in CastleSide::ALL {
        if !game_state.castling.has(color, side) {
            continue;
        }

        let path = castle_path(color, side);
        if from != path.king_from || board.get(path.rook_from) != Some(rook) {
            continue;
        }
        if !path.between.iter().all(|square| board.is_empty(*square)) {
            continue;
        }

        // Cannot castle out of, through, or into check.
        let unsafe_square = std::iter::once(from)
            .chain(path.king_walk)
            .any(|square| is_square_attacked(board, square, enemy));
        if unsafe_square {
            continue;
        }

        out.push(Move::castle(from, path.king_to, king));
    }
}
