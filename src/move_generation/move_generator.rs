use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_description::Move;

/// A legal move together with the position it leads to.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub move_description: Move,
    pub game_after_move: GameState,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> ChessResult<Vec<GeneratedMove>>;
}

/// Moves the piece on `square` could make ignoring self-check.
///
/// Empty squares yield nothing. The piece's own color is used, not the side
/// to move; the legality filter does that check.
pub fn pseudo_legal_moves(game_state: &GameState, square: Square) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    if let Some(piece) = game_state.board.get(square) {
        push_pseudo_legal_moves(game_state, square, piece, &mut out);
    }
    out
}

pub(crate) fn push_pseudo_legal_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, piece, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, piece, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, piece, out),
        PieceKind::Rook => generate_rook_moves(game_state, from, piece, out),
        PieceKind::Queen => generate_queen_moves(game_state, from, piece, out),
        PieceKind::King => generate_king_moves(game_state, from, piece, out),
    }
}
