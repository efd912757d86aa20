//! Canonical chess-rule constants and position-only draw rules.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Plies without a pawn move or capture after which the game is drawn.
pub const FIFTY_MOVE_RULE_PLIES: u32 = 100;

/// Occurrences of one position that draw the game.
pub const REPETITION_DRAW_COUNT: usize = 3;

/// Neither side can possibly deliver mate: bare kings, a single minor piece,
/// or only bishops that all stand on one square color.
pub fn has_insufficient_material(board: &Board) -> bool {
    let mut minors = 0usize;
    let mut knights = 0usize;
    let mut light_bishops = 0usize;
    let mut dark_bishops = 0usize;

    for (square, piece) in board.pieces() {
        match piece.kind {
            PieceKind::King => {}
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            PieceKind::Knight => {
                minors += 1;
                knights += 1;
            }
            PieceKind::Bishop => {
                minors += 1;
                if square.is_light() {
                    light_bishops += 1;
                } else {
                    dark_bishops += 1;
                }
            }
        }
    }

    if minors <= 1 {
        return true;
    }
    knights == 0 && (light_bishops == 0 || dark_bishops == 0)
}
