//! Helpers shared by the per-piece generators and the move applier.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_description::Move;

/// Emit a move to every square in `targets` not held by the mover's own side.
pub fn push_target_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    targets: SquareSet,
    out: &mut Vec<Move>,
) {
    for to in targets {
        match board.get(to) {
            Some(occupant) if occupant.color == piece.color => {}
            captured => out.push(Move::new(from, to, piece, captured)),
        }
    }
}

/// Fixed squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlePath {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares between king and rook that must be empty.
    pub between: &'static [Square],
    /// Squares the king crosses and lands on; none may be attacked.
    pub king_walk: [Square; 2],
}

pub fn castle_path(color: Color, side: CastleSide) -> CastlePath {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => CastlePath {
            king_from: Square::E1,
            king_to: Square::G1,
            rook_from: Square::H1,
            rook_to: Square::F1,
            between: &[Square::F1, Square::G1],
            king_walk: [Square::F1, Square::G1],
        },
        (Color::White, CastleSide::Queenside) => CastlePath {
            king_from: Square::E1,
            king_to: Square::C1,
            rook_from: Square::A1,
            rook_to: Square::D1,
            between: &[Square::B1, Square::C1, Square::D1],
            king_walk: [Square::D1, Square::C1],
        },
        (Color::Black, CastleSide::Kingside) => CastlePath {
            king_from: Square::E8,
            king_to: Square::G8,
            rook_from: Square::H8,
            rook_to: Square::F8,
            between: &[Square::F8, Square::G8],
            king_walk: [Square::F8, Square::G8],
        },
        (Color::Black, CastleSide::Queenside) => CastlePath {
            king_from: Square::E8,
            king_to: Square::C8,
            rook_from: Square::A8,
            rook_to: Square::D8,
            between: &[Square::B8, Square::C8, Square::D8],
            king_walk: [Square::D8, Square::C8],
        },
    }
}

/// The castling path a castle move of `color` landing on `king_to` follows.
pub fn castle_path_for(color: Color, king_to: Square) -> Option<CastlePath> {
    CastleSide::ALL
        .into_iter()
        .map(|side| castle_path(color, side))
        .find(|path| path.king_to == king_to)
}

/// Castling right tied to a rook's home corner.
pub fn corner_right(square: Square) -> Option<(Color, CastleSide)> {
    match square {
        Square::A1 => Some((Color::White, CastleSide::Queenside)),
        Square::H1 => Some((Color::White, CastleSide::Kingside)),
        Square::A8 => Some((Color::Black, CastleSide::Queenside)),
        Square::H8 => Some((Color::Black, CastleSide::Kingside)),
        _ => None,
    }
}
