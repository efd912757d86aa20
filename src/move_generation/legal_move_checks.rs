//! Attack maps and check detection.
//!
//! `attacked_squares` is the raw reach of one side: pawn diagonals (never
//! pushes), leapers, and sliders up to and including the first blocker. Pins
//! are ignored. It is never filtered for legality itself.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Squares a piece standing on `square` attacks, given the board occupancy.
#[inline]
pub fn piece_attacks(piece: Piece, square: Square, occupancy: SquareSet) -> SquareSet {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, square),
        PieceKind::Knight => knight_attacks(square),
        PieceKind::Bishop => bishop_attacks(square, occupancy),
        PieceKind::Rook => rook_attacks(square, occupancy),
        PieceKind::Queen => queen_attacks(square, occupancy),
        PieceKind::King => king_attacks(square),
    }
}

/// Union of the attack reach of every piece of `by_color`.
pub fn attacked_squares(board: &Board, by_color: Color) -> SquareSet {
    let occupancy = board.occupancy();
    let mut attacked = SquareSet::EMPTY;
    for (square, piece) in board.pieces() {
        if piece.color == by_color {
            attacked |= piece_attacks(piece, square, occupancy);
        }
    }
    attacked
}

/// Whether any piece of `by_color` attacks `square`.
///
/// Looks outward from the target, so it avoids building the full attack map.
pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    let occupancy = board.occupancy();
    let hits = |attacks: SquareSet, kinds: &[PieceKind]| {
        attacks.iter().any(|from| {
            board
                .get(from)
                .is_some_and(|piece| piece.color == by_color && kinds.contains(&piece.kind))
        })
    };

    // A pawn of `by_color` attacks `square` from where an opposite pawn on
    // `square` would attack.
    hits(pawn_attacks(by_color.opposite(), square), &[PieceKind::Pawn])
        || hits(knight_attacks(square), &[PieceKind::Knight])
        || hits(king_attacks(square), &[PieceKind::King])
        || hits(
            bishop_attacks(square, occupancy),
            &[PieceKind::Bishop, PieceKind::Queen],
        )
        || hits(
            rook_attacks(square, occupancy),
            &[PieceKind::Rook, PieceKind::Queen],
        )
}

/// Whether the king of `color` stands on a square the opponent attacks.
pub fn is_king_attacked(board: &Board, color: Color) -> ChessResult<bool> {
    let king_square = board.find_king(color)?;
    Ok(attacked_squares(board, color.opposite()).contains(king_square))
}
