use crate::game_state::chess_types::{Square, SquareSet};
use crate::moves::bishop_moves::slide;

const ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[inline]
pub fn rook_attacks(square: Square, occupancy: SquareSet) -> SquareSet {
    slide(square, &ROOK_DIRECTIONS, occupancy)
}
