use crate::game_state::chess_types::{Square, SquareSet};
use crate::moves::king_moves::generate_offset_table;

/// The eight L-shaped jumps.
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KNIGHT_ATTACKS: [u64; 64] = generate_offset_table(&KNIGHT_OFFSETS);

#[inline]
pub fn knight_attacks(square: Square) -> SquareSet {
    SquareSet::from_bits(KNIGHT_ATTACKS[square.index() as usize])
}
