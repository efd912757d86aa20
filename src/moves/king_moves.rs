//! King attack table.
//!
//! Precomputed one-step neighbourhoods used both for king move generation and
//! for attack maps. Castling is handled by the king move generator, not here.

use crate::game_state::chess_types::{Square, SquareSet};

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const KING_ATTACKS: [u64; 64] = generate_offset_table(&KING_OFFSETS);

#[inline]
pub fn king_attacks(square: Square) -> SquareSet {
    SquareSet::from_bits(KING_ATTACKS[square.index() as usize])
}

/// Build a per-square table from a fixed set of leaper offsets.
pub(crate) const fn generate_offset_table(offsets: &[(i32, i32); 8]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;
        let mut i = 0usize;

        while i < offsets.len() {
            let (file_delta, rank_delta) = offsets[i];
            attacks |= set_if_valid(file + file_delta, rank + rank_delta);
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn set_if_valid(file: i32, rank: i32) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    let square = (rank as usize) * 8 + (file as usize);
    1u64 << square
}

#[cfg(test)]
mod tests {
    use super::king_attacks;
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_attacks_from_a1_has_three_targets() {
        let attacks = king_attacks(Square::A1);
        assert_eq!(attacks.len(), 3);
        assert!(attacks.contains(Square::B1));
        assert!(attacks.contains("b2".parse().expect("b2 parses")));
    }

    #[test]
    fn king_attacks_from_e4_has_eight_targets() {
        assert_eq!(king_attacks("e4".parse().expect("e4 parses")).len(), 8);
    }
}
