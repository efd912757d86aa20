//! Pawn capture tables.
//!
//! Only the diagonal reach lives here; pushes depend on occupancy and are
//! produced by the pawn move generator.

use crate::game_state::chess_types::{Color, Square, SquareSet};

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(-1);

#[inline]
pub fn pawn_attacks(color: Color, square: Square) -> SquareSet {
    let table = match color {
        Color::White => &WHITE_PAWN_ATTACKS,
        Color::Black => &BLACK_PAWN_ATTACKS,
    };
    SquareSet::from_bits(table[square.index() as usize])
}

const fn generate_pawn_attacks(rank_step: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32 + rank_step;
        let mut attacks = 0u64;

        if rank >= 0 && rank < 8 {
            if file > 0 {
                attacks |= 1u64 << (rank * 8 + file - 1);
            }
            if file < 7 {
                attacks |= 1u64 << (rank * 8 + file + 1);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::pawn_attacks;
    use crate::game_state::chess_types::{Color, Square, SquareSet};

    fn squares(names: &[&str]) -> SquareSet {
        names
            .iter()
            .map(|name| name.parse::<Square>().expect("square parses"))
            .collect()
    }

    #[test]
    fn white_pawn_attacks_from_e2() {
        let e2: Square = "e2".parse().expect("e2 parses");
        assert_eq!(pawn_attacks(Color::White, e2), squares(&["d3", "f3"]));
    }

    #[test]
    fn black_pawn_attacks_from_a7() {
        let a7: Square = "a7".parse().expect("a7 parses");
        assert_eq!(pawn_attacks(Color::Black, a7), squares(&["b6"]));
    }

    #[test]
    fn pawns_on_the_last_rank_attack_nothing() {
        assert!(pawn_attacks(Color::White, Square::E8).is_empty());
        assert!(pawn_attacks(Color::Black, Square::E1).is_empty());
    }
}
