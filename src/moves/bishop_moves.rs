//! Bishop attack generation.
//!
//! Rays run until the board edge or the first occupied square, which is
//! included so captures and defended pieces both show up in the result.

use crate::game_state::chess_types::{Square, SquareSet};

const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

#[inline]
pub fn bishop_attacks(square: Square, occupancy: SquareSet) -> SquareSet {
    slide(square, &BISHOP_DIRECTIONS, occupancy)
}

/// Union of the rays leaving `square` in each direction.
pub(crate) fn slide(square: Square, directions: &[(i32, i32)], occupancy: SquareSet) -> SquareSet {
    let mut attacks = 0u64;
    for (file_step, rank_step) in directions {
        attacks |= trace_ray(square.index() as i32, *file_step, *rank_step, occupancy.bits());
    }
    SquareSet::from_bits(attacks)
}

fn trace_ray(square: i32, file_step: i32, rank_step: i32, occupancy: u64) -> u64 {
    let mut file = (square % 8) + file_step;
    let mut rank = (square / 8) + rank_step;
    let mut attacks = 0u64;

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let bit = 1u64 << (rank * 8 + file);
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        file += file_step;
        rank += rank_step;
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;
    use crate::game_state::chess_types::{Square, SquareSet};

    #[test]
    fn bishop_on_empty_board_from_d4_sees_thirteen_squares() {
        let d4: Square = "d4".parse().expect("d4 parses");
        assert_eq!(bishop_attacks(d4, SquareSet::EMPTY).len(), 13);
    }

    #[test]
    fn bishop_blocker_stops_ray() {
        let e3: Square = "e3".parse().expect("e3 parses");
        let f4: Square = "f4".parse().expect("f4 parses");
        let blockers: SquareSet = [e3].into_iter().collect();
        let attacks = bishop_attacks(Square::C1, blockers);

        assert!(attacks.contains(e3));
        assert!(!attacks.contains(f4));
    }
}
