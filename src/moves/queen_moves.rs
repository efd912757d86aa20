use crate::game_state::chess_types::{Square, SquareSet};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(square: Square, occupancy: SquareSet) -> SquareSet {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

#[cfg(test)]
mod tests {
    use super::queen_attacks;
    use crate::game_state::chess_types::{Square, SquareSet};

    #[test]
    fn queen_on_empty_board_from_d4_sees_twenty_seven_squares() {
        let d4: Square = "d4".parse().expect("d4 parses");
        assert_eq!(queen_attacks(d4, SquareSet::EMPTY).len(), 27);
    }

    #[test]
    fn queen_attacks_stop_at_blockers() {
        let d4: Square = "d4".parse().expect("d4 parses");
        let d6: Square = "d6".parse().expect("d6 parses");
        let g4: Square = "g4".parse().expect("g4 parses");
        let blockers: SquareSet = [d6, g4].into_iter().collect();
        let attacks = queen_attacks(d4, blockers);

        assert!(attacks.contains(d6));
        assert!(attacks.contains(g4));
        assert!(!attacks.contains("d7".parse().expect("d7 parses")));
        assert!(!attacks.contains("h4".parse().expect("h4 parses")));
    }
}
