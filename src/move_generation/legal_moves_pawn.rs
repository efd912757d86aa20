//! Pawn move generation: pushes, double pushes, diagonal captures, en passant
//! and promotions (one move per promotion kind).

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::move_description::Move;
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(game_state: &GameState, from: Square, pawn: Piece, out: &mut Vec<Move>) {
    let board = &game_state.board;
    let color = pawn.color;
    let forward = color.forward();

    if let Some(one_step) = from.offset(0, forward) {
        if board.is_empty(one_step) {
            push_pawn_move(Move::new(from, one_step, pawn, None), out);

            if from.rank() == color.pawn_start_rank() {
                if let Some(two_step) = one_step.offset(0, forward) {
                    if board.is_empty(two_step) {
                        out.push(Move::new(from, two_step, pawn, None));
                    }
                }
            }
        }
    }

    for to in pawn_attacks(color, from) {
        match board.get(to) {
            Some(target) if target.color != color => {
                push_pawn_move(Move::new(from, to, pawn, Some(target)), out);
            }
            Some(_) => {}
            None if game_state.en_passant == Some(to) => {
                // The bypassed pawn stands beside us, on the target's file.
                let victim = Piece::new(color.opposite(), PieceKind::Pawn);
                let beside = to.offset(0, -forward);
                if beside.is_some_and(|square| board.get(square) == Some(victim)) {
                    out.push(Move::en_passant(from, to, pawn, victim));
                }
            }
            None => {}
        }
    }
}

fn push_pawn_move(mv: Move, out: &mut Vec<Move>) {
    if mv.to.rank() == mv.moving_piece.color.promotion_rank() {
        for kind in PieceKind::PROMOTION_KINDS {
            out.push(mv.with_promotion(kind));
        }
    } else {
        out.push(mv);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_description::Move;

    fn sq(name: &str) -> Square {
        name.parse().expect("square parses")
    }

    fn pawn_moves(fen: &str, from: &str) -> Vec<Move> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let from = sq(from);
        let pawn = game.board().get(from).expect("a pawn should stand on the square");
        let mut out = Vec::new();
        generate_pawn_moves(&game, from, pawn, &mut out);
        out
    }

    #[test]
    fn pawn_on_start_rank_can_push_one_or_two() {
        let moves = pawn_moves(crate::game_state::chess_rules::STARTING_POSITION_FEN, "e2");
        let targets: Vec<String> = moves.iter().map(|mv| mv.to.to_string()).collect();
        assert_eq!(targets, vec!["e3", "e4"]);
    }

    #[test]
    fn blocked_pawn_cannot_push_or_jump() {
        assert!(pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", "e2").is_empty());

        let moves = pawn_moves("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1", "e2");
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, sq("e3"));
    }

    #[test]
    fn black_pawn_captures_diagonally_downward() {
        let moves = pawn_moves("4k3/8/8/3p4/2P1P3/8/8/4K3 b - - 0 1", "d5");
        let mut targets: Vec<String> = moves.iter().map(|mv| mv.to.to_string()).collect();
        targets.sort();
        assert_eq!(targets, vec!["c4", "d4", "e4"]);
        assert!(moves
            .iter()
            .filter(|mv| mv.to != sq("d4"))
            .all(|mv| mv.captured == Some(Piece::new(Color::White, PieceKind::Pawn))));
    }

    #[test]
    fn en_passant_onto_target_square() {
        let moves = pawn_moves("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", "e5");
        let ep = moves
            .iter()
            .find(|mv| mv.is_en_passant)
            .expect("en passant should be generated");
        assert_eq!(ep.to, sq("d6"));
        assert_eq!(ep.captured, Some(Piece::new(Color::Black, PieceKind::Pawn)));
        assert_eq!(ep.capture_square(), Some(sq("d5")));
    }

    #[test]
    fn promotion_generates_every_kind() {
        let moves = pawn_moves("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1", "a7");
        assert_eq!(moves.len(), 8);
        for kind in PieceKind::PROMOTION_KINDS {
            assert!(moves.iter().any(|mv| mv.to == sq("a8") && mv.promotion == Some(kind)));
            assert!(moves.iter().any(|mv| {
                mv.to == sq("b8")
                    && mv.promotion == Some(kind)
                    && mv.captured == Some(Piece::new(Color::Black, PieceKind::Knight))
            }));
        }
    }
}
