//! Legality filter.
//!
//! Pseudo-legal moves are played on a scratch copy of the board and dropped
//! when the mover's king ends up inside the opponent's attack map. Status
//! classification (check, checkmate, stalemate) is built on top of the same
//! filter. Draw rules need move history and live in the controller.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_legal_move, play_on_board};
use crate::move_generation::legal_move_checks::{attacked_squares, is_king_attacked};
use crate::move_generation::move_generator::{
    push_pseudo_legal_moves, GeneratedMove, MoveGenerator,
};
use crate::moves::move_description::Move;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> ChessResult<Vec<GeneratedMove>> {
        let moves = all_legal_moves(game_state)?;
        let mut generated = Vec::with_capacity(moves.len());
        for mv in moves {
            generated.push(GeneratedMove {
                move_description: mv,
                game_after_move: apply_legal_move(game_state, &mv)?,
            });
        }
        Ok(generated)
    }
}

/// Legal moves of the piece on `square`.
///
/// Empty when the square is empty or holds a piece of the side not to move.
pub fn legal_moves(game_state: &GameState, square: Square) -> ChessResult<Vec<Move>> {
    let mut out = Vec::new();
    if let Some(piece) = game_state.board.get(square) {
        if piece.color == game_state.turn {
            push_legal_moves(game_state, square, piece, &mut out)?;
        }
    }
    Ok(out)
}

/// Every legal move for the side to move, grouped by origin square.
pub fn all_legal_moves(game_state: &GameState) -> ChessResult<Vec<Move>> {
    let mut out = Vec::with_capacity(64);
    for (square, piece) in game_state.board.pieces() {
        if piece.color == game_state.turn {
            push_legal_moves(game_state, square, piece, &mut out)?;
        }
    }
    Ok(out)
}

/// Whether the side to move has at least one legal move.
pub fn has_legal_move(game_state: &GameState) -> ChessResult<bool> {
    let mut scratch = Vec::with_capacity(32);
    for (square, piece) in game_state.board.pieces() {
        if piece.color != game_state.turn {
            continue;
        }
        scratch.clear();
        push_legal_moves(game_state, square, piece, &mut scratch)?;
        if !scratch.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

#[inline]
pub fn is_in_check(game_state: &GameState, color: Color) -> ChessResult<bool> {
    is_king_attacked(&game_state.board, color)
}

/// Positional status of the side to move. Never a draw.
pub fn compute_status(game_state: &GameState) -> ChessResult<GameStatus> {
    let in_check = is_in_check(game_state, game_state.turn)?;
    let can_move = has_legal_move(game_state)?;
    Ok(match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Ongoing,
    })
}

fn push_legal_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<Move>,
) -> ChessResult<()> {
    let mut pseudo = Vec::with_capacity(32);
    push_pseudo_legal_moves(game_state, from, piece, &mut pseudo);

    let enemy = piece.color.opposite();
    for mv in pseudo {
        let mut scratch: Board = game_state.board;
        play_on_board(&mut scratch, &mv);
        let king_square = scratch.find_king(piece.color)?;
        if !attacked_squares(&scratch, enemy).contains(king_square) {
            out.push(mv);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;

    use super::*;
    use crate::move_generation::legal_move_apply::apply_move;

    fn sq(name: &str) -> Square {
        name.parse().expect("square parses")
    }

    fn game(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("FEN should parse")
    }

    fn play(game_state: &GameState, notation: &str) -> GameState {
        let mv = all_legal_moves(game_state)
            .expect("generation should succeed")
            .into_iter()
            .find(|mv| mv.to_string() == notation)
            .unwrap_or_else(|| panic!("{notation} should be legal"));
        apply_move(game_state, &mv).expect("legal move should apply")
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let game = GameState::new_game();
        assert_eq!(all_legal_moves(&game).expect("generation should succeed").len(), 20);
        assert_eq!(compute_status(&game), Ok(GameStatus::Ongoing));
    }

    #[test]
    fn pieces_of_side_not_to_move_have_no_legal_moves() {
        let game = GameState::new_game();
        assert_eq!(legal_moves(&game, sq("g8")), Ok(Vec::new()));
        assert_eq!(legal_moves(&game, sq("e4")), Ok(Vec::new()));
        assert_eq!(legal_moves(&game, sq("g1")).expect("generation should succeed").len(), 2);
    }

    #[test]
    fn pinned_piece_cannot_leave_the_pin_line() {
        let game = game("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
        assert!(legal_moves(&game, sq("e2")).expect("generation should succeed").is_empty());
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let game = game("4k3/8/8/8/8/8/r7/4K3 w - - 0 1");
        let moves = legal_moves(&game, sq("e1")).expect("generation should succeed");
        let targets: Vec<String> = moves.iter().map(|mv| mv.to.to_string()).collect();
        assert_eq!(targets, vec!["d1", "f1"]);
    }

    #[test]
    fn only_evasions_while_in_check() {
        // Rook on e8 checks; block on e2 with the knight or step aside.
        let game = game("4r1k1/8/8/8/8/8/8/3NK3 w - - 0 1");
        assert_eq!(game.status(), GameStatus::Check);
        let moves = all_legal_moves(&game).expect("generation should succeed");
        let mut names: Vec<String> = moves.iter().map(|mv| mv.to_string()).collect();
        names.sort();
        assert_eq!(names, vec!["d1e3", "e1d2", "e1f1", "e1f2"]);
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut state = GameState::new_game();
        for notation in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            state = play(&state, notation);
        }
        assert_eq!(state.status(), GameStatus::Checkmate);
        assert!(all_legal_moves(&state).expect("generation should succeed").is_empty());
        assert_eq!(state.checked_king(), Some(Square::E1));
    }

    #[test]
    fn stalemate_is_detected() {
        let game = game("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert_eq!(game.status(), GameStatus::Stalemate);
        assert_eq!(compute_status(&game), Ok(GameStatus::Stalemate));
    }

    #[test]
    fn en_passant_only_on_the_immediate_reply() {
        let start = game("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1");
        let after_push = play(&start, "e2e4");
        assert_eq!(after_push.en_passant(), Some(sq("e3")));
        assert!(legal_moves(&after_push, sq("d4"))
            .expect("generation should succeed")
            .iter()
            .any(|mv| mv.is_en_passant));

        let waited = play(&play(&after_push, "e8d8"), "e1d1");
        assert_eq!(waited.en_passant(), None);
        assert!(legal_moves(&waited, sq("d4"))
            .expect("generation should succeed")
            .iter()
            .all(|mv| !mv.is_en_passant));
    }

    #[test]
    fn en_passant_that_exposes_king_is_rejected() {
        // Capturing would clear the fifth rank between the rook and the king.
        let game = game("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1");
        let moves = legal_moves(&game, sq("e5")).expect("generation should succeed");
        assert!(moves.iter().all(|mv| !mv.is_en_passant));
        assert_eq!(moves.len(), 1);
    }

    #[test]
    fn random_playouts_never_leave_mover_in_check() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut state = GameState::new_game();
            for _ in 0..80 {
                let moves = all_legal_moves(&state).expect("generation should succeed");
                let Some(mv) = moves.choose(&mut rng) else {
                    break;
                };
                let mover = state.turn();
                state = apply_move(&state, mv).expect("generated move should apply");
                assert_eq!(is_in_check(&state, mover), Ok(false), "after {mv}");
                assert_eq!(
                    GameState::from_fen(&state.to_fen()).expect("generated FEN should parse"),
                    state
                );
            }
        }
    }
}
