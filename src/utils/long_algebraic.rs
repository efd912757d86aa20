//! Coordinate move notation (`e2e4`, `e7e8q`).

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_description::Move;
use crate::utils::algebraic::algebraic_to_square;

const FIELD_MOVE: &str = "move";
const FIELD_PROMOTION: &str = "promotion";

#[inline]
pub fn move_to_long_algebraic(mv: &Move) -> String {
    mv.to_string()
}

/// Resolve coordinate notation to the matching legal move of `game_state`.
///
/// Malformed text is a `ParseError`; text naming a move the position does not
/// allow is an `IllegalMove`. A promoting move without a suffix promotes to a
/// queen.
pub fn long_algebraic_to_move(text: &str, game_state: &GameState) -> ChessResult<Move> {
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessError::parse(
            FIELD_MOVE,
            format!("expected 4 or 5 characters, got '{text}'"),
        ));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let requested = match text[4..].chars().next() {
        None => None,
        Some(ch) => Some(parse_promotion(ch)?),
    };

    let candidates: Vec<Move> = legal_moves(game_state, from)?
        .into_iter()
        .filter(|mv| mv.to == to)
        .collect();
    let Some(first) = candidates.first().copied() else {
        return Err(ChessError::illegal(text, "not a legal move in this position"));
    };

    if first.promotion.is_none() {
        if requested.is_some() {
            return Err(ChessError::parse(
                FIELD_PROMOTION,
                format!("'{text}' does not promote a pawn"),
            ));
        }
        return Ok(first);
    }

    let kind = requested.unwrap_or(PieceKind::Queen);
    candidates
        .into_iter()
        .find(|mv| mv.promotion == Some(kind))
        .ok_or_else(|| ChessError::illegal(text, "not a legal move in this position"))
}

fn parse_promotion(ch: char) -> ChessResult<PieceKind> {
    PieceKind::from_letter(ch)
        .filter(|kind| PieceKind::PROMOTION_KINDS.contains(kind))
        .ok_or_else(|| ChessError::parse(FIELD_PROMOTION, format!("invalid promotion piece '{ch}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece};

    fn game(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("FEN should parse")
    }

    fn field_of(result: ChessResult<Move>) -> &'static str {
        match result {
            Err(ChessError::ParseError { field, .. }) => field,
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn resolves_simple_and_double_pushes() {
        let start = GameState::new_game();
        let mv = long_algebraic_to_move("e2e4", &start).expect("move should resolve");
        assert!(mv.is_double_pawn_push());
        assert_eq!(move_to_long_algebraic(&mv), "e2e4");

        let knight = long_algebraic_to_move("g1f3", &start).expect("move should resolve");
        assert_eq!(knight.moving_piece, Piece::new(Color::White, PieceKind::Knight));
    }

    #[test]
    fn resolves_castling_and_en_passant() {
        let castle = long_algebraic_to_move("e1g1", &game("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"))
            .expect("castle should resolve");
        assert!(castle.is_castle);

        let ep = long_algebraic_to_move("e5d6", &game("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1"))
            .expect("en passant should resolve");
        assert!(ep.is_en_passant);
    }

    #[test]
    fn promotion_suffix_and_default() {
        let state = game("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let queen = long_algebraic_to_move("a7a8", &state).expect("promotion should resolve");
        assert_eq!(queen.promotion, Some(PieceKind::Queen));
        let rook = long_algebraic_to_move("a7a8R", &state).expect("promotion should resolve");
        assert_eq!(rook.promotion, Some(PieceKind::Rook));
        assert_eq!(move_to_long_algebraic(&rook), "a7a8r");

        assert_eq!(field_of(long_algebraic_to_move("a7a8k", &state)), "promotion");
    }

    #[test]
    fn suffix_on_non_promoting_move_is_parse_error() {
        let start = GameState::new_game();
        assert_eq!(field_of(long_algebraic_to_move("e2e4q", &start)), "promotion");
    }

    #[test]
    fn malformed_text_is_parse_error() {
        let start = GameState::new_game();
        assert_eq!(field_of(long_algebraic_to_move("e2", &start)), "move");
        assert_eq!(field_of(long_algebraic_to_move("e2e4qq", &start)), "move");
        assert_eq!(field_of(long_algebraic_to_move("z2e4", &start)), "square");
        assert_eq!(field_of(long_algebraic_to_move("e2é4", &start)), "move");
        assert_eq!(field_of(long_algebraic_to_move("  e2e4\n", &start)), "move");
        assert_eq!(field_of(long_algebraic_to_move(" e2e4", &start)), "square");
    }

    #[test]
    fn well_formed_but_illegal_is_illegal_move() {
        let start = GameState::new_game();
        for text in ["e2e5", "e7e5", "e4e5", "e1g1"] {
            assert!(
                matches!(
                    long_algebraic_to_move(text, &start),
                    Err(ChessError::IllegalMove { .. })
                ),
                "{text}"
            );
        }
    }
}
