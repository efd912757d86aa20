//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Square`
//! values reused by FEN and coordinate move notation.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::parse(
            "square",
            format!("expected two characters, got '{square}'"),
        ));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::parse(
            "square",
            format!("invalid file '{}'", file as char),
        ));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::parse(
            "square",
            format!("invalid rank '{}'", rank as char),
        ));
    }

    Square::new(file - b'a', rank - b'1')
}

/// Convert a square to algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.file());
    let rank_char = char::from(b'1' + square.rank());
    format!("{file_char}{rank_char}")
}
