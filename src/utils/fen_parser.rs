//! FEN-to-GameState parser.
//!
//! Every malformed field fails with `ParseError` naming that field; a board
//! without exactly one king per side fails with `InvariantViolation` when the
//! position is assembled.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_square;

pub const FIELD_PLACEMENT: &str = "piece placement";
pub const FIELD_SIDE_TO_MOVE: &str = "side to move";
pub const FIELD_CASTLING: &str = "castling rights";
pub const FIELD_EN_PASSANT: &str = "en passant";
pub const FIELD_HALFMOVE: &str = "halfmove clock";
pub const FIELD_FULLMOVE: &str = "fullmove number";

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(ChessError::parse(
            "fields",
            format!("expected 6 fields, found {}", fields.len()),
        ));
    }

    let board = parse_board(fields[0])?;
    let turn = parse_side_to_move(fields[1])?;
    let castling = parse_castling_rights(fields[2])?;
    let en_passant = parse_en_passant_square(fields[3], turn)?;
    let halfmove_clock = parse_counter(FIELD_HALFMOVE, fields[4])?;
    let fullmove_number = parse_counter(FIELD_FULLMOVE, fields[5])?;
    if fullmove_number == 0 {
        return Err(ChessError::parse(FIELD_FULLMOVE, "must be at least 1"));
    }

    GameState::from_parts(
        board,
        turn,
        castling,
        en_passant,
        halfmove_clock,
        fullmove_number,
    )
}

/// Plain decimal digits only; `u32::from_str` would also take a `+` sign.
fn parse_counter(field: &'static str, text: &str) -> ChessResult<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ChessError::parse(field, format!("not a number: '{text}'")));
    }
    text.parse::<u32>()
        .map_err(|_| ChessError::parse(field, format!("out of range: '{text}'")))
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::parse(
            FIELD_PLACEMENT,
            format!("expected 8 ranks, found {}", ranks.len()),
        ));
    }

    let mut board = Board::empty();

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::parse(
                        FIELD_PLACEMENT,
                        format!("invalid empty-square count '{ch}'"),
                    ));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(rank_width_error(rank));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or_else(|| {
                ChessError::parse(FIELD_PLACEMENT, format!("invalid piece character '{ch}'"))
            })?;

            if file >= 8 {
                return Err(rank_width_error(rank));
            }

            board.set(Square::new(file, rank)?, Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(rank_width_error(rank));
        }
    }

    Ok(board)
}

fn rank_width_error(rank: u8) -> ChessError {
    ChessError::parse(
        FIELD_PLACEMENT,
        format!("rank {} does not describe exactly 8 files", rank + 1),
    )
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::parse(
            FIELD_SIDE_TO_MOVE,
            format!("expected 'w' or 'b', got '{side_part}'"),
        )),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(CastlingRights::NONE);
    }

    let mut rights = CastlingRights::NONE;

    for ch in castling_part.chars() {
        let flag = match ch {
            'K' => &mut rights.white_kingside,
            'Q' => &mut rights.white_queenside,
            'k' => &mut rights.black_kingside,
            'q' => &mut rights.black_queenside,
            _ => {
                return Err(ChessError::parse(
                    FIELD_CASTLING,
                    format!("invalid character '{ch}'"),
                ))
            }
        };
        if *flag {
            return Err(ChessError::parse(
                FIELD_CASTLING,
                format!("duplicate character '{ch}'"),
            ));
        }
        *flag = true;
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str, turn: Color) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part).map_err(|err| match err {
        ChessError::ParseError { message, .. } => ChessError::parse(FIELD_EN_PASSANT, message),
        other => other,
    })?;

    // The target is the square the opponent's pawn just skipped.
    let expected_rank = match turn {
        Color::White => 5,
        Color::Black => 2,
    };
    if square.rank() != expected_rank {
        return Err(ChessError::parse(
            FIELD_EN_PASSANT,
            format!("{square} cannot be a target with {turn} to move"),
        ));
    }

    Ok(Some(square))
}
