use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state.board());
    let side_to_move = match game_state.turn() {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game_state.castling());
    let en_passant = game_state
        .en_passant()
        .map_or_else(|| "-".to_owned(), |square| square.to_string());

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        game_state.halfmove_clock(),
        game_state.fullmove_number()
    )
}

pub fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            let piece = board.piece_at(file, rank).ok().flatten();
            if let Some(piece) = piece {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.fen_char());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if rights.white_kingside {
        out.push('K');
    }
    if rights.white_queenside {
        out.push('Q');
    }
    if rights.black_kingside {
        out.push('k');
    }
    if rights.black_queenside {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}
