//! Terminal-oriented Unicode board renderer used by `Display` impls and
//! debug logging.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;

const FILE_LABELS: &str = "  a b c d e f g h";

/// Render the board with White at the bottom and file/rank labels.
pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity(256);
    out.push_str(FILE_LABELS);
    out.push('\n');

    for rank in (0..8u8).rev() {
        let label = char::from(b'1' + rank);
        out.push(label);
        out.push(' ');

        for file in 0..8u8 {
            let square = Square::from_index(rank * 8 + file);
            let cell = match square.ok().and_then(|square| board.get(square)) {
                Some(piece) => piece.glyph(),
                None => '·',
            };
            out.push(cell);
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str(FILE_LABELS);
    out
}

/// Board plus a one-line summary of side to move and status.
pub fn render_game_state(game_state: &GameState) -> String {
    format!(
        "{}\n{} to move, {:?}",
        render_board(game_state.board()),
        game_state.turn(),
        game_state.status()
    )
}
