//! Read-only view of a position for rendering layers.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::move_description::Move;

/// Everything a board UI draws: pieces, whose turn it is, the status, the
/// last move for highlighting and the checked king, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Indexed by `Square::index`, `a1` first.
    pub squares: Vec<Option<Piece>>,
    pub turn: Color,
    pub status: GameStatus,
    pub last_move: Option<Move>,
    pub checked_king: Option<Square>,
}

impl BoardSnapshot {
    pub fn from_state(game_state: &GameState, last_move: Option<Move>) -> Self {
        Self {
            squares: Square::all().map(|square| game_state.board().get(square)).collect(),
            turn: game_state.turn(),
            status: game_state.status(),
            last_move,
            checked_king: game_state.checked_king(),
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares.get(square.index() as usize).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::BoardSnapshot;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn snapshot_of_starting_position() {
        let snapshot = BoardSnapshot::from_state(&GameState::new_game(), None);
        assert_eq!(snapshot.squares.len(), 64);
        assert_eq!(
            snapshot.piece_at(Square::E1),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(snapshot.piece_at("e4".parse().expect("e4 parses")), None);
        assert_eq!(snapshot.turn, Color::White);
        assert_eq!(snapshot.checked_king, None);
    }

    #[test]
    fn snapshot_survives_json() {
        let state = GameState::from_fen("4k3/8/8/8/8/8/8/4K2r w - - 0 1").expect("FEN should parse");
        let snapshot = BoardSnapshot::from_state(&state, None);
        assert_eq!(snapshot.checked_king, Some(Square::E1));

        let json = serde_json::to_string(&snapshot).expect("snapshot serializes");
        let back: BoardSnapshot = serde_json::from_str(&json).expect("snapshot deserializes");
        assert_eq!(back, snapshot);
    }
}
