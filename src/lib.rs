//! Crate root module declarations for the chess rules engine.
//!
//! The engine is layered leaves first: board and value types, attack tables,
//! per-piece move generation, the legality filter and move applier, and the
//! game controller that callers drive. Notation helpers live in `utils`.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod zobrist;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_description;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod controller {
    pub mod board_snapshot;
    pub mod game_controller;
    pub mod position_history;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}

pub use chess_errors::{ChessError, ChessResult};
pub use controller::board_snapshot::BoardSnapshot;
pub use controller::game_controller::GameController;
pub use game_state::chess_types::{
    CastleSide, CastlingRights, Color, DrawReason, GameStatus, Piece, PieceKind, Square, SquareSet,
};
pub use game_state::game_state::GameState;
pub use moves::move_description::Move;
