//! Zobrist hashing for position identity and repetition tracking.
//!
//! The keys come from a fixed-seed `StdRng`, so hashes are deterministic
//! across runs, which keeps repetition tests and debugging reproducible.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::pawn_moves::pawn_attacks;

const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    black_to_move: u64,
    // white kingside, white queenside, black kingside, black queenside
    castling: [u64; 4],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for color in &mut piece_square {
        for piece in color {
            for key in piece {
                *key = rng.random();
            }
        }
    }

    let black_to_move = rng.random();

    let mut castling = [0u64; 4];
    for key in &mut castling {
        *key = rng.random();
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = rng.random();
    }

    ZobristTables {
        piece_square,
        black_to_move,
        castling,
        en_passant_file,
    }
}

#[inline]
pub fn piece_square_key(piece: Piece, square: Square) -> u64 {
    tables().piece_square[piece.color.index()][piece.kind.index()][square.index() as usize]
}

/// Compute the full key of a position.
///
/// The en passant file only contributes when the side to move has a legal
/// en passant capture, so a stale target after a double push, or one only a
/// pinned pawn could take, does not make otherwise identical positions differ.
pub fn compute_position_key(game_state: &GameState) -> u64 {
    let t = tables();
    let mut key = 0u64;

    for (square, piece) in game_state.board.pieces() {
        key ^= piece_square_key(piece, square);
    }

    if game_state.turn == Color::Black {
        key ^= t.black_to_move;
    }

    let rights = game_state.castling;
    let flags = [
        rights.white_kingside,
        rights.white_queenside,
        rights.black_kingside,
        rights.black_queenside,
    ];
    for (flag, castle_key) in flags.iter().zip(t.castling.iter()) {
        if *flag {
            key ^= castle_key;
        }
    }

    if let Some(target) = game_state.en_passant {
        if en_passant_capturable(game_state, target) {
            key ^= t.en_passant_file[target.file() as usize];
        }
    }

    key
}

fn en_passant_capturable(game_state: &GameState, target: Square) -> bool {
    let mover = game_state.turn;
    let own_pawn = Piece::new(mover, PieceKind::Pawn);
    // Squares from which a pawn of `mover` attacks `target`.
    pawn_attacks(mover.opposite(), target)
        .iter()
        .filter(|square| game_state.board.get(*square) == Some(own_pawn))
        .any(|square| {
            legal_moves(game_state, square)
                .is_ok_and(|moves| moves.iter().any(|mv| mv.is_en_passant && mv.to == target))
        })
}
