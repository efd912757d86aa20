//! Perft: exhaustive legal-move-tree enumeration.
//!
//! Counts are taken on the moves of the last ply, matching the published
//! tables (captures include en passant, checks include checkmates).

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::GameStatus;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::moves::move_description::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, generated: &GeneratedMove) {
        let mv = &generated.move_description;
        self.nodes += 1;
        if mv.is_capture() {
            self.captures += 1;
        }
        if mv.is_en_passant {
            self.en_passant += 1;
        }
        if mv.is_castle {
            self.castles += 1;
        }
        if mv.promotion.is_some() {
            self.promotions += 1;
        }
        match generated.game_after_move.status() {
            GameStatus::Check => self.checks += 1,
            GameStatus::Checkmate => {
                self.checks += 1;
                self.checkmates += 1;
            }
            _ => {}
        }
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return Ok(total);
    }

    for generated in generator.generate_legal_moves(game_state)? {
        perft_recurse(generator, &generated, depth - 1, &mut total)?;
    }
    Ok(total)
}

/// Perft with the crate's own legal move generator.
pub fn perft_legal(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    perft(&LegalMoveGenerator, game_state, depth)
}

/// Node count below each root move, in generation order.
pub fn perft_divide(game_state: &GameState, depth: u8) -> ChessResult<Vec<(Move, u64)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    let mut split = Vec::new();
    for generated in LegalMoveGenerator.generate_legal_moves(game_state)? {
        let mut below = PerftCounts::default();
        perft_recurse(&LegalMoveGenerator, &generated, depth - 1, &mut below)?;
        split.push((generated.move_description, below.nodes));
    }
    Ok(split)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    generated: &GeneratedMove,
    remaining: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    if remaining == 0 {
        counts.record_leaf(generated);
        return Ok(());
    }

    let mut below = PerftCounts::default();
    for child in generator.generate_legal_moves(&generated.game_after_move)? {
        perft_recurse(generator, &child, remaining - 1, &mut below)?;
    }
    counts.merge(below);
    Ok(())
}
