//! The `Move` value: a complete description of one state transition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub moving_piece: Piece,
    /// For en passant this is the bypassed pawn, which is not on `to`.
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub is_castle: bool,
    pub is_en_passant: bool,
}

impl Move {
    /// A plain move or capture with no special flags.
    #[inline]
    pub const fn new(from: Square, to: Square, moving_piece: Piece, captured: Option<Piece>) -> Self {
        Self {
            from,
            to,
            moving_piece,
            captured,
            promotion: None,
            is_castle: false,
            is_en_passant: false,
        }
    }

    #[inline]
    pub const fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }

    #[inline]
    pub const fn castle(from: Square, to: Square, king: Piece) -> Self {
        let mut mv = Self::new(from, to, king, None);
        mv.is_castle = true;
        mv
    }

    #[inline]
    pub const fn en_passant(from: Square, to: Square, pawn: Piece, victim: Piece) -> Self {
        let mut mv = Self::new(from, to, pawn, Some(victim));
        mv.is_en_passant = true;
        mv
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn is_double_pawn_push(&self) -> bool {
        self.moving_piece.kind == PieceKind::Pawn && self.from.rank().abs_diff(self.to.rank()) == 2
    }

    /// Square of the piece removed by this move, if any.
    pub fn capture_square(&self) -> Option<Square> {
        if !self.is_capture() {
            return None;
        }
        if self.is_en_passant {
            // The victim stands beside the mover, on the destination file.
            return Square::new(self.to.file(), self.from.rank()).ok();
        }
        Some(self.to)
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}
