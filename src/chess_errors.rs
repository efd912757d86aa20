//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type returned by board access, notation
//! parsing, move application and the game controller. Callers match on it to
//! present messages or recover:
//! - `OutOfBounds`, `ParseError` and `IllegalMove` describe bad caller input
//!   and are recoverable.
//! - `InvariantViolation` means a position was constructed without exactly
//!   one king per side. It is a programming error in whoever built the
//!   position and should abort that construction rather than be ignored.

use thiserror::Error;

/// Unified error type for the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A coordinate outside `0..=7` was supplied for a file or rank.
    #[error("coordinate out of bounds: file {file}, rank {rank}")]
    OutOfBounds { file: u8, rank: u8 },

    /// The move is not in the legal set for the current position, or the
    /// game has already ended.
    #[error("illegal move {notation}: {reason}")]
    IllegalMove {
        notation: String,
        reason: &'static str,
    },

    /// Malformed notation. `field` names the offending part of the input.
    #[error("parse error in {field}: {message}")]
    ParseError {
        field: &'static str,
        message: String,
    },

    /// A board that does not hold exactly one king per color.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl ChessError {
    pub(crate) fn parse(field: &'static str, message: impl Into<String>) -> Self {
        ChessError::ParseError {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn illegal(notation: impl ToString, reason: &'static str) -> Self {
        ChessError::IllegalMove {
            notation: notation.to_string(),
            reason,
        }
    }
}

pub type ChessResult<T> = Result<T, ChessError>;
