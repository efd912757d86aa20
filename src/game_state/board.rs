//! 8×8 mailbox board.
//!
//! Pure data: one optional piece per square plus bounds-checked accessors and
//! the bitboard views the attack tables work on.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Standard initial setup.
    pub fn starting_position() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Self::empty();
        for color in Color::ALL {
            let back = color.back_rank() as usize;
            let pawns = color.pawn_start_rank() as usize;
            for (file, kind) in BACK_RANK.iter().enumerate() {
                board.squares[back * 8 + file] = Some(Piece::new(color, *kind));
                board.squares[pawns * 8 + file] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.index() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index() as usize] = piece;
    }

    /// Raw-coordinate lookup for callers holding unvalidated file/rank values.
    pub fn piece_at(&self, file: u8, rank: u8) -> ChessResult<Option<Piece>> {
        Ok(self.get(Square::new(file, rank)?))
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// The unique king square of `color`.
    pub fn find_king(&self, color: Color) -> ChessResult<Square> {
        let king = Piece::new(color, PieceKind::King);
        let mut found = None;
        for square in Square::all() {
            if self.get(square) == Some(king) {
                if found.is_some() {
                    return Err(ChessError::InvariantViolation(format!(
                        "more than one {color} king on the board"
                    )));
                }
                found = Some(square);
            }
        }
        found.ok_or_else(|| ChessError::InvariantViolation(format!("no {color} king on the board")))
    }

    /// Ok when each side has exactly one king.
    pub fn validate_kings(&self) -> ChessResult<()> {
        for color in Color::ALL {
            self.find_king(color)?;
        }
        Ok(())
    }

    pub fn squares_occupied_by(&self, color: Color) -> SquareSet {
        self.pieces()
            .filter(|(_, piece)| piece.color == color)
            .map(|(square, _)| square)
            .collect()
    }

    pub fn occupancy(&self) -> SquareSet {
        self.pieces().map(|(square, _)| square).collect()
    }

    /// Occupied squares with their pieces, ascending from a1.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(
            board.get(Square::E1),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.get(Square::D8),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(board.find_king(Color::Black), Ok(Square::E8));
        assert_eq!(board.squares_occupied_by(Color::White).len(), 16);
        assert!(board.is_empty("e4".parse().expect("e4 parses")));
    }

    #[test]
    fn find_king_requires_exactly_one() {
        let mut board = Board::empty();
        assert!(matches!(
            board.find_king(Color::White),
            Err(ChessError::InvariantViolation(_))
        ));

        board.set(Square::E1, Some(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(board.find_king(Color::White), Ok(Square::E1));

        board.set(Square::A1, Some(Piece::new(Color::White, PieceKind::King)));
        assert!(matches!(
            board.find_king(Color::White),
            Err(ChessError::InvariantViolation(_))
        ));
    }

    #[test]
    fn piece_at_validates_coordinates() {
        let board = Board::starting_position();
        assert_eq!(
            board.piece_at(8, 0),
            Err(ChessError::OutOfBounds { file: 8, rank: 0 })
        );
        assert_eq!(
            board.piece_at(0, 0),
            Ok(Some(Piece::new(Color::White, PieceKind::Rook)))
        );
    }

    #[test]
    fn set_replaces_and_clears() {
        let mut board = Board::starting_position();
        board.set(Square::E1, None);
        assert!(board.is_empty(Square::E1));
        assert_eq!(board.occupancy().len(), 31);
    }
}
