//! A complete position: placement, castling rights and side to move.

use super::error::MoveParseError;
use super::movegen::MoveGen;
use super::{Board, CastlingRights, Color, Move};

/// Owns the state the move generator reads.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) castling: CastlingRights,
    pub(crate) side_to_move: Color,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    /// The standard initial position, White to move, all castling rights.
    #[must_use]
    pub fn startpos() -> Self {
        Position {
            board: Board::new(),
            castling: CastlingRights::all(),
            side_to_move: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// A position from parts. Move counters start at 0 and 1.
    #[must_use]
    pub fn from_parts(board: Board, castling: CastlingRights, side_to_move: Color) -> Self {
        Position {
            board,
            castling,
            side_to_move,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// A generator borrowing this position's board and castling rights
    #[inline]
    #[must_use]
    pub fn move_gen(&self) -> MoveGen<'_, Board, CastlingRights> {
        MoveGen::new(&self.board, &self.castling)
    }

    /// Pseudo-legal moves for the side to move
    #[must_use]
    pub fn generate_moves(&self) -> Vec<Move> {
        self.move_gen().generate_moves(self.side_to_move)
    }

    /// Look up a UCI move (e.g. `e2e4`, `e7e8q`) among the generated moves
    pub fn find_move(&self, uci: &str) -> Result<Move, MoveParseError> {
        let wanted: Move = uci.parse()?;
        self.generate_moves()
            .into_iter()
            .find(|&mv| mv == wanted)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: uci.to_string(),
            })
    }
}
