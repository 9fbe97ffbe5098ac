//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_movegen::board::{Color, Piece, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square::E1, Color::White, Piece::King)
//!     .piece(Square::H1, Color::White, Piece::Rook)
//!     .piece(Square::E8, Color::Black, Piece::King)
//!     .castle_kingside(Color::White)
//!     .build();
//! assert!(position.find_move("e1g1").is_ok());
//! ```

use super::{Board, CastlingRights, Color, Piece, Position, Square};

/// A fluent builder for [`Position`]s.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a builder for an empty board, White to move, no castling rights.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            board: Board::new(),
            side_to_move: Color::White,
            castling: CastlingRights::all(),
        }
    }

    /// Place a piece, replacing anything already on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.set_piece(square, color, piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.remove_piece(square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Replace all castling rights.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling.set(color, false);
        self
    }

    #[must_use]
    pub fn build(self) -> Position {
        Position::from_parts(self.board, self.castling, self.side_to_move)
    }
}
