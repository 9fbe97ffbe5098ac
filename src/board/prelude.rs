//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! # Example
//! ```
//! use chess_movegen::board::prelude::*;
//!
//! let position = Position::startpos();
//! assert_eq!(position.generate_moves().len(), 20);
//! ```

pub use super::{
    Bitboard, Board, BoardView, CastleRightsView, CastlingRights, Color, FenError, Move, MoveGen,
    MoveParseError, Piece, Position, PositionBuilder, Square, SquareError,
};
