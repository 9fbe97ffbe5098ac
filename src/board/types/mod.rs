//! Core chess types.
//!
//! This module contains the value types shared by the board and the move
//! generator:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - board square index (a8 = 0 ... h1 = 63)
//! - `Bitboard` - 64-bit set of squares
//! - `Move` - origin, destination, optional promotion
//! - `CastlingRights` - castling state
//! - `SideConfig` - per-color geometry

mod bitboard;
mod castling;
mod moves;
mod piece;
mod side;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastlingRights;
pub use moves::Move;
pub use piece::{Color, Piece, PROMOTION_PIECES};
pub use side::{CastlePath, SideConfig};
pub use square::Square;
