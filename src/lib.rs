//! Pseudo-legal chess move generation over bitboards.
//!
//! See [`board`] for the square numbering and the generator entry points.

pub mod board;

pub use board::{Bitboard, Board, Color, Move, MoveGen, Piece, Position, Square};
