//! Bitboard board representation and pseudo-legal move generation.
//!
//! Squares are numbered 0 (a8) to 63 (h1). The generator borrows a
//! [`BoardView`] and a [`CastleRightsView`] and never mutates either.
//!
//! # Example
//! ```
//! use chess_movegen::board::{Color, Position, Square};
//!
//! let position = Position::startpos();
//! let gen = position.move_gen();
//! let moves = gen.generate_moves(Color::White);
//! assert_eq!(moves.len(), 20);
//!
//! let e3: Square = "e3".parse().unwrap();
//! let e5: Square = "e5".parse().unwrap();
//! assert!(gen.under_attack(e3.into(), Color::White));
//! assert!(!gen.under_attack(e5.into(), Color::White));
//! ```

mod attack_tables;
mod attacks;
mod builder;
mod error;
mod fen;
pub mod generators;
mod movegen;
mod position;
pub mod prelude;
mod state;
mod types;
mod view;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use fen::STARTPOS_FEN;
pub use movegen::MoveGen;
pub use position::Position;
pub use state::Board;
pub use types::{
    Bitboard, BitboardIter, CastlePath, CastlingRights, Color, Move, Piece, SideConfig, Square,
    PROMOTION_PIECES,
};
pub use view::{BoardView, CastleRightsView};
