//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - per-square lookup, per-side enumeration and ordering
//! - `castling.rs` - castling rights, path emptiness and path safety
//! - `attacks.rs` - side-wide attack maps
//! - `proptest.rs` - property-based tests over random positions
//! - `reference.rs` - agreement with a square-by-square generator


use rand::prelude::*;

use crate::board::{Color, Move, Piece, Position, PositionBuilder, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

pub(super) fn mv(uci: &str) -> Move {
    uci.parse().expect("valid move")
}

pub(super) fn pos(fen: &str) -> Position {
    Position::from_fen(fen).expect("valid FEN")
}

pub(super) fn uci_list(moves: &[Move]) -> Vec<String> {
    moves.iter().map(ToString::to_string).collect()
}

/// A random, not necessarily legal, placement with random castling rights.
///
/// Pawns never stand on the first or last row.
pub(super) fn random_position(seed: u64) -> Position {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = PositionBuilder::new();
    for color in Color::BOTH {
        let count = rng.gen_range(1..=16);
        for _ in 0..count {
            let piece = Piece::ALL[rng.gen_range(0..Piece::ALL.len())];
            let square = if piece == Piece::Pawn {
                Square(rng.gen_range(8..56))
            } else {
                Square(rng.gen_range(0..64))
            };
            builder = builder.piece(square, color, piece);
        }
        if rng.gen_bool(0.5) {
            builder = builder.castle_kingside(color);
        }
        if rng.gen_bool(0.5) {
            builder = builder.castle_queenside(color);
        }
    }
    let side = if rng.gen_bool(0.5) {
        Color::White
    } else {
        Color::Black
    };
    builder.side_to_move(side).build()
}
