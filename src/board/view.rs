//! Read-only views the move generator needs from its collaborators.
//!
//! The generator never owns or mutates board state. Anything that can answer
//! these queries can be enumerated; [`Board`](super::Board) and
//! [`CastlingRights`](super::CastlingRights) are the in-crate implementations.

use super::{Bitboard, CastlingRights, Color, Piece, Square};

/// Piece placement, as per-color and per-type bitboards.
///
/// Implementors must keep the usual invariants: a color's piece bitboards are
/// pairwise disjoint and their union is that color's occupancy.
pub trait BoardView {
    /// The piece on `square`, or `None` if it is empty
    fn piece_at(&self, square: Square) -> Option<(Color, Piece)>;

    /// All squares occupied by `color`
    fn occupancy(&self, color: Color) -> Bitboard;

    /// All squares holding `piece`, of either color
    fn pieces(&self, piece: Piece) -> Bitboard;

    /// Squares holding `piece` of `color`
    fn pieces_of(&self, color: Color, piece: Piece) -> Bitboard {
        self.occupancy(color) & self.pieces(piece)
    }

    fn all_occupied(&self) -> Bitboard {
        self.occupancy(Color::White) | self.occupancy(Color::Black)
    }
}

/// Castling rights as `(short, long)` per side.
pub trait CastleRightsView {
    fn castle_rights(&self, color: Color) -> (bool, bool);
}

impl CastleRightsView for CastlingRights {
    #[inline]
    fn castle_rights(&self, color: Color) -> (bool, bool) {
        (self.has(color, true), self.has(color, false))
    }
}
