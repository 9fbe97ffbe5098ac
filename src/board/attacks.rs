//! Side-wide attack maps.

use super::generators::{bishop_moves, king_moves, knight_moves, pawn_attacks, rook_moves};
use super::movegen::MoveGen;
use super::view::{BoardView, CastleRightsView};
use super::{Bitboard, Color, Piece};

impl<B: BoardView, R: CastleRightsView> MoveGen<'_, B, R> {
    /// Every square attacked by `side`.
    ///
    /// Pawns contribute their diagonal captures only. Queens are folded into
    /// the bishop and rook sets, which together cover the queen's pattern.
    #[must_use]
    pub fn attacks(&self, side: Color) -> Bitboard {
        let board = self.board;
        let occupied = board.all_occupied();
        let own = |piece| board.pieces_of(side, piece);
        let queens = own(Piece::Queen);

        pawn_attacks(own(Piece::Pawn), side)
            | knight_moves(own(Piece::Knight))
            | bishop_moves(own(Piece::Bishop) | queens, occupied)
            | rook_moves(own(Piece::Rook) | queens, occupied)
            | king_moves(own(Piece::King))
    }

    /// True if any of `squares` is attacked by `side`.
    #[inline]
    #[must_use]
    pub fn under_attack(&self, squares: Bitboard, side: Color) -> bool {
        squares.intersects(self.attacks(side))
    }
}
