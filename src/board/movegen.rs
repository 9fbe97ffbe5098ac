//! Pseudo-legal move enumeration.
//!
//! Moves are produced per side in a fixed order: ascending origin square,
//! then ascending destination square, then promotion piece (knight, bishop,
//! rook, queen). Castling moves, short before long, come last.
//!
//! "Pseudo-legal" means the generator does not check whether the mover's
//! king is left in check; only castling through or out of check is rejected.

use super::generators::{
    bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves,
};
use super::view::{BoardView, CastleRightsView};
use super::{Bitboard, CastlePath, Color, Move, Piece, Square, PROMOTION_PIECES};

/// Typical number of pseudo-legal moves in a middlegame position.
const MOVES_CAPACITY: usize = 48;

/// Move generator over borrowed board and castling-rights state.
///
/// Holds only shared references; building one is free and every query is a
/// pure function of the borrowed state.
#[derive(Debug)]
pub struct MoveGen<'a, B, R> {
    pub(crate) board: &'a B,
    pub(crate) rights: &'a R,
}

impl<B, R> Clone for MoveGen<'_, B, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B, R> Copy for MoveGen<'_, B, R> {}

impl<'a, B: BoardView, R: CastleRightsView> MoveGen<'a, B, R> {
    #[must_use]
    pub fn new(board: &'a B, rights: &'a R) -> Self {
        MoveGen { board, rights }
    }

    /// Raw destinations of the piece on `square`, captures of either color
    /// included.
    ///
    /// # Panics
    /// Panics if `square` is empty. Callers only ask about occupied squares,
    /// so an empty one means the occupancy and piece lookups disagree.
    #[must_use]
    pub fn moves_from(&self, square: Square) -> Bitboard {
        let Some((color, piece)) = self.board.piece_at(square) else {
            panic!("moves_from called on empty square {square}");
        };
        let origin = Bitboard::from_square(square);
        let occupied = self.board.all_occupied();
        match piece {
            Piece::Pawn => pawn_moves(
                origin,
                color,
                occupied,
                self.board.occupancy(color.opponent()),
            ),
            Piece::Knight => knight_moves(origin),
            Piece::Bishop => bishop_moves(origin, occupied),
            Piece::Rook => rook_moves(origin, occupied),
            Piece::Queen => queen_moves(origin, occupied),
            Piece::King => king_moves(origin),
        }
    }

    /// All pseudo-legal moves for `side`, castling included.
    #[must_use]
    pub fn generate_moves(&self, side: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(MOVES_CAPACITY);
        let own = self.board.occupancy(side);
        let pawns = self.board.pieces_of(side, Piece::Pawn);
        let promotion_row = side.config().promotion_row;

        for from in own {
            let targets = self.moves_from(from) & !own;
            let promotes = pawns.contains(from);
            for to in targets {
                if promotes && to.row() == promotion_row {
                    moves.extend(
                        PROMOTION_PIECES
                            .iter()
                            .map(|&piece| Move::new_promotion(from, to, piece)),
                    );
                } else {
                    moves.push(Move::new(from, to));
                }
            }
        }

        self.push_castles(side, &mut moves);

        #[cfg(feature = "logging")]
        log::debug!("{side}: {} pseudo-legal moves", moves.len());

        moves
    }

    /// Appends the castle moves `side` may make.
    ///
    /// Opponent attacks are computed once and shared by both directions; the
    /// board cannot change within a single query.
    fn push_castles(&self, side: Color, moves: &mut Vec<Move>) {
        let (short, long) = self.rights.castle_rights(side);
        if !(short || long) {
            return;
        }

        let config = side.config();
        let king = config.king_start;
        let attacks = self.attacks(side.opponent());
        if attacks.contains(king) {
            #[cfg(feature = "logging")]
            log::trace!("{side} king on {king} is attacked, no castling");
            return;
        }

        let occupied = self.board.all_occupied();
        let mut try_castle = |path: &CastlePath| {
            if attacks.intersects(path.safe) {
                #[cfg(feature = "logging")]
                log::trace!("{side} castle to {} crosses an attacked square", path.king_to);
                return;
            }
            if occupied.intersects(path.empty) {
                #[cfg(feature = "logging")]
                log::trace!("{side} castle to {} is blocked", path.king_to);
                return;
            }
            moves.push(Move::new(king, path.king_to));
        };

        if short {
            try_castle(&config.short_castle);
        }
        if long {
            try_castle(&config.long_castle);
        }
    }
}
