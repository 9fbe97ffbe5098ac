use super::view::BoardView;
use super::{Bitboard, Color, Piece, Square};

/// Piece placement stored as one bitboard per (color, piece type).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard initial position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (col, piece) in (0u8..).zip(back_rank) {
            board.set_piece(Square(col), Color::Black, piece);
            board.set_piece(Square(8 + col), Color::Black, Piece::Pawn);
            board.set_piece(Square(48 + col), Color::White, Piece::Pawn);
            board.set_piece(Square(56 + col), Color::White, piece);
        }
        board
    }

    #[must_use]
    pub const fn empty() -> Self {
        Board {
            pieces: [[Bitboard(0); 6]; 2],
            occupied: [Bitboard(0); 2],
        }
    }

    /// Put a piece on `square`, replacing whatever stood there.
    pub fn set_piece(&mut self, square: Square, color: Color, piece: Piece) {
        self.remove_piece(square);
        let bit = Bitboard::from_square(square);
        self.pieces[color.index()][piece.index()] |= bit;
        self.occupied[color.index()] |= bit;
    }

    /// Clear `square`, returning the piece that stood there.
    pub fn remove_piece(&mut self, square: Square) -> Option<(Color, Piece)> {
        let found = self.piece_at(square)?;
        let (color, piece) = found;
        let keep = !Bitboard::from_square(square);
        self.pieces[color.index()][piece.index()] &= keep;
        self.occupied[color.index()] &= keep;
        Some(found)
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        let color = Color::BOTH
            .into_iter()
            .find(|c| self.occupied[c.index()].contains(square))?;
        Piece::ALL
            .into_iter()
            .find(|p| self.pieces[color.index()][p.index()].contains(square))
            .map(|p| (color, p))
    }

    #[inline]
    #[must_use]
    pub fn pieces_of(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn all_occupied(&self) -> Bitboard {
        self.occupied[0] | self.occupied[1]
    }
}

impl BoardView for Board {
    #[inline]
    fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        Board::piece_at(self, square)
    }

    #[inline]
    fn occupancy(&self, color: Color) -> Bitboard {
        Board::occupancy(self, color)
    }

    #[inline]
    fn pieces(&self, piece: Piece) -> Bitboard {
        self.pieces[0][piece.index()] | self.pieces[1][piece.index()]
    }

    #[inline]
    fn pieces_of(&self, color: Color, piece: Piece) -> Bitboard {
        Board::pieces_of(self, color, piece)
    }

    #[inline]
    fn all_occupied(&self) -> Bitboard {
        Board::all_occupied(self)
    }
}
