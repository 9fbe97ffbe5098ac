//! Per-side board geometry.
//!
//! Everything that differs between White and Black (pawn direction rows, the
//! king's home square, the castling paths) is collected in one [`SideConfig`]
//! record per color, looked up once via [`Color::config`].

use super::bitboard::Bitboard;
use super::piece::Color;
use super::square::Square;

/// Squares involved in one castling direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlePath {
    /// Squares the king crosses or lands on; none may be attacked.
    pub safe: Bitboard,
    /// Squares between king and rook; all must be empty.
    pub empty: Bitboard,
    /// Where the king ends up.
    pub king_to: Square,
}

/// Fixed geometry for one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SideConfig {
    /// Row a pawn of this side promotes on.
    pub promotion_row: u8,
    /// Row this side's pawns start on (double pushes allowed from here).
    pub pawn_start_row: u8,
    pub king_start: Square,
    /// King-side (short) castle.
    pub short_castle: CastlePath,
    /// Queen-side (long) castle.
    pub long_castle: CastlePath,
}

const fn bb(squares: &[u8]) -> Bitboard {
    let mut bits = 0u64;
    let mut i = 0;
    while i < squares.len() {
        bits |= 1u64 << squares[i];
        i += 1;
    }
    Bitboard(bits)
}

const fn side_config(king: u8, promotion_row: u8, pawn_start_row: u8) -> SideConfig {
    SideConfig {
        promotion_row,
        pawn_start_row,
        king_start: Square(king),
        short_castle: CastlePath {
            safe: bb(&[king + 1, king + 2]),
            empty: bb(&[king + 1, king + 2]),
            king_to: Square(king + 2),
        },
        long_castle: CastlePath {
            safe: bb(&[king - 1, king - 2]),
            empty: bb(&[king - 1, king - 2, king - 3]),
            king_to: Square(king - 2),
        },
    }
}

static WHITE: SideConfig = side_config(Square::E1.0, 0, 6);
static BLACK: SideConfig = side_config(Square::E8.0, 7, 1);

impl Color {
    /// Board geometry for this side
    #[inline]
    #[must_use]
    pub fn config(self) -> &'static SideConfig {
        match self {
            Color::White => &WHITE,
            Color::Black => &BLACK,
        }
    }
}
