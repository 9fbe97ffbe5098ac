//! Move type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PROMOTION_PIECES};
use super::square::Square;
use crate::board::error::MoveParseError;

/// A pseudo-legal move: origin, destination and an optional promotion piece.
///
/// Castling is represented as the king's two-square move (e.g. `e1g1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl Move {
    /// Create a plain move without promotion
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a promotion move
    #[inline]
    #[must_use]
    pub const fn new_promotion(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }
}

/// UCI long algebraic notation, e.g. `e2e4` or `a7a8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.letter())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(MoveParseError::InvalidLength {
                len: s.chars().count(),
            });
        }
        let square = |text: &str| {
            text.parse::<Square>()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: s.to_string(),
                })
        };
        let from = square(&s[0..2])?;
        let to = square(&s[2..4])?;

        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_letter(c) {
                Some(piece) if c.is_ascii_lowercase() && PROMOTION_PIECES.contains(&piece) => {
                    Some(piece)
                }
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}
