use std::str::FromStr;

use super::error::FenError;
use super::{Board, CastlingRights, Color, Piece, Position, Square};

/// FEN of the standard initial position
pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn parse_placement(field: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in (0u8..).zip(&ranks) {
        let mut col = 0usize;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                col += skip as usize;
                continue;
            }
            let piece = Piece::from_letter(c).ok_or(FenError::InvalidPiece { char: c })?;
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let square = Square::from_row_col(row, col as u8).ok_or(FenError::WrongFileCount {
                rank: 8 - row as usize,
                files: col + 1,
            })?;
            board.set_piece(square, color, piece);
            col += 1;
        }
        if col != 8 {
            return Err(FenError::WrongFileCount {
                rank: 8 - row as usize,
                files: col,
            });
        }
    }
    Ok(board)
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        match c {
            'K' => rights.set(Color::White, true),
            'Q' => rights.set(Color::White, false),
            'k' => rights.set(Color::Black, true),
            'q' => rights.set(Color::Black, false),
            _ => return Err(FenError::InvalidCastling { char: c }),
        }
    }
    Ok(rights)
}

fn parse_counter(field: Option<&str>, default: u32) -> Result<u32, FenError> {
    field.map_or(Ok(default), |text| {
        text.parse().map_err(|_| FenError::InvalidCounter {
            found: text.to_string(),
        })
    })
}

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// Placement, side to move and castling are required. The en passant
    /// field is checked but not kept (en passant is not generated); missing
    /// move counters default to `0 1`.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let result = Self::parse_fen(fen);
        #[cfg(feature = "logging")]
        if let Err(err) = &result {
            log::debug!("rejected FEN '{fen}': {err}");
        }
        result
    }

    fn parse_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 3 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let board = parse_placement(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let castling = parse_castling(parts[2])?;

        if let Some(&ep) = parts.get(3) {
            if ep != "-" && ep.parse::<Square>().is_err() {
                return Err(FenError::InvalidEnPassant {
                    found: ep.to_string(),
                });
            }
        }

        Ok(Position {
            board,
            castling,
            side_to_move,
            halfmove_clock: parse_counter(parts.get(4).copied(), 0)?,
            fullmove_number: parse_counter(parts.get(5).copied(), 1)?,
        })
    }

    /// Convert the position to FEN notation. The en passant field is always `-`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8u8 {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..8u8 {
                match self.board.piece_at(Square(row * 8 + col)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            text.push_str(&empty.to_string());
                            empty = 0;
                        }
                        text.push(piece.fen_letter(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        format!(
            "{} {} {} - {} {}",
            rows.join("/"),
            active,
            self.castling.to_fen_field(),
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_round_trip() {
        let pos = Position::from_fen(STARTPOS_FEN).unwrap();
        assert_eq!(pos, Position::startpos());
        assert_eq!(pos.to_fen(), STARTPOS_FEN);
    }

    #[test]
    fn test_square_mapping() {
        let pos: Position = "4k3/8/8/8/8/8/8/R3K3 b Q - 3 40".parse().unwrap();
        assert_eq!(pos.board().piece_at(Square::E8), Some((Color::Black, Piece::King)));
        assert_eq!(pos.board().piece_at(Square::E1), Some((Color::White, Piece::King)));
        assert_eq!(pos.board().piece_at(Square::A1), Some((Color::White, Piece::Rook)));
        assert_eq!(pos.side_to_move(), Color::Black);
        assert!(pos.castling_rights().has(Color::White, false));
        assert!(!pos.castling_rights().has(Color::White, true));
        assert_eq!(pos.to_fen(), "4k3/8/8/8/8/8/8/R3K3 b Q - 3 40");
    }

    #[test]
    fn test_counters_are_optional() {
        let pos = Position::from_fen("8/8/8/8/8/8/8/K6k w -").unwrap();
        assert_eq!(pos.to_fen(), "8/8/8/8/8/8/8/K6k w - - 0 1");
    }

    #[test]
    fn test_rejects_malformed_fen() {
        assert_eq!(
            Position::from_fen("8/8/8 w"),
            Err(FenError::TooFewParts { found: 2 })
        );
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::WrongRankCount { found: 7 })
        );
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8/7x w - - 0 1"),
            Err(FenError::InvalidPiece { char: 'x' })
        );
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8/9 w - - 0 1"),
            Err(FenError::InvalidPiece { char: '9' })
        );
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8/7 w - - 0 1"),
            Err(FenError::WrongFileCount { rank: 1, files: 7 })
        );
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8/8K w - - 0 1"),
            Err(FenError::WrongFileCount { rank: 1, files: 9 })
        );
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8/8 x - - 0 1"),
            Err(FenError::InvalidSideToMove {
                found: "x".to_string()
            })
        );
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8/8 w KX - 0 1"),
            Err(FenError::InvalidCastling { char: 'X' })
        );
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8/8 w - e9 0 1"),
            Err(FenError::InvalidEnPassant {
                found: "e9".to_string()
            })
        );
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8/8 w - - x 1"),
            Err(FenError::InvalidCounter {
                found: "x".to_string()
            })
        );
    }
}
