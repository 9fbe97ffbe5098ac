//! Per-piece-type move patterns.
//!
//! Each generator maps a bitboard of pieces (one or many) to the union of the
//! squares they reach. Sliders stop at the first occupied square in each
//! direction and include it, so captures of either color are present; callers
//! strip their own pieces afterwards.

use super::attack_tables::{
    bishop_attacks, rook_attacks, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS,
};
use super::{Bitboard, Color};

#[inline]
fn union_of(pieces: Bitboard, attacks: impl Fn(usize) -> u64) -> Bitboard {
    Bitboard(pieces.iter().fold(0u64, |acc, sq| acc | attacks(sq.index())))
}

/// Diagonal capture squares of `pawns`, whether or not anything stands there.
#[must_use]
pub fn pawn_attacks(pawns: Bitboard, color: Color) -> Bitboard {
    union_of(pawns, |sq| PAWN_ATTACKS[color.index()][sq])
}

/// Pawn pushes (single, and double from the start row through an empty
/// square) plus diagonal captures of `enemies`.
#[must_use]
pub fn pawn_moves(
    pawns: Bitboard,
    color: Color,
    occupied: Bitboard,
    enemies: Bitboard,
) -> Bitboard {
    let empty = !occupied;
    let start = pawns & Bitboard::row_mask(color.config().pawn_start_row);
    let (single, double) = match color {
        Color::White => (
            pawns.shift_up() & empty,
            (start.shift_up() & empty).shift_up() & empty,
        ),
        Color::Black => (
            pawns.shift_down() & empty,
            (start.shift_down() & empty).shift_down() & empty,
        ),
    };
    single | double | (pawn_attacks(pawns, color) & enemies)
}

#[must_use]
pub fn knight_moves(knights: Bitboard) -> Bitboard {
    union_of(knights, |sq| KNIGHT_ATTACKS[sq])
}

#[must_use]
pub fn bishop_moves(bishops: Bitboard, occupied: Bitboard) -> Bitboard {
    union_of(bishops, |sq| bishop_attacks(sq, occupied.0))
}

#[must_use]
pub fn rook_moves(rooks: Bitboard, occupied: Bitboard) -> Bitboard {
    union_of(rooks, |sq| rook_attacks(sq, occupied.0))
}

#[must_use]
pub fn queen_moves(queens: Bitboard, occupied: Bitboard) -> Bitboard {
    bishop_moves(queens, occupied) | rook_moves(queens, occupied)
}

#[must_use]
pub fn king_moves(kings: Bitboard) -> Bitboard {
    union_of(kings, |sq| KING_ATTACKS[sq])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn bb(names: &[&str]) -> Bitboard {
        Bitboard::from_squares(&names.iter().map(|n| sq(n)).collect::<Vec<_>>())
    }

    #[test]
    fn test_white_pawn_pushes_from_start() {
        let pawn = bb(&["e2"]);
        let moves = pawn_moves(pawn, Color::White, pawn, Bitboard::EMPTY);
        assert_eq!(moves, bb(&["e3", "e4"]));
    }

    #[test]
    fn test_black_pawn_pushes_from_start() {
        let pawn = bb(&["d7"]);
        let moves = pawn_moves(pawn, Color::Black, pawn, Bitboard::EMPTY);
        assert_eq!(moves, bb(&["d6", "d5"]));
    }

    #[test]
    fn test_pawn_double_push_blocked_by_first_square() {
        let pawn = bb(&["e2"]);
        let blocker = bb(&["e3"]);
        let moves = pawn_moves(pawn, Color::White, pawn | blocker, blocker);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_pawn_double_push_blocked_by_second_square() {
        let pawn = bb(&["e2"]);
        let blocker = bb(&["e4"]);
        let moves = pawn_moves(pawn, Color::White, pawn | blocker, blocker);
        assert_eq!(moves, bb(&["e3"]));
    }

    #[test]
    fn test_pawn_no_double_push_off_start_row() {
        let pawn = bb(&["e3"]);
        let moves = pawn_moves(pawn, Color::White, pawn, Bitboard::EMPTY);
        assert_eq!(moves, bb(&["e4"]));
    }

    #[test]
    fn test_pawn_captures_only_enemies() {
        let pawn = bb(&["e4"]);
        let enemies = bb(&["d5"]);
        let friends = bb(&["f5"]);
        let moves = pawn_moves(pawn, Color::White, pawn | enemies | friends, enemies);
        assert_eq!(moves, bb(&["e5", "d5"]));
    }

    #[test]
    fn test_pawn_attacks_ignore_occupancy() {
        assert_eq!(pawn_attacks(bb(&["a2"]), Color::White), bb(&["b3"]));
        assert_eq!(pawn_attacks(bb(&["h7"]), Color::Black), bb(&["g6"]));
        assert_eq!(
            pawn_attacks(bb(&["c2", "f2"]), Color::White),
            bb(&["b3", "d3", "e3", "g3"])
        );
    }

    #[test]
    fn test_knight_moves_union() {
        let moves = knight_moves(bb(&["b1", "g1"]));
        assert_eq!(moves, bb(&["a3", "c3", "d2", "e2", "f3", "h3"]));
    }

    #[test]
    fn test_sliders_stop_on_blockers() {
        let occupied = bb(&["a1", "a4", "c1"]);
        assert_eq!(rook_moves(bb(&["a1"]), occupied), bb(&["a2", "a3", "a4", "b1", "c1"]));
        let occupied = bb(&["c1", "e3"]);
        assert_eq!(bishop_moves(bb(&["c1"]), occupied), bb(&["b2", "a3", "d2", "e3"]));
    }

    #[test]
    fn test_queen_is_rook_plus_bishop() {
        let queen = bb(&["d4"]);
        let occupied = bb(&["d4", "d6", "f6", "b4"]);
        assert_eq!(
            queen_moves(queen, occupied),
            rook_moves(queen, occupied) | bishop_moves(queen, occupied)
        );
        assert_eq!(queen_moves(queen, Bitboard::EMPTY).popcount(), 27);
    }

    #[test]
    fn test_king_moves_in_corner() {
        assert_eq!(king_moves(bb(&["h1"])), bb(&["g1", "g2", "h2"]));
    }

    #[test]
    fn test_empty_input_reaches_nothing() {
        assert!(knight_moves(Bitboard::EMPTY).is_empty());
        let everything = !Bitboard::EMPTY;
        assert!(queen_moves(Bitboard::EMPTY, everything).is_empty());
        assert!(pawn_moves(Bitboard::EMPTY, Color::Black, Bitboard::EMPTY, everything).is_empty());
    }
}
