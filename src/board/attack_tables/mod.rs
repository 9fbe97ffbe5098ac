//! Attack tables for move generation.
//!
//! Leapers (knight, king, pawn captures) use precomputed per-square tables.
//! Sliders use Hyperbola Quintessence, a branch-free `o^(o-2r)` line scan;
//! ranks go through a small lookup table because byteswap does not mirror
//! bits within a row.

#![allow(clippy::needless_range_loop)] // Index loops are clearer for board coordinates
#![allow(clippy::inline_always)] // Hot path

mod tables;

pub(crate) use tables::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};

use once_cell::sync::Lazy;

const FILE_A: u64 = 0x0101010101010101;

/// Walks from `sq` in both directions along (dr, df) and collects the line.
fn line_mask(sq: usize, dr: isize, df: isize) -> u64 {
    let row = (sq / 8) as isize;
    let col = (sq % 8) as isize;
    let mut mask = 0u64;
    for sign in [1, -1] {
        let mut r = row;
        let mut f = col;
        while (0..8).contains(&r) && (0..8).contains(&f) {
            mask |= 1u64 << (r * 8 + f);
            r += sign * dr;
            f += sign * df;
        }
    }
    mask
}

/// Diagonal masks (index step +9)
static DIAG_MASKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut masks = [0u64; 64];
    for sq in 0..64 {
        masks[sq] = line_mask(sq, 1, 1);
    }
    masks
});

/// Anti-diagonal masks (index step +7)
static ANTI_MASKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut masks = [0u64; 64];
    for sq in 0..64 {
        masks[sq] = line_mask(sq, 1, -1);
    }
    masks
});

static FILE_MASKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut masks = [0u64; 64];
    for sq in 0..64 {
        masks[sq] = FILE_A << (sq % 8);
    }
    masks
});

/// Row attack lookup: `[8 * inner_occupancy + col]` -> attacks along row 0.
/// The 6-bit occupancy covers columns b-g; the edge columns never block.
static ROW_ATTACKS: Lazy<[u64; 512]> = Lazy::new(|| {
    let mut attacks = [0u64; 512];
    for occ_6bit in 0..64 {
        let blocks = |f: usize| (1..=6).contains(&f) && (occ_6bit & (1 << (f - 1))) != 0;
        for col in 0..8 {
            let mut attack = 0u64;
            for f in (col + 1)..8 {
                attack |= 1u64 << f;
                if blocks(f) {
                    break;
                }
            }
            for f in (0..col).rev() {
                attack |= 1u64 << f;
                if blocks(f) {
                    break;
                }
            }
            attacks[8 * occ_6bit + col] = attack;
        }
    }
    attacks
});

/// Attacks of a slider on `square` along one line (one bit per row).
#[inline(always)]
fn hyp_quint(occupied: u64, mask: u64, square: usize) -> u64 {
    let piece_bit = 1u64 << square;
    let forward = occupied & mask;
    let backward = forward.swap_bytes();
    let forward_attacks = forward.wrapping_sub(piece_bit.wrapping_mul(2));
    let backward_attacks = backward
        .wrapping_sub(piece_bit.swap_bytes().wrapping_mul(2))
        .swap_bytes();
    (forward_attacks ^ backward_attacks) & mask
}

#[inline(always)]
fn row_attacks(occupied: u64, square: usize) -> u64 {
    let row = square / 8;
    let col = square % 8;
    let occ_6bit = ((occupied >> (row * 8 + 1)) & 63) as usize;
    ROW_ATTACKS[8 * occ_6bit + col] << (row * 8)
}

/// Bishop attacks from `square` given the occupancy of both sides
#[inline]
pub(crate) fn bishop_attacks(square: usize, occupancy: u64) -> u64 {
    hyp_quint(occupancy, DIAG_MASKS[square], square)
        | hyp_quint(occupancy, ANTI_MASKS[square], square)
}

/// Rook attacks from `square` given the occupancy of both sides
#[inline]
pub(crate) fn rook_attacks(square: usize, occupancy: u64) -> u64 {
    hyp_quint(occupancy, FILE_MASKS[square], square) | row_attacks(occupancy, square)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference ray walk used to cross-check the table lookups.
    fn walk(square: usize, occupancy: u64, dirs: &[(isize, isize)]) -> u64 {
        let mut attacks = 0u64;
        for &(dr, df) in dirs {
            let mut r = (square / 8) as isize + dr;
            let mut f = (square % 8) as isize + df;
            while (0..8).contains(&r) && (0..8).contains(&f) {
                let bit = 1u64 << (r * 8 + f);
                attacks |= bit;
                if occupancy & bit != 0 {
                    break;
                }
                r += dr;
                f += df;
            }
        }
        attacks
    }

    #[test]
    fn test_rook_attacks_empty_board() {
        // Rook on e4 (row 4, col 4 = 36)
        let attacks = rook_attacks(36, 0);
        let expected = ((0xFFu64 << 32) | (FILE_A << 4)) & !(1u64 << 36);
        assert_eq!(attacks, expected);
    }

    #[test]
    fn test_bishop_attacks_empty_board() {
        // Bishop on e4 (36) reaches a8 (0), h1 (63), b1 (57) and h7 (15)
        let attacks = bishop_attacks(36, 0);
        for sq in [0, 63, 57, 15] {
            assert!(attacks & (1u64 << sq) != 0, "missing square {sq}");
        }
        assert_eq!(attacks & (1u64 << 36), 0);
        assert_eq!(attacks.count_ones(), 13);
    }

    #[test]
    fn test_rook_attacks_with_blockers() {
        // Rook on e4 (36), blockers on e6 (20) and c4 (34)
        let blockers = (1u64 << 20) | (1u64 << 34);
        let attacks = rook_attacks(36, blockers);
        assert!(attacks & (1u64 << 20) != 0);
        assert_eq!(attacks & (1u64 << 12), 0); // e7 behind blocker
        assert!(attacks & (1u64 << 34) != 0);
        assert_eq!(attacks & (1u64 << 33), 0); // b4 behind blocker
    }

    #[test]
    fn test_sliders_match_ray_walk() {
        const ROOK_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        const BISHOP_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
        for sq in 0..64 {
            for occ in [
                0u64,
                0xFF00FF00FF00FF00,
                0x00FF00FF00FF00FF,
                0x8142241818244281,
                0x0F0F_3C3C_F0F0_5AA5,
            ] {
                assert_eq!(rook_attacks(sq, occ), walk(sq, occ, &ROOK_DIRS), "rook {sq}");
                assert_eq!(
                    bishop_attacks(sq, occ),
                    walk(sq, occ, &BISHOP_DIRS),
                    "bishop {sq}"
                );
            }
        }
    }
}
