//! Precomputed attack tables for leaper pieces (knights, kings, pawns).

use once_cell::sync::Lazy;

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// (row, col) deltas are applied with row 0 = rank 8, so White captures
/// toward row - 1 and Black toward row + 1.
const WHITE_PAWN_DELTAS: [(isize, isize); 2] = [(-1, -1), (-1, 1)];
const BLACK_PAWN_DELTAS: [(isize, isize); 2] = [(1, -1), (1, 1)];

fn leaper_table(deltas: &[(isize, isize)]) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        let mut mask = 0u64;
        for &(dr, df) in deltas {
            let nr = r + dr;
            let nf = f + df;
            if (0..8).contains(&nr) && (0..8).contains(&nf) {
                mask |= 1u64 << ((nr as usize) * 8 + (nf as usize));
            }
        }
        *slot = mask;
    }
    attacks
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| leaper_table(&KING_DELTAS));

/// Indexed by color (White = 0, Black = 1), then square.
pub(crate) static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    [
        leaper_table(&WHITE_PAWN_DELTAS),
        leaper_table(&BLACK_PAWN_DELTAS),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_in_corner() {
        // a8 (0) reaches b6 (17) and c7 (10)
        assert_eq!(KNIGHT_ATTACKS[0], (1u64 << 17) | (1u64 << 10));
    }

    #[test]
    fn test_king_counts() {
        assert_eq!(KING_ATTACKS[0].count_ones(), 3);
        assert_eq!(KING_ATTACKS[27].count_ones(), 8);
        assert_eq!(KING_ATTACKS[60].count_ones(), 5);
    }

    #[test]
    fn test_pawn_attack_direction() {
        // White pawn on e2 (52) attacks d3 (43) and f3 (45)
        assert_eq!(PAWN_ATTACKS[0][52], (1u64 << 43) | (1u64 << 45));
        // Black pawn on e7 (12) attacks d6 (19) and f6 (21)
        assert_eq!(PAWN_ATTACKS[1][12], (1u64 << 19) | (1u64 << 21));
        // Edge files only attack inward
        assert_eq!(PAWN_ATTACKS[0][48].count_ones(), 1);
        // No attacks off the far edge
        assert_eq!(PAWN_ATTACKS[0][3], 0);
    }
}
