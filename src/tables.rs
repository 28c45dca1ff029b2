//! Table construction (spec.md §4.1): the four fixed, read-only lookup
//! tables the evaluator addresses. Built once behind `once_cell::Lazy`,
//! the same caching idiom the teacher crate already uses for its own
//! `STRAIGHT_TABLE` in `lookup_eval.rs`.
//!
//! Ported from `poker_lite.build_straighttable` / `build_flushtable` /
//! `build_lowbittable` / `build_isflush` in the original Python source.

use itertools::Itertools;
use once_cell::sync::Lazy;

/// Sentinel returned by `LOWBITS[0]`. The original source returns `0xff`
/// even though it is smaller than a real 13-bit mask; the kicker-stripping
/// loops never dereference index 0 in a way that would observe the
/// difference, and `spec.md` calls out preserving this exact value.
const LOWBITS_SENTINEL: u16 = 0xff;

const MASK_SPACE: usize = 1 << 13; // 8192: every possible 13-bit rank mask
const IS_FLUSH_SIZE: usize = 57 * 7 + 1;

/// `LOWBITS[n]` is `n` with only its lowest set bit retained; `LOWBITS[0]`
/// is the sentinel above.
fn build_lowbits() -> Box<[u16]> {
    let mut table = vec![LOWBITS_SENTINEL; MASK_SPACE];
    for n in 1u32..MASK_SPACE as u32 {
        table[n as usize] = 1u16 << n.trailing_zeros();
    }
    table.into_boxed_slice()
}

/// For each 13-bit rank mask, the straight strength 1..10 it completes
/// (10 = broadway, 1 = the wheel A-2-3-4-5), or 0 if no straight.
fn build_straight_table() -> Box<[u8]> {
    let mut table = vec![0u8; MASK_SPACE];

    let rank_bit = |rank_index: usize| -> u16 { 1u16 << (12 - rank_index) };

    // Nine sequential straights (broadway down to 6-high), then the wheel.
    let mut straights: Vec<(Vec<usize>, u8)> = Vec::with_capacity(10);
    for i in 0..9usize {
        let core: Vec<usize> = (i..i + 5).collect();
        straights.push((core, (10 - i) as u8));
    }
    straights.push((vec![9, 10, 11, 12, 0], 1)); // wheel: 5,4,3,2,A

    for (core, value) in &straights {
        let core_mask: u16 = core.iter().fold(0u16, |m, &r| m | rank_bit(r));

        // The rank just above this straight's high card must not be folded
        // in as an "extra" card: a 6/7-card superset containing both this
        // straight and the next-higher one must resolve to the higher one.
        let first = core[0];
        let protected = if first == 0 { None } else { Some(first - 1) };

        let extras: Vec<usize> = (0..13usize)
            .filter(|r| !core.contains(r) && Some(*r) != protected)
            .collect();

        table[core_mask as usize] = *value;

        for &e in &extras {
            let mask6 = core_mask | rank_bit(e);
            table[mask6 as usize] = *value;
        }
        for combo in extras.iter().combinations(2) {
            let mask7 = core_mask | rank_bit(*combo[0]) | rank_bit(*combo[1]);
            table[mask7 as usize] = *value;
        }
    }

    table.into_boxed_slice()
}

/// For every 5/6/7-subset of the 13 ranks of a single suit: the straight
/// strength if it's a straight flush, else the top-5 rank bits.
fn build_flush_table(straight_table: &[u8], lowbits: &[u16]) -> Box<[u16]> {
    let mut table = vec![0u16; MASK_SPACE];
    let rank_bit = |i: usize| -> u16 { 1u16 << (12 - i) };
    let ranks: [usize; 13] = std::array::from_fn(|i| i);

    for k in [5usize, 6, 7] {
        for combo in ranks.iter().combinations(k) {
            let index: u16 = combo.iter().fold(0u16, |m, &&r| m | rank_bit(r));
            let idx = index as usize;
            let value = if straight_table[idx] != 0 {
                straight_table[idx] as u16
            } else {
                let mut v = index;
                for _ in 0..(k - 5) {
                    v ^= lowbits[v as usize];
                }
                v
            };
            table[idx] = value;
        }
    }

    table.into_boxed_slice()
}

/// Indexed by the "suit sum" of seven cards: the right-shift (a multiple
/// of 13) that selects the flushed suit's 13-bit rank set from a 52-bit
/// `BITS` sum, or `-1` if no suit has >= 5 cards.
fn build_is_flush() -> Box<[i8]> {
    const SUIT_TAGS: [u32; 4] = [0, 1, 8, 57];
    let mut table = vec![-1i8; IS_FLUSH_SIZE];

    for (suit_index, &tag) in SUIT_TAGS.iter().enumerate() {
        let flush_base = tag * 5;
        for combo in SUIT_TAGS.iter().combinations_with_replacement(2) {
            let index = (flush_base + combo[0] + combo[1]) as usize;
            table[index] = (suit_index * 13) as i8;
        }
    }

    table.into_boxed_slice()
}

pub static LOWBITS: Lazy<Box<[u16]>> = Lazy::new(build_lowbits);
pub static STRAIGHT_TABLE: Lazy<Box<[u8]>> = Lazy::new(build_straight_table);
pub static FLUSH_TABLE: Lazy<Box<[u16]>> = Lazy::new(|| build_flush_table(&STRAIGHT_TABLE, &LOWBITS));
pub static IS_FLUSH: Lazy<Box<[i8]>> = Lazy::new(build_is_flush);
