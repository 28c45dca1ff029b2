//! Incremental evaluator (spec.md §4.4): splits the scalar evaluator into a
//! board-preprocessing step and a per-hand finishing step, so that N hands
//! on one board cost O(board) + N * O(hand) instead of N * O(board + hand).
//!
//! Ported from `poker_lite.doboard` / `poker_lite.dohand`.

use crate::card::{all_unique, Card, BITS, RANKS, SUITS};
use crate::eval::{phase2, CARD_MASK, FLUSH, SF, STRAIGHT};
use crate::tables::{FLUSH_TABLE, IS_FLUSH, STRAIGHT_TABLE};

/// The partial aggregates produced by processing just the board. Immutable
/// once built: the same `BoardInfo` can be reused for any number of hands.
#[derive(Clone, Copy, Debug)]
pub struct BoardInfo {
    val: u64,
    flush_bits: u64,
    straight: u16,
    suit_sum: u32,
    board: [Card; 5],
}

/// Process the board's cards: accumulate the paired lanes (without the
/// final XOR reduction, since the hole cards still need to be folded in),
/// the straight mask, the flush-suit projection, and the suit sum.
pub fn doboard(board: [Card; 5]) -> BoardInfo {
    debug_assert!(all_unique(&board), "duplicate card on board");

    let mut val: u64 = 0;
    let mut flush_bits: u64 = 0;
    let mut straight: u16 = 0;
    let mut suit_sum: u32 = 0;

    for c in board {
        let idx = c.index() as usize;
        let mut r = RANKS[idx] as u64;
        straight |= RANKS[idx];
        flush_bits += BITS[idx];
        suit_sum += SUITS[idx];
        while r & val != 0 {
            r <<= 13;
        }
        val |= r;
    }

    BoardInfo { val, flush_bits, straight, suit_sum, board }
}

/// Resume from a `BoardInfo` with a two-card hole hand. Independent of the
/// order of the two hole cards; calling this repeatedly with the same
/// `board_info` for the same hand always yields the same result.
pub fn dohand(hole: [Card; 2], board_info: &BoardInfo) -> u64 {
    debug_assert!(
        hole[0] != hole[1] && !board_info.board.contains(&hole[0]) && !board_info.board.contains(&hole[1]),
        "duplicate card across hole and board"
    );

    let [c1, c2] = hole;
    let i1 = c1.index() as usize;
    let i2 = c2.index() as usize;

    let suit_sum = board_info.suit_sum + SUITS[i1] + SUITS[i2];
    if IS_FLUSH[suit_sum as usize] != -1 {
        let shift = IS_FLUSH[suit_sum as usize] as u32;
        let flush_bits = board_info.flush_bits + BITS[i1] + BITS[i2];
        let lane = (flush_bits >> shift) & CARD_MASK;
        let lane_idx = lane as usize;
        return if STRAIGHT_TABLE[lane_idx] != 0 {
            SF | FLUSH_TABLE[lane_idx] as u64
        } else {
            FLUSH | FLUSH_TABLE[lane_idx] as u64
        };
    }

    let straight = board_info.straight | RANKS[i1] | RANKS[i2];
    if STRAIGHT_TABLE[straight as usize] != 0 {
        return STRAIGHT | STRAIGHT_TABLE[straight as usize] as u64;
    }

    let mut val = board_info.val;
    let mut r = RANKS[i1] as u64;
    while r & val != 0 {
        r <<= 13;
    }
    val |= r;

    let mut r = RANKS[i2] as u64;
    while r & val != 0 {
        r <<= 13;
    }
    val |= r;

    phase2(val ^ (val >> 13))
}
