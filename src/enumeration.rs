//! Exhaustive enumeration engine (spec.md §4.6): walks every combination of
//! unknown board cards and computes per-player equity.
//!
//! Ported from `poker.full_enumeration` / `poker.enum2p` in the original
//! Python source.

use crate::card::Card;
use crate::deck::Deck;
use crate::multiway::{holdem2p, multi_holdem};

/// Compute each player's equity (win probability, ties counted as 1/k).
/// `board` may hold 0-5 known community cards; the remaining cards are
/// enumerated exhaustively. Equities sum to 1.0 (spec.md §8, invariant 4).
///
/// `full_enumeration(&[], _)` returns `[]`. A single hand always has
/// equity 1.0 (there is no one to lose to).
pub fn full_enumeration(hands: &[[Card; 2]], board: &[Card]) -> Vec<f64> {
    match hands.len() {
        0 => return Vec::new(),
        1 => return vec![1.0],
        2 => return enum2p(hands[0], hands[1], board).to_vec(),
        _ => {}
    }

    let dead: Vec<Card> = hands.iter().flat_map(|h| h.iter().copied()).chain(board.iter().copied()).collect();
    let deck = Deck::new(&dead);
    let needed = 5 - board.len();

    let mut wins = vec![0.0f64; hands.len()];
    let mut trials = 0u64;

    for completion in deck.combinations(needed) {
        let mut full_board = [Card::new(0); 5];
        full_board[..board.len()].copy_from_slice(board);
        full_board[board.len()..].copy_from_slice(&completion);

        let winners = multi_holdem(hands, full_board);
        let share = 1.0 / winners.len() as f64;
        for w in winners {
            wins[w] += share;
        }
        trials += 1;
    }

    wins.iter().map(|&w| w / trials as f64).collect()
}

/// Two-player specialization: tallies `[h1 wins, h2 wins, ties]` directly
/// instead of going through the general winners-list path.
pub fn enum2p(h1: [Card; 2], h2: [Card; 2], board: &[Card]) -> [f64; 2] {
    let dead: Vec<Card> = h1.iter().chain(h2.iter()).chain(board.iter()).copied().collect();
    let deck = Deck::new(&dead);
    let needed = 5 - board.len();

    let mut tally = [0u64; 3]; // h1, h2, tie

    for completion in deck.combinations(needed) {
        let mut full_board = [Card::new(0); 5];
        full_board[..board.len()].copy_from_slice(board);
        full_board[board.len()..].copy_from_slice(&completion);

        tally[holdem2p(h1, h2, full_board).as_index() as usize] += 1;
    }

    let total = (tally[0] + tally[1] + tally[2]) as f64;
    let ev1 = (tally[0] as f64 + 0.5 * tally[2] as f64) / total;
    [ev1, 1.0 - ev1]
}
