//! Monte Carlo equity engine (spec.md §4.7): random-sampling approximation of
//! `full_enumeration` for boards too large to exhaust, plus `ehs`
//! (effective hand strength against a random opponent range).
//!
//! Ported from `poker.monte_carlo` / `poker.ehs`. The key amortization in
//! the original is drawing a single random permutation of the remaining
//! deck per outer iteration and partitioning it into `nboards` disjoint
//! boards, rather than reshuffling per trial. The teacher crate's
//! `equity.rs` drives its simulation batches with `rayon`; we keep that
//! default parallel path (one outer iteration per rayon task) and add a
//! generic `R: Rng` path for callers that need a reproducible,
//! single-threaded run (spec.md §6 concurrency note).

use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::card::Card;
use crate::deck::Deck;
use crate::multiway::multi_holdem;

/// `nboards = (52 - dead) / needed`: how many disjoint boards of `needed`
/// cards each can be dealt from one shuffle of the remaining deck.
fn nboards(remaining: usize, needed: usize) -> usize {
    (remaining / needed).max(1)
}

/// Estimate each player's equity by repeatedly drawing one random
/// permutation of the remaining deck and partitioning it into `nboards`
/// disjoint boards per permutation (spec.md §4.7), amortizing the shuffle
/// cost across all of them. Outer iterations run in parallel via `rayon`,
/// each with its own thread-local RNG; not reproducible across runs — use
/// [`monte_carlo_seeded`] when that's required.
///
/// The effective trial count is `(trials / nboards) * nboards`, which may
/// be slightly less than `trials` due to flooring.
pub fn monte_carlo(hands: &[[Card; 2]], board: &[Card], trials: u32) -> Vec<f64> {
    if hands.len() < 2 {
        return vec![1.0; hands.len()];
    }

    let needed = 5 - board.len();
    let dead: Vec<Card> = hands.iter().flat_map(|h| h.iter().copied()).chain(board.iter().copied()).collect();
    let deck = Deck::new(&dead);
    let boards_per_shuffle = nboards(deck.len(), needed);
    let outer_iters = trials / boards_per_shuffle as u32;
    let effective_trials = (outer_iters * boards_per_shuffle as u32) as f64;

    let wins: Vec<f64> = (0..outer_iters)
        .into_par_iter()
        .map(|_| {
            let mut rng = rand::thread_rng();
            let deals = deck.deal(&mut rng, &vec![needed; boards_per_shuffle]);
            let mut row = vec![0.0f64; hands.len()];
            for completion in deals {
                let mut full_board = [Card::new(0); 5];
                full_board[..board.len()].copy_from_slice(board);
                full_board[board.len()..].copy_from_slice(&completion);

                let winners = multi_holdem(hands, full_board);
                let share = 1.0 / winners.len() as f64;
                for w in winners {
                    row[w] += share;
                }
            }
            row
        })
        .reduce(
            || vec![0.0f64; hands.len()],
            |mut a, b| {
                for i in 0..a.len() {
                    a[i] += b[i];
                }
                a
            },
        );

    wins.into_iter().map(|w| w / effective_trials).collect()
}

/// Deterministic, single-threaded counterpart to [`monte_carlo`]: reuses a
/// caller-supplied `R: Rng` so the same seed reproduces the same estimate.
/// Implements the same `nboards`-per-shuffle batching.
pub fn monte_carlo_seeded<R: Rng>(
    rng: &mut R,
    hands: &[[Card; 2]],
    board: &[Card],
    trials: u32,
) -> Vec<f64> {
    if hands.len() < 2 {
        return vec![1.0; hands.len()];
    }

    let needed = 5 - board.len();
    let dead: Vec<Card> = hands.iter().flat_map(|h| h.iter().copied()).chain(board.iter().copied()).collect();
    let deck = Deck::new(&dead);
    let boards_per_shuffle = nboards(deck.len(), needed);
    let outer_iters = trials / boards_per_shuffle as u32;
    let effective_trials = (outer_iters * boards_per_shuffle as u32) as f64;

    let mut wins = vec![0.0f64; hands.len()];
    for _ in 0..outer_iters {
        let deals = deck.deal(rng, &vec![needed; boards_per_shuffle]);
        for completion in deals {
            let mut full_board = [Card::new(0); 5];
            full_board[..board.len()].copy_from_slice(board);
            full_board[board.len()..].copy_from_slice(&completion);

            let winners = multi_holdem(hands, full_board);
            let share = 1.0 / winners.len() as f64;
            for w in winners {
                wins[w] += share;
            }
        }
    }

    wins.into_iter().map(|w| w / effective_trials).collect()
}

/// Effective hand strength: equity of `hole` against `samples` independent
/// random opponent hands drawn from the cards not already accounted for by
/// `hole`/`board`, averaged over `trials` board completions each. Ported
/// from `poker.ehs`, which exists precisely because a single opponent hand
/// is too noisy an opponent model on its own.
pub fn ehs<R: Rng>(rng: &mut R, hole: [Card; 2], board: &[Card], samples: u32, trials: u32) -> f64 {
    let dead: Vec<Card> = hole.iter().chain(board.iter()).copied().collect();
    let deck = Deck::new(&dead);

    let mut total = 0.0;
    for _ in 0..samples {
        let opp_hole_vec = deck.sample(rng, 2);
        let opp_hole = [opp_hole_vec[0], opp_hole_vec[1]];
        let equities = monte_carlo_seeded(rng, &[hole, opp_hole], board, trials);
        total += equities[0];
    }
    total / samples as f64
}

/// Convenience: a thread-seeded `StdRng` for callers that want the
/// reproducible path without managing their own RNG state.
pub fn seeded_rng(seed: u64) -> rand::rngs::StdRng {
    rand::rngs::StdRng::seed_from_u64(seed)
}
