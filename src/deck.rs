//! Deck / dealer (spec.md §4.8): the 52 cards minus a dead set, supporting
//! random sampling without replacement and deterministic iteration for
//! enumeration. Ported from `utils.Deck` in the original Python source.

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::{remaining_deck, Card};

/// The cards remaining after removing a dead set (cards already committed
/// to known hands or boards).
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck of the 52 cards minus `dead`.
    pub fn new(dead: &[Card]) -> Self {
        Deck { cards: remaining_deck(dead) }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The remaining cards in deterministic ascending-index order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Every k-combination of the remaining cards, in deterministic order,
    /// for exhaustive enumeration (spec.md §4.6).
    pub fn combinations(&self, k: usize) -> impl Iterator<Item = Vec<Card>> + '_ {
        self.cards.iter().copied().combinations(k)
    }

    /// Uniformly sample `n` cards without replacement.
    pub fn sample<R: Rng>(&self, rng: &mut R, n: usize) -> Vec<Card> {
        self.cards.choose_multiple(rng, n).copied().collect()
    }

    /// Sample `sum(counts)` cards without replacement and partition them
    /// into groups of the requested sizes, in the order given.
    pub fn deal<R: Rng>(&self, rng: &mut R, counts: &[usize]) -> Vec<Vec<Card>> {
        let total: usize = counts.iter().sum();
        let drawn = self.sample(rng, total);
        let mut result = Vec::with_capacity(counts.len());
        let mut i = 0;
        for &n in counts {
            result.push(drawn[i..i + n].to_vec());
            i += n;
        }
        result
    }

    /// Draw one random permutation of the remaining cards. Used by the
    /// Monte Carlo engine to amortize a single shuffle across several
    /// disjoint boards (spec.md §4.7).
    pub fn shuffled<R: Rng>(&self, rng: &mut R) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        cards
    }
}
