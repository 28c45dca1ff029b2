//! Multi-way winner selection (spec.md §4.5) and the two-player hot path.

use crate::card::{all_unique, Card};
use crate::eval::hand_value;
use crate::incremental::{dohand, doboard, BoardInfo};

/// `0` = first hand wins, `1` = second hand wins, `2` = tie.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    First,
    Second,
    Tie,
}

impl Outcome {
    pub fn as_index(self) -> u8 {
        match self {
            Outcome::First => 0,
            Outcome::Second => 1,
            Outcome::Tie => 2,
        }
    }
}

/// Compare two complete seven-card hands.
pub fn compare(h1: [Card; 7], h2: [Card; 7]) -> Outcome {
    debug_assert!(
        all_unique(&h1.iter().chain(h2.iter()).copied().collect::<Vec<_>>()),
        "duplicate card across compared hands"
    );
    outcome_from_values(hand_value(h1), hand_value(h2))
}

#[inline]
fn outcome_from_values(v1: u64, v2: u64) -> Outcome {
    if v1 > v2 {
        Outcome::First
    } else if v2 > v1 {
        Outcome::Second
    } else {
        Outcome::Tie
    }
}

/// Branch-free two-hand holdem comparison: a specialized hot path that
/// skips the general multi-way machinery for the common N = 2 case.
pub fn holdem2p(hole1: [Card; 2], hole2: [Card; 2], board: [Card; 5]) -> Outcome {
    debug_assert!(
        all_unique(&hole1.iter().chain(hole2.iter()).chain(board.iter()).copied().collect::<Vec<_>>()),
        "duplicate card across hole cards and board"
    );
    let info = doboard(board);
    let v1 = dohand(hole1, &info);
    let v2 = dohand(hole2, &info);
    outcome_from_values(v1, v2)
}

/// Return the sorted indices of the hands achieving the maximum value on
/// the given board (with ties). For N = 2 this delegates to `holdem2p`.
pub fn multi_holdem(hands: &[[Card; 2]], board: [Card; 5]) -> Vec<usize> {
    debug_assert!(
        all_unique(
            &hands
                .iter()
                .flat_map(|h| h.iter().copied())
                .chain(board.iter().copied())
                .collect::<Vec<_>>()
        ),
        "duplicate card across hole cards and board"
    );

    if hands.len() == 2 {
        return match holdem2p(hands[0], hands[1], board) {
            Outcome::First => vec![0],
            Outcome::Second => vec![1],
            Outcome::Tie => vec![0, 1],
        };
    }

    let info = doboard(board);
    winners_from_board_info(hands, &info)
}

fn winners_from_board_info(hands: &[[Card; 2]], info: &BoardInfo) -> Vec<usize> {
    let mut best = 0u64;
    let mut winners = Vec::new();
    for (i, &hole) in hands.iter().enumerate() {
        let v = dohand(hole, info);
        if v > best {
            best = v;
            winners.clear();
            winners.push(i);
        } else if v == best {
            winners.push(i);
        }
    }
    winners
}
