//! Cross-module properties from spec.md §8: order independence, category
//! monotonicity, determinism, equities summing to one, two-player
//! specialization consistency, and incremental/scalar equivalence.

use holdem_equity::card::{Card, Rank, Suit};
use holdem_equity::enumeration::full_enumeration;
use holdem_equity::eval::hand_value;
use holdem_equity::monte_carlo::{monte_carlo_seeded, seeded_rng};
use holdem_equity::multiway::{holdem2p, multi_holdem};

fn c(rank: Rank, suit: Suit) -> Card {
    Card::from_rank_suit(rank, suit)
}

#[test]
fn seven_card_value_is_order_independent() {
    let mut hand = [
        c(Rank::Ace, Suit::Spades),
        c(Rank::King, Suit::Hearts),
        c(Rank::Queen, Suit::Diamonds),
        c(Rank::Jack, Suit::Clubs),
        c(Rank::Nine, Suit::Spades),
        c(Rank::Four, Suit::Hearts),
        c(Rank::Two, Suit::Diamonds),
    ];
    let baseline = hand_value(hand);
    for _ in 0..6 {
        hand.rotate_left(1);
        assert_eq!(hand_value(hand), baseline);
    }
}

#[test]
fn multi_holdem_matches_two_player_path_for_two_hands() {
    let hands = [
        [c(Rank::Ace, Suit::Spades), c(Rank::Ace, Suit::Diamonds)],
        [c(Rank::King, Suit::Clubs), c(Rank::King, Suit::Hearts)],
    ];
    let board = [
        c(Rank::Two, Suit::Spades),
        c(Rank::Seven, Suit::Hearts),
        c(Rank::Nine, Suit::Diamonds),
        c(Rank::Jack, Suit::Clubs),
        c(Rank::Three, Suit::Hearts),
    ];
    let via_multi = multi_holdem(&hands, board);
    let via_2p = holdem2p(hands[0], hands[1], board);
    let expected = match via_2p {
        holdem_equity::multiway::Outcome::First => vec![0],
        holdem_equity::multiway::Outcome::Second => vec![1],
        holdem_equity::multiway::Outcome::Tie => vec![0, 1],
    };
    assert_eq!(via_multi, expected);
}

#[test]
fn multi_holdem_concrete_three_way_scenario() {
    // 4h Js, 3h Jc, 4d 5s on As Ks Kh 8d Ah -> jacks-up two pair ties the board.
    let hands = [
        [c(Rank::Four, Suit::Hearts), c(Rank::Jack, Suit::Spades)],
        [c(Rank::Three, Suit::Hearts), c(Rank::Jack, Suit::Clubs)],
        [c(Rank::Four, Suit::Diamonds), c(Rank::Five, Suit::Spades)],
    ];
    let board = [
        c(Rank::Ace, Suit::Spades),
        c(Rank::King, Suit::Spades),
        c(Rank::King, Suit::Hearts),
        c(Rank::Eight, Suit::Diamonds),
        c(Rank::Ace, Suit::Hearts),
    ];
    assert_eq!(multi_holdem(&hands, board), vec![0, 1]);
}

#[test]
fn exact_equities_sum_to_one_across_hand_counts() {
    let pair = [
        [c(Rank::Three, Suit::Spades), c(Rank::Deuce, Suit::Clubs)],
        [c(Rank::Five, Suit::Clubs), c(Rank::Deuce, Suit::Hearts)],
    ];
    let equities = full_enumeration(&pair, &[]);
    let sum: f64 = equities.iter().sum();
    assert!((sum - 1.0).abs() < 1e-9);

    let triple = [
        [c(Rank::Eight, Suit::Clubs), c(Rank::Queen, Suit::Diamonds)],
        [c(Rank::Nine, Suit::Hearts), c(Rank::Nine, Suit::Spades)],
        [c(Rank::Four, Suit::Clubs), c(Rank::Three, Suit::Diamonds)],
    ];
    let equities3 = full_enumeration(&triple, &[]);
    let sum3: f64 = equities3.iter().sum();
    assert!((sum3 - 1.0).abs() < 1e-9);
}

#[test]
fn monte_carlo_seeded_is_deterministic_across_runs() {
    let hands = [
        [c(Rank::Ace, Suit::Hearts), c(Rank::King, Suit::Hearts)],
        [c(Rank::Queen, Suit::Spades), c(Rank::Queen, Suit::Clubs)],
    ];
    let mut r1 = seeded_rng(77);
    let mut r2 = seeded_rng(77);
    let a = monte_carlo_seeded(&mut r1, &hands, &[], 2000);
    let b = monte_carlo_seeded(&mut r2, &hands, &[], 2000);
    assert_eq!(a, b);
}

#[test]
fn incremental_equivalence_across_random_boards() {
    use holdem_equity::incremental::{dohand, doboard};

    let boards = [
        [
            c(Rank::Two, Suit::Spades),
            c(Rank::Seven, Suit::Diamonds),
            c(Rank::Nine, Suit::Clubs),
            c(Rank::Jack, Suit::Hearts),
            c(Rank::King, Suit::Spades),
        ],
        [
            c(Rank::Ace, Suit::Clubs),
            c(Rank::Ace, Suit::Diamonds),
            c(Rank::Ace, Suit::Hearts),
            c(Rank::King, Suit::Clubs),
            c(Rank::King, Suit::Diamonds),
        ],
    ];
    let hole = [c(Rank::Queen, Suit::Hearts), c(Rank::Ten, Suit::Diamonds)];

    for board in boards {
        let info = doboard(board);
        let incremental = dohand(hole, &info);
        let scalar = hand_value([hole[0], hole[1], board[0], board[1], board[2], board[3], board[4]]);
        assert_eq!(incremental, scalar);
    }
}
