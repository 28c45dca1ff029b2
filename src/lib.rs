//! Seven-card poker hand evaluation and equity computation.
//!
//! The core evaluator (`eval`, `tables`, `incremental`) is a direct port of
//! the overlapping-bitfield scheme from `pokyr`'s `poker_lite` module: every
//! table is built once behind [`once_cell::sync::Lazy`] and the hot path is
//! panic-free on well-formed input. `multiway`, `enumeration`, and
//! `monte_carlo` build equity computation on top of it.

pub mod card;
pub mod cli;
pub mod codegen;
pub mod deck;
pub mod enumeration;
pub mod error;
pub mod eval;
pub mod incremental;
pub mod monte_carlo;
pub mod multiway;
pub mod parse;
pub mod tables;

pub use card::Card;
pub use error::{PokerError, PokerResult};
pub use eval::{hand_value, Category};
pub use multiway::{compare, holdem2p, multi_holdem, Outcome};
