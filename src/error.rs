//! Boundary error type. The evaluator itself never returns a `Result`: it's
//! only given well-formed `Card`s by construction. Errors only arise where
//! untrusted input crosses in — parsing card strings and the CLI.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PokerError {
    #[error("invalid rank character {0:?}")]
    InvalidRank(char),

    #[error("invalid suit character {0:?}")]
    InvalidSuit(char),

    #[error("card string {0:?} must be exactly 2 characters (rank + suit)")]
    MalformedCard(String),

    #[error("duplicate card {0} supplied")]
    DuplicateCard(String),

    #[error("expected {expected} hole cards, got {actual}")]
    WrongHoleCardCount { expected: usize, actual: usize },

    #[error("board must have between 0 and 5 cards, got {0}")]
    InvalidBoardSize(usize),

    #[error("failed to write table header: {0}")]
    TableWrite(String),
}

pub type PokerResult<T> = Result<T, PokerError>;
