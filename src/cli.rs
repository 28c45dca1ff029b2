//! Thin CLI layer (SPEC_FULL.md §2, item 13): argument parsing with
//! `clap`, colored summaries, and a table renderer, following the same
//! `main.rs -> cli::run()` shape as the teacher crate.

use std::fmt;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use comfy_table::Table;

use crate::codegen::write_c_header;
use crate::eval::{hand_value, Category};
use crate::monte_carlo::{monte_carlo, seeded_rng};
use crate::multiway::{holdem2p, Outcome};
use crate::parse::{parse_board, parse_hole};

#[derive(Parser)]
#[command(name = "holdem-equity", about = "Seven-card hold'em hand evaluation and equity")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a single seven-card hand (two hole + five board cards).
    Eval {
        /// Two hole cards, e.g. "As Ks".
        hole: String,
        /// Five board cards, e.g. "Qs Js Ts 2c 7d".
        board: String,
    },
    /// Head-to-head equity between two or more hole hands.
    Equity {
        /// One or more hole hands, each as a quoted two-card string.
        #[arg(required = true, num_args = 2..)]
        hole: Vec<String>,
        /// Known board cards (0-5), default empty (preflop).
        #[arg(long, default_value = "")]
        board: String,
        /// Number of Monte Carlo trials; 0 requests exact enumeration.
        #[arg(long, default_value_t = 50_000)]
        trials: u32,
    },
    /// Dump the evaluator's lookup tables as a C header.
    DumpTables {
        /// Output path.
        #[arg(long, default_value = "cpokertables.h")]
        out: String,
    },
}

struct EvalSummary {
    category: Category,
    value: u64,
}

impl fmt::Display for EvalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} (value: {:#018x})", self.category, self.value)
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    match run_command(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run_command(command: Command) -> crate::error::PokerResult<()> {
    match command {
        Command::Eval { hole, board } => cmd_eval(&hole, &board),
        Command::Equity { hole, board, trials } => cmd_equity(&hole, &board, trials),
        Command::DumpTables { out } => cmd_dump_tables(&out),
    }
}

fn cmd_eval(hole: &str, board: &str) -> crate::error::PokerResult<()> {
    let hole = parse_hole(hole)?;
    let board = parse_board(board)?;
    if board.len() != 5 {
        return Err(crate::error::PokerError::InvalidBoardSize(board.len()));
    }
    let full: [crate::card::Card; 7] = [
        hole[0], hole[1], board[0], board[1], board[2], board[3], board[4],
    ];
    let value = hand_value(full);
    let summary = EvalSummary { category: Category::from_value(value), value };
    println!("{}", summary.to_string().green());
    Ok(())
}

fn cmd_equity(hole: &[String], board: &str, trials: u32) -> crate::error::PokerResult<()> {
    let hands: Vec<[crate::card::Card; 2]> =
        hole.iter().map(|s| parse_hole(s)).collect::<crate::error::PokerResult<_>>()?;
    let board = parse_board(board)?;

    let equities = if trials == 0 {
        crate::enumeration::full_enumeration(&hands, &board)
    } else if hands.len() == 2 {
        let mut rng = seeded_rng(0);
        crate::monte_carlo::monte_carlo_seeded(&mut rng, &hands, &board, trials)
    } else {
        monte_carlo(&hands, &board, trials)
    };

    let mut table = Table::new();
    table.set_header(vec!["Hand", "Equity"]);
    for (hand, eq) in hole.iter().zip(equities.iter()) {
        table.add_row(vec![hand.clone(), format!("{:.2}%", eq * 100.0)]);
    }
    println!("{table}");
    Ok(())
}

fn cmd_dump_tables(out: &str) -> crate::error::PokerResult<()> {
    write_c_header(out).map_err(|e| crate::error::PokerError::TableWrite(e.to_string()))?;
    println!("{} wrote {}", "ok:".green().bold(), out);
    Ok(())
}

/// Human-readable outcome string for a two-player showdown, used by the CLI
/// but kept free of `println!` so it's independently testable.
pub fn describe_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::First => "Hand 1 wins",
        Outcome::Second => "Hand 2 wins",
        Outcome::Tie => "Split pot",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::from_rank_suit(rank, suit)
    }

    #[test]
    fn describe_outcome_covers_all_variants() {
        assert_eq!(describe_outcome(Outcome::First), "Hand 1 wins");
        assert_eq!(describe_outcome(Outcome::Second), "Hand 2 wins");
        assert_eq!(describe_outcome(Outcome::Tie), "Split pot");
    }

    #[test]
    fn cli_parses_eval_subcommand() {
        let cli = Cli::try_parse_from(["holdem-equity", "eval", "As Ks", "Qs Js Ts 2c 7d"]).unwrap();
        match cli.command {
            Command::Eval { hole, board } => {
                assert_eq!(hole, "As Ks");
                assert_eq!(board, "Qs Js Ts 2c 7d");
            }
            _ => panic!("expected Eval"),
        }
    }

    #[test]
    fn holdem2p_matches_describe_outcome() {
        let hole1 = [c(Rank::Ace, Suit::Spades), c(Rank::Ace, Suit::Diamonds)];
        let hole2 = [c(Rank::King, Suit::Clubs), c(Rank::King, Suit::Hearts)];
        let board = [
            c(Rank::Two, Suit::Spades),
            c(Rank::Seven, Suit::Hearts),
            c(Rank::Nine, Suit::Diamonds),
            c(Rank::Jack, Suit::Clubs),
            c(Rank::Three, Suit::Hearts),
        ];
        let outcome = holdem2p(hole1, hole2, board);
        assert_eq!(describe_outcome(outcome), "Hand 1 wins");
    }
}
