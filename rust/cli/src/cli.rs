//! Command-line definitions for `handsort`.

use clap::{Parser, Subcommand};

use crate::config::{ErrorPolicy, TiePolicy};

#[derive(Parser, Debug)]
#[command(
    name = "handsort",
    version,
    about = "Five-card poker hand evaluator and matchup tally"
)]
pub struct HandsortCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tally wins and ties over matchup lines (10 cards each: player 1 then player 2)
    Sort {
        /// Read lines from this file (.zst supported) instead of stdin
        #[arg(long)]
        input: Option<String>,
        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
        /// Override the configured tie policy
        #[arg(long, value_enum)]
        tie_policy: Option<TiePolicy>,
        /// Override the configured handling of malformed lines
        #[arg(long, value_enum)]
        on_error: Option<ErrorPolicy>,
    },
    /// Classify a single five-card hand
    Eval {
        /// Five card tokens, e.g. `7C 7D 7H 7S 2D`
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Compare two five-card hands
    Compare {
        /// Player 1's hand as one quoted string
        #[arg(long)]
        p1: String,
        /// Player 2's hand as one quoted string
        #[arg(long)]
        p2: String,
        #[arg(long)]
        json: bool,
    },
    /// Deal random matchup lines from a seeded deck
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        lines: usize,
    },
    /// Benchmark hand evaluation and comparison
    Bench {
        #[arg(long, default_value_t = 10_000)]
        iterations: u64,
        /// Deck seed; falls back to the configured seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}
