//! Bench command handler for hand evaluation performance benchmarking.
//!
//! Deals random matchups from a seeded deck, then times evaluating and
//! comparing both hands of each.

use crate::config;
use crate::error::CliError;
use handsort_engine::cards::Card;
use handsort_engine::deck::Deck;
use handsort_engine::hand::{compare, evaluate, HAND_SIZE};
use std::io::Write;

/// Upper bound on `--iterations`; every matchup is dealt up front.
pub const MAX_ITERATIONS: u64 = 1_000_000;

/// Seed used when neither `--seed` nor the configuration provides one.
const DEFAULT_SEED: u64 = 1;

/// Handle the bench command.
///
/// Dealing happens before the clock starts so only evaluation is measured.
pub fn handle_bench_command(
    iterations: u64,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if iterations > MAX_ITERATIONS {
        return Err(CliError::InvalidInput(format!(
            "iterations must be at most {}, got {}",
            MAX_ITERATIONS, iterations
        )));
    }
    let seed = match seed {
        Some(s) => s,
        None => config::load()
            .map_err(|e| CliError::Config(e.to_string()))?
            .seed
            .unwrap_or(DEFAULT_SEED),
    };
    tracing::debug!(seed, iterations, "dealing bench matchups");

    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();
    let mut hands: Vec<(Vec<Card>, Vec<Card>)> = Vec::new();
    for _ in 0..iterations {
        if deck.remaining() < HAND_SIZE * 2 {
            deck.shuffle();
        }
        let (Some(a), Some(b)) = (deck.deal(HAND_SIZE), deck.deal(HAND_SIZE)) else {
            return Err(CliError::InvalidInput("deck exhausted".into()));
        };
        hands.push((a, b));
    }

    let start = std::time::Instant::now();
    let mut p1_wins = 0u64;
    for (a, b) in &hands {
        if compare(&evaluate(a)?, &evaluate(b)?).is_gt() {
            p1_wins += 1;
        }
    }
    let dur = start.elapsed();
    tracing::debug!(iterations, p1_wins, "bench finished");
    writeln!(out, "Benchmark: {} matchups in {:?}", iterations, dur)?;
    Ok(())
}
