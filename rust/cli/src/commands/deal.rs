//! Deal command handler.
//!
//! Prints random matchup lines in the format `sort` reads. Each line is drawn
//! from a freshly shuffled 52-card deck, so the ten cards on a line are
//! distinct. The seed makes output reproducible.

use crate::config;
use crate::error::CliError;
use handsort_engine::cards::Card;
use handsort_engine::deck::Deck;
use handsort_engine::matchup::LINE_TOKENS;
use std::io::Write;

/// Handle the deal command.
///
/// The seed falls back to the configured seed, then to a random one.
pub fn handle_deal_command(
    seed: Option<u64>,
    lines: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = match seed {
        Some(s) => s,
        None => config::load()
            .map_err(|e| CliError::Config(e.to_string()))?
            .seed
            .unwrap_or_else(rand::random),
    };
    tracing::debug!(seed, lines, "dealing matchups");

    let mut deck = Deck::new_with_seed(seed);
    for _ in 0..lines {
        deck.shuffle();
        let cards = deck
            .deal(LINE_TOKENS)
            .ok_or_else(|| CliError::InvalidInput("deck exhausted".into()))?;
        writeln!(out, "{}", format_line(&cards))?;
    }
    Ok(())
}

fn format_line(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
