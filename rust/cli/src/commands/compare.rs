//! Two-hand comparison command.

use crate::error::CliError;
use handsort_engine::hand::{compare, evaluate_tokens};
use handsort_engine::matchup::Outcome;
use std::io::Write;

/// Handle the compare command.
///
/// `p1` and `p2` each hold five whitespace-separated card tokens. Prints both
/// classified hands and the winner.
pub fn handle_compare_command(
    p1: &str,
    p2: &str,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let tokens1: Vec<&str> = p1.split_whitespace().collect();
    let tokens2: Vec<&str> = p2.split_whitespace().collect();
    let h1 = evaluate_tokens(&tokens1)?;
    let h2 = evaluate_tokens(&tokens2)?;
    let outcome = Outcome::from(compare(&h1, &h2));

    if json {
        let display = serde_json::json!({
            "player1": h1,
            "player2": h2,
            "outcome": outcome,
        });
        let s = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
        writeln!(out, "{}", s)?;
        return Ok(());
    }

    writeln!(out, "player1: {}", h1)?;
    writeln!(out, "player2: {}", h2)?;
    let verdict = match outcome {
        Outcome::Player1 => "player1 wins",
        Outcome::Player2 => "player2 wins",
        Outcome::Tie => "tie",
    };
    writeln!(out, "result: {}", verdict)?;
    Ok(())
}
