//! Matchup tally command.
//!
//! Each input line holds ten card tokens: five for player 1, then five for
//! player 2. Every line is classified and compared, and the command reports
//! how many lines each player won and how many were exact ties.
//!
//! Blank lines are ignored. A malformed line either aborts the whole run
//! ([`ErrorPolicy::Abort`]) or is reported and skipped ([`ErrorPolicy::Skip`]).

use std::io::{BufRead, Write};

use handsort_engine::matchup::{Matchup, Outcome};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{self, ErrorPolicy, TiePolicy};
use crate::error::{BatchValidationError, CliError};
use crate::io_utils::read_input_lines;
use crate::ui;

/// Win/tie counts accumulated over a batch of matchups.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub player1: u64,
    pub player2: u64,
    pub ties: u64,
    /// Lines evaluated
    pub lines: u64,
    /// Malformed lines dropped under [`ErrorPolicy::Skip`]
    pub skipped: u64,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome, policy: TiePolicy) {
        self.lines += 1;
        match (outcome, policy) {
            (Outcome::Player1, _) => self.player1 += 1,
            (Outcome::Player2, _) => self.player2 += 1,
            (Outcome::Tie, TiePolicy::Separate) => self.ties += 1,
            (Outcome::Tie, TiePolicy::Legacy) => {
                self.ties += 1;
                self.player2 += 1;
            }
        }
    }
}

/// Handle the sort command.
///
/// Flags override the configured tie and error policies. Lines come from
/// `input` when given, otherwise from `stdin`.
pub fn handle_sort_command(
    input: Option<String>,
    json: bool,
    tie_policy: Option<TiePolicy>,
    on_error: Option<ErrorPolicy>,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let tie_policy = tie_policy.unwrap_or(cfg.tie_policy);
    let on_error = on_error.unwrap_or(cfg.on_error);

    let lines = read_input_lines(input.as_deref(), stdin).map_err(CliError::InvalidInput)?;
    let tally = tally_lines(&lines, tie_policy, on_error, err)?;
    info!(
        lines = tally.lines,
        skipped = tally.skipped,
        ?tie_policy,
        "tally complete"
    );

    if json {
        let s = serde_json::to_string_pretty(&tally).map_err(std::io::Error::other)?;
        writeln!(out, "{}", s)?;
    } else {
        writeln!(out, "player1 win: {}", tally.player1)?;
        writeln!(out, "player2 win: {}", tally.player2)?;
        writeln!(out, "tie: {}", tally.ties)?;
        if tally.skipped > 0 {
            writeln!(out, "skipped: {}", tally.skipped)?;
        }
    }
    Ok(())
}

fn tally_lines(
    lines: &[String],
    tie_policy: TiePolicy,
    on_error: ErrorPolicy,
    err: &mut dyn Write,
) -> Result<Tally, CliError> {
    let mut tally = Tally::default();
    for (idx, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        match Matchup::parse_line(line) {
            Ok(m) => {
                let outcome = m.outcome();
                debug!(line = line_no, ?outcome, "matchup evaluated");
                tally.record(outcome, tie_policy);
            }
            Err(e) => {
                let failure = BatchValidationError {
                    item_context: format!("line {}", line_no),
                    message: e.to_string(),
                };
                match on_error {
                    ErrorPolicy::Abort => return Err(failure.into()),
                    ErrorPolicy::Skip => {
                        warn!(line = line_no, error = %e, "skipping malformed line");
                        ui::display_warning(err, &failure.to_string())?;
                        tally.skipped += 1;
                    }
                }
            }
        }
    }
    Ok(tally)
}
