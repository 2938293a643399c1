//! # handsort CLI Library
//!
//! Command-line front end for the `handsort-engine` five-card hand evaluator.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand. [`run_with_input`] does the same with an
//! explicit input stream in place of stdin.
//!
//! ## Example Usage
//!
//! ```
//! use std::io::Cursor;
//! let mut input = Cursor::new("9C 9D 8D 7C 3C 2S KD TH 9H 8H\n");
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = handsort_cli::run_with_input(["handsort", "sort"], &mut input, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().starts_with("player1 win: 1"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `sort`: Tally player 1 wins, player 2 wins and ties over matchup lines
//! - `eval`: Classify one five-card hand
//! - `compare`: Compare two five-card hands
//! - `deal`: Print random matchup lines from a seeded deck
//! - `bench`: Benchmark hand evaluation
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;

use cli::{Commands, HandsortCli};

use commands::{
    handle_bench_command, handle_cfg_command, handle_compare_command, handle_deal_command,
    handle_eval_command, handle_sort_command,
};

pub use commands::Tally;
pub use error::{BatchValidationError, CliError};

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand
/// handler. `sort` reads its lines from stdin unless `--input` is given.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`], reading `sort` input from `input` instead of stdin.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["sort", "eval", "compare", "deal", "bench", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HandsortCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                write_or_exit!(out, "{}", e);
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: handsort <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: handsort --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Sort {
            input: path,
            json,
            tie_policy,
            on_error,
        } => handle_sort_command(path, json, tie_policy, on_error, input, out, err),
        Commands::Eval { cards, json } => handle_eval_command(&cards, json, out),
        Commands::Compare { p1, p2, json } => handle_compare_command(&p1, &p2, json, out),
        Commands::Deal { seed, lines } => handle_deal_command(seed, lines, out),
        Commands::Bench { iterations, seed } => handle_bench_command(iterations, seed, out),
        // cfg reports its own error details
        Commands::Cfg => match handle_cfg_command(out, err) {
            Ok(()) => return exit_code::SUCCESS,
            Err(_) => return exit_code::ERROR,
        },
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
