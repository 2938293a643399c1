//! # Test helpers
//!
//! - `cli_runner`: `CliRunner` spawns the compiled `handsort` binary with a
//!   scrubbed `HANDSORT_*` environment and captures stdout, stderr and the
//!   exit code.
//!
//! ```rust,ignore
//! use crate::helpers::cli_runner::CliRunner;
//!
//! let cli = CliRunner::new();
//! let res = cli.run_with_input(&["sort"], "TC JC QC KC AC 9C TC JC QC KC\n");
//! assert_eq!(res.exit_code, 0);
//! ```
pub mod cli_runner;
