//! Command handler modules for the handsort CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod bench;
mod cfg;
mod compare;
mod deal;
mod eval;
mod sort;

pub use bench::handle_bench_command;
pub use cfg::handle_cfg_command;
pub use compare::handle_compare_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use sort::{Tally, handle_sort_command};
