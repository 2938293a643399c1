//! Diagnostic logging for the `handsort` binary.
//!
//! Events go to stderr so stdout stays reserved for results. The filter is
//! read from `HANDSORT_LOG` using `EnvFilter` directive syntax and defaults
//! to `warn`. Colors are used only when stderr is a terminal.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

pub const LOG_ENV: &str = "HANDSORT_LOG";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize logging for the application.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_logging() {
    let subscriber = fmt()
        .with_env_filter(filter())
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .finish();

    // A subscriber may already be installed (tests, embedding callers)
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_logging();
        init_logging();
        tracing::debug!("logging initialised twice");
    }
}
