//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of each value
//! (default, environment, or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "tie_policy": {
//!     "value": "separate",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "tie_policy": {
            "value": config.tie_policy,
            "source": sources.tie_policy,
        },
        "on_error": {
            "value": config.on_error,
            "source": sources.on_error,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cfg_displays_json_output() {
        unsafe {
            std::env::remove_var("HANDSORT_CONFIG");
            std::env::remove_var("HANDSORT_TIE_POLICY");
            std::env::remove_var("HANDSORT_ON_ERROR");
            std::env::remove_var("HANDSORT_SEED");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_cfg_command(&mut out, &mut err);
        assert!(result.is_ok(), "cfg command should succeed");

        let json: serde_json::Value =
            serde_json::from_slice(&out).expect("cfg output should be valid JSON");
        assert_eq!(json["tie_policy"]["value"], "separate");
        assert_eq!(json["tie_policy"]["source"], "default");
        assert_eq!(json["on_error"]["value"], "abort");
        assert!(json["seed"]["value"].is_null());
        assert!(err.is_empty(), "should not write to stderr on success");
    }

    #[test]
    #[serial]
    fn test_cfg_reports_env_source() {
        unsafe {
            std::env::remove_var("HANDSORT_CONFIG");
            std::env::set_var("HANDSORT_SEED", "77");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        unsafe {
            std::env::remove_var("HANDSORT_SEED");
        }
        result.unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["seed"]["value"], 77);
        assert_eq!(json["seed"]["source"], "env");
    }
}
