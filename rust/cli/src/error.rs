//! Error types for the CLI application.
//!
//! This module defines the error types used throughout the CLI for better
//! error propagation and handling.
//!
//! ## Batch Validation Errors
//!
//! The `BatchValidationError<T>` type attaches the failing item (a line
//! number for `sort`) to a message, both when a batch is aborted and when a
//! malformed line is skipped with a warning.

use std::fmt;

use handsort_engine::errors::HandError;

/// Custom error type for CLI operations.
///
/// This enum encompasses all error types that can occur during CLI execution,
/// allowing for proper error propagation using the `?` operator.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input: malformed cards, hands, or matchup lines
    InvalidInput(String),

    /// Configuration error
    Config(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

// Automatic conversion from std::io::Error to CliError
impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<HandError> for CliError {
    fn from(error: HandError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl<T: fmt::Display> From<BatchValidationError<T>> for CliError {
    fn from(error: BatchValidationError<T>) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

/// Generic error type for batch validation operations.
///
/// # Type Parameters
///
/// * `T` - Context type identifying the failed item (e.g., a line label).
///   Must implement `Display` for error formatting.
///
/// # Examples
///
/// ```rust
/// use handsort_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: "line 5",
///     message: "Expected 10 cards, got 9".to_string(),
/// };
/// assert_eq!(error.to_string(), "line 5: Expected 10 cards, got 9");
/// ```
#[derive(Debug)]
pub struct BatchValidationError<T> {
    /// Context identifying the item that failed validation
    pub item_context: T,
    /// Descriptive error message
    pub message: String,
}

impl<T: std::fmt::Display> std::fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}
