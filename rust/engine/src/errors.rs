use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandError {
    #[error("Invalid card '{token}': {reason}")]
    Format { token: String, reason: String },
    #[error("Expected {expected} cards, got {actual}")]
    Arity { expected: usize, actual: usize },
}

impl HandError {
    pub(crate) fn format(token: &str, reason: impl Into<String>) -> Self {
        HandError::Format {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}
