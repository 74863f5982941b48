//! Engine errors: validation failures carry a caller-facing message; everything
//! else is logged in full and reported opaquely.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Missing or empty required input. Reported verbatim, never retried.
    #[error("{0}")]
    Validation(String),
    /// Unexpected failure. Detail goes to the log, not to the caller.
    #[error("internal error: {0}")]
    Internal(String),
}

impl EngineError {
    pub fn validation(msg: impl Into<String>) -> Self {
        EngineError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        EngineError::Internal(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, EngineError::Validation(_))
    }

    /// Message safe to serialize into a response body.
    pub fn public_message(&self) -> &str {
        match self {
            EngineError::Validation(msg) => msg,
            EngineError::Internal(_) => "Internal server error",
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_public() {
        let e = EngineError::validation("No features provided");
        assert!(e.is_validation());
        assert_eq!(e.public_message(), "No features provided");
    }

    #[test]
    fn internal_detail_is_hidden() {
        let e = EngineError::internal("ndarray shape mismatch at (3, 8)");
        assert!(!e.is_validation());
        assert_eq!(e.public_message(), "Internal server error");
    }
}
