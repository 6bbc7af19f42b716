//! Error types for the remedy engine framework
//!
//! Per-file problems during recovery are recorded on the returned
//! [`RecoveryResult`](crate::RecoveryResult) rather than raised; these error
//! types cover the remaining fatal and pre-flight failure modes.

use thiserror::Error;

/// Main error type for recovery operations
#[derive(Error, Debug)]
pub enum RecoveryError {
    /// Action rejected by an engine's pre-flight validation
    #[error("Invalid action for engine '{engine}': {reason}")]
    InvalidAction { engine: String, reason: String },

    /// Parser could not be initialized
    #[error("Parser error: {0}")]
    ParserError(String),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic errors with context
    #[error("Recovery error: {0}")]
    Generic(String),
}

/// Result type alias for recovery operations
pub type Result<T> = std::result::Result<T, RecoveryError>;

/// Convert anyhow errors to RecoveryError
impl From<anyhow::Error> for RecoveryError {
    fn from(err: anyhow::Error) -> Self {
        RecoveryError::Generic(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_action_display() {
        let err = RecoveryError::InvalidAction {
            engine: "syntax_recovery".to_string(),
            reason: "missing target_files".to_string(),
        };
        assert!(err.to_string().contains("syntax_recovery"));
        assert!(err.to_string().contains("missing target_files"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: RecoveryError = io.into();
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: RecoveryError = anyhow::anyhow!("something failed").into();
        assert!(matches!(err, RecoveryError::Generic(_)));
    }
}
