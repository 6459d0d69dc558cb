// src/error.rs
//! Unified error type for logic-buffer
//!
//! The device model itself never fails. Errors come from the surrounding
//! configuration, sweep setup and command-line input, and all convert into
//! [`BufferError`] so callers can use `?` across module boundaries.

use crate::config::ConfigError;
use crate::utils::validation::ValidationError;
use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum BufferError {
    /// Loading or parsing configuration failed
    #[error("[CONFIG] {0}")]
    Config(#[from] ConfigError),

    /// A configuration value is out of its valid domain
    #[error("[VALIDATION] {0}")]
    Validation(#[from] ValidationError),

    /// Operator input could not be interpreted
    #[error("[INPUT] Invalid {field}: '{value}' ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Encoding a report for output failed
    #[error("[SERIALIZATION] {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("[IO] {0}")]
    Io(#[from] std::io::Error),
}

impl BufferError {
    pub fn invalid_input(field: &str, value: &str, reason: impl Into<String>) -> Self {
        BufferError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for logic-buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = BufferError::invalid_input("max voltage", "abc", "not a number");
        let display = err.to_string();
        assert!(display.starts_with("[INPUT]"));
        assert!(display.contains("max voltage"));
        assert!(display.contains("'abc'"));
    }

    #[test]
    fn test_validation_conversion() {
        fn fails() -> BufferResult<()> {
            Err(ValidationError::Custom("bad".to_string()))?;
            Ok(())
        }

        match fails() {
            Err(BufferError::Validation(ValidationError::Custom(msg))) => assert_eq!(msg, "bad"),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_config_error_source_preserved() {
        let err: BufferError = ConfigError::FileNotFound("missing.toml".to_string()).into();
        assert!(err.to_string().contains("missing.toml"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BufferError>();
    }
}
