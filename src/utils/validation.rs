//! Validation utilities for logic-buffer
//!
//! Range and finiteness checks used by configuration types before they are
//! turned into devices or sweeps.

use thiserror::Error;

/// Validation result type
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value out of valid range
    #[error("Field '{field}' value '{value}' is out of range [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: String,
        min: String,
        max: String,
    },
    /// NaN or infinite where a finite number is required
    #[error("Field '{field}' must be finite, got {value}")]
    NotFinite { field: String, value: f64 },
    /// Cross-field validation failure
    #[error("Constraint violation for fields [{}]: {message}", fields.join(", "))]
    ConstraintViolation {
        fields: Vec<String>,
        message: String,
    },
    /// Custom validation failure
    #[error("Validation error: {0}")]
    Custom(String),
}

/// Reject NaN and infinities
pub fn validate_finite(field: &str, value: f64) -> ValidationResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite {
            field: field.to_string(),
            value,
        })
    }
}

/// Check `min <= value <= max`
pub fn validate_range<T>(field: &str, value: T, min: T, max: T) -> ValidationResult<T>
where
    T: PartialOrd + ToString + Copy,
{
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(value)
}
