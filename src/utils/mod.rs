//! Common utility functions for logic-buffer
//!
//! - Range and finiteness validation for configuration values
//! - Millivolt grid conversions used by the sweep harness

pub mod validation;
pub mod conversion;

pub use validation::{
    ValidationError,
    ValidationResult,
    validate_finite,
    validate_range,
};

pub use conversion::{millivolts_to_volts, volts_to_millivolts};
