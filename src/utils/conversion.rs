//! Unit conversions between the sweep's millivolt grid and volts
//!
//! The sweep walks an integer millivolt grid so that repeated stepping never
//! accumulates floating point error; volts are only produced at the edge.

use crate::config::constants::sweep::MILLIVOLTS_PER_VOLT;
use crate::utils::validation::{validate_finite, ValidationResult};

/// Convert a grid tick to volts.
///
/// A single division keeps the result the correctly rounded value of the
/// decimal literal, so `millivolts_to_volts(1809) == 1.809`.
pub fn millivolts_to_volts(millivolts: i64) -> f64 {
    millivolts as f64 / MILLIVOLTS_PER_VOLT as f64
}

/// Convert volts to the nearest grid tick
pub fn volts_to_millivolts(volts: f64) -> ValidationResult<i64> {
    let volts = validate_finite("volts", volts)?;
    Ok((volts * MILLIVOLTS_PER_VOLT as f64).round() as i64)
}
