// src/config/sweep_config.rs
//! Voltage sweep configuration

use crate::config::constants::{device, sweep};
use crate::utils::conversion::volts_to_millivolts;
use crate::utils::validation::{validate_finite, validate_range, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};

/// Millivolt grid walked by [`VoltageSweep`](crate::harness::VoltageSweep).
///
/// The sweep visits `start_mv, start_mv + step_mv, ...` while below `stop_mv`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SweepConfig {
    #[serde(default = "defaults::start_mv")]
    pub start_mv: i64,

    /// Exclusive upper bound
    #[serde(default = "defaults::stop_mv")]
    pub stop_mv: i64,

    #[serde(default = "defaults::step_mv")]
    pub step_mv: u32,

    /// Noise applied on every sweep step
    #[serde(default = "defaults::noise_sigma")]
    pub noise_sigma: f64,
}

mod defaults {
    use super::{device, sweep};

    pub fn start_mv() -> i64 { sweep::DEFAULT_START_MV }
    pub fn stop_mv() -> i64 { sweep::DEFAULT_STOP_MV }
    pub fn step_mv() -> u32 { sweep::DEFAULT_STEP_MV }
    pub fn noise_sigma() -> f64 { device::DEFAULT_NOISE_SIGMA }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start_mv: defaults::start_mv(),
            stop_mv: defaults::stop_mv(),
            step_mv: defaults::step_mv(),
            noise_sigma: defaults::noise_sigma(),
        }
    }
}

impl SweepConfig {
    /// Default grid from 0 V up to (excluding) `max_voltage_v`
    pub fn up_to_volts(max_voltage_v: f64) -> ValidationResult<Self> {
        Ok(Self {
            stop_mv: volts_to_millivolts(max_voltage_v)?,
            ..Self::default()
        })
    }

    pub fn with_noise_sigma(mut self, noise_sigma: f64) -> Self {
        self.noise_sigma = noise_sigma;
        self
    }

    pub fn validate(&self) -> ValidationResult<()> {
        validate_range("step_mv", self.step_mv, 1, u32::MAX)?;

        if self.stop_mv < self.start_mv {
            return Err(ValidationError::ConstraintViolation {
                fields: vec!["start_mv".to_string(), "stop_mv".to_string()],
                message: format!(
                    "stop ({} mV) must not precede start ({} mV)",
                    self.stop_mv, self.start_mv
                ),
            });
        }

        validate_finite("noise_sigma", self.noise_sigma)?;
        Ok(())
    }

    /// Number of grid points the sweep may visit
    pub fn step_count(&self) -> usize {
        if self.stop_mv <= self.start_mv || self.step_mv == 0 {
            return 0;
        }
        let span = self.stop_mv.abs_diff(self.start_mv);
        usize::try_from(span.div_ceil(self.step_mv as u64)).unwrap_or(usize::MAX)
    }
}
