//! Threshold search by ascending voltage sweep
//!
//! Walks the millivolt grid of a [`SweepConfig`] from the bottom up, applying
//! each voltage to the device, and stops at the first one that switches it on.
//! With zero noise and the default 9 mV step against a 1.8 V threshold the
//! reported crossing is 1.809 V: 1.800 V is on the grid but is not strictly
//! above the threshold.

use crate::config::SweepConfig;
use crate::device::LogicDevice;
use crate::utils::conversion::millivolts_to_volts;
use crate::utils::validation::ValidationResult;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Result of a sweep
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepOutcome {
    /// First grid voltage that switched the device on
    pub crossing_v: Option<f64>,
    /// Grid points applied, including the crossing
    pub steps: usize,
    pub config: SweepConfig,
}

impl SweepOutcome {
    pub fn crossed(&self) -> bool {
        self.crossing_v.is_some()
    }
}

/// Validated sweep over a millivolt grid
#[derive(Debug, Clone)]
pub struct VoltageSweep {
    config: SweepConfig,
}

impl VoltageSweep {
    pub fn new(config: SweepConfig) -> ValidationResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Grid voltages in the order they are applied
    pub fn voltages(&self) -> impl Iterator<Item = f64> + '_ {
        (self.config.start_mv..self.config.stop_mv)
            .step_by(self.config.step_mv as usize)
            .map(millivolts_to_volts)
    }

    /// Drive `device` up the grid until it reports on
    pub fn run<D: LogicDevice>(&self, device: &mut D) -> SweepOutcome {
        debug!(
            start_mv = self.config.start_mv,
            stop_mv = self.config.stop_mv,
            step_mv = self.config.step_mv,
            noise_sigma = self.config.noise_sigma,
            "starting voltage sweep"
        );

        let mut steps = 0;
        for voltage_v in self.voltages() {
            steps += 1;
            device.apply_voltage_with_noise(voltage_v, self.config.noise_sigma);
            if device.is_on() {
                info!(crossing_v = voltage_v, steps, "threshold crossing found");
                return SweepOutcome {
                    crossing_v: Some(voltage_v),
                    steps,
                    config: self.config.clone(),
                };
            }
        }

        warn!(
            stop_v = millivolts_to_volts(self.config.stop_mv),
            steps,
            "no threshold crossing below sweep limit"
        );
        SweepOutcome {
            crossing_v: None,
            steps,
            config: self.config.clone(),
        }
    }
}
