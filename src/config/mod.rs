// src/config/mod.rs
//! Configuration for the threshold device and the sweep harness

pub mod constants;
pub mod loader;
pub mod device_config;
pub mod sweep_config;

pub use constants::*;
pub use loader::{ConfigLoader, ConfigError};
pub use device_config::DeviceConfig;
pub use sweep_config::SweepConfig;

use crate::utils::validation::ValidationResult;
use serde::{Deserialize, Serialize};

/// Complete configuration
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct BufferConfig {
    #[serde(default)]
    pub device: DeviceConfig,

    #[serde(default)]
    pub sweep: SweepConfig,
}

impl BufferConfig {
    pub fn validate(&self) -> ValidationResult<()> {
        self.sweep.validate()
    }

    /// Summary for display/logging
    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            threshold_v: self.device.threshold_v,
            seed: self.device.seed,
            sweep_start_v: crate::utils::millivolts_to_volts(self.sweep.start_mv),
            sweep_stop_v: crate::utils::millivolts_to_volts(self.sweep.stop_mv),
            sweep_points: self.sweep.step_count(),
        }
    }
}

/// Configuration summary for display/logging
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub threshold_v: f64,
    pub seed: u64,
    pub sweep_start_v: f64,
    pub sweep_stop_v: f64,
    pub sweep_points: usize,
}
