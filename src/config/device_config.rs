// src/config/device_config.rs
//! Threshold device configuration

use crate::config::constants::device;
use crate::device::NoiseDraw;
use serde::{Deserialize, Serialize};

/// Construction parameters for a [`ThresholdDevice`](crate::device::ThresholdDevice).
///
/// Any threshold and any seed are accepted; there is nothing to validate.
/// Seeds above `i64::MAX` cannot be written to TOML.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DeviceConfig {
    #[serde(default = "defaults::threshold_v")]
    pub threshold_v: f64,

    #[serde(default = "defaults::seed")]
    pub seed: u64,

    #[serde(default)]
    pub noise_draw: NoiseDraw,
}

mod defaults {
    use super::device;

    pub fn threshold_v() -> f64 { device::DEFAULT_THRESHOLD_V }
    pub fn seed() -> u64 { device::DEFAULT_SEED }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            threshold_v: defaults::threshold_v(),
            seed: defaults::seed(),
            noise_draw: NoiseDraw::default(),
        }
    }
}
