//! logic-buffer: seeded threshold-device model of a logic buffer
//!
//! A logic buffer has one input and one output. The output switches on when
//! the applied voltage is strictly greater than a fixed threshold; there is no
//! hysteresis. The input can be perturbed by zero-mean Gaussian noise drawn
//! from a generator owned by, and seeded per, device, so runs are reproducible.
//!
//! - [`ThresholdDevice`]: the model itself
//! - [`harness`]: acceptance checks and a threshold-finding voltage sweep
//! - [`config`]: TOML and environment configuration
//!
//! # Quick Start
//!
//! ```rust
//! use logic_buffer::ThresholdDevice;
//!
//! let mut device = ThresholdDevice::new(1.8, 1);
//!
//! device.apply_voltage(1.2);
//! assert!(!device.is_on());
//!
//! device.apply_voltage(2.5);
//! assert!(device.is_on());
//!
//! // with 50 mV of input noise
//! device.apply_voltage_with_noise(1.75, 0.05);
//! let _ = device.is_on();
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod device;
pub mod error;
pub mod harness;
pub mod utils;

// Re-export commonly used types for convenience
pub use device::{
    GaussianNoise, InputSample, LogicDevice, NoiseDraw, SharedThresholdDevice, ThresholdDevice,
};

pub use config::{BufferConfig, ConfigLoader, DeviceConfig, SweepConfig};
pub use error::{BufferError, BufferResult};
pub use harness::{run_acceptance_checks, AcceptanceCheck, CheckReport, SweepOutcome, VoltageSweep};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "logic-buffer");
    }
}
