//! Threshold device model
//!
//! A logic buffer with one input and one output. The output is on exactly when
//! the applied voltage, plus an optional Gaussian noise sample, is strictly
//! greater than the threshold. There is no hysteresis: every update is a fresh
//! comparison that ignores the previous output.
//!
//! Non-finite inputs follow IEEE comparison rules. A NaN voltage or a NaN noise
//! sample always yields `false`; `+inf` yields `true` and `-inf` yields `false`
//! against a finite threshold.

use crate::config::constants::device::{DEFAULT_SEED, DEFAULT_THRESHOLD_V};
use crate::config::DeviceConfig;
use crate::device::noise::{GaussianNoise, NoiseDraw};
use crate::device::traits::LogicDevice;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The last input seen by a device and the output it produced
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct InputSample {
    pub voltage_v: f64,
    pub noise_v: f64,
    pub output: bool,
}

impl InputSample {
    /// Voltage actually compared against the threshold
    pub fn effective_voltage(&self) -> f64 {
        self.voltage_v + self.noise_v
    }
}

/// Single-input, single-output threshold device
#[derive(Debug, Clone)]
pub struct ThresholdDevice {
    threshold_v: f64,
    output: bool,
    noise: GaussianNoise,
    noise_draw: NoiseDraw,
    last_input: Option<InputSample>,
}

impl ThresholdDevice {
    /// Create a device switching on above `threshold_v`, with its noise
    /// generator seeded from `seed`
    pub fn new(threshold_v: f64, seed: u64) -> Self {
        debug!(threshold_v, seed, "creating threshold device");
        Self {
            threshold_v,
            output: false,
            noise: GaussianNoise::new(seed),
            noise_draw: NoiseDraw::default(),
            last_input: None,
        }
    }

    /// Create a device from configuration
    pub fn from_config(config: &DeviceConfig) -> Self {
        Self::new(config.threshold_v, config.seed).with_noise_draw(config.noise_draw)
    }

    /// Select whether zero-sigma updates consume a noise sample
    pub fn with_noise_draw(mut self, noise_draw: NoiseDraw) -> Self {
        self.noise_draw = noise_draw;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold_v
    }

    pub fn seed(&self) -> u64 {
        self.noise.seed()
    }

    pub fn noise_draw(&self) -> NoiseDraw {
        self.noise_draw
    }

    /// Input and noise behind the current output, `None` before the first update
    pub fn last_input(&self) -> Option<InputSample> {
        self.last_input
    }

    /// Apply `value` volts plus a noise sample drawn with `noise_sigma`
    pub fn apply_voltage_with_noise(&mut self, value: f64, noise_sigma: f64) {
        let noise_v = self.noise.sample_with(noise_sigma, self.noise_draw);
        self.output = (value + noise_v) > self.threshold_v;
        self.last_input = Some(InputSample {
            voltage_v: value,
            noise_v,
            output: self.output,
        });
        trace!(value, noise_sigma, noise_v, output = self.output, "input applied");
    }

    /// Apply `value` volts without noise
    pub fn apply_voltage(&mut self, value: f64) {
        self.apply_voltage_with_noise(value, 0.0);
    }

    /// Current output state
    pub fn is_on(&self) -> bool {
        self.output
    }
}

impl Default for ThresholdDevice {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD_V, DEFAULT_SEED)
    }
}

impl LogicDevice for ThresholdDevice {
    fn apply_voltage_with_noise(&mut self, value: f64, noise_sigma: f64) {
        ThresholdDevice::apply_voltage_with_noise(self, value, noise_sigma);
    }

    fn is_on(&self) -> bool {
        ThresholdDevice::is_on(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_construction() {
        let device = ThresholdDevice::default();
        assert_eq!(device.threshold(), 1.8);
        assert_eq!(device.seed(), 1);
        assert_eq!(device.noise_draw(), NoiseDraw::SkipWhenZero);
        assert!(!device.is_on());
        assert!(device.last_input().is_none());
    }

    #[test]
    fn test_low_then_high_input() {
        let mut device = ThresholdDevice::new(1.8, 1);

        device.apply_voltage(1.2);
        assert!(!device.is_on());

        device.apply_voltage(2.5);
        assert!(device.is_on());
    }

    #[test]
    fn test_exact_threshold_is_off() {
        let mut device = ThresholdDevice::default();
        device.apply_voltage_with_noise(1.8, 0.0);
        assert!(!device.is_on());
    }

    #[test]
    fn test_no_hysteresis() {
        let mut device = ThresholdDevice::default();
        device.apply_voltage(2.5);
        assert!(device.is_on());
        device.apply_voltage(1.79);
        assert!(!device.is_on());
        device.apply_voltage(1.81);
        assert!(device.is_on());
    }

    #[test]
    fn test_read_is_idempotent() {
        let mut device = ThresholdDevice::default();
        device.apply_voltage_with_noise(1.9, 0.3);
        let first = device.is_on();
        for _ in 0..5 {
            assert_eq!(device.is_on(), first);
        }
    }

    #[test]
    fn test_last_input_tracks_invariant() {
        let mut device = ThresholdDevice::new(0.5, 9);
        for (value, sigma) in [(0.4, 0.2), (0.6, 0.0), (0.5, 1.0), (0.0, -0.3)] {
            device.apply_voltage_with_noise(value, sigma);
            let last = device.last_input().unwrap();
            assert_eq!(last.voltage_v, value);
            assert_eq!(last.output, device.is_on());
            assert_eq!(device.is_on(), last.effective_voltage() > device.threshold());
            if sigma == 0.0 {
                assert_eq!(last.noise_v, 0.0);
            }
        }
    }

    #[test]
    fn test_nan_input_is_off() {
        let mut device = ThresholdDevice::default();
        device.apply_voltage(2.5);
        device.apply_voltage(f64::NAN);
        assert!(!device.is_on());

        device.apply_voltage_with_noise(2.5, f64::NAN);
        assert!(!device.is_on());
    }

    #[test]
    fn test_infinite_inputs() {
        let mut device = ThresholdDevice::default();
        device.apply_voltage(f64::INFINITY);
        assert!(device.is_on());
        device.apply_voltage(f64::NEG_INFINITY);
        assert!(!device.is_on());
    }

    #[test]
    fn test_from_config() {
        let config = DeviceConfig {
            threshold_v: 0.7,
            seed: 99,
            noise_draw: NoiseDraw::Always,
        };
        let device = ThresholdDevice::from_config(&config);
        assert_eq!(device.threshold(), 0.7);
        assert_eq!(device.seed(), 99);
        assert_eq!(device.noise_draw(), NoiseDraw::Always);
    }

    #[test]
    fn test_devices_do_not_share_generator() {
        let mut solo = ThresholdDevice::new(1.8, 5);
        let mut paired = ThresholdDevice::new(1.8, 5);
        let mut neighbour = ThresholdDevice::new(1.8, 5);

        for _ in 0..20 {
            neighbour.apply_voltage_with_noise(1.8, 0.4);
            solo.apply_voltage_with_noise(1.8, 0.4);
            paired.apply_voltage_with_noise(1.8, 0.4);
            assert_eq!(solo.last_input(), paired.last_input());
        }
    }

    #[test]
    fn test_trait_dispatch() {
        fn drive<D: LogicDevice>(device: &mut D, value: f64) -> bool {
            device.apply_voltage(value);
            device.is_on()
        }

        let mut device = ThresholdDevice::default();
        assert!(!drive(&mut device, 1.0));
        assert!(drive(&mut device, 2.0));
    }
}
