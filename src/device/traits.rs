// src/device/traits.rs
//! Core trait for single-input threshold devices

/// A device that turns an input voltage into an on/off output
pub trait LogicDevice {
    /// Apply `value` volts, perturbed by zero-mean Gaussian noise with
    /// standard deviation `noise_sigma`, and recompute the output
    fn apply_voltage_with_noise(&mut self, value: f64, noise_sigma: f64);

    /// Apply `value` volts without noise
    fn apply_voltage(&mut self, value: f64) {
        self.apply_voltage_with_noise(value, 0.0);
    }

    /// Current output state
    fn is_on(&self) -> bool;
}
