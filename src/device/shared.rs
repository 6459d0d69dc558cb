//! Lock-protected handle for devices driven from more than one thread
//! Location: src/device/shared.rs

use crate::device::threshold::ThresholdDevice;
use crate::device::traits::LogicDevice;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle to one [`ThresholdDevice`].
///
/// An update followed by a read is only meaningful if no other update lands in
/// between, so callers that need the output of their own input should use
/// [`SharedThresholdDevice::apply_and_read`].
#[derive(Debug, Clone)]
pub struct SharedThresholdDevice {
    inner: Arc<Mutex<ThresholdDevice>>,
}

impl SharedThresholdDevice {
    pub fn new(device: ThresholdDevice) -> Self {
        Self {
            inner: Arc::new(Mutex::new(device)),
        }
    }

    /// Apply an input and read the resulting output under a single lock
    pub fn apply_and_read(&self, value: f64, noise_sigma: f64) -> bool {
        let mut device = self.inner.lock();
        device.apply_voltage_with_noise(value, noise_sigma);
        device.is_on()
    }

    /// Run `f` with exclusive access to the device
    pub fn with_device<R>(&self, f: impl FnOnce(&mut ThresholdDevice) -> R) -> R {
        let mut device = self.inner.lock();
        f(&mut device)
    }
}

impl From<ThresholdDevice> for SharedThresholdDevice {
    fn from(device: ThresholdDevice) -> Self {
        Self::new(device)
    }
}

impl LogicDevice for SharedThresholdDevice {
    fn apply_voltage_with_noise(&mut self, value: f64, noise_sigma: f64) {
        self.inner.lock().apply_voltage_with_noise(value, noise_sigma);
    }

    fn is_on(&self) -> bool {
        self.inner.lock().is_on()
    }
}
