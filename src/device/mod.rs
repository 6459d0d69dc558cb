// src/device/mod.rs
//! Threshold device model and its noise source

pub mod traits;
pub mod noise;
pub mod threshold;
pub mod shared;

pub use traits::LogicDevice;
pub use noise::{GaussianNoise, NoiseDraw};
pub use threshold::{InputSample, ThresholdDevice};
pub use shared::SharedThresholdDevice;
