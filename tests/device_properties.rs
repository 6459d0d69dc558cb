// tests/device_properties.rs
//! Behavioural properties of the threshold device

use logic_buffer::{LogicDevice, NoiseDraw, ThresholdDevice};
use proptest::prelude::*;

#[test]
fn test_low_input_is_off() {
    let mut device = ThresholdDevice::new(1.8, 1);
    device.apply_voltage(1.2);
    assert!(!device.is_on());
}

#[test]
fn test_high_input_after_low_is_on() {
    let mut device = ThresholdDevice::new(1.8, 1);
    device.apply_voltage(1.2);
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
fn test_zero_sigma_policies_diverge_for_later_noise() {
    let mut skip = ThresholdDevice::new(0.0, 8);
    let mut always = ThresholdDevice::new(0.0, 8).with_noise_draw(NoiseDraw::Always);

    skip.apply_voltage(1.0);
    always.apply_voltage(1.0);
    assert_eq!(skip.is_on(), always.is_on());

    skip.apply_voltage_with_noise(0.0, 1.0);
    always.apply_voltage_with_noise(0.0, 1.0);
    let skip_noise = skip.last_input().unwrap().noise_v;
    let always_noise = always.last_input().unwrap().noise_v;
    assert_ne!(skip_noise, always_noise);
}

#[test]
fn test_always_policy_matches_unconditional_draws() {
    let mut device = ThresholdDevice::new(0.0, 13).with_noise_draw(NoiseDraw::Always);
    let mut reference = logic_buffer::GaussianNoise::new(13);

    let sigmas = [0.0, 0.3, 0.0, 0.0, 1.2, 0.7];
    for sigma in sigmas {
        device.apply_voltage_with_noise(0.0, sigma);
        let expected = reference.sample(sigma);
        assert_eq!(device.last_input().unwrap().noise_v, expected);
    }
}

#[test]
fn test_trait_object_usage() {
    let mut device = ThresholdDevice::new(0.9, 2);
    let dynamic: &mut dyn LogicDevice = &mut device;
    dynamic.apply_voltage(1.0);
    assert!(dynamic.is_on());
}

proptest! {
    #[test]
    fn noise_free_comparison_is_strict(
        threshold in -100.0f64..100.0,
        voltage in -100.0f64..100.0,
        seed in any::<u64>(),
    ) {
        let mut device = ThresholdDevice::new(threshold, seed);
        device.apply_voltage_with_noise(voltage, 0.0);
        prop_assert_eq!(device.is_on(), voltage > threshold);

        device.apply_voltage(threshold);
        prop_assert!(!device.is_on());
    }

    #[test]
    fn same_seed_same_outputs(
        seed in any::<u64>(),
        threshold in -5.0f64..5.0,
        inputs in prop::collection::vec((-5.0f64..5.0, 0.0f64..2.0), 1..64),
    ) {
        let mut first = ThresholdDevice::new(threshold, seed);
        let mut second = ThresholdDevice::new(threshold, seed);

        for (value, sigma) in inputs {
            first.apply_voltage_with_noise(value, sigma);
            second.apply_voltage_with_noise(value, sigma);
            prop_assert_eq!(first.is_on(), second.is_on());
            prop_assert_eq!(first.last_input(), second.last_input());
        }
    }

    #[test]
    fn zero_sigma_ignores_prior_noise(
        seed in any::<u64>(),
        warmup in prop::collection::vec((-5.0f64..5.0, 0.0f64..3.0), 0..32),
        voltage in -5.0f64..5.0,
        always in any::<bool>(),
    ) {
        let policy = if always { NoiseDraw::Always } else { NoiseDraw::SkipWhenZero };
        let mut device = ThresholdDevice::new(0.25, seed).with_noise_draw(policy);
        for (value, sigma) in warmup {
            device.apply_voltage_with_noise(value, sigma);
        }

        device.apply_voltage_with_noise(voltage, 0.0);
        prop_assert_eq!(device.is_on(), voltage > 0.25);
        prop_assert_eq!(device.last_input().unwrap().noise_v, 0.0);
    }

    #[test]
    fn reads_are_idempotent(
        seed in any::<u64>(),
        voltage in -5.0f64..5.0,
        sigma in -2.0f64..2.0,
    ) {
        let mut device = ThresholdDevice::new(0.0, seed);
        device.apply_voltage_with_noise(voltage, sigma);
        let first = device.is_on();
        for _ in 0..4 {
            prop_assert_eq!(device.is_on(), first);
        }
    }

    #[test]
    fn output_matches_last_input(
        seed in any::<u64>(),
        threshold in -5.0f64..5.0,
        inputs in prop::collection::vec((-5.0f64..5.0, -2.0f64..2.0), 1..32),
    ) {
        let mut device = ThresholdDevice::new(threshold, seed);
        for (value, sigma) in inputs {
            device.apply_voltage_with_noise(value, sigma);
            let last = device.last_input().unwrap();
            prop_assert_eq!(last.voltage_v, value);
            prop_assert_eq!(device.is_on(), last.effective_voltage() > threshold);
        }
    }
}
