//! Fixed pass/fail checks run against a freshly built buffer
//! Location: src/harness/acceptance.rs

use crate::config::constants::acceptance::{HIGH_INPUT_V, LOW_INPUT_V};
use crate::device::LogicDevice;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One noise-free input and the output it should produce
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct AcceptanceCheck {
    pub voltage_v: f64,
    pub expected_on: bool,
}

impl AcceptanceCheck {
    pub fn new(voltage_v: f64, expected_on: bool) -> Self {
        Self { voltage_v, expected_on }
    }

    /// Below and above the default 1.8 V threshold
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(LOW_INPUT_V, false),
            Self::new(HIGH_INPUT_V, true),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CheckReport {
    pub voltage_v: f64,
    pub expected_on: bool,
    pub actual_on: bool,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.expected_on == self.actual_on
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.passed() { "PASS" } else { "FAIL" };
        write!(f, "input {} V: {}", self.voltage_v, verdict)
    }
}

/// Apply each check in order and record what the device reported
pub fn run_acceptance_checks<D: LogicDevice>(device: &mut D, checks: &[AcceptanceCheck]) -> Vec<CheckReport> {
    checks
        .iter()
        .map(|check| {
            device.apply_voltage(check.voltage_v);
            let report = CheckReport {
                voltage_v: check.voltage_v,
                expected_on: check.expected_on,
                actual_on: device.is_on(),
            };
            if !report.passed() {
                tracing::warn!(voltage_v = check.voltage_v, expected = check.expected_on, "acceptance check failed");
            }
            report
        })
        .collect()
}
