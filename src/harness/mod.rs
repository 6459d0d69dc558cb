// src/harness/mod.rs
//! Bench procedures that drive a device through its public operations

pub mod acceptance;
pub mod sweep;

pub use acceptance::{run_acceptance_checks, AcceptanceCheck, CheckReport};
pub use sweep::{SweepOutcome, VoltageSweep};
