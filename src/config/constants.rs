// src/config/constants.rs
//! Named defaults shared by the device, the sweep harness and the config loader

/// Device model constants
pub mod device {
    /// Input level above which the buffer switches on
    pub const DEFAULT_THRESHOLD_V: f64 = 1.8;
    pub const DEFAULT_SEED: u64 = 1;
    pub const DEFAULT_NOISE_SIGMA: f64 = 0.0;
}

/// Voltage sweep constants
pub mod sweep {
    pub const MILLIVOLTS_PER_VOLT: i64 = 1000;
    pub const DEFAULT_START_MV: i64 = 0;
    /// Exclusive upper bound of the default sweep (3 V)
    pub const DEFAULT_STOP_MV: i64 = 3000;
    pub const DEFAULT_STEP_MV: u32 = 9;
}

/// Acceptance check voltages from the bench procedure
pub mod acceptance {
    pub const LOW_INPUT_V: f64 = 1.2;
    pub const HIGH_INPUT_V: f64 = 2.5;
}

/// Configuration file locations and environment naming
pub mod paths {
    pub const SYSTEM_CONFIG_PATH: &str = "/etc/logic-buffer/config.toml";
    pub const USER_CONFIG_DIR: &str = ".config/logic-buffer";
    pub const DEFAULT_CONFIG_FILE: &str = "logic_buffer.toml";
    pub const LOCAL_CONFIG_FILE: &str = "logic_buffer.local.toml";

    pub const ENV_PREFIX: &str = "LOGIC_BUFFER_";
    /// Separates table names from keys, e.g. `LOGIC_BUFFER_DEVICE__THRESHOLD_V`
    pub const ENV_SECTION_SEPARATOR: &str = "__";
}
