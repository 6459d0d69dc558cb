// src/config/loader.rs
//! Layered configuration loader: defaults, TOML files, then environment

use crate::config::{constants::paths, BufferConfig};
use crate::utils::validation::ValidationError;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),
    #[error("Configuration parse error: {0}")]
    Parse(String),
    #[error("Configuration validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Configuration loader.
///
/// Later sources override earlier ones key by key: built-in defaults, then
/// each existing file in `config_paths` order, then `LOGIC_BUFFER_*`
/// environment variables.
pub struct ConfigLoader {
    config_paths: Vec<PathBuf>,
    current_config: BufferConfig,
}

impl ConfigLoader {
    /// Create loader using the standard search paths
    pub fn new() -> Self {
        Self::with_paths(Self::discover_config_paths())
    }

    /// Create loader with custom paths
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            config_paths: paths,
            current_config: BufferConfig::default(),
        }
    }

    pub fn config_paths(&self) -> &[PathBuf] {
        &self.config_paths
    }

    /// Load, merge and validate configuration
    pub fn load(&mut self) -> Result<BufferConfig, ConfigError> {
        let config = self.load_and_merge_configs()?;
        self.current_config = config.clone();
        Ok(config)
    }

    /// Most recently loaded configuration, defaults before the first load
    pub fn current_config(&self) -> &BufferConfig {
        &self.current_config
    }

    /// Parse and validate a single file without merging
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<BufferConfig, ConfigError> {
        let value = Self::read_toml(path.as_ref())?;
        let config: BufferConfig = value.try_into()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration without loading
    pub fn validate_config_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        Self::load_file(path).map(|_| ())
    }

    /// Export current configuration to file
    pub fn export_config<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let toml_content = toml::to_string_pretty(&self.current_config)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    fn load_and_merge_configs(&self) -> Result<BufferConfig, ConfigError> {
        let mut merged_config = toml::Value::try_from(&BufferConfig::default())?;

        for config_path in &self.config_paths {
            if !config_path.exists() {
                debug!(path = %config_path.display(), "config file absent, skipping");
                continue;
            }
            let file_config = Self::read_toml(config_path)?;
            info!(path = %config_path.display(), "merging config file");
            merge_toml_values(&mut merged_config, file_config);
        }

        apply_environment_overrides(&mut merged_config, std::env::vars());

        let config: BufferConfig = merged_config.try_into()?;
        config.validate()?;
        Ok(config)
    }

    fn read_toml(path: &Path) -> Result<toml::Value, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn discover_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(paths::SYSTEM_CONFIG_PATH)];

        if let Some(home_dir) = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE")) {
            paths.push(PathBuf::from(home_dir).join(paths::USER_CONFIG_DIR).join("config.toml"));
        }

        paths.push(PathBuf::from(paths::DEFAULT_CONFIG_FILE));
        paths.push(PathBuf::from(paths::LOCAL_CONFIG_FILE));
        paths
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn merge_toml_values(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                if let Some(base_value) = base_table.get_mut(&key) {
                    merge_toml_values(base_value, value);
                } else {
                    base_table.insert(key, value);
                }
            }
        }
        (base_value, overlay_value) => {
            *base_value = overlay_value;
        }
    }
}

/// Apply `LOGIC_BUFFER_<TABLE>__<KEY>=value` pairs onto `config`
fn apply_environment_overrides<I>(config: &mut toml::Value, vars: I)
where
    I: IntoIterator<Item = (String, String)>,
{
    for (key, value) in vars {
        let Some(stripped) = key.strip_prefix(paths::ENV_PREFIX) else {
            continue;
        };
        let path: Vec<String> = stripped
            .to_lowercase()
            .split(paths::ENV_SECTION_SEPARATOR)
            .map(str::to_string)
            .collect();
        if path.iter().any(String::is_empty) {
            continue;
        }

        debug!(variable = %key, "applying environment override");
        set_nested_value(config, &path, parse_env_value(&value));
    }
}

fn parse_env_value(value: &str) -> toml::Value {
    if let Ok(int_val) = value.parse::<i64>() {
        toml::Value::Integer(int_val)
    } else if let Ok(float_val) = value.parse::<f64>() {
        toml::Value::Float(float_val)
    } else if let Ok(bool_val) = value.parse::<bool>() {
        toml::Value::Boolean(bool_val)
    } else {
        toml::Value::String(value.to_string())
    }
}

fn set_nested_value(config: &mut toml::Value, path: &[String], value: toml::Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };

    let mut current = config;
    for part in parents {
        let toml::Value::Table(table) = current else {
            return;
        };
        current = table
            .entry(part.clone())
            .or_insert_with(|| toml::Value::Table(toml::value::Table::new()));
    }

    if let toml::Value::Table(table) = current {
        table.insert(last.clone(), value);
    }
}
