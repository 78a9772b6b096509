use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/shoplist/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("shoplist").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Timing values are non-zero
    /// - Storage keys are set and distinct
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.debounce_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.debounce_ms must be greater than 0".to_string(),
            });
        }
        if self.ui.tick_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_ms must be greater than 0".to_string(),
            });
        }

        let storage = &self.storage;
        if storage.state_key.trim().is_empty() || storage.settings_key.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "storage keys must not be empty".to_string(),
            });
        }
        if storage.state_key == storage.settings_key {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "state_key and settings_key are both '{}'",
                    storage.state_key
                ),
            });
        }

        Ok(())
    }

    /// Directory holding the snapshot files.
    pub fn data_dir(&self) -> PathBuf {
        match &self.storage.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("shoplist"),
        }
    }

    /// Log file path, resolved against the data dir when relative.
    pub fn log_path(&self) -> PathBuf {
        if self.logging.file.is_absolute() {
            self.logging.file.clone()
        } else {
            self.data_dir().join(&self.logging.file)
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.ui.debounce_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_ms)
    }

    pub fn status_timeout(&self) -> Duration {
        Duration::from_millis(self.ui.status_timeout_ms)
    }
}
