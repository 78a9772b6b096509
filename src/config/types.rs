use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::store::{SETTINGS_KEY, STATE_KEY};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where snapshots are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding `<key>.json` files (default: platform data dir).
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Key of the shopping lists snapshot.
    #[serde(default = "default_state_key")]
    pub state_key: String,
    /// Key of the settings snapshot.
    #[serde(default = "default_settings_key")]
    pub settings_key: String,
}

/// Interaction and timing knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Quiet window for debounced saves, in milliseconds (default: 300).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Terminal width at which items switch to a grid layout (default: 100).
    #[serde(default = "default_breakpoint_cols")]
    pub breakpoint_cols: u16,
    /// How long status messages stay visible, in milliseconds (default: 3000).
    #[serde(default = "default_status_timeout_ms")]
    pub status_timeout_ms: u64,
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file, relative paths resolve against the data dir.
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

fn default_state_key() -> String {
    STATE_KEY.to_string()
}

fn default_settings_key() -> String {
    SETTINGS_KEY.to_string()
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_breakpoint_cols() -> u16 {
    100
}

fn default_status_timeout_ms() -> u64 {
    3000
}

fn default_tick_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("shoplist.log")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            state_key: default_state_key(),
            settings_key: default_settings_key(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            breakpoint_cols: default_breakpoint_cols(),
            status_timeout_ms: default_status_timeout_ms(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}
