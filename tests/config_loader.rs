use shoplist::config::{Config, ConfigError, StorageConfig};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.storage.state_key, "shopping-list-state");
    assert_eq!(config.storage.settings_key, "shopping-list-settings");
    assert_eq!(config.ui.debounce_ms, 300);
    assert_eq!(config.ui.breakpoint_cols, 100);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path() {
    let path = Config::config_path();
    assert!(path.ends_with("shoplist/config.toml"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_config_keeps_other_defaults() {
    let (_dir, path) = write_config(
        r#"
[ui]
debounce_ms = 50
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.debounce_ms, 50);
    assert_eq!(config.ui.tick_ms, 250);
    assert_eq!(config.debounce(), Duration::from_millis(50));
    assert_eq!(config.storage, StorageConfig::default());
}

#[test]
fn test_full_config() {
    let (_dir, path) = write_config(
        r#"
[storage]
data_dir = "/tmp/lists"
state_key = "lists"
settings_key = "prefs"

[ui]
debounce_ms = 120
breakpoint_cols = 90
status_timeout_ms = 1000
tick_ms = 100

[logging]
level = "debug"
file = "/var/log/shoplist.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.data_dir(), PathBuf::from("/tmp/lists"));
    assert_eq!(config.storage.state_key, "lists");
    assert_eq!(config.ui.breakpoint_cols, 90);
    assert_eq!(config.status_timeout(), Duration::from_secs(1));
    assert_eq!(config.tick_rate(), Duration::from_millis(100));
    assert_eq!(config.log_path(), PathBuf::from("/var/log/shoplist.log"));
}

#[test]
fn test_relative_log_file_resolves_against_data_dir() {
    let mut config = Config::default();
    config.storage.data_dir = Some(PathBuf::from("/srv/shoplist"));
    assert_eq!(config.log_path(), PathBuf::from("/srv/shoplist/shoplist.log"));
}

#[test]
fn test_zero_debounce_rejected() {
    let (_dir, path) = write_config("[ui]\ndebounce_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("debounce_ms"));
}

#[test]
fn test_zero_tick_rejected() {
    let mut config = Config::default();
    config.ui.tick_ms = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_shared_storage_key_rejected() {
    let mut config = Config::default();
    config.storage.settings_key = config.storage.state_key.clone();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("both 'shopping-list-state'"));
}

#[test]
fn test_blank_storage_key_rejected() {
    let mut config = Config::default();
    config.storage.state_key = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[ui\ndebounce_ms = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = write_config("[ui]\ndebounce_ms = \"fast\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}
