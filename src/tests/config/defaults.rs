use crate::config::{Config, LoggingConfig, DEFAULT_TIME_FORMAT};
use crate::core::plugin::SettingsSource;

use super::test_utils::{create_basic_config, create_minimal_config};

/// Test default configuration values
#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.is_verbose_default());
    assert_eq!(config.get_time_format(), DEFAULT_TIME_FORMAT);
    assert!(config.get_raw_plugin_config("symbols").is_none());
}

/// Test logging section without an explicit verbose flag
#[test]
fn test_config_logging_without_verbose() {
    let config = Config {
        logging: Some(LoggingConfig {
            verbose: None,
            time_format: None,
        }),
        plugins: None,
    };

    assert!(!config.is_verbose_default());
    assert_eq!(config.get_time_format(), DEFAULT_TIME_FORMAT);
}

/// Test that plugin settings are exposed through the settings source
#[test]
fn test_config_as_settings_source() {
    let config = create_basic_config();

    let symbols = config.plugin_settings("symbols").unwrap();
    assert_eq!(symbols.get("enable_emoji"), Some(&toml::Value::Boolean(true)));
    assert!(config.plugin_settings("other").is_none());

    assert!(create_minimal_config().plugin_settings("symbols").is_none());
}

/// Test config paths discovery
#[test]
fn test_config_paths() {
    let paths = Config::get_config_paths();
    assert!(!paths.is_empty());
    assert!(paths
        .iter()
        .any(|p| p.file_name().unwrap() == "symbolcopy.toml"));
}

/// Test that plain paths survive expansion unchanged
#[test]
fn test_expand_path_plain() {
    let path = std::path::Path::new("/etc/symbolcopy.toml");
    assert_eq!(Config::expand_path(path).unwrap(), path);
}

/// Test that a leading tilde expands to the home directory
#[test]
fn test_expand_path_tilde() {
    if let Some(home) = dirs::home_dir() {
        let expanded = Config::expand_path(std::path::Path::new("~/symbolcopy.toml")).unwrap();
        assert_eq!(expanded, home.join("symbolcopy.toml"));
    }
}

/// Test that the schema covers the config file and the symbols table
#[test]
fn test_config_schema_json() {
    let schema = Config::schema_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&schema).unwrap();

    assert!(schema.contains("time_format"));
    assert!(value["plugins"]["symbols"].is_object());
    assert!(schema.contains("enable_emoji"));
}
