use std::collections::HashMap;
use tempfile::TempDir;

use crate::config::{Config, LoggingConfig, PluginsConfig};

/// Creates a minimal config for testing
/// Returns config with all None values
pub fn create_minimal_config() -> Config {
    Config {
        logging: None,
        plugins: None,
    }
}

/// Creates a config with logging and symbols plugin settings
/// Returns config with emoji enabled and verbose logging
pub fn create_basic_config() -> Config {
    let mut symbols = toml::value::Table::new();
    symbols.insert("enable_emoji".to_string(), toml::Value::Boolean(true));

    let mut plugins = HashMap::new();
    plugins.insert("symbols".to_string(), toml::Value::Table(symbols));

    Config {
        logging: Some(LoggingConfig {
            verbose: Some(true),
            time_format: Some("[hour]:[minute]:[second]".to_string()),
        }),
        plugins: Some(PluginsConfig { plugins }),
    }
}

/// Creates a temporary directory for testing
/// Returns TempDir instance for cleanup
pub fn create_temp_dir() -> TempDir {
    TempDir::new().unwrap()
}
