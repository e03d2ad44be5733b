use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::core::config_schema::ConfigSchema;
use crate::core::plugin::SettingsSource;
use crate::plugins::symbols::{SymbolsSettings, PLUGIN_NAME as SYMBOLS_PLUGIN};

#[cfg(test)]
#[path = "tests/config/mod.rs"]
mod tests;

/// Default time format for log timestamps
pub const DEFAULT_TIME_FORMAT: &str = "[year]-[month]-[day] [hour]:[minute]:[second]";

/// Configuration for symbolcopy
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    /// Logging configuration
    pub logging: Option<LoggingConfig>,

    /// Plugin-specific configurations
    pub plugins: Option<PluginsConfig>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct LoggingConfig {
    /// Enable verbose logging by default
    pub verbose: Option<bool>,

    /// Time format for log timestamps (uses time crate format syntax)
    pub time_format: Option<String>,
}

/// Plugin-specific configurations - raw TOML values handed to each plugin
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct PluginsConfig {
    #[serde(flatten)]
    #[schemars(with = "std::collections::HashMap<String, serde_json::Value>")]
    pub plugins: std::collections::HashMap<String, toml::Value>,
}

impl Config {
    /// Load configuration from file
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .await
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file as TOML")
    }

    /// Try to load configuration from standard locations
    pub async fn load() -> Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from_file(&path).await;
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Get potential configuration file paths in order of preference
    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Current directory
        paths.push(PathBuf::from("symbolcopy.toml"));
        paths.push(PathBuf::from(".symbolcopy.toml"));

        // 2. User config directory
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("symbolcopy").join("config.toml"));
            paths.push(config_dir.join("symbolcopy.toml"));
        }

        // 3. User home directory
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(
                home_dir
                    .join(".config")
                    .join("symbolcopy")
                    .join("config.toml"),
            );
            paths.push(home_dir.join(".symbolcopy.toml"));
        }

        paths
    }

    /// Expand `~` and environment variables in a user supplied config path
    pub fn expand_path(path: &Path) -> Result<PathBuf> {
        let raw = path.to_string_lossy();
        let expanded = shellexpand::full(&raw)
            .with_context(|| format!("Failed to expand config path {raw}"))?;
        Ok(PathBuf::from(expanded.as_ref()))
    }

    /// Check if verbose logging is enabled by default
    pub fn is_verbose_default(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    /// Get the time format for log timestamps
    pub fn get_time_format(&self) -> String {
        self.logging
            .as_ref()
            .and_then(|l| l.time_format.clone())
            .unwrap_or_else(|| DEFAULT_TIME_FORMAT.to_string())
    }

    /// Get raw plugin configuration for a specific plugin
    pub fn get_raw_plugin_config(&self, plugin_name: &str) -> Option<&toml::Value> {
        self.plugins.as_ref()?.plugins.get(plugin_name)
    }

    /// JSON schema of the configuration file, including each bundled plugin's table
    pub fn schema_json() -> Result<String> {
        let symbols: serde_json::Value = serde_json::from_str(&SymbolsSettings::schema_json()?)?;
        let schema = serde_json::json!({
            "config": schemars::schema_for!(Config),
            "plugins": {
                SYMBOLS_PLUGIN: symbols,
            },
        });

        serde_json::to_string_pretty(&schema).context("Failed to render configuration schema")
    }

    /// Save configuration to file
    pub async fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        // Create parent directories if they don't exist
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)
                .await
                .context("Failed to create config directory")?;
        }

        fs::write(path.as_ref(), content)
            .await
            .context("Failed to write config file")?;

        Ok(())
    }
}

impl SettingsSource for Config {
    fn plugin_settings(&self, plugin_name: &str) -> Option<toml::Value> {
        self.get_raw_plugin_config(plugin_name).cloned()
    }
}
