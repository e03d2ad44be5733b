use anyhow::Result;

use crate::config::Config;
use crate::core::plugin::{Plugin, SettingsSource};
use crate::plugins::symbols::SymbolsPlugin;

use super::test_utils::{create_basic_config, create_temp_dir};

/// Test config loading and saving
/// Verifies that configurations can be saved and loaded correctly
#[tokio::test]
async fn test_config_load_and_save() -> Result<()> {
    let temp_dir = create_temp_dir();
    let config_path = temp_dir.path().join("nested").join("config.toml");
    let config = create_basic_config();

    config.save_to_file(&config_path).await?;
    let loaded_config = Config::load_from_file(&config_path).await?;

    assert!(loaded_config.is_verbose_default());
    assert_eq!(loaded_config.get_time_format(), "[hour]:[minute]:[second]");
    assert_eq!(
        loaded_config.plugin_settings("symbols"),
        config.plugin_settings("symbols")
    );

    Ok(())
}

/// Test parsing a hand-written configuration file
#[tokio::test]
async fn test_config_load_from_toml_file() -> Result<()> {
    let temp_dir = create_temp_dir();
    let config_path = temp_dir.path().join("symbolcopy.toml");
    tokio::fs::write(
        &config_path,
        r#"
            [logging]
            verbose = false

            [plugins.symbols]
            enable_emoji = true
        "#,
    )
    .await?;

    let config = Config::load_from_file(&config_path).await?;
    let mut plugin = SymbolsPlugin::new();
    plugin.on_start(&config)?;

    assert!(plugin.settings().enable_emoji);
    assert_eq!(plugin.on_catalog().len(), 2);

    Ok(())
}

/// Test that a missing file is reported with context
#[tokio::test]
async fn test_config_load_missing_file() {
    let temp_dir = create_temp_dir();
    let missing = temp_dir.path().join("missing.toml");

    let error = Config::load_from_file(&missing).await.unwrap_err();
    assert!(error.to_string().contains("Failed to read config file"));
}

/// Test that malformed TOML is rejected
#[test]
fn test_config_invalid_toml() {
    let error = Config::from_toml_str("[logging\nverbose = ").unwrap_err();
    assert!(error.to_string().contains("Failed to parse config file as TOML"));
}

/// Test that an empty file is the default configuration
#[test]
fn test_config_empty_toml() {
    let config = Config::from_toml_str("").unwrap();
    assert!(config.logging.is_none());
    assert!(config.plugins.is_none());
}
