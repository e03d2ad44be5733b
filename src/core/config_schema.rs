use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

/// Trait for plugin settings validation with schema support
pub trait ConfigSchema: DeserializeOwned + JsonSchema {
    /// The name of this configuration schema (for error reporting)
    fn schema_name() -> &'static str;

    /// Parse configuration from a TOML value. Field types and unknown keys are
    /// checked by the serde derive.
    fn from_toml_value(value: &toml::Value) -> Result<Self> {
        value.clone().try_into().with_context(|| {
            format!(
                "Failed to parse {} configuration",
                <Self as ConfigSchema>::schema_name()
            )
        })
    }

    /// Pretty-printed JSON schema of this configuration
    fn schema_json() -> Result<String> {
        let schema = schemars::schema_for!(Self);
        serde_json::to_string_pretty(&schema).with_context(|| {
            format!(
                "Failed to render {} schema",
                <Self as ConfigSchema>::schema_name()
            )
        })
    }
}

/// Helper functions for common validation patterns
pub struct ValidationHelpers;

impl ValidationHelpers {
    /// Format a validation error message for a plugin's settings table
    pub fn format_validation_error(
        plugin_display_name: &str,
        plugin_config_key: &str,
        valid_fields: &str,
        error: &anyhow::Error,
    ) -> String {
        // Extract the most specific error from the chain
        let root_error = error
            .chain()
            .last()
            .map(|e| e.to_string())
            .unwrap_or_else(|| error.to_string());

        format!(
            "Configuration validation failed for {plugin_display_name}\n\
             Error: {root_error}\n\
             Check: [plugins.{plugin_config_key}] in symbolcopy.toml\n\
             Valid fields: {valid_fields}\n\
             Note: Plugin will keep its previous settings"
        )
    }
}
