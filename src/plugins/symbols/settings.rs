use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::catalog::CatalogSettings;
use crate::core::config_schema::ConfigSchema;

/// Settings of the symbols plugin, read from `[plugins.symbols]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct SymbolsSettings {
    /// Offer the "Emoji" catalog entry next to "Symbols"
    #[schemars(description = "Offer the Emoji catalog entry next to Symbols")]
    pub enable_emoji: bool,

    /// Log every lifecycle call at debug level
    #[schemars(description = "Log every lifecycle call of the plugin")]
    pub debug: bool,
}

impl SymbolsSettings {
    pub const VALID_FIELDS: &'static str = "enable_emoji, debug";

    pub fn catalog_settings(&self) -> CatalogSettings {
        CatalogSettings {
            enable_emoji: self.enable_emoji,
        }
    }
}

impl ConfigSchema for SymbolsSettings {
    fn schema_name() -> &'static str {
        "SymbolsSettings"
    }
}
