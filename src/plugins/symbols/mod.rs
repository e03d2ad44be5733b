//! Plugin to find a Unicode symbol or emoji by name and copy it to the clipboard

pub mod settings;

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use crate::core::catalog::{ActionDescriptor, CatalogAdapter, CatalogItem, ItemCategory};
use crate::core::clipboard::Clipboard;
use crate::core::config_schema::{ConfigSchema, ValidationHelpers};
use crate::core::plugin::{HostEvent, Plugin, SettingsSource};
use crate::core::table::SymbolTable;
use crate::register_plugin;

pub use settings::SymbolsSettings;


/// Key of this plugin in the registry and in the configuration file
pub const PLUGIN_NAME: &str = "symbols";

pub struct SymbolsPlugin {
    catalog: CatalogAdapter,
    settings: SymbolsSettings,
}

impl SymbolsPlugin {
    pub fn new() -> Self {
        Self::with_table(SymbolTable::builtin_shared())
    }

    /// Plugin over a custom table instead of the bundled one
    pub fn with_table(table: Arc<SymbolTable>) -> Self {
        let settings = SymbolsSettings::default();
        Self {
            catalog: CatalogAdapter::new(table, settings.catalog_settings()),
            settings,
        }
    }

    pub fn settings(&self) -> &SymbolsSettings {
        &self.settings
    }

    pub fn catalog(&self) -> &CatalogAdapter {
        &self.catalog
    }

    /// Replaces the settings wholesale. On a parse error the previous settings stay.
    fn read_config(&mut self, source: &dyn SettingsSource) -> Result<()> {
        let settings = match source.plugin_settings(PLUGIN_NAME) {
            Some(value) => SymbolsSettings::from_toml_value(&value).inspect_err(|e| {
                warn!(
                    "{}",
                    ValidationHelpers::format_validation_error(
                        "Symbols",
                        PLUGIN_NAME,
                        SymbolsSettings::VALID_FIELDS,
                        e,
                    )
                );
            })?,
            None => SymbolsSettings::default(),
        };

        self.catalog.replace_settings(settings.catalog_settings());
        self.settings = settings;
        Ok(())
    }

    fn trace(&self, hook: &str) {
        if self.settings.debug {
            debug!("symbols: {}", hook);
        }
    }
}

impl Default for SymbolsPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SymbolsPlugin {
    fn description(&self) -> &str {
        "Find a Unicode symbol or emoji by name and copy it to the clipboard"
    }

    fn icon(&self) -> &str {
        "Ω"
    }

    fn on_start(&mut self, settings: &dyn SettingsSource) -> Result<()> {
        self.read_config(settings)?;
        self.trace("on_start");
        Ok(())
    }

    fn on_catalog(&self) -> Vec<CatalogItem> {
        self.trace("on_catalog");
        self.catalog.list_top_level_entries()
    }

    fn on_suggest(&self, user_input: &str, items_chain: &[CatalogItem]) -> Vec<CatalogItem> {
        self.trace("on_suggest");

        let Some(current) = items_chain.last() else {
            return Vec::new();
        };
        if user_input.is_empty() || current.category != ItemCategory::Keyword {
            return Vec::new();
        }

        self.catalog.suggest(&current.target)
    }

    fn actions(&self) -> Vec<ActionDescriptor> {
        self.catalog.actions()
    }

    fn on_execute(&self, item: &CatalogItem, action: Option<&str>, clipboard: &mut dyn Clipboard) {
        self.trace("on_execute");
        self.catalog.execute(item, action.unwrap_or_default(), clipboard);
    }

    fn on_events(&mut self, events: &[HostEvent], settings: &dyn SettingsSource) -> Result<()> {
        self.trace("on_events");
        if events.is_empty() {
            return Ok(());
        }
        self.read_config(settings)
    }
}

register_plugin!(SymbolsPlugin, "symbols", "text");
