use anyhow::Result;
use tracing::{debug, info, warn};

use crate::core::catalog::{ActionDescriptor, CatalogItem};
use crate::core::clipboard::Clipboard;


/// Plugin descriptor for registration through a factory function
#[derive(Debug, Clone)]
pub struct PluginDescriptor {
    pub name: &'static str,
    pub category: &'static str,
    pub factory: fn() -> Box<dyn Plugin>,
}

// Inventory collection for registered plugin factories
inventory::collect!(PluginDescriptor);

/// Source of per-plugin settings, owned by the host
pub trait SettingsSource {
    /// Raw settings table for `plugin_name`, if the host has one
    fn plugin_settings(&self, plugin_name: &str) -> Option<toml::Value>;
}

/// Settings source with nothing configured
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSettings;

impl SettingsSource for NoSettings {
    fn plugin_settings(&self, _plugin_name: &str) -> Option<toml::Value> {
        None
    }
}

/// Notifications a long-running launcher host sends to every plugin through
/// [`PluginRegistry::notify_all`].
///
/// The bundled binary runs one command per process and never sends them; they
/// exist for hosts embedding the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The plugin's own configuration changed
    PackageConfigChanged,
    /// The host application's configuration changed
    AppConfigChanged,
    /// The host window was brought up
    Activated,
    /// Network connectivity changed
    NetworkChanged,
}

/// Lifecycle hooks a launcher host calls, all on its own thread
pub trait Plugin: Send + Sync {
    /// Returns a description of what the plugin does
    fn description(&self) -> &str;

    /// Returns the icon/emoji to display with this plugin
    fn icon(&self) -> &str;

    /// Called once after construction; loads the plugin's settings
    fn on_start(&mut self, settings: &dyn SettingsSource) -> Result<()>;

    /// Top-level catalog entries
    fn on_catalog(&self) -> Vec<CatalogItem>;

    /// Items to show for the current input. `items_chain` holds the entries the
    /// user drilled through, innermost last. Matching against `user_input` is
    /// left to the host.
    fn on_suggest(&self, user_input: &str, items_chain: &[CatalogItem]) -> Vec<CatalogItem>;

    /// Actions applicable to this plugin's items
    fn actions(&self) -> Vec<ActionDescriptor> {
        Vec::new()
    }

    /// Runs `action` on `item`; `None` selects the default action
    fn on_execute(&self, item: &CatalogItem, action: Option<&str>, clipboard: &mut dyn Clipboard);

    fn on_activated(&mut self) {}

    fn on_deactivated(&mut self) {}

    /// Called when the host reports events, typically a configuration change
    fn on_events(&mut self, _events: &[HostEvent], _settings: &dyn SettingsSource) -> Result<()> {
        Ok(())
    }
}

/// Plugin registry for managing available plugins
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<(String, Box<dyn Plugin>)>, // (name, plugin)
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Registers a plugin under an explicit name
    pub fn register(&mut self, name: impl Into<String>, plugin: Box<dyn Plugin>) {
        let name = name.into();
        debug!("Registering plugin '{}'", name);
        self.plugins.push((name, plugin));
    }

    /// Instantiates every plugin submitted with `register_plugin!`
    pub fn discover_plugins() -> Self {
        let mut registry = Self::new();

        for descriptor in inventory::iter::<PluginDescriptor> {
            registry.register(descriptor.name, (descriptor.factory)());
        }

        registry
    }

    /// Returns all registered plugins with their names
    pub fn plugins(&self) -> &[(String, Box<dyn Plugin>)] {
        &self.plugins
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Finds a plugin by name
    pub fn find_plugin(&self, name: &str) -> Option<&dyn Plugin> {
        self.plugins
            .iter()
            .find(|(plugin_name, _)| plugin_name == name)
            .map(|(_, plugin)| plugin.as_ref())
    }

    pub fn find_plugin_mut(&mut self, name: &str) -> Option<&mut (dyn Plugin + 'static)> {
        self.plugins
            .iter_mut()
            .find(|(plugin_name, _)| plugin_name == name)
            .map(|(_, plugin)| plugin.as_mut())
    }

    /// Starts every plugin. A plugin that fails to start stays registered with
    /// whatever settings it had; the failures are returned for reporting.
    pub fn start_all(&mut self, settings: &dyn SettingsSource) -> Vec<(String, anyhow::Error)> {
        let mut failures = Vec::new();

        for (name, plugin) in &mut self.plugins {
            match plugin.on_start(settings) {
                Ok(()) => info!("Started plugin '{}'", name),
                Err(e) => {
                    warn!("Plugin '{}' failed to start: {:#}", name, e);
                    failures.push((name.clone(), e));
                }
            }
        }

        failures
    }

    /// Forwards host events to every plugin
    pub fn notify_all(
        &mut self,
        events: &[HostEvent],
        settings: &dyn SettingsSource,
    ) -> Vec<(String, anyhow::Error)> {
        let mut failures = Vec::new();

        for (name, plugin) in &mut self.plugins {
            if let Err(e) = plugin.on_events(events, settings) {
                warn!("Plugin '{}' failed to handle {:?}: {:#}", name, events, e);
                failures.push((name.clone(), e));
            }
        }

        failures
    }

    /// Top-level catalog entries of every plugin, tagged with the plugin name
    pub fn catalog(&self) -> Vec<(&str, CatalogItem)> {
        self.plugins
            .iter()
            .flat_map(|(name, plugin)| {
                plugin
                    .on_catalog()
                    .into_iter()
                    .map(move |item| (name.as_str(), item))
            })
            .collect()
    }

    /// Lists all plugins with their category, description and icon
    pub fn list_plugins_detailed(&self) -> Vec<(String, String, String, String)> {
        self.plugins
            .iter()
            .map(|(name, plugin)| {
                let category = inventory::iter::<PluginDescriptor>
                    .into_iter()
                    .find(|descriptor| descriptor.name == name.as_str())
                    .map(|descriptor| descriptor.category.to_string())
                    .unwrap_or_else(|| "custom".to_string());
                (
                    name.clone(),
                    category,
                    plugin.description().to_string(),
                    plugin.icon().to_string(),
                )
            })
            .collect()
    }
}
