//! Plugins shipped with symbolcopy

pub mod symbols;

use crate::core::plugin::PluginRegistry;

/// Registers the bundled plugins that descriptor discovery did not already provide.
///
/// Hosts linking this crate as a library call this after
/// [`PluginRegistry::discover_plugins`], since the linker may drop descriptors
/// from objects nothing else references.
pub fn register_builtin(registry: &mut PluginRegistry) {
    if registry.find_plugin(symbols::PLUGIN_NAME).is_none() {
        registry.register(
            symbols::PLUGIN_NAME,
            Box::new(symbols::SymbolsPlugin::new()),
        );
    }
}
