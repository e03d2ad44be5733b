/// Convenience macro for registering a plugin factory
///
/// Usage:
/// ```rust,ignore
/// register_plugin!(SymbolsPlugin, "symbols", "text");
/// ```
///
/// The plugin type must provide `new()`; settings are loaded later through
/// `Plugin::on_start`.
#[macro_export]
macro_rules! register_plugin {
    ($plugin_type:ty, $name:literal, $category:literal) => {
        inventory::submit! {
            $crate::core::plugin::PluginDescriptor {
                name: $name,
                category: $category,
                factory: || std::boxed::Box::new(<$plugin_type>::new()),
            }
        }
    };
}
