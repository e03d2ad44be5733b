use anyhow::{anyhow, bail, Context, Result};
use std::io::Write;
use tracing::{debug, info};

use crate::cli::matcher;
use crate::cli::Commands;
use crate::core::catalog::CatalogItem;
use crate::core::clipboard::{CheckedClipboard, Clipboard, MemoryClipboard, SystemClipboard};
use crate::core::plugin::{Plugin, PluginRegistry};

/// Dispatch a subcommand against started plugins
pub fn handle_command(
    command: Commands,
    registry: &PluginRegistry,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Commands::Catalog => handle_catalog(registry, out),
        Commands::Suggest {
            keyword,
            filter,
            limit,
        } => handle_suggest(registry, &keyword, &filter.join(" "), limit, out),
        Commands::Copy {
            keyword,
            filter,
            action,
            print,
        } => {
            let filter = filter.join(" ");
            if print {
                let mut clipboard = MemoryClipboard::new();
                handle_copy(registry, &keyword, &filter, &action, &mut clipboard)?;
                if let Some(text) = clipboard.contents() {
                    writeln!(out, "{text}")?;
                }
                Ok(())
            } else {
                let mut clipboard = SystemClipboard::new();
                handle_copy(registry, &keyword, &filter, &action, &mut clipboard)
            }
        }
        Commands::Actions => handle_actions(registry, out),
        Commands::Plugins => handle_plugins(registry, out),
    }
}

fn handle_catalog(registry: &PluginRegistry, out: &mut dyn Write) -> Result<()> {
    for (plugin, item) in registry.catalog() {
        writeln!(
            out,
            "{:<10} {:<20} {:<14} [{}]",
            item.label, item.description, item.target, plugin
        )?;
    }
    Ok(())
}

fn handle_suggest(
    registry: &PluginRegistry,
    keyword: &str,
    filter: &str,
    limit: usize,
    out: &mut dyn Write,
) -> Result<()> {
    let (plugin, keyword_item) = find_keyword(registry, keyword)?;
    let suggestions = plugin.on_suggest(filter, std::slice::from_ref(&keyword_item));
    let ranked = matcher::rank(filter, &suggestions);
    debug!(
        "{} of {} suggestions match '{}'",
        ranked.len(),
        suggestions.len(),
        filter
    );

    for item in ranked.into_iter().take(limit) {
        writeln!(out, "{}  {}", item.label, item.description)?;
    }
    Ok(())
}

/// Runs `action` on the best suggestion of `keyword` matching `filter`
pub fn handle_copy(
    registry: &PluginRegistry,
    keyword: &str,
    filter: &str,
    action: &str,
    clipboard: &mut dyn Clipboard,
) -> Result<()> {
    let (plugin, keyword_item) = find_keyword(registry, keyword)?;
    let suggestions = plugin.on_suggest(filter, std::slice::from_ref(&keyword_item));

    let Some(best) = matcher::rank(filter, &suggestions).into_iter().next() else {
        bail!("No symbol matches '{}'", filter);
    };

    info!("Selected {} ({})", best.label, best.description);
    let mut checked = CheckedClipboard::new(clipboard);
    plugin.on_execute(best, Some(action), &mut checked);
    checked
        .finish()
        .with_context(|| format!("Failed to copy {} ({})", best.label, best.description))
}

fn handle_actions(registry: &PluginRegistry, out: &mut dyn Write) -> Result<()> {
    for (name, plugin) in registry.plugins() {
        for action in plugin.actions() {
            writeln!(
                out,
                "{:<10} {:<8} {:<14} {}",
                name, action.name, action.label, action.description
            )?;
        }
    }
    Ok(())
}

fn handle_plugins(registry: &PluginRegistry, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Available plugins:")?;
    for (name, category, description, icon) in registry.list_plugins_detailed() {
        writeln!(out, "  {icon} {name:<10} ({category}) {description}")?;
    }
    Ok(())
}

/// Top-level item whose title or target equals `keyword`, ignoring case
fn find_keyword<'a>(
    registry: &'a PluginRegistry,
    keyword: &str,
) -> Result<(&'a dyn Plugin, CatalogItem)> {
    let (plugin_name, item) = registry
        .catalog()
        .into_iter()
        .find(|(_, item)| {
            item.label.eq_ignore_ascii_case(keyword) || item.target.eq_ignore_ascii_case(keyword)
        })
        .ok_or_else(|| anyhow!("No catalog entry named '{}'", keyword))?;

    let plugin = registry
        .find_plugin(plugin_name)
        .ok_or_else(|| anyhow!("Plugin '{}' is not registered", plugin_name))?;

    Ok((plugin, item))
}
