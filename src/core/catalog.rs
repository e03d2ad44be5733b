use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::clipboard::Clipboard;
use crate::core::error::{SymbolError, SymbolResult};
use crate::core::table::{is_single_code_point, SymbolSet, SymbolTable, EMOJI_SET, SYMBOLS_SET};


/// Name of the only action symbol items support
pub const ACTION_COPY: &str = "copy";

/// Identifies which symbol set a top-level catalog entry opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolTarget {
    #[serde(rename = "find_symbols")]
    Symbols,
    #[serde(rename = "find_emoji")]
    Emoji,
}

impl SymbolTarget {
    pub const ALL: [SymbolTarget; 2] = [SymbolTarget::Symbols, SymbolTarget::Emoji];

    /// Tag stored in the `target` field of top-level items
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolTarget::Symbols => "find_symbols",
            SymbolTarget::Emoji => "find_emoji",
        }
    }

    /// Name of the symbol set this target resolves to
    pub fn set_name(&self) -> &'static str {
        match self {
            SymbolTarget::Symbols => SYMBOLS_SET,
            SymbolTarget::Emoji => EMOJI_SET,
        }
    }

    fn keyword_label(&self) -> &'static str {
        match self {
            SymbolTarget::Symbols => "Symbols",
            SymbolTarget::Emoji => "Emoji",
        }
    }

    fn keyword_description(&self) -> &'static str {
        match self {
            SymbolTarget::Symbols => "Find UNICODE symbol",
            SymbolTarget::Emoji => "Find emoji",
        }
    }
}

impl fmt::Display for SymbolTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymbolTarget {
    type Err = SymbolError;

    fn from_str(s: &str) -> SymbolResult<Self> {
        SymbolTarget::ALL
            .into_iter()
            .find(|target| target.as_str() == s)
            .ok_or_else(|| SymbolError::UnknownTarget(s.to_string()))
    }
}

/// Kind of a catalog item as the host sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// An entry the user types and drills into
    Keyword,
    /// A single character ready to be copied
    Symbol,
    /// Anything a different provider put in the catalog
    Other,
}

/// Whether the host should ask for user input after the item is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgsHint {
    Required,
    Forbidden,
}

/// Whether the host should record hits on the item for its own ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitHint {
    KeepAll,
    Ignore,
}

/// A selectable entry presented by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub category: ItemCategory,
    /// Title shown by the host
    pub label: String,
    pub description: String,
    pub target: String,
    pub args_hint: ArgsHint,
    pub hit_hint: HitHint,
}

impl CatalogItem {
    fn keyword(target: SymbolTarget) -> Self {
        Self {
            category: ItemCategory::Keyword,
            label: target.keyword_label().to_string(),
            description: target.keyword_description().to_string(),
            target: target.as_str().to_string(),
            args_hint: ArgsHint::Required,
            hit_hint: HitHint::KeepAll,
        }
    }

    fn symbol(character: &str, label: &str) -> Self {
        Self {
            category: ItemCategory::Symbol,
            label: character.to_string(),
            description: label.to_string(),
            target: character.to_string(),
            args_hint: ArgsHint::Forbidden,
            hit_hint: HitHint::Ignore,
        }
    }

    /// The top-level target this item opens, if it is one of ours
    pub fn symbol_target(&self) -> Option<SymbolTarget> {
        if self.category != ItemCategory::Keyword {
            return None;
        }
        self.target.parse().ok()
    }
}

/// An action the host may offer for catalog items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    pub name: String,
    pub label: String,
    pub description: String,
}

impl ActionDescriptor {
    pub fn copy() -> Self {
        Self {
            name: ACTION_COPY.to_string(),
            label: "Copy symbol".to_string(),
            description: "Copy symbol to clipboard".to_string(),
        }
    }
}

/// Settings the catalog is built with. Replaced as a whole, never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSettings {
    /// Offer the "Emoji" top-level entry
    pub enable_emoji: bool,
}

/// Exposes a [`SymbolTable`] as catalog items and copies selected characters
#[derive(Debug, Clone)]
pub struct CatalogAdapter {
    table: Arc<SymbolTable>,
    settings: CatalogSettings,
}

impl CatalogAdapter {
    pub fn new(table: Arc<SymbolTable>, settings: CatalogSettings) -> Self {
        Self { table, settings }
    }

    /// Adapter over the bundled symbol table
    pub fn builtin(settings: CatalogSettings) -> Self {
        Self::new(SymbolTable::builtin_shared(), settings)
    }

    pub fn settings(&self) -> &CatalogSettings {
        &self.settings
    }

    pub fn replace_settings(&mut self, settings: CatalogSettings) {
        debug!("Catalog settings replaced: {:?}", settings);
        self.settings = settings;
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Keyword entries the user can drill into, one per enabled symbol set
    pub fn list_top_level_entries(&self) -> Vec<CatalogItem> {
        SymbolTarget::ALL
            .into_iter()
            .filter(|target| match target {
                SymbolTarget::Symbols => true,
                SymbolTarget::Emoji => self.settings.enable_emoji,
            })
            .map(CatalogItem::keyword)
            .collect()
    }

    /// Every single code point entry of the set behind `target`, in table order.
    ///
    /// Unrecognized targets yield an empty list.
    pub fn suggest(&self, target: &str) -> Vec<CatalogItem> {
        match target.parse::<SymbolTarget>() {
            Ok(target) => self.suggest_target(target),
            Err(_) => {
                debug!("Ignoring suggestions for unknown target '{}'", target);
                Vec::new()
            }
        }
    }

    pub fn suggest_target(&self, target: SymbolTarget) -> Vec<CatalogItem> {
        match self.table.get(target.set_name()) {
            Ok(set) => Self::symbol_items(set),
            Err(e) => {
                debug!("No suggestions for {}: {}", target, e);
                Vec::new()
            }
        }
    }

    fn symbol_items(set: &SymbolSet) -> Vec<CatalogItem> {
        set.iter()
            .filter(|entry| entry.is_single_code_point())
            .map(|entry| CatalogItem::symbol(entry.character(), entry.label()))
            .collect()
    }

    pub fn actions(&self) -> Vec<ActionDescriptor> {
        vec![ActionDescriptor::copy()]
    }

    /// Copies the character behind `item` when `action` is empty or `copy`.
    ///
    /// Items this adapter did not produce, unknown actions and clipboard failures
    /// are all logged and otherwise ignored.
    pub fn execute(&self, item: &CatalogItem, action: &str, clipboard: &mut dyn Clipboard) {
        if !action.is_empty() && action != ACTION_COPY {
            debug!("Ignoring unsupported action '{}'", action);
            return;
        }

        let Some(character) = self.character_for(item) else {
            debug!("Ignoring item '{}' not produced by this catalog", item.label);
            return;
        };

        match clipboard.set_text(character) {
            Ok(()) => debug!("Copied '{}' to clipboard", character),
            Err(e) => warn!("Failed to copy '{}' to clipboard: {:#}", character, e),
        }
    }

    fn character_for<'a>(&self, item: &'a CatalogItem) -> Option<&'a str> {
        if item.category != ItemCategory::Symbol || !is_single_code_point(&item.target) {
            return None;
        }

        self.table
            .find_character(&item.target)
            .map(|_| item.target.as_str())
    }
}
