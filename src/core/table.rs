use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::core::error::{SymbolError, SymbolResult};
use crate::data;

/// Name of the built-in set of Unicode symbols
pub const SYMBOLS_SET: &str = "symbols";

/// Name of the built-in set of emoji
pub const EMOJI_SET: &str = "emoji";

static BUILTIN_TABLE: LazyLock<Arc<SymbolTable>> = LazyLock::new(|| {
    Arc::new(SymbolTable::new(vec![
        SymbolSet::from_static(SYMBOLS_SET, data::symbols::SYMBOLS),
        SymbolSet::from_static(EMOJI_SET, data::emoji::EMOJI),
    ]))
});

/// A single character together with its human-readable label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    character: String,
    label: String,
}

impl SymbolEntry {
    pub fn character(&self) -> &str {
        &self.character
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of Unicode scalar values in the key
    pub fn code_points(&self) -> usize {
        self.character.chars().count()
    }

    /// Only entries keyed by exactly one code point are ever surfaced in a catalog
    pub fn is_single_code_point(&self) -> bool {
        is_single_code_point(&self.character)
    }
}

pub(crate) fn is_single_code_point(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some() && chars.next().is_none()
}

/// Named, insertion-ordered collection of symbol entries with unique keys
#[derive(Debug, Clone)]
pub struct SymbolSet {
    name: String,
    entries: Vec<SymbolEntry>,
    index: HashMap<String, usize>,
}

impl SymbolSet {
    /// Builds a set from arbitrary entries, rejecting empty keys and labels.
    ///
    /// A repeated key keeps the position of its first occurrence and the label
    /// of its last one.
    pub fn new<I, C, L>(name: impl Into<String>, entries: I) -> SymbolResult<Self>
    where
        I: IntoIterator<Item = (C, L)>,
        C: Into<String>,
        L: Into<String>,
    {
        let mut set = Self::empty(name.into());

        for (character, label) in entries {
            let character = character.into();
            let label = label.into();

            if character.is_empty() {
                return Err(SymbolError::EmptyCharacter {
                    set: set.name.clone(),
                });
            }
            if label.trim().is_empty() {
                return Err(SymbolError::EmptyLabel {
                    set: set.name.clone(),
                    character,
                });
            }

            set.insert(character, label);
        }

        Ok(set)
    }

    /// Builds a set from build-time data. The tables under `data` are checked by
    /// unit tests, so no validation happens here.
    pub fn from_static(name: &str, entries: &'static [(&'static str, &'static str)]) -> Self {
        let mut set = Self::empty(name.to_string());
        for (character, label) in entries {
            set.insert(character.to_string(), label.to_string());
        }
        set
    }

    fn empty(name: String) -> Self {
        Self {
            name,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn insert(&mut self, character: String, label: String) {
        if let Some(&position) = self.index.get(&character) {
            self.entries[position].label = label;
            return;
        }

        self.index.insert(character.clone(), self.entries.len());
        self.entries.push(SymbolEntry { character, label });
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.entries.iter()
    }

    pub fn get(&self, character: &str) -> Option<&SymbolEntry> {
        self.index
            .get(character)
            .map(|&position| &self.entries[position])
    }

    pub fn contains(&self, character: &str) -> bool {
        self.index.contains_key(character)
    }
}

/// Immutable collection of symbol sets, addressed by set name
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    sets: Vec<SymbolSet>,
}

impl SymbolTable {
    pub fn new(sets: Vec<SymbolSet>) -> Self {
        Self { sets }
    }

    /// The process-wide table built from the bundled data
    pub fn builtin() -> &'static SymbolTable {
        BUILTIN_TABLE.as_ref()
    }

    /// Shared handle to the bundled table, built on first use
    pub fn builtin_shared() -> Arc<SymbolTable> {
        Arc::clone(&*BUILTIN_TABLE)
    }

    pub fn get(&self, set_name: &str) -> SymbolResult<&SymbolSet> {
        self.sets
            .iter()
            .find(|set| set.name() == set_name)
            .ok_or_else(|| SymbolError::UnknownSet(set_name.to_string()))
    }

    pub fn set_names(&self) -> Vec<&str> {
        self.sets.iter().map(SymbolSet::name).collect()
    }

    /// Looks a character up in every set, first match wins
    pub fn find_character(&self, character: &str) -> Option<(&SymbolSet, &SymbolEntry)> {
        self.sets
            .iter()
            .find_map(|set| set.get(character).map(|entry| (set, entry)))
    }
}
