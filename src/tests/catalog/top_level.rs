use crate::core::catalog::{
    ArgsHint, CatalogSettings, HitHint, ItemCategory, SymbolTarget,
};

use super::test_utils::{create_emoji_adapter, create_sample_adapter};

/// Test that only the symbols entry is listed while emoji are disabled
/// Verifies the entry resolves to the full filtered symbols set
#[test]
fn test_top_level_without_emoji() {
    let adapter = create_sample_adapter();

    let entries = adapter.list_top_level_entries();
    assert_eq!(entries.len(), 1);

    let entry = &entries[0];
    assert_eq!(entry.label, "Symbols");
    assert_eq!(entry.description, "Find UNICODE symbol");
    assert_eq!(entry.target, "find_symbols");
    assert_eq!(entry.category, ItemCategory::Keyword);
    assert_eq!(entry.args_hint, ArgsHint::Required);
    assert_eq!(entry.hit_hint, HitHint::KeepAll);
    assert_eq!(entry.symbol_target(), Some(SymbolTarget::Symbols));

    assert_eq!(adapter.suggest(&entry.target).len(), 2);
}

/// Test that enabling emoji adds a second entry after symbols
#[test]
fn test_top_level_with_emoji() {
    let adapter = create_emoji_adapter();

    let targets: Vec<String> = adapter
        .list_top_level_entries()
        .into_iter()
        .map(|entry| entry.target)
        .collect();

    assert_eq!(targets, vec!["find_symbols".to_string(), "find_emoji".to_string()]);
}

/// Test that settings are swapped as a whole
#[test]
fn test_replace_settings() {
    let mut adapter = create_sample_adapter();
    assert!(!adapter.settings().enable_emoji);

    adapter.replace_settings(CatalogSettings { enable_emoji: true });
    assert_eq!(adapter.list_top_level_entries().len(), 2);

    adapter.replace_settings(CatalogSettings::default());
    assert_eq!(adapter.list_top_level_entries().len(), 1);
}

/// Test that symbol items do not resolve to a top-level target
#[test]
fn test_symbol_item_has_no_symbol_target() {
    let adapter = create_sample_adapter();
    let item = adapter.suggest("find_symbols").remove(0);

    assert_eq!(item.symbol_target(), None);
}
