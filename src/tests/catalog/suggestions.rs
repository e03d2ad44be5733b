use crate::core::catalog::{
    ArgsHint, CatalogAdapter, CatalogSettings, HitHint, ItemCategory, SymbolTarget,
};
use crate::core::table::{SymbolTable, EMOJI_SET, SYMBOLS_SET};

use super::test_utils::{create_emoji_adapter, create_sample_adapter};

/// Test the reference example: multi-character keys are filtered out
/// Verifies titles and descriptions of the surfaced items
#[test]
fn test_suggest_symbols_excludes_multichar_keys() {
    let adapter = create_sample_adapter();

    let items = adapter.suggest("find_symbols");
    let pairs: Vec<(&str, &str)> = items
        .iter()
        .map(|item| (item.label.as_str(), item.description.as_str()))
        .collect();

    assert_eq!(pairs, vec![("→", "RIGHTWARDS ARROW"), ("λ", "LAMBDA")]);
}

/// Test that symbol items carry the host hints of a leaf entry
#[test]
fn test_suggest_item_shape() {
    let adapter = create_sample_adapter();
    let item = adapter.suggest("find_symbols").remove(0);

    assert_eq!(item.category, ItemCategory::Symbol);
    assert_eq!(item.target, "→");
    assert_eq!(item.args_hint, ArgsHint::Forbidden);
    assert_eq!(item.hit_hint, HitHint::Ignore);
}

/// Test that an entry is suggested exactly when its key is one code point
/// Checked against every set of the bundled table
#[test]
fn test_suggest_iff_single_code_point_builtin() {
    let adapter = CatalogAdapter::builtin(CatalogSettings { enable_emoji: true });
    let table = SymbolTable::builtin();

    for target in SymbolTarget::ALL {
        let set = table.get(target.set_name()).unwrap();
        let suggested: Vec<String> = adapter
            .suggest_target(target)
            .into_iter()
            .map(|item| item.target)
            .collect();

        for entry in set.iter() {
            let listed = suggested.iter().any(|c| c == entry.character());
            assert_eq!(
                listed,
                entry.is_single_code_point(),
                "entry {:?} in {}",
                entry.character(),
                set.name()
            );
        }
    }
}

/// Test that suggestions follow table order
#[test]
fn test_suggest_preserves_table_order() {
    let table = SymbolTable::builtin();
    let adapter = CatalogAdapter::builtin(CatalogSettings::default());

    let expected: Vec<&str> = table
        .get(SYMBOLS_SET)
        .unwrap()
        .iter()
        .filter(|entry| entry.is_single_code_point())
        .map(|entry| entry.character())
        .collect();
    let items = adapter.suggest(SymbolTarget::Symbols.as_str());
    let actual: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();

    assert_eq!(actual, expected);
}

/// Test that repeated calls return identical sequences
#[test]
fn test_suggest_is_idempotent() {
    let adapter = create_emoji_adapter();

    assert_eq!(adapter.suggest("find_symbols"), adapter.suggest("find_symbols"));
    assert_eq!(adapter.suggest("find_emoji"), adapter.suggest("find_emoji"));
}

/// Test emoji suggestions drop presentation sequences
#[test]
fn test_suggest_emoji() {
    let adapter = create_emoji_adapter();

    let labels: Vec<String> = adapter
        .suggest("find_emoji")
        .into_iter()
        .map(|item| item.label)
        .collect();

    assert_eq!(labels, vec!["😀".to_string(), "🦀".to_string()]);
}

/// Test that unknown targets produce no suggestions instead of failing
#[test]
fn test_suggest_unknown_target_is_empty() {
    let adapter = create_sample_adapter();

    assert!(adapter.suggest("find_dingbats").is_empty());
    assert!(adapter.suggest("").is_empty());
    assert!(adapter.suggest("symbols").is_empty());
}

/// Test that a table lacking a set yields no suggestions for its target
#[test]
fn test_suggest_missing_set_is_empty() {
    use crate::core::table::SymbolSet;
    use std::sync::Arc;

    let only_symbols = SymbolTable::new(vec![SymbolSet::new(SYMBOLS_SET, [("→", "ARROW")]).unwrap()]);
    let adapter = CatalogAdapter::new(Arc::new(only_symbols), CatalogSettings { enable_emoji: true });

    assert!(adapter.table().get(EMOJI_SET).is_err());
    assert!(adapter.suggest_target(SymbolTarget::Emoji).is_empty());
    assert_eq!(adapter.suggest_target(SymbolTarget::Symbols).len(), 1);
}

/// Test target tag parsing and display
#[test]
fn test_symbol_target_tags() {
    assert_eq!("find_symbols".parse::<SymbolTarget>().unwrap(), SymbolTarget::Symbols);
    assert_eq!("find_emoji".parse::<SymbolTarget>().unwrap(), SymbolTarget::Emoji);
    assert!("find_other".parse::<SymbolTarget>().is_err());

    assert_eq!(SymbolTarget::Symbols.to_string(), "find_symbols");
    assert_eq!(SymbolTarget::Emoji.set_name(), "emoji");
}
