use crate::core::catalog::{ActionDescriptor, CatalogItem, ItemCategory, ACTION_COPY};
use crate::core::clipboard::MemoryClipboard;

use super::test_utils::{create_emoji_adapter, create_sample_adapter, FailingClipboard};

fn first_symbol_item() -> CatalogItem {
    create_sample_adapter().suggest("find_symbols").remove(0)
}

/// Test that the copy action and the default action both copy the character
#[test]
fn test_execute_copy_and_default_action() {
    let adapter = create_sample_adapter();
    let item = first_symbol_item();

    let mut clipboard = MemoryClipboard::new();
    adapter.execute(&item, ACTION_COPY, &mut clipboard);
    assert_eq!(clipboard.contents(), Some("→"));

    let mut clipboard = MemoryClipboard::new();
    adapter.execute(&item, "", &mut clipboard);
    assert_eq!(clipboard.contents(), Some("→"));
}

/// Test that copying the same item twice yields the same clipboard content
#[test]
fn test_execute_is_idempotent() {
    let adapter = create_sample_adapter();
    let item = first_symbol_item();
    let mut clipboard = MemoryClipboard::new();

    adapter.execute(&item, ACTION_COPY, &mut clipboard);
    adapter.execute(&item, ACTION_COPY, &mut clipboard);

    assert_eq!(clipboard.contents(), Some("→"));
    assert_eq!(clipboard.writes(), 2);
}

/// Test that any other action leaves the clipboard untouched
#[test]
fn test_execute_unknown_action_is_noop() {
    let adapter = create_sample_adapter();
    let item = first_symbol_item();
    let mut clipboard = MemoryClipboard::new();

    adapter.execute(&item, "paste", &mut clipboard);
    adapter.execute(&item, "COPY", &mut clipboard);

    assert_eq!(clipboard.contents(), None);
    assert_eq!(clipboard.writes(), 0);
}

/// Test that top-level keyword items are never copied
#[test]
fn test_execute_keyword_item_is_noop() {
    let adapter = create_sample_adapter();
    let keyword = adapter.list_top_level_entries().remove(0);
    let mut clipboard = MemoryClipboard::new();

    adapter.execute(&keyword, ACTION_COPY, &mut clipboard);

    assert_eq!(clipboard.contents(), None);
}

/// Test that items this catalog did not produce are ignored
/// Covers foreign categories, unknown characters and multi-character targets
#[test]
fn test_execute_foreign_items_are_noop() {
    let adapter = create_sample_adapter();
    let mut clipboard = MemoryClipboard::new();

    let mut foreign = first_symbol_item();
    foreign.category = ItemCategory::Other;
    adapter.execute(&foreign, ACTION_COPY, &mut clipboard);

    let mut unknown = first_symbol_item();
    unknown.target = "Ж".to_string();
    adapter.execute(&unknown, ACTION_COPY, &mut clipboard);

    let mut multichar = first_symbol_item();
    multichar.target = "abc".to_string();
    adapter.execute(&multichar, ACTION_COPY, &mut clipboard);

    assert_eq!(clipboard.writes(), 0);
}

/// Test that the copied text is the item's character, not its label
#[test]
fn test_execute_copies_character_from_emoji_set() {
    let adapter = create_emoji_adapter();
    let crab = adapter
        .suggest("find_emoji")
        .into_iter()
        .find(|item| item.description == "CRAB")
        .unwrap();
    let mut clipboard = MemoryClipboard::new();

    adapter.execute(&crab, ACTION_COPY, &mut clipboard);

    assert_eq!(clipboard.contents(), Some("🦀"));
}

/// Test that a failing clipboard does not propagate
#[test]
fn test_execute_swallows_clipboard_failure() {
    let adapter = create_sample_adapter();
    let item = first_symbol_item();

    adapter.execute(&item, ACTION_COPY, &mut FailingClipboard);
}

/// Test the single action descriptor
#[test]
fn test_actions() {
    let adapter = create_sample_adapter();

    assert_eq!(
        adapter.actions(),
        vec![ActionDescriptor {
            name: "copy".to_string(),
            label: "Copy symbol".to_string(),
            description: "Copy symbol to clipboard".to_string(),
        }]
    );
}
