use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use combobox::item::LabeledItem;
use combobox::machine::{ChangeReason, ComboboxEvent};
use combobox::{Combobox, ComboboxChange, ComboboxConfig, ComboboxKind};

fn fruit() -> Vec<LabeledItem> {
    vec![LabeledItem::new("1", "Apple"), LabeledItem::new("2", "Banana")]
}

fn numbered(count: usize) -> Vec<LabeledItem> {
    (1..=count)
        .map(|n| LabeledItem::new(n.to_string(), format!("Item {}", n)))
        .collect()
}

/// Combobox that records every notification it sends.
fn recording(
    config: ComboboxConfig<LabeledItem>,
) -> (Combobox<LabeledItem>, Arc<Mutex<Vec<ComboboxChange<LabeledItem>>>>) {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let combobox = Combobox::new(config).on_change(move |change| {
        sink.lock().unwrap().push(change.clone());
    });
    (combobox, changes)
}

fn labels(combobox: &Combobox<LabeledItem>) -> Vec<String> {
    combobox.visible_labels()
}

fn selected_ids(combobox: &Combobox<LabeledItem>) -> Vec<String> {
    combobox.selection().ids()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_toggle_item_notifies_once_and_keeps_open_state() {
    let (mut combobox, changes) = recording(ComboboxConfig::new(fruit()));
    let banana = combobox.items()[1].clone();

    let change = combobox.toggle_item(&banana).unwrap();
    assert_eq!(change.reason, ChangeReason::ItemToggled);
    assert_eq!(selected_ids(&combobox), vec!["2"]);
    assert!(!combobox.is_open());

    let changes = changes.lock().unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].selected_items, vec![banana]);
    assert!(!changes[0].is_open);
}

#[test]
fn test_escape_closes_with_one_notification() {
    let (mut combobox, changes) = recording(ComboboxConfig::new(fruit()).open(true));
    combobox.handle_event(ComboboxEvent::ArrowDown);
    combobox.handle_event(ComboboxEvent::ArrowDown);
    assert_eq!(combobox.highlighted_index(), Some(1));
    // Highlight moves are not reported
    assert!(changes.lock().unwrap().is_empty());

    let change = combobox.handle_event(ComboboxEvent::Escape).unwrap();
    assert!(!change.is_open);
    assert_eq!(change.highlighted_index, None);
    assert_eq!(change.reason, ChangeReason::KeyDownEscape);
    assert_eq!(changes.lock().unwrap().len(), 1);
}

#[test]
fn test_toggle_all_selects_every_item_then_none() {
    let (mut combobox, changes) =
        recording(ComboboxConfig::new(numbered(5)).toggle_item_selection(true));

    let change = combobox.toggle_all().unwrap();
    assert_eq!(change.reason, ChangeReason::ToggleAll);
    assert_eq!(combobox.selected_items().len(), 5);

    combobox.toggle_all();
    assert!(combobox.selected_items().is_empty());
    assert_eq!(changes.lock().unwrap().len(), 2);
}

#[test]
fn test_query_filters_visible_items() {
    let mut combobox = Combobox::new(
        ComboboxConfig::new(fruit())
            .kind(ComboboxKind::FilterableMultiSelect)
            .open(true),
    );
    combobox.handle_event(ComboboxEvent::InputChange("ban".to_string()));
    assert_eq!(labels(&combobox), vec!["Banana"]);
}

#[test]
fn test_toggle_button_keeps_menu_open_while_input_focused() {
    let focused = Arc::new(AtomicBool::new(true));
    let mut combobox = Combobox::new(
        ComboboxConfig::new(fruit())
            .kind(ComboboxKind::FilterableMultiSelect)
            .open(true),
    )
    .with_input_focus(Arc::clone(&focused));

    let change = combobox
        .handle_event(ComboboxEvent::ToggleButtonClick)
        .unwrap();
    assert!(change.is_open);
    assert_eq!(change.reason, ChangeReason::ToggleButton);
    assert!(combobox.is_open());

    focused.store(false, Ordering::SeqCst);
    combobox.handle_event(ComboboxEvent::ToggleButtonClick);
    assert!(!combobox.is_open());
}

// =============================================================================
// Visible sequence
// =============================================================================

#[test]
fn test_open_multiselect_ranks_selected_first() {
    let items = vec![
        LabeledItem::new("c", "Cherry"),
        LabeledItem::new("a", "Apple"),
        LabeledItem::new("b", "Banana"),
    ];
    let selected = items[0].clone();
    let combobox = Combobox::new(
        ComboboxConfig::new(items)
            .initial_selected_items([selected])
            .open(true),
    );
    assert_eq!(labels(&combobox), vec!["Cherry", "Apple", "Banana"]);
}

#[test]
fn test_closed_combobox_shows_items_as_supplied() {
    let items = vec![LabeledItem::new("b", "Banana"), LabeledItem::new("a", "Apple")];
    let combobox = Combobox::new(ComboboxConfig::new(items));
    assert_eq!(labels(&combobox), vec!["Banana", "Apple"]);
}

#[test]
fn test_dropdown_keeps_original_order() {
    let items = vec![LabeledItem::new("b", "Banana"), LabeledItem::new("a", "Apple")];
    let selected = items[1].clone();
    let combobox = Combobox::new(
        ComboboxConfig::new(items)
            .kind(ComboboxKind::Dropdown)
            .initial_selected_item(selected)
            .open(true),
    );
    assert_eq!(labels(&combobox), vec!["Banana", "Apple"]);
}

#[test]
fn test_visible_sequence_tracks_selection_changes() {
    let mut combobox = Combobox::new(ComboboxConfig::new(fruit()).open(true));
    assert_eq!(labels(&combobox), vec!["Apple", "Banana"]);
    let banana = combobox.items()[1].clone();
    combobox.toggle_item(&banana);
    assert_eq!(labels(&combobox), vec!["Banana", "Apple"]);
}

#[test]
fn test_set_items_drops_stale_highlight() {
    let mut combobox = Combobox::new(ComboboxConfig::new(numbered(5)).open(true));
    combobox.handle_event(ComboboxEvent::End);
    assert_eq!(combobox.highlighted_index(), Some(4));

    combobox.set_items(numbered(2));
    assert_eq!(combobox.highlighted_index(), None);
    assert_eq!(combobox.row_count(), 2);
}

// =============================================================================
// Activation
// =============================================================================

#[test]
fn test_enter_toggles_highlighted_item_and_closes() {
    let (mut combobox, changes) = recording(ComboboxConfig::new(fruit()));
    combobox.handle_event(ComboboxEvent::ToggleButtonClick);
    combobox.handle_event(ComboboxEvent::ArrowDown);

    let change = combobox.handle_event(ComboboxEvent::Enter).unwrap();
    assert_eq!(change.reason, ChangeReason::ItemActivated);
    assert!(!change.is_open);
    assert_eq!(selected_ids(&combobox), vec!["1"]);
    // Open + activation
    assert_eq!(changes.lock().unwrap().len(), 2);
}

#[test]
fn test_click_activates_the_row_under_the_pointer() {
    let items = vec![
        LabeledItem::new("c", "Cherry"),
        LabeledItem::new("a", "Apple"),
    ];
    let mut combobox = Combobox::new(ComboboxConfig::new(items).open(true));
    // Sorted view: Apple, Cherry
    combobox.handle_event(ComboboxEvent::ItemClick { row: 1 });
    assert_eq!(selected_ids(&combobox), vec!["c"]);
}

#[test]
fn test_select_all_row_activation() {
    let mut combobox = Combobox::new(
        ComboboxConfig::new(numbered(3))
            .toggle_item_selection(true)
            .open(true),
    );
    assert_eq!(combobox.row_count(), 4);

    let change = combobox
        .handle_event(ComboboxEvent::ItemClick { row: 0 })
        .unwrap();
    assert_eq!(change.reason, ChangeReason::ToggleAll);
    assert_eq!(change.selected_items.len(), 3);
}

#[test]
fn test_select_all_row_click_ignored_while_closed() {
    let mut combobox = Combobox::new(ComboboxConfig::new(numbered(3)).toggle_item_selection(true));
    assert!(combobox.handle_event(ComboboxEvent::ItemClick { row: 0 }).is_none());
    assert!(combobox.selected_items().is_empty());
    assert!(!combobox.is_open());
}

#[test]
fn test_select_all_uses_every_item_not_only_the_filtered_ones() {
    let mut combobox = Combobox::new(
        ComboboxConfig::new(fruit())
            .kind(ComboboxKind::FilterableMultiSelect)
            .toggle_item_selection(true)
            .open(true),
    );
    combobox.handle_event(ComboboxEvent::InputChange("ban".to_string()));
    combobox.handle_event(ComboboxEvent::ItemClick { row: 0 });
    assert_eq!(selected_ids(&combobox), vec!["1", "2"]);
}

#[test]
fn test_dropdown_activation_replaces_selection() {
    let items = fruit();
    let apple = items[0].clone();
    let mut combobox = Combobox::new(
        ComboboxConfig::new(items)
            .kind(ComboboxKind::Dropdown)
            .initial_selected_item(apple),
    );
    combobox.handle_event(ComboboxEvent::ToggleButtonClick);
    combobox.handle_event(ComboboxEvent::ItemClick { row: 1 });
    assert_eq!(combobox.selected_item().map(|item| item.id.as_str()), Some("2"));

    // Re-activating the selected item closes but does not deselect
    combobox.handle_event(ComboboxEvent::ToggleButtonClick);
    combobox.handle_event(ComboboxEvent::ItemClick { row: 1 });
    assert_eq!(selected_ids(&combobox), vec!["2"]);
    assert!(!combobox.is_open());
}

#[test]
fn test_dropdown_has_no_toggle_all() {
    let mut combobox = Combobox::new(
        ComboboxConfig::new(fruit())
            .kind(ComboboxKind::Dropdown)
            .toggle_item_selection(true)
            .open(true),
    );
    assert_eq!(combobox.row_count(), 2);
    assert!(combobox.toggle_all().is_none());
}

// =============================================================================
// Notifications
// =============================================================================

#[test]
fn test_highlight_moves_are_silent() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut combobox = Combobox::new(ComboboxConfig::new(numbered(3)).open(true)).on_change(
        move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    );

    for event in [
        ComboboxEvent::ArrowDown,
        ComboboxEvent::ArrowUp,
        ComboboxEvent::End,
        ComboboxEvent::Home,
        ComboboxEvent::ItemPointerEnter { row: 2 },
    ] {
        assert!(combobox.handle_event(event).is_none());
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_clear_selection_notifies_only_on_change() {
    let items = numbered(2);
    let first = items[0].clone();
    let (mut combobox, changes) =
        recording(ComboboxConfig::new(items).initial_selected_items([first]));

    assert!(combobox.handle_event(ComboboxEvent::ClearSelection).is_some());
    assert!(combobox.handle_event(ComboboxEvent::ClearSelection).is_none());
    assert!(combobox.clear_selection().is_none());
    assert_eq!(changes.lock().unwrap().len(), 1);
}

#[test]
fn test_unchanged_query_is_not_reported() {
    let mut combobox = Combobox::new(
        ComboboxConfig::new(fruit())
            .kind(ComboboxKind::FilterableMultiSelect)
            .open(true),
    );
    assert!(
        combobox
            .handle_event(ComboboxEvent::InputChange("a".to_string()))
            .is_some()
    );
    assert!(
        combobox
            .handle_event(ComboboxEvent::InputChange("a".to_string()))
            .is_none()
    );
    let change = combobox.clear_input().unwrap();
    assert_eq!(change.reason, ChangeReason::ClearInput);
    assert_eq!(combobox.input_value(), "");
}

#[test]
fn test_set_selected_items_is_silent() {
    let items = numbered(3);
    let (mut combobox, changes) = recording(ComboboxConfig::new(items.clone()));
    assert!(combobox.set_selected_items(items[1..].to_vec()));
    assert_eq!(selected_ids(&combobox), vec!["2", "3"]);
    assert!(changes.lock().unwrap().is_empty());
}

#[test]
fn test_disabled_combobox_ignores_events() {
    let (mut combobox, changes) = recording(ComboboxConfig::new(fruit()).disabled(true));
    assert!(
        combobox
            .handle_event(ComboboxEvent::ToggleButtonClick)
            .is_none()
    );
    assert!(!combobox.is_open());
    assert!(changes.lock().unwrap().is_empty());
}

// =============================================================================
// Inline labels and badge
// =============================================================================

#[test]
fn test_inline_labels_sorted_and_hidden_at_extremes() {
    let items = vec![
        LabeledItem::new("1", "Cherry"),
        LabeledItem::new("2", "Apple"),
        LabeledItem::new("3", "Banana"),
    ];
    let mut combobox = Combobox::new(ComboboxConfig::new(items.clone()).inline_selected_items(true));
    assert_eq!(combobox.inline_labels(), None);

    combobox.toggle_item(&items[0]);
    combobox.toggle_item(&items[1]);
    assert_eq!(
        combobox.inline_labels(),
        Some(vec!["Apple".to_string(), "Cherry".to_string()])
    );
    assert_eq!(combobox.selection_badge_count(), Some(2));

    combobox.toggle_item(&items[2]);
    assert_eq!(combobox.inline_labels(), None);
    assert_eq!(combobox.selection_badge_count(), None);
}

#[test]
fn test_badge_count_without_inline_labels() {
    let items = numbered(2);
    let mut combobox = Combobox::new(ComboboxConfig::new(items.clone()));
    assert_eq!(combobox.selection_badge_count(), None);
    combobox.toggle_all();
    assert_eq!(combobox.selection_badge_count(), Some(2));
    assert_eq!(combobox.inline_labels(), None);
}

#[test]
fn test_combobox_ids_are_unique() {
    let a = Combobox::new(ComboboxConfig::new(fruit()));
    let b = Combobox::new(ComboboxConfig::new(fruit()));
    assert_ne!(a.id(), b.id());
    assert!(a.id_string().starts_with("__combobox_"));
}

#[test]
fn test_open_multiselect_over_mixed_numeral_labels() {
    let heads = ["\u{00B2}c", "12a", "\u{2167}k", "\u{0663}a", "5b", "\u{00BD}"];
    let items: Vec<LabeledItem> = (0..60)
        .map(|n| {
            let label = format!("{}{}", heads[(n * 7) % heads.len()], n % 9);
            LabeledItem::new(n.to_string(), label)
        })
        .collect();
    let mut combobox = Combobox::new(ComboboxConfig::new(items));
    combobox.handle_event(ComboboxEvent::ToggleButtonClick);
    assert!(combobox.is_open());
    assert_eq!(combobox.visible_indices().len(), 60);
}
