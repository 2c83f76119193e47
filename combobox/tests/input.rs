use combobox::input::{FocusTarget, PointerTarget, translate_event, translate_key, translate_mouse};
use combobox::item::LabeledItem;
use combobox::machine::ComboboxEvent;
use combobox::{Combobox, ComboboxConfig, ComboboxKind};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

fn filterable(open: bool) -> Combobox<LabeledItem> {
    Combobox::new(
        ComboboxConfig::new(vec![
            LabeledItem::new("1", "Apple"),
            LabeledItem::new("2", "Banana"),
        ])
        .kind(ComboboxKind::FilterableMultiSelect)
        .open(open),
    )
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn mouse(kind: MouseEventKind) -> MouseEvent {
    MouseEvent {
        kind,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    }
}

// =============================================================================
// Keys
// =============================================================================

#[test]
fn test_navigation_keys_while_open() {
    let combobox = filterable(true);
    let focus = FocusTarget::ToggleButton;
    assert_eq!(
        translate_key(&combobox, &key(KeyCode::Down), focus),
        Some(ComboboxEvent::ArrowDown)
    );
    assert_eq!(
        translate_key(&combobox, &key(KeyCode::Up), focus),
        Some(ComboboxEvent::ArrowUp)
    );
    assert_eq!(
        translate_key(&combobox, &key(KeyCode::Home), focus),
        Some(ComboboxEvent::Home)
    );
    assert_eq!(
        translate_key(&combobox, &key(KeyCode::Enter), focus),
        Some(ComboboxEvent::Enter)
    );
    assert_eq!(
        translate_key(&combobox, &key(KeyCode::Esc), focus),
        Some(ComboboxEvent::Escape)
    );
}

#[test]
fn test_keys_open_closed_toggle_button() {
    let combobox = filterable(false);
    let focus = FocusTarget::ToggleButton;
    assert_eq!(
        translate_key(&combobox, &key(KeyCode::Enter), focus),
        Some(ComboboxEvent::ToggleButtonClick)
    );
    assert_eq!(
        translate_key(&combobox, &key(KeyCode::Down), focus),
        Some(ComboboxEvent::ToggleButtonClick)
    );
    assert_eq!(
        translate_key(&combobox, &key(KeyCode::Char(' ')), focus),
        Some(ComboboxEvent::ToggleButtonSpace)
    );
    assert_eq!(translate_key(&combobox, &key(KeyCode::Up), focus), None);
}

#[test]
fn test_typing_in_input_changes_query() {
    let mut combobox = filterable(true);
    let focus = FocusTarget::Input;

    let event = translate_key(&combobox, &key(KeyCode::Char('b')), focus).unwrap();
    assert_eq!(event, ComboboxEvent::InputChange("b".to_string()));
    combobox.handle_event(event);

    let event = translate_key(&combobox, &key(KeyCode::Char(' ')), focus).unwrap();
    assert_eq!(event, ComboboxEvent::InputChange("b ".to_string()));

    let event = translate_key(&combobox, &key(KeyCode::Backspace), focus).unwrap();
    assert_eq!(event, ComboboxEvent::InputChange(String::new()));
}

#[test]
fn test_home_end_left_to_the_input() {
    let combobox = filterable(true);
    assert_eq!(
        translate_key(&combobox, &key(KeyCode::Home), FocusTarget::Input),
        None
    );
}

#[test]
fn test_backspace_on_empty_query_ignored() {
    let combobox = filterable(true);
    assert_eq!(
        translate_key(&combobox, &key(KeyCode::Backspace), FocusTarget::Input),
        None
    );
}

#[test]
fn test_release_and_modified_keys_ignored() {
    let combobox = filterable(true);
    let release = KeyEvent::new_with_kind(KeyCode::Down, KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(translate_key(&combobox, &release, FocusTarget::ToggleButton), None);

    let ctrl = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
    assert_eq!(translate_key(&combobox, &ctrl, FocusTarget::Input), None);

    let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
    assert_eq!(
        translate_key(&combobox, &shifted, FocusTarget::Input),
        Some(ComboboxEvent::InputChange("A".to_string()))
    );
}

// =============================================================================
// Events and mouse
// =============================================================================

#[test]
fn test_focus_lost_is_blur() {
    let combobox = filterable(true);
    assert_eq!(
        translate_event(&combobox, &Event::FocusLost, FocusTarget::Input),
        Some(ComboboxEvent::Blur)
    );
}

#[test]
fn test_paste_appends_to_query() {
    let combobox = filterable(true);
    assert_eq!(
        translate_event(&combobox, &Event::Paste("ban".to_string()), FocusTarget::Input),
        Some(ComboboxEvent::InputChange("ban".to_string()))
    );
}

#[test]
fn test_mouse_translation() {
    let down = mouse(MouseEventKind::Down(MouseButton::Left));
    assert_eq!(
        translate_mouse(&down, PointerTarget::Row(3)),
        Some(ComboboxEvent::ItemClick { row: 3 })
    );
    assert_eq!(
        translate_mouse(&down, PointerTarget::ToggleButton),
        Some(ComboboxEvent::ToggleButtonClick)
    );
    assert_eq!(
        translate_mouse(&down, PointerTarget::ClearSelection),
        Some(ComboboxEvent::ClearSelection)
    );
    assert_eq!(translate_mouse(&down, PointerTarget::Inside), None);

    let up = mouse(MouseEventKind::Up(MouseButton::Left));
    assert_eq!(
        translate_mouse(&up, PointerTarget::Outside),
        Some(ComboboxEvent::OuterPointerUp)
    );

    let moved = mouse(MouseEventKind::Moved);
    assert_eq!(
        translate_mouse(&moved, PointerTarget::Row(1)),
        Some(ComboboxEvent::ItemPointerEnter { row: 1 })
    );
}
