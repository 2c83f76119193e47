//! Translate crossterm terminal events into combobox events.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use log::trace;

use crate::combobox::Combobox;
use crate::item::ComboboxItem;
use crate::machine::ComboboxEvent;

/// Which part of the combobox holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    ToggleButton,
    Input,
    Menu,
}

/// What the pointer is over, as resolved by the host's hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    ToggleButton,
    /// Interactive menu row.
    Row(usize),
    /// The "clear selection" badge.
    ClearSelection,
    /// The "clear query" control.
    ClearInput,
    /// Inside the combobox but not on anything interactive.
    Inside,
    Outside,
}

/// Convert a key press to a combobox event.
pub fn translate_key<T>(
    combobox: &Combobox<T>,
    event: &KeyEvent,
    focus: FocusTarget,
) -> Option<ComboboxEvent>
where
    T: ComboboxItem + Clone + 'static,
{
    if event.kind == KeyEventKind::Release {
        return None;
    }
    if event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    let is_open = combobox.is_open();
    let translated = match (event.code, focus) {
        (KeyCode::Esc, _) => Some(ComboboxEvent::Escape),
        (KeyCode::Enter, _) if is_open => Some(ComboboxEvent::Enter),
        (KeyCode::Enter, FocusTarget::ToggleButton) => Some(ComboboxEvent::ToggleButtonClick),
        (KeyCode::Down, _) if is_open => Some(ComboboxEvent::ArrowDown),
        (KeyCode::Down, FocusTarget::ToggleButton | FocusTarget::Input) => {
            Some(ComboboxEvent::ToggleButtonClick)
        }
        (KeyCode::Up, _) if is_open => Some(ComboboxEvent::ArrowUp),
        (KeyCode::Home, FocusTarget::ToggleButton | FocusTarget::Menu) if is_open => {
            Some(ComboboxEvent::Home)
        }
        (KeyCode::End, FocusTarget::ToggleButton | FocusTarget::Menu) if is_open => {
            Some(ComboboxEvent::End)
        }
        (KeyCode::Char(' '), FocusTarget::ToggleButton) => Some(ComboboxEvent::ToggleButtonSpace),
        (KeyCode::Char(c), FocusTarget::Input) if combobox.kind().has_input() => {
            let mut value = combobox.input_value().to_string();
            value.push(c);
            Some(ComboboxEvent::InputChange(value))
        }
        (KeyCode::Backspace, FocusTarget::Input) if !combobox.input_value().is_empty() => {
            let mut value = combobox.input_value().to_string();
            value.pop();
            Some(ComboboxEvent::InputChange(value))
        }
        _ => None,
    };

    trace!("translate_key {:?} focus={:?} -> {:?}", event.code, focus, translated);
    translated
}

/// Convert a mouse event over `target` to a combobox event.
pub fn translate_mouse(event: &MouseEvent, target: PointerTarget) -> Option<ComboboxEvent> {
    match (event.kind, target) {
        (MouseEventKind::Down(MouseButton::Left), PointerTarget::ToggleButton) => {
            Some(ComboboxEvent::ToggleButtonClick)
        }
        (MouseEventKind::Down(MouseButton::Left), PointerTarget::Row(row)) => {
            Some(ComboboxEvent::ItemClick { row })
        }
        (MouseEventKind::Down(MouseButton::Left), PointerTarget::ClearSelection) => {
            Some(ComboboxEvent::ClearSelection)
        }
        (MouseEventKind::Down(MouseButton::Left), PointerTarget::ClearInput) => {
            Some(ComboboxEvent::ClearInput)
        }
        (MouseEventKind::Up(MouseButton::Left), PointerTarget::Outside) => {
            Some(ComboboxEvent::OuterPointerUp)
        }
        (MouseEventKind::Moved, PointerTarget::Row(row)) => {
            Some(ComboboxEvent::ItemPointerEnter { row })
        }
        _ => None,
    }
}

/// Convert any terminal event to a combobox event.
///
/// Mouse events need hit testing and go through [`translate_mouse`]; here
/// they are ignored.
pub fn translate_event<T>(
    combobox: &Combobox<T>,
    event: &CrosstermEvent,
    focus: FocusTarget,
) -> Option<ComboboxEvent>
where
    T: ComboboxItem + Clone + 'static,
{
    match event {
        CrosstermEvent::Key(key) => translate_key(combobox, key, focus),
        CrosstermEvent::FocusLost => Some(ComboboxEvent::Blur),
        CrosstermEvent::Paste(text) if focus == FocusTarget::Input && combobox.kind().has_input() => {
            let mut value = combobox.input_value().to_string();
            value.push_str(text);
            Some(ComboboxEvent::InputChange(value))
        }
        _ => None,
    }
}
