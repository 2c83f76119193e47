//! Event dispatch and host notification.

use std::sync::Arc;

use crate::config::ComboboxKind;
use crate::item::ComboboxItem;
use crate::machine::{self, ChangeReason, ComboboxEvent, SelectionCommand, TransitionContext};
use crate::selection::SelectionMode;

use super::state::Combobox;

/// Notification sent to the host after a reportable change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboboxChange<T> {
    pub reason: ChangeReason,
    pub is_open: bool,
    pub highlighted_index: Option<usize>,
    /// The full selection after the change, in selection order.
    pub selected_items: Vec<T>,
    pub input_value: String,
}

impl<T> ComboboxChange<T> {
    /// The selected item of a single-select dropdown.
    pub fn selected_item(&self) -> Option<&T> {
        self.selected_items.first()
    }
}

impl<T: ComboboxItem + Clone + 'static> Combobox<T> {
    /// Feed one interaction event.
    ///
    /// Returns the notification when the event produced a reportable change;
    /// the `on_change` handler has already been called with it.
    pub fn handle_event(&mut self, event: ComboboxEvent) -> Option<ComboboxChange<T>> {
        let visible = self.visible_indices();
        let ctx = TransitionContext {
            visible: &visible,
            rows: self.row_mapping(),
            has_input: self.kind().has_input(),
            input_focused: self.input_focus.is_input_focused(),
            disabled: self.config.options.disabled,
        };

        let outcome = machine::transition(&self.state, &event, &ctx);
        log::trace!(
            "Combobox {} event={:?} -> open={} highlighted={:?} command={:?}",
            self.id(),
            event,
            outcome.state.is_open,
            outcome.state.highlighted_index,
            outcome.command
        );

        let state_changed = outcome.state != self.state;
        self.state = outcome.state;
        let selection_changed = match outcome.command {
            Some(command) => self.apply_command(command),
            None => false,
        };

        match outcome.reason {
            Some(reason) if state_changed || selection_changed || reason.is_forced() => {
                Some(self.emit(reason))
            }
            _ => None,
        }
    }

    /// Toggle `item` in the selection (select it, for a dropdown).
    ///
    /// The open state is left alone.
    pub fn toggle_item(&mut self, item: &T) -> Option<ComboboxChange<T>> {
        if self.selection.toggle(item) {
            Some(self.emit(ChangeReason::ItemToggled))
        } else {
            None
        }
    }

    /// Add `item` to the selection (replace it, for a dropdown).
    pub fn select_item(&mut self, item: &T) -> Option<ComboboxChange<T>> {
        if self.selection.select(item) {
            Some(self.emit(ChangeReason::ItemSelected))
        } else {
            None
        }
    }

    /// Empty the selection.
    pub fn clear_selection(&mut self) -> Option<ComboboxChange<T>> {
        if self.selection.clear() {
            Some(self.emit(ChangeReason::ClearSelection))
        } else {
            None
        }
    }

    /// Select every item, or clear the selection when every item is selected.
    ///
    /// Works over the full item set regardless of the current query. A
    /// dropdown has no "select all" and is left unchanged.
    pub fn toggle_all(&mut self) -> Option<ComboboxChange<T>> {
        if self.kind() == ComboboxKind::Dropdown {
            return None;
        }
        let items = Arc::clone(&self.config.items);
        if self.selection.toggle_all(&items) {
            Some(self.emit(ChangeReason::ToggleAll))
        } else {
            None
        }
    }

    /// Empty the query. Equivalent to [`ComboboxEvent::ClearInput`].
    pub fn clear_input(&mut self) -> Option<ComboboxChange<T>> {
        self.handle_event(ComboboxEvent::ClearInput)
    }

    /// Current state as a notification payload.
    pub fn snapshot(&self, reason: ChangeReason) -> ComboboxChange<T> {
        ComboboxChange {
            reason,
            is_open: self.state.is_open,
            highlighted_index: self.state.highlighted_index,
            selected_items: self.selection.selected_items().to_vec(),
            input_value: self.state.input_value.clone(),
        }
    }

    fn apply_command(&mut self, command: SelectionCommand) -> bool {
        match command {
            SelectionCommand::Activate(index) => {
                let Some(item) = self.config.items.get(index).cloned() else {
                    return false;
                };
                match self.selection.mode() {
                    SelectionMode::Single => self.selection.select(&item),
                    SelectionMode::Multi => self.selection.toggle(&item),
                }
            }
            SelectionCommand::ToggleAll => {
                let items = Arc::clone(&self.config.items);
                self.selection.toggle_all(&items)
            }
            SelectionCommand::Clear => self.selection.clear(),
        }
    }

    fn emit(&self, reason: ChangeReason) -> ComboboxChange<T> {
        let change = self.snapshot(reason);
        log::debug!(
            "Combobox {} change reason={:?} open={} highlighted={:?} selected={} input={:?}",
            self.id(),
            change.reason,
            change.is_open,
            change.highlighted_index,
            change.selected_items.len(),
            change.input_value
        );
        if let Some(handler) = &self.on_change {
            handler(&change);
        }
        change
    }
}
