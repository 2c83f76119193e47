//! Attribute bundles for the presentation layer.
//!
//! Each bundle describes one rendered part of the combobox. Element ids are
//! derived from the combobox id so that a renderer can wire up
//! `aria-controls`/`aria-activedescendant` style relations.

use crate::config::{ComboboxKind, SearchBox};
use crate::item::ComboboxItem;
use crate::rows::{RowTarget, SyntheticRow};
use crate::selection::SelectionMode;

use super::state::Combobox;

/// Key used for the "select all" row.
pub const SELECT_ALL_KEY: &str = "select-all";

/// The combobox container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootProps {
    pub id: String,
    pub is_open: bool,
    pub disabled: bool,
}

/// The toggle field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleProps {
    pub id: String,
    pub menu_id: String,
    pub is_open: bool,
    pub disabled: bool,
    /// Text shown in the field: the selected label of a dropdown, otherwise
    /// the field label.
    pub text: String,
    /// Selected labels shown inline instead of `text`.
    pub inline_labels: Option<Vec<String>>,
    /// Count shown on the "clear selection" badge.
    pub selection_count: Option<usize>,
}

/// The query input of a filterable combobox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputProps {
    pub id: String,
    pub menu_id: String,
    pub value: String,
    pub placeholder: String,
    pub disabled: bool,
    pub placement: SearchBox,
    /// Whether the "clear query" control is offered.
    pub show_clear: bool,
    /// Element id of the highlighted row.
    pub active_descendant: Option<String>,
}

/// The open menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuProps {
    pub id: String,
    /// Number of interactive rows.
    pub row_count: usize,
    pub highlighted_index: Option<usize>,
    /// Non-interactive rows rendered ahead of the interactive ones.
    pub leading_rows: Vec<SyntheticRow>,
}

/// What a menu row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowContent<'a, T> {
    SelectAll { label: &'a str },
    Item { index: usize, item: &'a T },
}

/// One interactive menu row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemProps<'a, T> {
    pub id: String,
    pub row: usize,
    pub key: String,
    pub label: String,
    pub content: RowContent<'a, T>,
    /// Rendered as highlighted. A dropdown also marks its selected row.
    pub is_highlighted: bool,
    /// Selected row of a dropdown.
    pub is_active: bool,
    /// Checkbox state of a multi-select row.
    pub checked: bool,
    /// "Select all" row with only part of the items selected.
    pub indeterminate: bool,
}

impl<T: ComboboxItem + Clone + 'static> Combobox<T> {
    pub fn menu_id(&self) -> String {
        format!("{}-menu", self.id())
    }

    pub fn item_id(&self, row: usize) -> String {
        format!("{}-item-{}", self.id(), row)
    }

    pub fn root_props(&self) -> RootProps {
        RootProps {
            id: self.id_string(),
            is_open: self.is_open(),
            disabled: self.options().disabled,
        }
    }

    pub fn toggle_props(&self) -> ToggleProps {
        let text = match self.kind() {
            ComboboxKind::Dropdown => self
                .selected_item()
                .map(|item| self.config.item_to_string.label(item))
                .unwrap_or_else(|| self.options().label.clone()),
            _ => self.options().label.clone(),
        };

        ToggleProps {
            id: format!("{}-toggle", self.id()),
            menu_id: self.menu_id(),
            is_open: self.is_open(),
            disabled: self.options().disabled,
            text,
            inline_labels: self.inline_labels(),
            selection_count: self.selection_badge_count(),
        }
    }

    /// `None` for a combobox without query input, or when the input lives
    /// in a menu that is closed.
    pub fn input_props(&self) -> Option<InputProps> {
        if !self.kind().has_input() {
            return None;
        }
        let placement = self.options().search_box;
        if placement == SearchBox::Menu && !self.is_open() {
            return None;
        }

        let value = self.input_value().to_string();
        Some(InputProps {
            id: format!("{}-input", self.id()),
            menu_id: self.menu_id(),
            show_clear: !value.is_empty() && self.is_open() && placement == SearchBox::Field,
            value,
            placeholder: self.options().placeholder.clone(),
            disabled: self.options().disabled,
            placement,
            active_descendant: self.highlighted_index().map(|row| self.item_id(row)),
        })
    }

    /// `None` while the menu is closed.
    pub fn menu_props(&self) -> Option<MenuProps> {
        if !self.is_open() {
            return None;
        }
        let leading_rows = self
            .synthetic_rows()
            .into_iter()
            .filter(|row| *row == SyntheticRow::SearchBox)
            .collect();

        Some(MenuProps {
            id: self.menu_id(),
            row_count: self.row_count(),
            highlighted_index: self.highlighted_index(),
            leading_rows,
        })
    }

    /// Props for interactive row `row`, or `None` past the last row.
    pub fn item_props(&self, row: usize) -> Option<ItemProps<'_, T>> {
        let visible = self.visible_indices();
        self.row_props(row, &visible)
    }

    /// Props for every interactive row, in render order.
    pub fn menu_rows(&self) -> Vec<ItemProps<'_, T>> {
        let visible = self.visible_indices();
        let row_count = self.row_mapping().row_count(visible.len());
        (0..row_count)
            .filter_map(|row| self.row_props(row, &visible))
            .collect()
    }

    fn row_props(&self, row: usize, visible: &[usize]) -> Option<ItemProps<'_, T>> {
        let is_highlighted = self.highlighted_index() == Some(row);
        let id = self.item_id(row);

        match self.row_mapping().to_logical(row) {
            RowTarget::Synthetic(_) => {
                let label = self.options().select_all_label.as_str();
                let selected = self.selected_items().len();
                let all = self.all_selected();
                Some(ItemProps {
                    id,
                    row,
                    key: SELECT_ALL_KEY.to_string(),
                    label: label.to_string(),
                    content: RowContent::SelectAll { label },
                    is_highlighted,
                    is_active: false,
                    checked: all,
                    indeterminate: selected > 0 && !all,
                })
            }
            RowTarget::Item(position) => {
                let index = *visible.get(position)?;
                let item = self.config.items.get(index)?;
                let is_selected = self.is_selected(item);
                let single = self.selection.mode() == SelectionMode::Single;
                Some(ItemProps {
                    id,
                    row,
                    key: self.config.item_to_string.key(item),
                    label: self.config.item_to_string.label(item),
                    content: RowContent::Item { index, item },
                    is_highlighted: is_highlighted || (single && is_selected),
                    is_active: single && is_selected,
                    checked: !single && is_selected,
                    indeterminate: false,
                })
            }
        }
    }
}
