//! Combobox configuration.
//!
//! [`ComboboxOptions`] holds the plain-data options and can be loaded from
//! JSON. [`ComboboxConfig`] adds the items and the pluggable functions.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::filter::FilterItems;
use crate::item::{ComboboxItem, ItemToString};
use crate::locale::Locale;
use crate::selection::SelectionMode;
use crate::sort::{CompareItems, SortItems};

/// Which control the combobox behaves as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComboboxKind {
    /// Single-select dropdown, items in their original order.
    Dropdown,
    /// Multi-select with checkboxes, selected items ranked first.
    #[default]
    MultiSelect,
    /// Multi-select with a query input filtering the items.
    FilterableMultiSelect,
}

impl ComboboxKind {
    pub fn selection_mode(self) -> SelectionMode {
        match self {
            ComboboxKind::Dropdown => SelectionMode::Single,
            ComboboxKind::MultiSelect | ComboboxKind::FilterableMultiSelect => SelectionMode::Multi,
        }
    }

    /// Whether this control has a query input.
    pub fn has_input(self) -> bool {
        matches!(self, ComboboxKind::FilterableMultiSelect)
    }
}

/// Where the query input of a filterable combobox is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchBox {
    /// Inside the toggle field.
    #[default]
    Field,
    /// As the first row of the open menu.
    Menu,
}

/// Plain-data combobox options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboboxOptions {
    pub kind: ComboboxKind,
    /// Locale used by the default label comparison.
    pub locale: Locale,
    /// Initial open state.
    pub open: bool,
    /// Add a "select all" row ahead of the items.
    pub toggle_item_selection: bool,
    /// Show the selected labels inline in the toggle field.
    pub inline_selected_items: bool,
    pub disabled: bool,
    pub select_all_label: String,
    pub search_box: SearchBox,
    /// Field label shown when nothing (or everything) is selected.
    pub label: String,
    /// Placeholder for the query input.
    pub placeholder: String,
}

impl Default for ComboboxOptions {
    fn default() -> Self {
        Self {
            kind: ComboboxKind::default(),
            locale: Locale::default(),
            open: false,
            toggle_item_selection: false,
            inline_selected_items: false,
            disabled: false,
            select_all_label: "Select All".to_string(),
            search_box: SearchBox::default(),
            label: String::new(),
            placeholder: String::new(),
        }
    }
}

impl ComboboxOptions {
    /// Parse options from a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read options from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Full configuration: items, options and pluggable functions.
///
/// # Example
///
/// ```ignore
/// let config = ComboboxConfig::new(vec!["Apple".to_string(), "Banana".to_string()])
///     .kind(ComboboxKind::FilterableMultiSelect)
///     .toggle_item_selection(true)
///     .locale(Locale::new("sv")?);
/// let combobox = Combobox::new(config);
/// ```
#[derive(Debug, Clone)]
pub struct ComboboxConfig<T> {
    pub items: Arc<[T]>,
    pub initial_selected_items: Vec<T>,
    pub options: ComboboxOptions,
    pub item_to_string: ItemToString<T>,
    pub filter_items: FilterItems<T>,
    pub sort_items: SortItems<T>,
    pub compare_items: CompareItems,
}

impl<T: ComboboxItem + Clone + 'static> ComboboxConfig<T> {
    pub fn new(items: impl Into<Arc<[T]>>) -> Self {
        Self {
            items: items.into(),
            initial_selected_items: Vec::new(),
            options: ComboboxOptions::default(),
            item_to_string: ItemToString::default(),
            filter_items: FilterItems::default(),
            sort_items: SortItems::default(),
            compare_items: CompareItems::default(),
        }
    }

    /// Replace all plain-data options at once.
    pub fn options(mut self, options: ComboboxOptions) -> Self {
        self.options = options;
        self
    }

    pub fn kind(mut self, kind: ComboboxKind) -> Self {
        self.options.kind = kind;
        self
    }

    /// Pre-selected item for a single-select dropdown.
    pub fn initial_selected_item(mut self, item: T) -> Self {
        self.initial_selected_items = vec![item];
        self
    }

    /// Pre-selected items for a multi-select.
    pub fn initial_selected_items(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.initial_selected_items = items.into_iter().collect();
        self
    }

    pub fn item_to_string(mut self, f: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        self.item_to_string = ItemToString::new(f);
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.options.locale = locale;
        self
    }

    /// Start with the menu open.
    pub fn open(mut self, open: bool) -> Self {
        self.options.open = open;
        self
    }

    pub fn toggle_item_selection(mut self, enabled: bool) -> Self {
        self.options.toggle_item_selection = enabled;
        self
    }

    pub fn inline_selected_items(mut self, enabled: bool) -> Self {
        self.options.inline_selected_items = enabled;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.options.disabled = disabled;
        self
    }

    pub fn select_all_label(mut self, label: impl Into<String>) -> Self {
        self.options.select_all_label = label.into();
        self
    }

    pub fn search_box(mut self, placement: SearchBox) -> Self {
        self.options.search_box = placement;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.options.label = label.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.options.placeholder = placeholder.into();
        self
    }

    pub fn filter_items(mut self, filter: FilterItems<T>) -> Self {
        self.filter_items = filter;
        self
    }

    pub fn sort_items(mut self, sort: SortItems<T>) -> Self {
        self.sort_items = sort;
        self
    }

    pub fn compare_items(mut self, compare: CompareItems) -> Self {
        self.compare_items = compare;
        self
    }

    /// Whether a "select all" row is rendered ahead of the items.
    pub fn has_select_all_row(&self) -> bool {
        self.options.toggle_item_selection
            && self.options.kind.selection_mode() == SelectionMode::Multi
    }
}
