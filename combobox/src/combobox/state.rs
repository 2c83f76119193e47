//! Combobox controller state and derived list views.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::{ComboboxConfig, ComboboxKind, ComboboxOptions, SearchBox};
use crate::filter::FilterOptions;
use crate::focus::InputFocus;
use crate::item::ComboboxItem;
use crate::machine::ControlState;
use crate::rows::{RowMapping, SyntheticRow};
use crate::selection::{SelectionMode, SelectionSet, SelectionStore};
use crate::sort::SortOptions;

use super::events::ComboboxChange;

/// Unique identifier for a Combobox instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComboboxId(usize);

impl ComboboxId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for ComboboxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__combobox_{}", self.0)
    }
}

pub(super) type ChangeHandler<T> = Box<dyn Fn(&ComboboxChange<T>) + Send + Sync>;

/// A selectable-list control driven by interaction events.
///
/// `Combobox` owns the [`ControlState`] and the selection for the lifetime of
/// the control. The host feeds it events through
/// [`Combobox::handle_event`], reads the derived view (visible items, row
/// mapping, attribute bundles) and is told about every state change through
/// the returned [`ComboboxChange`] and the optional `on_change` handler.
///
/// # Example
///
/// ```ignore
/// let items = vec![
///     LabeledItem::new("1", "Apple"),
///     LabeledItem::new("2", "Banana"),
/// ];
/// let mut fruit = Combobox::new(
///     ComboboxConfig::new(items).kind(ComboboxKind::FilterableMultiSelect),
/// )
/// .on_change(|change| log::info!("fruit changed: {:?}", change.reason));
///
/// fruit.handle_event(ComboboxEvent::ToggleButtonClick);
/// fruit.handle_event(ComboboxEvent::InputChange("ban".into()));
/// assert_eq!(fruit.visible_items().len(), 1);
/// ```
pub struct Combobox<T> {
    id: ComboboxId,
    pub(super) config: ComboboxConfig<T>,
    pub(super) state: ControlState,
    pub(super) selection: SelectionStore<T>,
    pub(super) input_focus: Box<dyn InputFocus>,
    pub(super) on_change: Option<ChangeHandler<T>>,
}

impl<T: ComboboxItem + Clone + 'static> Combobox<T> {
    /// Create a combobox from its configuration.
    pub fn new(config: ComboboxConfig<T>) -> Self {
        let selection = match config.options.kind.selection_mode() {
            SelectionMode::Single => {
                SelectionStore::single(config.initial_selected_items.first().cloned())
            }
            SelectionMode::Multi => {
                SelectionStore::multi(config.initial_selected_items.iter().cloned())
            }
        };
        let state = ControlState::new(config.options.open);
        let id = ComboboxId::new();

        log::debug!(
            "Combobox::new id={} kind={:?} items={} selected={} open={}",
            id,
            config.options.kind,
            config.items.len(),
            selection.selected_items().len(),
            state.is_open
        );

        Self {
            id,
            config,
            state,
            selection,
            input_focus: Box::new(false),
            on_change: None,
        }
    }

    /// Supply the "is the query input focused" capability.
    pub fn with_input_focus(mut self, focus: impl InputFocus + 'static) -> Self {
        self.input_focus = Box::new(focus);
        self
    }

    /// Register the host notification handler.
    pub fn on_change(
        mut self,
        handler: impl Fn(&ComboboxChange<T>) + Send + Sync + 'static,
    ) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Get the unique ID for this combobox.
    pub fn id(&self) -> ComboboxId {
        self.id
    }

    /// Get the ID as a string (prefix for element ids).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    pub fn config(&self) -> &ComboboxConfig<T> {
        &self.config
    }

    pub fn options(&self) -> &ComboboxOptions {
        &self.config.options
    }

    pub fn kind(&self) -> ComboboxKind {
        self.config.options.kind
    }

    // -------------------------------------------------------------------------
    // Control state
    // -------------------------------------------------------------------------

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.state.highlighted_index
    }

    pub fn input_value(&self) -> &str {
        &self.state.input_value
    }

    pub fn is_input_focused(&self) -> bool {
        self.input_focus.is_input_focused()
    }

    // -------------------------------------------------------------------------
    // Items
    // -------------------------------------------------------------------------

    /// All items, in the order the host supplied them.
    pub fn items(&self) -> &[T] {
        &self.config.items
    }

    /// Replace the item set.
    ///
    /// The selection is kept; a highlight past the new last row is dropped.
    pub fn set_items(&mut self, items: impl Into<Arc<[T]>>) {
        self.config.items = items.into();
        let row_count = self.row_count();
        if self
            .state
            .highlighted_index
            .is_some_and(|row| row >= row_count)
        {
            self.state.highlighted_index = None;
        }
        log::debug!(
            "Combobox::set_items id={} items={}",
            self.id,
            self.config.items.len()
        );
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn selection(&self) -> &SelectionSet<T> {
        self.selection.selection()
    }

    /// Selected items in the order they were selected.
    pub fn selected_items(&self) -> &[T] {
        self.selection.selected_items()
    }

    /// The selected item of a single-select dropdown.
    pub fn selected_item(&self) -> Option<&T> {
        self.selection.selection().first()
    }

    pub fn is_selected(&self, item: &T) -> bool {
        self.selection.is_selected(item)
    }

    /// Whether the selection covers every item (ignoring the query).
    pub fn all_selected(&self) -> bool {
        self.selection.all_selected(self.config.items.len())
    }

    /// Replace the selection from the host (controlled selection).
    ///
    /// The host already knows about this change, so no notification is sent.
    pub fn set_selected_items(&mut self, items: impl IntoIterator<Item = T>) -> bool {
        self.selection.set(items)
    }

    // -------------------------------------------------------------------------
    // Derived views
    // -------------------------------------------------------------------------

    /// The visible sequence as indices into [`Combobox::items`].
    ///
    /// Recomputed on every call: filtered by the query and ranked by the sort
    /// function while open, the items as supplied while closed. A dropdown
    /// always keeps the supplied order.
    pub fn visible_indices(&self) -> Vec<usize> {
        let items = &self.config.items[..];
        let all: Vec<usize> = (0..items.len()).collect();
        let kind = self.kind();
        if !self.state.is_open || kind == ComboboxKind::Dropdown {
            return all;
        }

        let candidates = if kind.has_input() {
            self.config.filter_items.apply(
                items,
                &FilterOptions {
                    item_to_string: &self.config.item_to_string,
                    input_value: &self.state.input_value,
                },
            )
        } else {
            all
        };

        self.config
            .sort_items
            .apply(items, candidates, &self.sort_options())
    }

    /// The visible sequence.
    pub fn visible_items(&self) -> Vec<&T> {
        self.visible_indices()
            .into_iter()
            .filter_map(|index| self.config.items.get(index))
            .collect()
    }

    /// Labels of the visible sequence.
    pub fn visible_labels(&self) -> Vec<String> {
        self.visible_items()
            .into_iter()
            .map(|item| self.config.item_to_string.label(item))
            .collect()
    }

    /// Row mapping of the interactive rows (highlight and activation space).
    pub fn row_mapping(&self) -> RowMapping {
        RowMapping::new(self.config.has_select_all_row())
    }

    /// Synthetic rows rendered ahead of the items inside the open menu.
    pub fn synthetic_rows(&self) -> Vec<SyntheticRow> {
        let mut rows = Vec::new();
        if self.kind().has_input() && self.config.options.search_box == SearchBox::Menu {
            rows.push(SyntheticRow::SearchBox);
        }
        if self.config.has_select_all_row() {
            rows.push(SyntheticRow::SelectAll);
        }
        rows
    }

    /// Row mapping of everything rendered in the menu, search box included.
    pub fn menu_row_mapping(&self) -> RowMapping {
        RowMapping::for_rows(&self.synthetic_rows())
    }

    /// Number of interactive rows currently offered.
    pub fn row_count(&self) -> usize {
        self.row_mapping().row_count(self.visible_indices().len())
    }

    /// Selected labels to show inline in the field.
    ///
    /// `None` when inline labels are disabled, or when nothing or everything
    /// is selected (the field label is shown instead).
    pub fn inline_labels(&self) -> Option<Vec<String>> {
        if !self.config.options.inline_selected_items {
            return None;
        }
        let selected = self.selection.selected_items();
        if selected.is_empty() || self.all_selected() {
            return None;
        }

        let order = self
            .config
            .sort_items
            .apply(selected, (0..selected.len()).collect(), &self.sort_options());
        Some(
            order
                .into_iter()
                .filter_map(|index| selected.get(index))
                .map(|item| self.config.item_to_string.label(item))
                .collect(),
        )
    }

    /// Count shown on the "clear selection" badge, if any.
    pub fn selection_badge_count(&self) -> Option<usize> {
        if self.kind() == ComboboxKind::Dropdown {
            return None;
        }
        let count = self.selection.selected_items().len();
        if count == 0 || (self.config.options.inline_selected_items && self.all_selected()) {
            return None;
        }
        Some(count)
    }

    pub(super) fn sort_options(&self) -> SortOptions<'_, T> {
        SortOptions {
            selection: self.selection.selection(),
            item_to_string: &self.config.item_to_string,
            compare_items: &self.config.compare_items,
            locale: &self.config.options.locale,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Combobox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combobox")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}
