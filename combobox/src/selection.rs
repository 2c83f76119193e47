//! Selection store for single and multi-select comboboxes.

use crate::item::ComboboxItem;

/// Selection mode for a combobox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one selected item; selecting replaces it.
    Single,
    /// Any number of items, toggled individually.
    #[default]
    Multi,
}

/// Ordered set of selected items, unique by `combobox_id`.
///
/// Insertion order is preserved so inline labels render in the order the
/// user picked them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet<T> {
    items: Vec<T>,
}

impl<T> Default for SelectionSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: ComboboxItem + Clone> SelectionSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from `items`, dropping later duplicates of the same id.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let mut set = Self::new();
        for item in items {
            if !set.contains(&item) {
                set.items.push(item);
            }
        }
        set
    }

    /// Check if an item with the same id is selected.
    pub fn contains(&self, item: &T) -> bool {
        self.contains_id(&item.combobox_id())
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.items.iter().any(|selected| selected.combobox_id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Selected items in insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn ids(&self) -> Vec<String> {
        self.items.iter().map(ComboboxItem::combobox_id).collect()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    fn position(&self, item: &T) -> Option<usize> {
        let id = item.combobox_id();
        self.items
            .iter()
            .position(|selected| selected.combobox_id() == id)
    }
}

/// Owns the selection and applies the selection operations.
///
/// Every mutating method returns `true` if the selection changed.
#[derive(Debug, Clone)]
pub struct SelectionStore<T> {
    mode: SelectionMode,
    selected: SelectionSet<T>,
}

impl<T: ComboboxItem + Clone> SelectionStore<T> {
    /// Single-select store with an optional initial item.
    pub fn single(initial: Option<T>) -> Self {
        Self {
            mode: SelectionMode::Single,
            selected: SelectionSet::from_items(initial),
        }
    }

    /// Multi-select store with initial items (deduplicated by id).
    pub fn multi(initial: impl IntoIterator<Item = T>) -> Self {
        Self {
            mode: SelectionMode::Multi,
            selected: SelectionSet::from_items(initial),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn selection(&self) -> &SelectionSet<T> {
        &self.selected
    }

    pub fn selected_items(&self) -> &[T] {
        self.selected.items()
    }

    pub fn is_selected(&self, item: &T) -> bool {
        self.selected.contains(item)
    }

    /// Whether every one of `total` items is selected.
    pub fn all_selected(&self, total: usize) -> bool {
        self.selected.len() == total
    }

    /// Toggle an item.
    ///
    /// Multi: remove it if selected, otherwise append it. Single: same as
    /// [`SelectionStore::select`], re-selecting never deselects.
    pub fn toggle(&mut self, item: &T) -> bool {
        match self.mode {
            SelectionMode::Single => self.select(item),
            SelectionMode::Multi => {
                match self.selected.position(item) {
                    Some(index) => {
                        self.selected.items.remove(index);
                    }
                    None => self.selected.items.push(item.clone()),
                }
                true
            }
        }
    }

    /// Select an item without ever deselecting.
    ///
    /// Single: replaces the current item; a no-op if it is already selected.
    /// Multi: appends the item if it is not selected yet.
    pub fn select(&mut self, item: &T) -> bool {
        if self.selected.contains(item) {
            return false;
        }
        if self.mode == SelectionMode::Single {
            self.selected.items.clear();
        }
        self.selected.items.push(item.clone());
        true
    }

    /// Clear the selection.
    pub fn clear(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        self.selected.items.clear();
        true
    }

    /// Select everything, or clear if everything is already selected.
    ///
    /// "Everything selected" means the selection has as many entries as
    /// `all_items`. Single-select stores ignore this.
    pub fn toggle_all(&mut self, all_items: &[T]) -> bool {
        if self.mode == SelectionMode::Single {
            return false;
        }
        if self.all_selected(all_items.len()) {
            self.clear()
        } else {
            self.selected = SelectionSet::from_items(all_items.iter().cloned());
            true
        }
    }

    /// Replace the selection wholesale (controlled selection).
    pub fn set(&mut self, items: impl IntoIterator<Item = T>) -> bool {
        let mut next = SelectionSet::from_items(items);
        if self.mode == SelectionMode::Single {
            next.items.truncate(1);
        }
        if next.ids() == self.selected.ids() {
            return false;
        }
        self.selected = next;
        true
    }
}
