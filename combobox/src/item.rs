//! ComboboxItem trait and the label adapter shared by filtering, sorting and rendering.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Trait for items that can be offered by a combobox.
///
/// `combobox_id` decides selection membership, `combobox_label` is the default
/// text used for filtering, sorting and display.
///
/// # Example
///
/// ```ignore
/// struct Country {
///     code: String,
///     name: String,
/// }
///
/// impl ComboboxItem for Country {
///     fn combobox_id(&self) -> String {
///         self.code.clone()
///     }
///
///     fn combobox_label(&self) -> String {
///         self.name.clone()
///     }
/// }
/// ```
pub trait ComboboxItem {
    /// Unique identifier for this item.
    ///
    /// Two items with the same id are the same selection entry.
    fn combobox_id(&self) -> String;

    /// Display text for this item.
    fn combobox_label(&self) -> String;
}

impl ComboboxItem for String {
    fn combobox_id(&self) -> String {
        self.clone()
    }

    fn combobox_label(&self) -> String {
        self.clone()
    }
}

impl ComboboxItem for &str {
    fn combobox_id(&self) -> String {
        (*self).to_string()
    }

    fn combobox_label(&self) -> String {
        (*self).to_string()
    }
}

// (id, label) tuples
impl<S1, S2> ComboboxItem for (S1, S2)
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    fn combobox_id(&self) -> String {
        self.0.as_ref().to_string()
    }

    fn combobox_label(&self) -> String {
        self.1.as_ref().to_string()
    }
}

// `None` is the sentinel item: empty id, empty label.
impl<T: ComboboxItem> ComboboxItem for Option<T> {
    fn combobox_id(&self) -> String {
        self.as_ref().map(T::combobox_id).unwrap_or_default()
    }

    fn combobox_label(&self) -> String {
        self.as_ref().map(T::combobox_label).unwrap_or_default()
    }
}

/// A structured `{ id, label }` record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabeledItem {
    pub id: String,
    #[serde(default)]
    pub label: String,
}

impl LabeledItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl ComboboxItem for LabeledItem {
    fn combobox_id(&self) -> String {
        self.id.clone()
    }

    fn combobox_label(&self) -> String {
        self.label.clone()
    }
}

/// Stringification function turning an item into its label.
///
/// Must be pure: the same item always yields the same string, because the
/// result is used both as the filter/sort label and as the rendering key.
pub struct ItemToString<T>(Arc<dyn Fn(&T) -> String + Send + Sync>);

impl<T> ItemToString<T> {
    pub fn new(f: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Label for `item`.
    pub fn label(&self, item: &T) -> String {
        (self.0)(item)
    }

    /// Rendering key for `item`. Always identical to the label.
    pub fn key(&self, item: &T) -> String {
        self.label(item)
    }
}

impl<T: ComboboxItem + 'static> Default for ItemToString<T> {
    fn default() -> Self {
        Self::new(|item: &T| item.combobox_label())
    }
}

impl<T> Clone for ItemToString<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for ItemToString<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ItemToString(..)")
    }
}
