//! Ordering of candidate items.
//!
//! Sort functions receive the candidate indices produced by the filter and
//! return them reordered. They run on every read of the visible sequence, so
//! a selection toggled while the menu is open re-ranks immediately.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::item::{ComboboxItem, ItemToString};
use crate::locale::{Locale, locale_compare};
use crate::selection::SelectionSet;

/// Label comparison used by the default sort.
pub struct CompareItems(Arc<dyn Fn(&str, &str, &Locale) -> Ordering + Send + Sync>);

impl CompareItems {
    pub fn new(f: impl Fn(&str, &str, &Locale) -> Ordering + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn compare(&self, a: &str, b: &str, locale: &Locale) -> Ordering {
        (self.0)(a, b, locale)
    }
}

impl Default for CompareItems {
    fn default() -> Self {
        Self::new(locale_compare)
    }
}

impl Clone for CompareItems {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl fmt::Debug for CompareItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CompareItems(..)")
    }
}

/// Inputs available to a sort function.
#[derive(Debug)]
pub struct SortOptions<'a, T> {
    pub selection: &'a SelectionSet<T>,
    pub item_to_string: &'a ItemToString<T>,
    pub compare_items: &'a CompareItems,
    pub locale: &'a Locale,
}

type SortFn<T> = dyn Fn(&[T], Vec<usize>, &SortOptions<'_, T>) -> Vec<usize> + Send + Sync;

/// A pluggable sort: `(items, candidate indices, options) -> ordered indices`.
pub struct SortItems<T>(Arc<SortFn<T>>);

impl<T> SortItems<T> {
    pub fn new(
        f: impl Fn(&[T], Vec<usize>, &SortOptions<'_, T>) -> Vec<usize> + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(f))
    }

    /// Selected items first, then by label. This is the default.
    pub fn selected_first() -> Self
    where
        T: ComboboxItem + Clone + 'static,
    {
        Self::new(selected_first_sort)
    }

    /// Keep the candidates in the order they arrived.
    pub fn preserve_order() -> Self
    where
        T: 'static,
    {
        Self::new(|_: &[T], candidates: Vec<usize>, _: &SortOptions<'_, T>| candidates)
    }

    pub fn apply(&self, items: &[T], candidates: Vec<usize>, options: &SortOptions<'_, T>) -> Vec<usize> {
        (self.0)(items, candidates, options)
    }
}

impl<T: ComboboxItem + Clone + 'static> Default for SortItems<T> {
    fn default() -> Self {
        Self::selected_first()
    }
}

impl<T> Clone for SortItems<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for SortItems<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SortItems(..)")
    }
}

/// Default ranking.
///
/// 1. items in the selection before items outside it
/// 2. empty labels after non-empty ones
/// 3. `compare_items` on the labels
///
/// The sort is stable.
pub fn selected_first_sort<T: ComboboxItem + Clone>(
    items: &[T],
    candidates: Vec<usize>,
    options: &SortOptions<'_, T>,
) -> Vec<usize> {
    let mut keyed: Vec<(usize, bool, String)> = candidates
        .into_iter()
        .filter_map(|index| {
            items.get(index).map(|item| {
                (
                    index,
                    options.selection.contains(item),
                    options.item_to_string.label(item),
                )
            })
        })
        .collect();

    keyed.sort_by(|(_, a_selected, a_label), (_, b_selected, b_label)| {
        b_selected
            .cmp(a_selected)
            .then_with(|| a_label.is_empty().cmp(&b_label.is_empty()))
            .then_with(|| {
                options
                    .compare_items
                    .compare(a_label, b_label, options.locale)
            })
    });

    keyed.into_iter().map(|(index, _, _)| index).collect()
}
