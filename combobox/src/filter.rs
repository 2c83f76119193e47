//! Filtering the item set against the query text.
//!
//! Filters return indices into the item slice so the caller can keep the
//! items themselves untouched. An empty query always returns every index in
//! original order.

use std::fmt;
use std::sync::Arc;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::item::ItemToString;

/// Inputs available to a filter function.
#[derive(Debug)]
pub struct FilterOptions<'a, T> {
    pub item_to_string: &'a ItemToString<T>,
    pub input_value: &'a str,
}

/// A pluggable filter: `(items, options) -> indices of matching items`.
pub struct FilterItems<T>(Arc<dyn Fn(&[T], &FilterOptions<'_, T>) -> Vec<usize> + Send + Sync>);

impl<T> FilterItems<T> {
    pub fn new(
        f: impl Fn(&[T], &FilterOptions<'_, T>) -> Vec<usize> + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(f))
    }

    /// Case-insensitive substring filter. This is the default.
    pub fn substring() -> Self
    where
        T: 'static,
    {
        Self::new(substring_filter)
    }

    /// Fuzzy filter ranked by match score.
    pub fn fuzzy() -> Self
    where
        T: 'static,
    {
        Self::new(fuzzy_filter)
    }

    /// Keep only items for which `predicate(label, query)` holds.
    pub fn predicate(predicate: impl Fn(&str, &str) -> bool + Send + Sync + 'static) -> Self
    where
        T: 'static,
    {
        Self::new(move |items: &[T], options: &FilterOptions<'_, T>| {
            if options.input_value.is_empty() {
                return (0..items.len()).collect();
            }
            items
                .iter()
                .enumerate()
                .filter(|(_, item)| {
                    predicate(&options.item_to_string.label(item), options.input_value)
                })
                .map(|(index, _)| index)
                .collect()
        })
    }

    pub fn apply(&self, items: &[T], options: &FilterOptions<'_, T>) -> Vec<usize> {
        (self.0)(items, options)
    }
}

impl<T: 'static> Default for FilterItems<T> {
    fn default() -> Self {
        Self::substring()
    }
}

impl<T> Clone for FilterItems<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for FilterItems<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FilterItems(..)")
    }
}

/// Case-insensitive substring match, stable (original relative order).
pub fn substring_filter<T>(items: &[T], options: &FilterOptions<'_, T>) -> Vec<usize> {
    if options.input_value.is_empty() {
        return (0..items.len()).collect();
    }

    let needle = options.input_value.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            options
                .item_to_string
                .label(item)
                .to_lowercase()
                .contains(&needle)
        })
        .map(|(index, _)| index)
        .collect()
}

/// Fuzzy filter over items; best matches first, ties keep original order.
pub fn fuzzy_filter<T>(items: &[T], options: &FilterOptions<'_, T>) -> Vec<usize> {
    let labels: Vec<String> = items
        .iter()
        .map(|item| options.item_to_string.label(item))
        .collect();
    fuzzy_matches(options.input_value, &labels)
        .into_iter()
        .map(|m| m.index)
        .collect()
}

/// Result of a fuzzy match against a single label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched label in the original list.
    pub index: usize,
    /// Match score (higher is better).
    pub score: u32,
}

/// Fuzzy-match `query` against `labels` using nucleo-matcher.
///
/// Returns matches sorted by score (highest first). Empty query returns all
/// labels with score 0.
pub fn fuzzy_matches(query: &str, labels: &[String]) -> Vec<FilterMatch> {
    if query.is_empty() {
        return labels
            .iter()
            .enumerate()
            .map(|(index, _)| FilterMatch { index, score: 0 })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut buf = Vec::new();
    let mut matches: Vec<FilterMatch> = labels
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            let haystack = Utf32Str::new(label, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    // Stable: equal scores keep their original order
    matches.sort_by(|a, b| b.score.cmp(&a.score));

    log::trace!(
        "fuzzy_matches query={:?} matched={}/{}",
        query,
        matches.len(),
        labels.len()
    );

    matches
}
