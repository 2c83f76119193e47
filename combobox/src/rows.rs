//! Mapping between visible-sequence positions and rendered row indices.
//!
//! Synthetic rows (the in-menu search box, the "select all" row) sit ahead
//! of the real items. The mapping is a pure offset and never reorders.

/// A non-data row rendered ahead of the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticRow {
    SearchBox,
    SelectAll,
}

/// What a row index points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTarget {
    /// The n-th leading synthetic row.
    Synthetic(usize),
    /// Position in the visible sequence.
    Item(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowMapping {
    leading_rows: usize,
}

impl RowMapping {
    /// Mapping with zero or one leading synthetic row.
    pub fn new(has_leading_row: bool) -> Self {
        Self {
            leading_rows: usize::from(has_leading_row),
        }
    }

    pub fn with_leading_rows(leading_rows: usize) -> Self {
        Self { leading_rows }
    }

    /// Mapping for the given synthetic rows.
    pub fn for_rows(rows: &[SyntheticRow]) -> Self {
        Self::with_leading_rows(rows.len())
    }

    pub fn leading_rows(&self) -> usize {
        self.leading_rows
    }

    /// Row index of the `logical`-th visible item.
    pub fn to_row(&self, logical: usize) -> usize {
        logical + self.leading_rows
    }

    /// Translate a row index back to what it shows.
    pub fn to_logical(&self, row: usize) -> RowTarget {
        match row.checked_sub(self.leading_rows) {
            Some(logical) => RowTarget::Item(logical),
            None => RowTarget::Synthetic(row),
        }
    }

    /// Total rows for `visible_len` items.
    pub fn row_count(&self, visible_len: usize) -> usize {
        visible_len + self.leading_rows
    }
}
