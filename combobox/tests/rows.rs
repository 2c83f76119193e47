use combobox::rows::{RowMapping, RowTarget, SyntheticRow};

// =============================================================================
// Row mapping
// =============================================================================

#[test]
fn test_row_mapping_without_synthetic_rows() {
    let mapping = RowMapping::new(false);
    assert_eq!(mapping.to_row(0), 0);
    assert_eq!(mapping.to_logical(3), RowTarget::Item(3));
    assert_eq!(mapping.row_count(4), 4);
}

#[test]
fn test_row_mapping_with_select_all_row() {
    let mapping = RowMapping::new(true);
    assert_eq!(mapping.to_logical(0), RowTarget::Synthetic(0));
    assert_eq!(mapping.to_logical(1), RowTarget::Item(0));
    assert_eq!(mapping.to_row(0), 1);
    assert_eq!(mapping.row_count(5), 6);
}

#[test]
fn test_row_mapping_is_invertible() {
    let mapping = RowMapping::for_rows(&[SyntheticRow::SearchBox, SyntheticRow::SelectAll]);
    assert_eq!(mapping.leading_rows(), 2);
    for logical in 0..10 {
        assert_eq!(mapping.to_logical(mapping.to_row(logical)), RowTarget::Item(logical));
    }
    assert_eq!(mapping.to_logical(1), RowTarget::Synthetic(1));
}

#[test]
fn test_row_count_with_no_items() {
    assert_eq!(RowMapping::new(true).row_count(0), 1);
    assert_eq!(RowMapping::default().row_count(0), 0);
}
