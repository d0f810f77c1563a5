//! Report ordering.

use std::cmp::Ordering;

use super::correlate::DisplayRow;

/// Category display name (case-sensitive), then price ascending.
pub fn compare_rows(a: &DisplayRow, b: &DisplayRow) -> Ordering {
    a.category_display
        .cmp(&b.category_display)
        .then_with(|| a.price.total_cmp(&b.price))
}

/// Stable sort: rows with equal keys keep their relative order.
pub fn sort_rows(rows: &mut [DisplayRow]) {
    rows.sort_by(compare_rows);
}
