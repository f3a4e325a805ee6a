use crate::scan_view::domain::{CanonicalRow, Filters};

/// FilterEngine service narrowing rows to the active filter selection
///
/// A row passes when every restricted dimension matches exactly
/// (dimensions combine with AND). Order is preserved.
pub struct FilterEngine;

impl FilterEngine {
    pub fn filter(rows: &[CanonicalRow], filters: &Filters) -> Vec<CanonicalRow> {
        if filters.is_unrestricted() {
            return rows.to_vec();
        }

        rows.iter()
            .filter(|row| Self::matches(row, filters))
            .cloned()
            .collect()
    }

    pub fn matches(row: &CanonicalRow, filters: &Filters) -> bool {
        filters.sast_tool.admits(&row.sast_tool) && filters.rerun.admits(row.rerun.as_str())
    }
}
