//! Derived table read model
//!
//! A snapshot of everything a renderer needs for one page: the column
//! descriptors, the visible rows, paging figures and the state that produced
//! them.

use crate::scan_view::domain::{CanonicalRow, ColumnDescriptor, ViewState};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub columns: Vec<ColumnDescriptor>,
    pub rows: Vec<CanonicalRow>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Rows left after filtering, across all pages
    pub filtered_count: usize,
    /// Rows loaded before filtering
    pub total_count: usize,
    pub state: ViewState,
}

impl TableView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `Page X of Y`, with an empty set reported as page 1 of 1
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages.max(1))
    }
}
