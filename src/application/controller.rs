//! View-state controller for the repository table.
//!
//! The controller is the only owner of [`ViewState`]. It keeps the raw
//! records and their canonical rows, applies user actions one at a time, and
//! derives the visible page on demand through the pure engines:
//! normalize → filter → sort → paginate.

use crate::application::read_models::TableView;
use crate::ports::inbound::TableViewPort;
use crate::scan_view::domain::{
    default_columns, CanonicalRow, FilterDimension, FilterSelection, RawRecord, SortKey,
    SortOrder, ViewState,
};
use crate::scan_view::services::{FilterEngine, PaginationEngine, RecordNormalizer, SortEngine};

#[derive(Debug, Clone, Default)]
pub struct ViewStateController {
    normalizer: RecordNormalizer,
    records: Vec<RawRecord>,
    rows: Vec<CanonicalRow>,
    state: ViewState,
}

impl ViewStateController {
    /// Fresh controller with default state and no records
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_normalizer(normalizer: RecordNormalizer) -> Self {
        Self {
            normalizer,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn rows(&self) -> &[CanonicalRow] {
        &self.rows
    }

    /// Swaps in a complete record set and rebuilds the canonical rows.
    ///
    /// Filters and sort survive the swap; the current page is clamped to the
    /// new page range.
    pub fn replace_records(&mut self, records: Vec<RawRecord>) {
        self.rows = self.normalizer.normalize(&records);
        self.records = records;
        self.clamp_page();
    }

    /// Restores the default view state, keeping loaded records
    pub fn reset(&mut self) {
        self.state = ViewState::default();
    }

    pub fn filtered_rows(&self) -> Vec<CanonicalRow> {
        FilterEngine::filter(&self.rows, &self.state.filters)
    }

    /// Filtered rows in the active sort order, across all pages
    pub fn sorted_rows(&self) -> Vec<CanonicalRow> {
        SortEngine::sort(
            &self.filtered_rows(),
            self.state.sort_key,
            self.state.sort_order,
        )
    }

    pub fn total_pages(&self) -> usize {
        PaginationEngine::total_pages(self.filtered_rows().len(), self.state.page_size)
    }

    /// Every page of the current result, first to last
    ///
    /// An empty result still yields one (empty) page so renderers always have
    /// columns to draw.
    pub fn all_pages(&self) -> Vec<TableView> {
        let sorted = self.sorted_rows();
        let total_pages = PaginationEngine::total_pages(sorted.len(), self.state.page_size);

        (1..=total_pages.max(1))
            .map(|page| self.build_view(&sorted, page))
            .collect()
    }

    fn build_view(&self, sorted: &[CanonicalRow], page: usize) -> TableView {
        let paged = PaginationEngine::paginate(sorted, page, self.state.page_size);
        let mut state = self.state.clone();
        state.current_page = page;

        TableView {
            columns: default_columns(),
            rows: paged.visible,
            current_page: page,
            total_pages: paged.total_pages,
            filtered_count: sorted.len(),
            total_count: self.rows.len(),
            state,
        }
    }

    fn clamp_page(&mut self) {
        let last_page = self.total_pages().max(1);
        self.state.current_page = self.state.current_page.clamp(1, last_page);
    }
}

impl TableViewPort for ViewStateController {
    fn set_sort_key(&mut self, key: SortKey) {
        if self.state.sort_key == key {
            self.state.sort_order = self.state.sort_order.toggled();
        } else {
            self.state.sort_key = key;
            self.state.sort_order = SortOrder::Desc;
        }
    }

    fn set_filter(&mut self, dimension: FilterDimension, selection: FilterSelection) {
        self.state.filters.set(dimension, selection);
        self.state.current_page = 1;
    }

    fn set_page(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages() {
            self.state.current_page = page;
            true
        } else {
            false
        }
    }

    fn view(&self) -> TableView {
        self.build_view(&self.sorted_rows(), self.state.current_page)
    }
}
