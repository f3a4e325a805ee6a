use crate::application::read_models::TableView;
use crate::scan_view::domain::{FilterDimension, FilterSelection, SortKey};

/// TableViewPort - Inbound port for user actions on the repository table
///
/// Every mutation is followed by a deterministic recomputation of the
/// visible page, observable through [`TableViewPort::view`].
pub trait TableViewPort {
    /// Header click: toggles the direction on the active key, otherwise
    /// switches to `key` in descending order.
    fn set_sort_key(&mut self, key: SortKey);

    /// Replaces the selection for one dimension and returns to page 1.
    fn set_filter(&mut self, dimension: FilterDimension, selection: FilterSelection);

    /// Moves to page `page` when it exists; returns whether it was applied.
    fn set_page(&mut self, page: usize) -> bool;

    /// Derived table for the current state
    fn view(&self) -> TableView;
}
