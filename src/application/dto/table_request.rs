use crate::scan_view::domain::{FilterSelection, SortKey};

/// TableRequest - the user actions to replay against a freshly loaded view
///
/// Actions are applied in a fixed order: filters, then sort clicks (each
/// entry is one header click, so repeating a key toggles its direction),
/// then the page. Filters reset the page, so the page must come last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRequest {
    pub sast_tool: Option<FilterSelection>,
    pub rerun: Option<FilterSelection>,
    pub sort_clicks: Vec<SortKey>,
    pub page: Option<usize>,
    /// Render every page instead of only the current one
    pub all_pages: bool,
}
