use crate::application::read_models::TableView;
use crate::ports::outbound::TableFormatter;
use crate::shared::Result;

/// JsonTableFormatter adapter dumping the derived view as pretty JSON
///
/// A single page is an object; several pages are an array of objects.
pub struct JsonTableFormatter;

impl JsonTableFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonTableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableFormatter for JsonTableFormatter {
    fn format(&self, view: &TableView) -> Result<String> {
        let mut json = serde_json::to_string_pretty(view)?;
        json.push('\n');
        Ok(json)
    }

    fn format_pages(&self, pages: &[TableView]) -> Result<String> {
        let mut json = serde_json::to_string_pretty(pages)?;
        json.push('\n');
        Ok(json)
    }
}
