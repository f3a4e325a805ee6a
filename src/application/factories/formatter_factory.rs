use crate::adapters::outbound::formatters::{JsonTableFormatter, MarkdownTableFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::TableFormatter;

/// Factory for creating table formatters
///
/// Selects the rendering adapter for an output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// # Examples
    /// ```
    /// use scan_table::application::dto::OutputFormat;
    /// use scan_table::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Markdown);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn TableFormatter> {
        match format {
            OutputFormat::Markdown => Box::new(MarkdownTableFormatter::new()),
            OutputFormat::Json => Box::new(JsonTableFormatter::new()),
        }
    }

    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Markdown => "📝 Rendering Markdown table...",
            OutputFormat::Json => "📝 Rendering JSON table view...",
        }
    }
}
