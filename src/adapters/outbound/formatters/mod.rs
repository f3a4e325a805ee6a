/// Formatter adapters rendering the table view
mod json_formatter;
mod markdown_formatter;

pub use json_formatter::JsonTableFormatter;
pub use markdown_formatter::MarkdownTableFormatter;
