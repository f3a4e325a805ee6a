use crate::application::read_models::TableView;
use crate::ports::outbound::TableFormatter;
use crate::scan_view::domain::{Align, CanonicalRow, ColumnDescriptor};
use crate::shared::Result;

/// MarkdownTableFormatter adapter rendering one page as a Markdown table
///
/// Column order and alignment come from the view's column descriptors; the
/// URL cell becomes a link. Widths are a layout hint Markdown cannot express
/// and are ignored.
pub struct MarkdownTableFormatter;

impl MarkdownTableFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace(['\r', '\n'], " ")
    }

    fn alignment_marker(column: &ColumnDescriptor) -> &'static str {
        match column.align {
            Align::Left => ":---",
            Align::Center => ":---:",
        }
    }

    fn cell(row: &CanonicalRow, column: &ColumnDescriptor) -> String {
        match column.name {
            "name" => Self::escape_cell(&row.name),
            "vulnerabilities" => row.vulnerabilities.to_string(),
            "updates" => Self::escape_cell(&row.updates),
            "sastTool" => Self::escape_cell(&row.sast_tool),
            "rerun" => row.rerun.to_string(),
            "url" if !row.url.is_empty() => {
                let url = Self::escape_cell(&row.url);
                format!("[{}]({})", url, url.replace(' ', "%20"))
            }
            _ => String::new(),
        }
    }

    fn render_summary(&self, output: &mut String, view: &TableView) {
        output.push_str(&format!(
            "Sort: {} ({}), SAST Tool: {}, Rerun: {}\n\n",
            view.state.sort_key,
            view.state.sort_order,
            view.state.filters.sast_tool,
            view.state.filters.rerun
        ));
    }

    fn render_table(&self, output: &mut String, view: &TableView) {
        let header: Vec<&str> = view.columns.iter().map(|c| c.name).collect();
        output.push_str(&format!("| {} |\n", header.join(" | ")));

        let markers: Vec<&str> = view.columns.iter().map(Self::alignment_marker).collect();
        output.push_str(&format!("| {} |\n", markers.join(" | ")));

        for row in &view.rows {
            let cells: Vec<String> = view.columns.iter().map(|c| Self::cell(row, c)).collect();
            output.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
        output.push('\n');
    }

    fn render_footer(&self, output: &mut String, view: &TableView) {
        if view.is_empty() {
            output.push_str("_No repositories to display._\n\n");
        }
        output.push_str(&format!(
            "{} ({} of {} repositories)\n",
            view.page_label(),
            view.filtered_count,
            view.total_count
        ));
    }
}

impl Default for MarkdownTableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableFormatter for MarkdownTableFormatter {
    fn format(&self, view: &TableView) -> Result<String> {
        let mut output = String::new();
        output.push_str("## Repositories\n\n");
        self.render_summary(&mut output, view);
        self.render_table(&mut output, view);
        self.render_footer(&mut output, view);
        Ok(output)
    }
}
