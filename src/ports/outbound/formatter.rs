use crate::application::read_models::TableView;
use crate::shared::Result;

/// TableFormatter port for rendering the derived table
///
/// This is the rendering collaborator: it turns computed columns and rows
/// into text and never feeds anything back into the view state.
pub trait TableFormatter {
    /// Renders a single page
    fn format(&self, view: &TableView) -> Result<String>;

    /// Renders several pages in order
    ///
    /// The default concatenates single-page renderings separated by a blank line.
    fn format_pages(&self, pages: &[TableView]) -> Result<String> {
        let rendered = pages
            .iter()
            .map(|page| self.format(page))
            .collect::<Result<Vec<_>>>()?;
        Ok(rendered.join("\n"))
    }
}
