use crate::shared::Result;

/// OutputPresenter port for delivering the rendered table
///
/// Abstracts the destination (stdout, file).
pub trait OutputPresenter {
    /// Presents rendered content
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails.
    fn present(&self, content: &str) -> Result<()>;
}
