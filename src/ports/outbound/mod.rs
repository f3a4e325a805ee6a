/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// The application core uses these to fetch repository data, render the
/// table, deliver output and report diagnostics.
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod repository_source;

pub use formatter::TableFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use repository_source::RepositoryDataSource;
