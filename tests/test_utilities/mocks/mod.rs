/// Mock implementations for testing
mod mock_data_source;
mod mock_progress_reporter;

pub use mock_data_source::MockDataSource;
pub use mock_progress_reporter::MockProgressReporter;
