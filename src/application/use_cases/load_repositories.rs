use crate::application::controller::ViewStateController;
use crate::ports::outbound::{ProgressReporter, RepositoryDataSource};

/// LoadRepositoriesUseCase - fetches the record set once and hands it to
/// the controller
///
/// The swap is all-or-nothing: on success the controller receives the full
/// new set, on failure the error is reported and the controller keeps what it
/// had (nothing, on the first load). A failed fetch never fails the view.
///
/// # Type Parameters
/// * `S` - RepositoryDataSource implementation
/// * `PR` - ProgressReporter implementation
pub struct LoadRepositoriesUseCase<S, PR> {
    data_source: S,
    progress_reporter: PR,
}

impl<S, PR> LoadRepositoriesUseCase<S, PR>
where
    S: RepositoryDataSource,
    PR: ProgressReporter,
{
    pub fn new(data_source: S, progress_reporter: PR) -> Self {
        Self {
            data_source,
            progress_reporter,
        }
    }

    pub fn progress_reporter(&self) -> &PR {
        &self.progress_reporter
    }

    /// Loads records into `controller`; returns whether new data landed.
    pub async fn refresh(&self, controller: &mut ViewStateController) -> bool {
        let location = self.data_source.location();
        self.progress_reporter
            .report_waiting(&format!("⏳ Loading repository data from {} ...", location));

        match self.data_source.fetch_records().await {
            Ok(records) => {
                let count = records.len();
                controller.replace_records(records);
                self.progress_reporter
                    .report_completion(&format!("✅ Loaded {} repositories", count));
                true
            }
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Failed to load repository data from {}: {:#}",
                    location, e
                ));
                false
            }
        }
    }
}
