use crate::application::controller::ViewStateController;
use crate::application::dto::TableRequest;
use crate::application::read_models::TableView;
use crate::ports::inbound::TableViewPort;
use crate::ports::outbound::{ProgressReporter, RepositoryDataSource};
use crate::scan_view::domain::FilterDimension;

use super::LoadRepositoriesUseCase;

/// ShowTableUseCase - loads the data, replays the requested actions and
/// returns the page(s) to render
pub struct ShowTableUseCase<S, PR> {
    loader: LoadRepositoriesUseCase<S, PR>,
}

impl<S, PR> ShowTableUseCase<S, PR>
where
    S: RepositoryDataSource,
    PR: ProgressReporter,
{
    pub fn new(data_source: S, progress_reporter: PR) -> Self {
        Self {
            loader: LoadRepositoriesUseCase::new(data_source, progress_reporter),
        }
    }

    /// Executes against a controller owned by the caller, so the caller keeps
    /// the resulting state.
    pub async fn execute(
        &self,
        controller: &mut ViewStateController,
        request: &TableRequest,
    ) -> Vec<TableView> {
        self.loader.refresh(controller).await;
        self.apply_actions(controller, request);

        if request.all_pages {
            controller.all_pages()
        } else {
            vec![controller.view()]
        }
    }

    fn apply_actions(&self, controller: &mut ViewStateController, request: &TableRequest) {
        if let Some(selection) = &request.sast_tool {
            controller.set_filter(FilterDimension::SastTool, selection.clone());
        }
        if let Some(selection) = &request.rerun {
            controller.set_filter(FilterDimension::Rerun, selection.clone());
        }

        for key in &request.sort_clicks {
            controller.set_sort_key(*key);
        }

        if let Some(page) = request.page {
            if !controller.set_page(page) {
                self.loader.progress_reporter().report_error(&format!(
                    "⚠️  Page {} does not exist ({} page(s) available); staying on page {}",
                    page,
                    controller.total_pages(),
                    controller.state().current_page
                ));
            }
        }
    }
}
