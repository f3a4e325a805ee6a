//! scan-table - tabular view over repository security-scan results
//!
//! This library loads a set of repository scan records, normalizes them into
//! display rows and derives a filtered, sorted and paginated table view from a
//! small mutable view state, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`scan_view`): Records, view state and the pure
//!   normalize / filter / sort / paginate services
//! - **Application Layer** (`application`): The view-state controller, use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use scan_table::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let data_source = FileRepositorySource::new(PathBuf::from("dashboard_data.json"));
//! let use_case = LoadRepositoriesUseCase::new(data_source, StderrProgressReporter::new());
//!
//! let mut controller = ViewStateController::new();
//! use_case.refresh(&mut controller).await;
//!
//! controller.set_filter(FilterDimension::SastTool, FilterSelection::from("CodeQL"));
//! controller.set_sort_key(SortKey::Vulnerabilities);
//!
//! let output = MarkdownTableFormatter::new().format(&controller.view())?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod scan_view;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileRepositorySource, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonTableFormatter, MarkdownTableFormatter};
    pub use crate::adapters::outbound::network::HttpRepositorySource;
    pub use crate::application::controller::ViewStateController;
    pub use crate::application::dto::{OutputFormat, TableRequest};
    pub use crate::application::read_models::TableView;
    pub use crate::application::use_cases::{LoadRepositoriesUseCase, ShowTableUseCase};
    pub use crate::ports::inbound::TableViewPort;
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, RepositoryDataSource, TableFormatter,
    };
    pub use crate::scan_view::domain::{
        CanonicalRow, FilterDimension, FilterSelection, Filters, RawRecord, RerunFlag, SortKey,
        SortOrder, ViewState, PAGE_SIZE,
    };
    pub use crate::scan_view::policies::TimestampFormat;
    pub use crate::scan_view::services::{
        FilterEngine, PaginationEngine, RecordNormalizer, SortEngine,
    };
    pub use crate::shared::Result;
}
