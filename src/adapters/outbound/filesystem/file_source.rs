use crate::ports::outbound::RepositoryDataSource;
use crate::scan_view::domain::{RawRecord, RepositoryDocument};
use crate::shared::error::TableError;
use crate::shared::security::{read_regular_file, MAX_DOCUMENT_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// FileRepositorySource adapter reading `{ "repos": [...] }` from disk
///
/// Symbolic links and oversized files are rejected before reading.
pub struct FileRepositorySource {
    path: PathBuf,
}

impl FileRepositorySource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl RepositoryDataSource for FileRepositorySource {
    async fn fetch_records(&self) -> Result<Vec<RawRecord>> {
        if !self.path.exists() {
            return Err(TableError::DataSourceNotFound {
                path: self.path.clone(),
                suggestion: "Pass the data document with --source, or set `source` in scan-table.config.yml".to_string(),
            }
            .into());
        }

        let content = read_regular_file(&self.path, MAX_DOCUMENT_SIZE)?;
        let document = RepositoryDocument::parse(&content, &self.location())?;
        Ok(document.repos)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
