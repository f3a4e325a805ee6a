use crate::adapters::outbound::filesystem::FileRepositorySource;
use crate::adapters::outbound::network::HttpRepositorySource;
use crate::ports::outbound::RepositoryDataSource;
use crate::shared::Result;
use std::path::PathBuf;

/// Kind of location the repository document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceType {
    Http(String),
    File(PathBuf),
}

impl SourceType {
    /// `http://` and `https://` locations are fetched over the network;
    /// anything else is a local path.
    pub fn from_location(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            SourceType::Http(location.to_string())
        } else {
            SourceType::File(PathBuf::from(location))
        }
    }
}

/// Factory for creating repository data sources
pub struct DataSourceFactory;

impl DataSourceFactory {
    pub fn create(source_type: SourceType) -> Result<Box<dyn RepositoryDataSource>> {
        Ok(match source_type {
            SourceType::Http(url) => Box::new(HttpRepositorySource::new(url)?),
            SourceType::File(path) => Box::new(FileRepositorySource::new(path)),
        })
    }
}
