use crate::scan_view::domain::RawRecord;
use crate::shared::Result;
use async_trait::async_trait;

/// RepositoryDataSource port for acquiring repository scan records
///
/// The source returns a `{ "repos": [...] }` document already decoded into
/// raw records. Retrying and caching are out of scope; a failure is simply
/// returned to the caller.
#[async_trait]
pub trait RepositoryDataSource: Send + Sync {
    /// Fetches the complete record collection
    ///
    /// # Errors
    /// Returns an error if the resource cannot be retrieved or decoded.
    async fn fetch_records(&self) -> Result<Vec<RawRecord>>;

    /// Human-readable location (URL or path) for diagnostics
    fn location(&self) -> String;
}

#[async_trait]
impl<T: RepositoryDataSource + ?Sized> RepositoryDataSource for Box<T> {
    async fn fetch_records(&self) -> Result<Vec<RawRecord>> {
        (**self).fetch_records().await
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
