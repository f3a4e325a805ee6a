use crate::ports::outbound::RepositoryDataSource;
use crate::scan_view::domain::{RawRecord, RepositoryDocument};
use crate::shared::error::TableError;
use crate::shared::security::MAX_DOCUMENT_SIZE;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// HttpRepositorySource adapter fetching the data document over HTTP(S)
///
/// One GET per fetch, bounded by a timeout and by the same document size cap
/// as the file source. There is no retry or backoff; a failure is returned
/// and handled by the caller.
pub struct HttpRepositorySource {
    client: reqwest::Client,
    url: String,
    max_body_size: u64,
}

impl HttpRepositorySource {
    const TIMEOUT_SECONDS: u64 = 30;

    pub fn new(url: String) -> Result<Self> {
        let user_agent = format!("scan-table/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            url,
            max_body_size: MAX_DOCUMENT_SIZE,
        })
    }

    pub fn with_max_body_size(mut self, max_body_size: u64) -> Self {
        self.max_body_size = max_body_size;
        self
    }

    fn oversized_error(&self, size: u64) -> anyhow::Error {
        self.fetch_error(format!(
            "Response body of {} bytes exceeds the {} byte limit",
            size, self.max_body_size
        ))
    }

    fn fetch_error(&self, details: String) -> anyhow::Error {
        TableError::FetchError {
            url: self.url.clone(),
            details,
        }
        .into()
    }
}

#[async_trait]
impl RepositoryDataSource for HttpRepositorySource {
    async fn fetch_records(&self) -> Result<Vec<RawRecord>> {
        let mut response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.fetch_error(format!("HTTP status {}", status)));
        }

        if let Some(length) = response.content_length() {
            if length > self.max_body_size {
                return Err(self.oversized_error(length));
            }
        }

        // Content-Length may be absent or wrong; enforce the cap while reading.
        let mut bytes = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| self.fetch_error(format!("Failed to read response body: {}", e)))?
        {
            bytes.extend_from_slice(&chunk);
            if bytes.len() as u64 > self.max_body_size {
                return Err(self.oversized_error(bytes.len() as u64));
            }
        }

        let body = String::from_utf8(bytes)
            .map_err(|e| self.fetch_error(format!("Response body is not UTF-8: {}", e)))?;

        let document = RepositoryDocument::parse(&body, &self.url)?;
        Ok(document.repos)
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}
