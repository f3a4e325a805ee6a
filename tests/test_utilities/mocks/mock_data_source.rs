use async_trait::async_trait;
use scan_table::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock RepositoryDataSource serving canned records or a canned failure
///
/// The response can be swapped between fetches to simulate a refresh.
#[derive(Clone)]
pub struct MockDataSource {
    response: Arc<Mutex<Option<Vec<RawRecord>>>>,
    fetch_count: Arc<AtomicUsize>,
}

impl MockDataSource {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self {
            response: Arc::new(Mutex::new(Some(records))),
            fetch_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A source whose every fetch fails
    pub fn failing() -> Self {
        Self {
            response: Arc::new(Mutex::new(None)),
            fetch_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn from_json(json: &str) -> Self {
        let document: serde_json::Value = serde_json::from_str(json).unwrap();
        let records = serde_json::from_value(document["repos"].clone()).unwrap();
        Self::new(records)
    }

    pub fn set_records(&self, records: Vec<RawRecord>) {
        *self.response.lock().unwrap() = Some(records);
    }

    pub fn fail_next(&self) {
        *self.response.lock().unwrap() = None;
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RepositoryDataSource for MockDataSource {
    async fn fetch_records(&self) -> Result<Vec<RawRecord>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        match self.response.lock().unwrap().clone() {
            Some(records) => Ok(records),
            None => anyhow::bail!("connection refused"),
        }
    }

    fn location(&self) -> String {
        "mock://repositories".to_string()
    }
}
