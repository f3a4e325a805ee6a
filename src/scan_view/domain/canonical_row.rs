use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Placeholder shown when a record does not name its static-analysis tool
pub const UNKNOWN_TOOL: &str = "N/A";

/// Whether a repository is flagged for a scan rerun
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RerunFlag {
    Yes,
    No,
}

impl RerunFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            RerunFlag::Yes => "Yes",
            RerunFlag::No => "No",
        }
    }
}

impl From<Option<bool>> for RerunFlag {
    fn from(value: Option<bool>) -> Self {
        if value.unwrap_or(false) {
            RerunFlag::Yes
        } else {
            RerunFlag::No
        }
    }
}

impl fmt::Display for RerunFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A repository record with every field defaulted and typed
///
/// `updates` is the display string; `updates_raw` keeps the parsed instant
/// because the formatted text cannot be ordered chronologically.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRow {
    pub name: String,
    pub vulnerabilities: f64,
    pub updates: String,
    pub updates_raw: Option<DateTime<Utc>>,
    pub sast_tool: String,
    pub rerun: RerunFlag,
    pub url: String,
}
