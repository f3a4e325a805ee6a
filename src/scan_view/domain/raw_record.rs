use crate::shared::error::TableError;
use crate::shared::Result;
use serde::{Deserialize, Deserializer, Serialize};

/// Top-level shape of the repository data document: `{ "repos": [...] }`
///
/// A document without a `repos` key is valid and simply has no records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RepositoryDocument {
    #[serde(default)]
    pub repos: Vec<RawRecord>,
}

impl RepositoryDocument {
    /// Decodes a JSON document; `location` only feeds the error message.
    pub fn parse(content: &str, location: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            TableError::DataSourceParseError {
                source_location: location.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

/// One repository entry exactly as received from the data source
///
/// Every field is optional on the wire so that a sparse entry never makes the
/// whole document unreadable; defaults are applied during normalization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub vulnerabilities: Option<f64>,
    /// ISO-8601 timestamp of the last scan, or absent
    #[serde(default)]
    pub updates: Option<String>,
    #[serde(default, rename = "sastTool")]
    pub sast_tool: Option<String>,
    #[serde(default)]
    pub rerun: Option<bool>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub repo_url: String,
}

/// `null` reads as `""` for the string fields that have no absent state.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
