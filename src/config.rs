//! Configuration file support for scan-table.
//!
//! Provides YAML-based configuration through `scan-table.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use scan_table::shared::Result;

pub const CONFIG_FILENAME: &str = "scan-table.config.yml";

/// Top-level configuration file schema.
///
/// Values are kept as strings here and parsed with the same rules as the
/// matching command-line flags when merged.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub source: Option<String>,
    pub format: Option<String>,
    pub sast_tool: Option<String>,
    pub rerun: Option<String>,
    /// Header clicks replayed in order, like repeated `--sort` flags.
    pub sort: Option<Vec<String>>,
    pub utc_offset: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty document deserializes as unit, not as a mapping.
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref source) = config.source {
        if source.trim().is_empty() {
            bail!(
                "Invalid config: source must not be empty.\n\n\
                 💡 Hint: Set 'source' to a URL or a JSON file path, or remove the key to use the default."
            );
        }
    }
    if let Some(ref sort) = config.sort {
        if let Some(i) = sort.iter().position(|key| key.trim().is_empty()) {
            bail!(
                "Invalid config: sort[{}] must not be empty.\n\n\
                 💡 Hint: Each sort entry must name a column (e.g., \"vulnerabilities\").",
                i
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
