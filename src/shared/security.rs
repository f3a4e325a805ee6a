use crate::shared::error::TableError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a repository data document (16 MB)
///
/// A dashboard document holds one small object per repository; anything
/// larger than this is rejected before it is read into memory.
pub const MAX_DOCUMENT_SIZE: u64 = 16 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// A path that does not exist yet is accepted (nothing to follow).
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(TableError::FileReadError {
                path: path.to_path_buf(),
                details: format!("Failed to read metadata for {}: {}", operation, e),
            }
            .into())
        }
    };

    if metadata.is_symlink() {
        return Err(TableError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} on a symbolic link is not allowed", operation),
            hint: "Point to the real file instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Reads a data document after checking it is a regular, non-symlinked file
/// no larger than `max_size` bytes.
pub fn read_regular_file(path: &Path, max_size: u64) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| TableError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if metadata.is_symlink() {
        return Err(TableError::SecurityError {
            path: path.to_path_buf(),
            reason: "Data file is a symbolic link".to_string(),
            hint: "Point --source at the real file instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(TableError::FileReadError {
            path: path.to_path_buf(),
            details: "not a regular file".to_string(),
        }
        .into());
    }

    if metadata.len() > max_size {
        return Err(TableError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                metadata.len(),
                max_size
            ),
            hint: "Split or trim the data document".to_string(),
        }
        .into());
    }

    fs::read_to_string(path).map_err(|e| {
        TableError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}
