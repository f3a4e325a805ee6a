use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// A failed data fetch is not an error for the view (it renders zero rows),
/// so only argument and I/O problems produce a non-zero code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Table rendered
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config, output, file I/O)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for loading and rendering the repository table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Data file not found: {path}\n\n💡 Hint: {suggestion}")]
    DataSourceNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse repository data from {source_location}\nDetails: {details}\n\n💡 Hint: The document must be JSON of the form {{ \"repos\": [...] }}")]
    DataSourceParseError {
        source_location: String,
        details: String,
    },

    #[error("Failed to fetch repository data from {url}\nDetails: {details}\n\n💡 Hint: Check the URL and your network connection")]
    FetchError { url: String, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Rejected configuration or argument values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
