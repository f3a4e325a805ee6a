/// Shared utilities: error types, the Result alias and file-safety checks.
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
