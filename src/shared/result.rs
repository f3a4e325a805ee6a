/// Result alias used across the crate; errors are carried as `anyhow::Error`
/// so typed `TableError`s and foreign errors compose through `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
