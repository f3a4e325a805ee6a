/// Filesystem adapters for reading the data document and writing output
mod file_source;
mod file_writer;

pub use file_source::FileRepositorySource;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
