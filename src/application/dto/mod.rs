/// Data Transfer Objects for application layer
///
/// DTOs carry requests from the CLI into the use cases without exposing
/// clap or config types to the application core.
mod output_format;
mod table_request;

pub use output_format::OutputFormat;
pub use table_request::TableRequest;
