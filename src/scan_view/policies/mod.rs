pub mod timestamp_format;

pub use timestamp_format::{parse_timestamp, parse_utc_offset, TimestampFormat};
