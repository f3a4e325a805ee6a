mod filter_engine;
mod pagination_engine;
mod record_normalizer;
mod sort_engine;

pub use filter_engine::FilterEngine;
pub use pagination_engine::{Page, PaginationEngine};
pub use record_normalizer::RecordNormalizer;
pub use sort_engine::SortEngine;
