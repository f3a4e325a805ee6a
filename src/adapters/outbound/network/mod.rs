/// Network adapters for remote data documents
mod http_source;

pub use http_source::HttpRepositorySource;
