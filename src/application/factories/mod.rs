mod data_source_factory;
mod formatter_factory;
mod presenter_factory;

pub use data_source_factory::{DataSourceFactory, SourceType};
pub use formatter_factory::FormatterFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
