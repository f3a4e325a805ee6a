//! Read models handed to renderers

pub mod table_view;

pub use table_view::TableView;
