pub mod canonical_row;
pub mod column;
pub mod raw_record;
pub mod view_state;

pub use canonical_row::{CanonicalRow, RerunFlag};
pub use column::{default_columns, Align, ColumnDescriptor};
pub use raw_record::{RawRecord, RepositoryDocument};
pub use view_state::{
    FilterDimension, FilterSelection, Filters, SortKey, SortOrder, ViewState, PAGE_SIZE,
};
