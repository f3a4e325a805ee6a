/// Domain layer for the repository scan table
///
/// Holds the record and view-state models together with the pure
/// normalize/filter/sort/paginate services. Nothing in here performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
