/// Use cases orchestrating data loading and view actions
mod load_repositories;
mod show_table;

pub use load_repositories::LoadRepositoriesUseCase;
pub use show_table::ShowTableUseCase;
