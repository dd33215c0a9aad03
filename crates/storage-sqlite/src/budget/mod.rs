//! SQLite storage implementation for budget records.

mod model;
mod repository;

pub use model::{BudgetRecordDB, NewBudgetRecordDB};
pub use repository::BudgetRepository;
