//! Budget module - budget records, yearly statistics, services, and traits.

mod budget_errors;
mod budget_model;
mod budget_service;
mod budget_stats;
mod budget_traits;


pub use budget_errors::BudgetError;
pub use budget_model::{BudgetRecord, BudgetType, NewBudgetRecord, YearStats, YearStatsQuery};
pub use budget_service::BudgetService;
pub use budget_stats::{build_year_stats, compare_for_stats};
pub use budget_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
