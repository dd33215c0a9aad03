//! Budget repository and service traits.

use async_trait::async_trait;

use super::budget_model::{BudgetRecord, NewBudgetRecord, YearStats, YearStatsQuery};
use crate::errors::Result;

/// Trait defining the contract for budget record persistence.
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Inserts a budget record.
    ///
    /// When `author_id` is set, the author lookup and the insert run in the
    /// same unit of work; a missing author fails with
    /// `BudgetError::AuthorNotFound` and nothing is written.
    async fn insert_record(&self, new_record: NewBudgetRecord) -> Result<BudgetRecord>;

    /// Loads every record of `year`, optionally restricted to authors whose
    /// full name contains `author_name` (case-insensitive).
    ///
    /// Records are returned ordered by month ascending, then amount
    /// descending, then id ascending.
    fn load_year_records(&self, year: i32, author_name: Option<&str>) -> Result<Vec<BudgetRecord>>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    async fn add_record(&self, new_record: NewBudgetRecord) -> Result<BudgetRecord>;
    fn get_year_stats(&self, query: YearStatsQuery) -> Result<YearStats>;
}
