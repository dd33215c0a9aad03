use log::debug;
use std::sync::Arc;

use super::budget_model::{BudgetRecord, NewBudgetRecord, YearStats, YearStatsQuery};
use super::budget_stats::build_year_stats;
use super::budget_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::Result;

/// Service for recording budget items and computing yearly statistics.
pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
}

impl BudgetService {
    pub fn new(repository: Arc<dyn BudgetRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl BudgetServiceTrait for BudgetService {
    /// Validates and stores a budget record.
    async fn add_record(&self, new_record: NewBudgetRecord) -> Result<BudgetRecord> {
        new_record.validate()?;

        let record = self.repository.insert_record(new_record).await?;
        debug!(
            "Added budget record {} ({}-{:02}, {} {})",
            record.id, record.year, record.month, record.amount, record.budget_type
        );
        Ok(record)
    }

    /// Computes statistics for one year from a single read of the filtered set.
    fn get_year_stats(&self, query: YearStatsQuery) -> Result<YearStats> {
        let records = self
            .repository
            .load_year_records(query.year, query.author_name.as_deref())?;
        debug!(
            "Year {} stats: {} matching records (author filter: {:?})",
            query.year,
            records.len(),
            query.author_name
        );
        Ok(build_year_stats(records, query.limit, query.offset))
    }
}
