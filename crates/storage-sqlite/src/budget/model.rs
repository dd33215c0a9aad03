//! Database models for budget records.

use diesel::prelude::*;

use budgetbook_core::authors::Author;
use budgetbook_core::budget::{BudgetRecord, BudgetType, NewBudgetRecord};
use budgetbook_core::errors::{DatabaseError, Error, Result};

use crate::authors::AuthorDB;

/// Database model for budget records
#[derive(Queryable, Identifiable, Selectable, Associations, PartialEq, Debug, Clone)]
#[diesel(belongs_to(AuthorDB, foreign_key = author_id))]
#[diesel(table_name = crate::schema::budget_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BudgetRecordDB {
    pub id: i32,
    pub year: i32,
    pub month: i32,
    pub amount: i32,
    pub budget_type: String,
    pub author_id: Option<i32>,
}

/// Database model for inserting a budget record
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::budget_records)]
pub struct NewBudgetRecordDB {
    pub year: i32,
    pub month: i32,
    pub amount: i32,
    pub budget_type: String,
    pub author_id: Option<i32>,
}

impl From<NewBudgetRecord> for NewBudgetRecordDB {
    fn from(domain: NewBudgetRecord) -> Self {
        Self {
            year: domain.year,
            month: domain.month,
            amount: domain.amount,
            budget_type: domain.budget_type.as_code().to_string(),
            author_id: domain.author_id,
        }
    }
}

impl BudgetRecordDB {
    /// Converts the row and its (left-joined) author into the domain model.
    pub fn into_domain(self, author: Option<AuthorDB>) -> Result<BudgetRecord> {
        let budget_type = self.budget_type.parse::<BudgetType>().map_err(|e| {
            Error::Database(DatabaseError::Internal(format!(
                "budget record {}: {}",
                self.id, e
            )))
        })?;

        Ok(BudgetRecord {
            id: self.id,
            year: self.year,
            month: self.month,
            amount: self.amount,
            budget_type,
            author: author.map(Author::from),
        })
    }
}
