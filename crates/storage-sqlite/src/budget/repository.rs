use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use budgetbook_core::budget::{BudgetError, BudgetRecord, BudgetRepositoryTrait, NewBudgetRecord};
use budgetbook_core::Result;

use super::model::{BudgetRecordDB, NewBudgetRecordDB};
use crate::authors::AuthorDB;
use crate::db::sql_functions::{instr, unicode_lower};
use crate::db::{get_connection, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{authors, budget_records};

pub struct BudgetRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        BudgetRepository { pool, writer }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    async fn insert_record(&self, new_record: NewBudgetRecord) -> Result<BudgetRecord> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<BudgetRecord> {
                let author = match new_record.author_id {
                    Some(author_id) => Some(
                        authors::table
                            .find(author_id)
                            .select(AuthorDB::as_select())
                            .first::<AuthorDB>(conn)
                            .optional()
                            .into_core()?
                            .ok_or(BudgetError::AuthorNotFound(author_id))?,
                    ),
                    None => None,
                };

                let row: NewBudgetRecordDB = new_record.into();
                let inserted = diesel::insert_into(budget_records::table)
                    .values(&row)
                    .returning(BudgetRecordDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                inserted.into_domain(author)
            })
            .await
    }

    fn load_year_records(
        &self,
        year: i32,
        author_name: Option<&str>,
    ) -> Result<Vec<BudgetRecord>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = budget_records::table
            .left_join(authors::table)
            .filter(budget_records::year.eq(year))
            .select((budget_records::all_columns, authors::all_columns.nullable()))
            .into_boxed();

        if let Some(name) = author_name {
            // Literal substring match: `%` and `_` in the filter are not wildcards.
            let needle = name.to_lowercase();
            query = query.filter(instr(unicode_lower(authors::full_name.nullable()), needle).gt(0));
        }

        let rows = query
            .order((
                budget_records::month.asc(),
                budget_records::amount.desc(),
                budget_records::id.asc(),
            ))
            .load::<(BudgetRecordDB, Option<AuthorDB>)>(&mut conn)
            .into_core()?;

        debug!("Loaded {} budget records for year {}", rows.len(), year);

        rows.into_iter()
            .map(|(record, author)| record.into_domain(author))
            .collect()
    }
}
