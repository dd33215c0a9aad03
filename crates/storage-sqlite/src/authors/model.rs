//! Database models for authors.

use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Database model for authors
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::authors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AuthorDB {
    pub id: i32,
    pub full_name: String,
    pub created_at: NaiveDateTime,
}

/// Database model for inserting an author; the id is assigned by SQLite.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::authors)]
pub struct NewAuthorDB {
    pub full_name: String,
    pub created_at: NaiveDateTime,
}

// Conversion to domain models
impl From<AuthorDB> for budgetbook_core::authors::Author {
    fn from(db: AuthorDB) -> Self {
        Self {
            id: db.id,
            full_name: db.full_name,
            created_at: db.created_at,
        }
    }
}

impl NewAuthorDB {
    /// Builds the row for `domain`, stamped with the current time.
    pub fn stamped(domain: budgetbook_core::authors::NewAuthor) -> Self {
        Self {
            full_name: domain.full_name,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
