use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use budgetbook_core::authors::{Author, AuthorRepositoryTrait, NewAuthor};
use budgetbook_core::Result;

use super::model::{AuthorDB, NewAuthorDB};
use crate::db::WriteHandle;
use crate::errors::IntoCore;
use crate::schema::authors;

/// Repository for author rows. Authors are only ever written; budget
/// inserts resolve them inside their own transaction.
pub struct AuthorRepository {
    writer: WriteHandle,
}

impl AuthorRepository {
    pub fn new(writer: WriteHandle) -> Self {
        AuthorRepository { writer }
    }
}

#[async_trait]
impl AuthorRepositoryTrait for AuthorRepository {
    async fn create(&self, new_author: NewAuthor) -> Result<Author> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Author> {
                let row = NewAuthorDB::stamped(new_author);
                let created = diesel::insert_into(authors::table)
                    .values(&row)
                    .returning(AuthorDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Author::from(created))
            })
            .await
    }
}
