use log::debug;
use std::sync::Arc;

use super::authors_model::{Author, NewAuthor};
use super::authors_traits::{AuthorRepositoryTrait, AuthorServiceTrait};
use crate::errors::Result;

/// Service for registering authors.
pub struct AuthorService {
    repository: Arc<dyn AuthorRepositoryTrait>,
}

impl AuthorService {
    pub fn new(repository: Arc<dyn AuthorRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl AuthorServiceTrait for AuthorService {
    /// Registers an author. The name is stored as given.
    async fn add_author(&self, new_author: NewAuthor) -> Result<Author> {
        let author = self.repository.create(new_author).await?;
        debug!("Registered author {} ({})", author.id, author.full_name);
        Ok(author)
    }
}
