//! Author repository and service traits.

use async_trait::async_trait;

use super::authors_model::{Author, NewAuthor};
use crate::errors::Result;

/// Trait defining the contract for author persistence.
#[async_trait]
pub trait AuthorRepositoryTrait: Send + Sync {
    /// Inserts a new author. The id and creation timestamp are assigned by
    /// the storage layer.
    async fn create(&self, new_author: NewAuthor) -> Result<Author>;
}

/// Trait for author service operations
#[async_trait]
pub trait AuthorServiceTrait: Send + Sync {
    async fn add_author(&self, new_author: NewAuthor) -> Result<Author>;
}
