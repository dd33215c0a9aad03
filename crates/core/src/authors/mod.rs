//! Authors module - domain models, services, and traits.

mod authors_model;
mod authors_service;
mod authors_traits;

pub use authors_model::{Author, NewAuthor};
pub use authors_service::AuthorService;
pub use authors_traits::{AuthorRepositoryTrait, AuthorServiceTrait};
