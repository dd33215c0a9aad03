//! SQLite storage implementation for authors.

mod model;
mod repository;

pub use model::{AuthorDB, NewAuthorDB};
pub use repository::AuthorRepository;
