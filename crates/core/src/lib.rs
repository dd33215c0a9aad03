//! Budgetbook Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for budget records, their authors
//! and the yearly statistics built over them. It is database-agnostic and
//! defines traits that are implemented by the `storage-sqlite` crate.

pub mod authors;
pub mod budget;
pub mod constants;
pub mod errors;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
