//! SQL functions used by the repositories.
//!
//! SQLite's built-in `lower()` only folds ASCII, so author names are matched
//! through `unicode_lower`, which is implemented in Rust and registered on
//! every pooled connection.

use diesel::expression::functions::define_sql_function;
use diesel::sql_types::{Nullable, Text};
use diesel::sqlite::SqliteConnection;
use diesel::QueryResult;

define_sql_function! {
    /// Unicode-aware lower-casing, `NULL` stays `NULL`.
    fn unicode_lower(value: Nullable<Text>) -> Nullable<Text>;
}

define_sql_function! {
    /// SQLite built-in: 1-based position of `needle` in `haystack`, 0 if absent.
    fn instr(haystack: Nullable<Text>, needle: Text) -> Nullable<diesel::sql_types::Integer>;
}

/// Registers the Rust-implemented functions on `conn`.
pub fn register(conn: &mut SqliteConnection) -> QueryResult<()> {
    unicode_lower_utils::register_impl(conn, |value: Option<String>| {
        value.map(|v| v.to_lowercase())
    })
}
