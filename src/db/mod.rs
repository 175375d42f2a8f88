//! Database module: key-value persistence for the whitelist document.
//!
//! Layout:
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: storage struct over the sqlx pool

pub mod schema;
pub mod sqlite;

pub use schema::SQLITE_INIT;
pub use sqlite::{DocumentStorage, SqlitePool};
