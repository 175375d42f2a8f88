//! SQL DDL for initializing the document store.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema: a single key-value table. The `value` column holds the
/// whole serialized whitelist document; every write replaces it in full.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;
