use crate::config::Config;
use crate::db::schema::SQLITE_INIT;
use crate::error::AdminError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct DocumentStorage {
    pool: SqlitePool,
}

impl DocumentStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database named by the config, creating it if missing,
    /// and run the bundled DDL.
    pub async fn connect(cfg: &Config) -> Result<Self, AdminError> {
        let connect_opts =
            SqliteConnectOptions::from_str(cfg.database_url.as_str())?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), AdminError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Fetch the raw serialized value stored under `key`, if any.
    pub async fn read(&self, key: &str) -> Result<Option<String>, AdminError> {
        let row = sqlx::query("SELECT value FROM documents WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| r.try_get::<String, _>("value"))
            .transpose()
            .map_err(Into::into)
    }

    /// Replace the value stored under `key` in a single upsert statement,
    /// so a failed write never leaves a partial document behind.
    pub async fn write(&self, key: &str, value: &str) -> Result<(), AdminError> {
        sqlx::query(
            r#"
            INSERT INTO documents (key, value) VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
