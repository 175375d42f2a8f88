use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum AdminError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("no document stored under the configured key")]
    DocumentMissing,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] figment::Error),
}
