use crate::error::AdminError;
use figment::{Figment, providers::Env};
use serde::Deserialize;

/// Runtime settings, extracted from `WLADMIN_`-prefixed environment
/// variables with sensible defaults for every field.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Key under which the whitelist document is stored.
    #[serde(default = "default_store_key")]
    pub store_key: String,
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

fn default_database_url() -> String {
    "sqlite:whitelist.sqlite".to_string()
}

fn default_store_key() -> String {
    "whitelistData".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            store_key: default_store_key(),
            loglevel: default_loglevel(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AdminError> {
        Ok(Figment::new().merge(Env::prefixed("WLADMIN_")).extract()?)
    }
}
