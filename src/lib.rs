pub mod config;
pub mod db;
pub mod error;
pub mod service;
pub mod types;

pub use config::Config;
pub use error::AdminError;
pub use service::key_registry::KeyRegistry;
pub use service::record_store::RecordStore;
