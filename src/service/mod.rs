pub mod key_registry;
pub mod record_store;
pub mod token;

pub use key_registry::KeyRegistry;
pub use record_store::RecordStore;
