pub mod document;
pub mod license;

pub use document::{
    ApiKey, Document, NewUser, Permission, Script, ScriptStatus, Stats, User, UserStatus,
    UserUpdate,
};
pub use license::{KeyStats, KeyStatus, LicenseKey};
