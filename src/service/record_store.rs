use crate::config::Config;
use crate::db::sqlite::DocumentStorage;
use crate::error::AdminError;
use crate::service::token;
use crate::types::document::{
    ApiKey, Document, NewUser, Permission, Script, ScriptStatus, Stats, User, UserStatus,
    UserUpdate,
};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::{debug, info};

/// CRUD over the whitelist document. Every mutation is one full document
/// read, an in-memory edit, and one full document write; the stored value
/// is never partially updated.
#[derive(Clone)]
pub struct RecordStore {
    storage: DocumentStorage,
    store_key: String,
    next_id: Arc<AtomicI64>,
}

impl RecordStore {
    /// Open the backing store and make sure a document exists.
    pub async fn connect(cfg: &Config) -> Result<Self, AdminError> {
        let storage = DocumentStorage::connect(cfg).await?;
        let store = Self {
            storage,
            store_key: cfg.store_key.clone(),
            next_id: Arc::new(AtomicI64::new(1)),
        };
        store.initialize().await?;
        Ok(store)
    }

    /// Write the default document if none is stored, then seed the id
    /// counter from the highest id present. Idempotent; runs every startup.
    pub async fn initialize(&self) -> Result<(), AdminError> {
        if self.storage.read(&self.store_key).await?.is_none() {
            info!(key = %self.store_key, "no stored document; writing default seed");
            self.save_document(&Document::seeded()).await?;
        }
        let doc = self.get_document().await?;
        self.next_id.store(doc.max_id() + 1, Ordering::SeqCst);
        Ok(())
    }

    pub async fn get_document(&self) -> Result<Document, AdminError> {
        let raw = self
            .storage
            .read(&self.store_key)
            .await?
            .ok_or(AdminError::DocumentMissing)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub async fn save_document(&self, doc: &Document) -> Result<(), AdminError> {
        let raw = serde_json::to_string(doc)?;
        self.storage.write(&self.store_key, &raw).await
    }

    pub async fn add_user(&self, new: NewUser) -> Result<User, AdminError> {
        if new.username.trim().is_empty() {
            return Err(AdminError::Validation("username must not be empty".into()));
        }
        if new.user_id.trim().is_empty() {
            return Err(AdminError::Validation("user id must not be empty".into()));
        }
        if new.service.trim().is_empty() {
            return Err(AdminError::Validation("service must not be empty".into()));
        }
        let mut doc = self.get_document().await?;
        let user = User {
            id: self.alloc_id(),
            username: new.username,
            user_id: new.user_id,
            service: new.service,
            status: new.status,
            added_date: today(),
        };
        doc.users.push(user.clone());
        self.save_document(&doc).await?;
        debug!(id = user.id, username = %user.username, "user added");
        Ok(user)
    }

    /// Remove the matching user. An absent id is a successful no-op.
    pub async fn delete_user(&self, id: i64) -> Result<(), AdminError> {
        let mut doc = self.get_document().await?;
        doc.users.retain(|u| u.id != id);
        self.save_document(&doc).await?;
        debug!(id, "user deleted");
        Ok(())
    }

    /// Merge the supplied fields over the matching user. No-op if absent.
    pub async fn update_user(&self, id: i64, update: UserUpdate) -> Result<(), AdminError> {
        let mut doc = self.get_document().await?;
        let Some(user) = doc.users.iter_mut().find(|u| u.id == id) else {
            debug!(id, "update_user: no matching record");
            return Ok(());
        };
        user.merge(update);
        self.save_document(&doc).await?;
        debug!(id, "user updated");
        Ok(())
    }

    /// Mint a new API key. The returned record carries the full plaintext
    /// token; it is never logged and never surfaced again.
    pub async fn generate_api_key(
        &self,
        name: &str,
        permission: &str,
    ) -> Result<ApiKey, AdminError> {
        if name.trim().is_empty() {
            return Err(AdminError::Validation("key name must not be empty".into()));
        }
        let permission = Permission::parse_lenient(permission);
        let mut doc = self.get_document().await?;
        let record = ApiKey {
            id: self.alloc_id(),
            name: name.to_string(),
            key: format!("{}_{}", permission.key_prefix(), token::random_token(32)),
            permission,
            created_at: today(),
        };
        doc.api_keys.push(record.clone());
        self.save_document(&doc).await?;
        info!(id = record.id, name = %record.name, permission = ?record.permission, "api key generated");
        Ok(record)
    }

    pub async fn delete_api_key(&self, id: i64) -> Result<(), AdminError> {
        let mut doc = self.get_document().await?;
        doc.api_keys.retain(|k| k.id != id);
        self.save_document(&doc).await?;
        debug!(id, "api key deleted");
        Ok(())
    }

    /// Upsert by script name: an existing script keeps its id and
    /// `created_at`, getting new code and a fresh `updated_at`.
    pub async fn save_script(&self, name: &str, code: &str) -> Result<(), AdminError> {
        if name.trim().is_empty() {
            return Err(AdminError::Validation(
                "script name must not be empty".into(),
            ));
        }
        if code.trim().is_empty() {
            return Err(AdminError::Validation(
                "script code must not be empty".into(),
            ));
        }
        let stamp = today();
        let mut doc = self.get_document().await?;
        match doc.scripts.iter_mut().find(|s| s.name == name) {
            Some(existing) => {
                existing.code = code.to_string();
                existing.updated_at = stamp;
                debug!(id = existing.id, name, "script updated in place");
            }
            None => {
                let script = Script {
                    id: self.alloc_id(),
                    name: name.to_string(),
                    code: code.to_string(),
                    created_at: stamp,
                    updated_at: stamp,
                    status: ScriptStatus::Active,
                };
                debug!(id = script.id, name, "script created");
                doc.scripts.push(script);
            }
        }
        self.save_document(&doc).await
    }

    pub async fn delete_script(&self, id: i64) -> Result<(), AdminError> {
        let mut doc = self.get_document().await?;
        doc.scripts.retain(|s| s.id != id);
        self.save_document(&doc).await?;
        debug!(id, "script deleted");
        Ok(())
    }

    pub async fn get_stats(&self) -> Result<Stats, AdminError> {
        let doc = self.get_document().await?;
        Ok(Stats {
            total_users: doc.users.len(),
            active_users: count_status(&doc.users, UserStatus::Active),
            pending_users: count_status(&doc.users, UserStatus::Pending),
            total_services: doc.services.len(),
        })
    }

    fn alloc_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

fn count_status(users: &[User], status: UserStatus) -> usize {
    users.iter().filter(|u| u.status == status).count()
}

// Document dates are calendar days in UTC.
fn today() -> NaiveDate {
    Utc::now().date_naive()
}
