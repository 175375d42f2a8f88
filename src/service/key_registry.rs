use crate::service::token;
use crate::types::license::{KeyStats, KeyStatus, LicenseKey};
use chrono::{Months, NaiveDate};
use tracing::debug;

/// In-memory list of license keys, ordered by append time and addressed
/// by position. Nothing here is persisted; the list lives exactly as long
/// as the process does.
pub struct KeyRegistry {
    keys: Vec<LicenseKey>,
}

impl KeyRegistry {
    /// Registry pre-populated with the example entries shown on first load.
    pub fn new() -> Self {
        Self { keys: seed_keys() }
    }

    /// Fresh license key. No collision check against existing entries.
    pub fn generate_key(&self) -> String {
        token::license_key()
    }

    /// Append a key as `Active`. When no expiry is supplied it defaults to
    /// one calendar month after the creation date.
    pub fn append_key(&mut self, key: String, created: NaiveDate, expires: Option<NaiveDate>) {
        let expires = expires.unwrap_or_else(|| default_expiry(created));
        debug!(key = %key, %created, %expires, "license key appended");
        self.keys.push(LicenseKey {
            key,
            created,
            expires,
            status: KeyStatus::Active,
        });
    }

    /// Remove the entry at `index`; later entries shift down by one.
    /// Out of range is a silent no-op.
    pub fn delete_key(&mut self, index: usize) {
        if index < self.keys.len() {
            self.keys.remove(index);
        } else {
            debug!(index, "delete_key: index out of range");
        }
    }

    pub fn keys(&self) -> &[LicenseKey] {
        &self.keys
    }

    pub fn compute_stats(&self) -> KeyStats {
        let active = self
            .keys
            .iter()
            .filter(|k| k.status == KeyStatus::Active)
            .count();
        KeyStats {
            total_count: self.keys.len(),
            // Fixed label, not a computed duration.
            active_summary: if active > 0 { "30 days" } else { "none" },
        }
    }
}

impl Default for KeyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn default_expiry(created: NaiveDate) -> NaiveDate {
    created.checked_add_months(Months::new(1)).unwrap_or(created)
}

fn seed_keys() -> Vec<LicenseKey> {
    vec![
        LicenseKey {
            key: "LUASYNC-8F3KQ29Z-X7M4P1".to_string(),
            created: seed_date(2024, 2, 1),
            expires: seed_date(2024, 3, 1),
            status: KeyStatus::Active,
        },
        LicenseKey {
            key: "LUASYNC-T5WN61RD-K9B2C8".to_string(),
            created: seed_date(2024, 2, 10),
            expires: seed_date(2024, 3, 10),
            status: KeyStatus::Active,
        },
        LicenseKey {
            key: "LUASYNC-J4H8V2LS-Q6D3F5".to_string(),
            created: seed_date(2024, 1, 5),
            expires: seed_date(2024, 2, 5),
            status: KeyStatus::Expired,
        },
    ]
}

fn seed_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
