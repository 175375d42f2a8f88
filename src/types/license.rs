use chrono::NaiveDate;
use serde::Serialize;

/// License-key state. Seeded entries keep whatever status they were
/// seeded with; there is no automatic Active -> Expired transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KeyStatus {
    Active,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LicenseKey {
    pub key: String,
    pub created: NaiveDate,
    pub expires: NaiveDate,
    pub status: KeyStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyStats {
    pub total_count: usize,
    /// Fixed label chosen by whether any Active entry exists; not a
    /// duration computed from expiry dates.
    pub active_summary: &'static str,
}
