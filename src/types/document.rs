use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Pending,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Admin,
    Write,
    Read,
}

impl Permission {
    /// Lenient parse: anything unrecognized maps to read-only.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw {
            "admin" => Self::Admin,
            "write" => Self::Write,
            _ => Self::Read,
        }
    }

    /// Prefix baked into generated tokens for this permission level.
    pub fn key_prefix(self) -> &'static str {
        match self {
            Self::Admin => "wl_admin",
            Self::Write => "wl_write",
            Self::Read => "wl_read",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    /// External identifier, e.g. a Discord user id.
    pub user_id: String,
    pub service: String,
    pub status: UserStatus,
    pub added_date: NaiveDate,
}

impl User {
    /// Shallow merge: supplied fields overwrite, omitted fields are kept.
    pub fn merge(&mut self, update: UserUpdate) {
        if let Some(v) = update.username {
            self.username = v;
        }
        if let Some(v) = update.user_id {
            self.user_id = v;
        }
        if let Some(v) = update.service {
            self.service = v;
        }
        if let Some(v) = update.status {
            self.status = v;
        }
    }
}

/// Caller-supplied fields for a new user; id and date are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub user_id: String,
    pub service: String,
    pub status: UserStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub username: Option<String>,
    pub user_id: Option<String>,
    pub service: Option<String>,
    pub status: Option<UserStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub id: i64,
    pub name: String,
    /// Full plaintext token. Surfaced to the caller once, at creation.
    pub key: String,
    pub permission: Permission,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
    pub status: ScriptStatus,
}

/// The whole whitelist document as stored under the configured key.
///
/// Field names and enum spellings are a compatibility contract with
/// previously stored data; `services` and `providers` are reserved
/// collections kept as raw JSON so foreign entries round-trip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub users: Vec<User>,
    #[serde(default)]
    pub services: Vec<Value>,
    #[serde(default)]
    pub providers: Vec<Value>,
    pub api_keys: Vec<ApiKey>,
    pub scripts: Vec<Script>,
}

impl Document {
    /// Highest id across all collections; seeds the store's id counter.
    pub fn max_id(&self) -> i64 {
        let users = self.users.iter().map(|u| u.id);
        let keys = self.api_keys.iter().map(|k| k.id);
        let scripts = self.scripts.iter().map(|s| s.id);
        users.chain(keys).chain(scripts).max().unwrap_or(0)
    }

    /// Default document written on first startup when nothing is stored.
    pub fn seeded() -> Self {
        Self {
            users: vec![
                User {
                    id: 1,
                    username: "john_doe".to_string(),
                    user_id: "USER001".to_string(),
                    service: "Discord".to_string(),
                    status: UserStatus::Active,
                    added_date: seed_date(2024, 2, 1),
                },
                User {
                    id: 2,
                    username: "jane_smith".to_string(),
                    user_id: "USER002".to_string(),
                    service: "API".to_string(),
                    status: UserStatus::Active,
                    added_date: seed_date(2024, 2, 2),
                },
                User {
                    id: 3,
                    username: "bob_wilson".to_string(),
                    user_id: "USER003".to_string(),
                    service: "Discord".to_string(),
                    status: UserStatus::Pending,
                    added_date: seed_date(2024, 2, 3),
                },
            ],
            services: Vec::new(),
            providers: Vec::new(),
            api_keys: vec![
                ApiKey {
                    id: 1,
                    name: "Production Key".to_string(),
                    key: "wl_prod_abc123def456ghi789jkl012mno345pqr".to_string(),
                    permission: Permission::Admin,
                    created_at: seed_date(2024, 1, 15),
                },
                ApiKey {
                    id: 2,
                    name: "Development Key".to_string(),
                    key: "wl_dev_xyz987wvu654tsr321ponm098lkj876ihg".to_string(),
                    permission: Permission::Write,
                    created_at: seed_date(2024, 1, 20),
                },
            ],
            scripts: vec![Script {
                id: 1,
                name: "Whitelist Checker".to_string(),
                code: SAMPLE_SCRIPT.to_string(),
                created_at: seed_date(2024, 2, 1),
                updated_at: seed_date(2024, 2, 5),
                status: ScriptStatus::Active,
            }],
        }
    }
}

/// Dashboard aggregation over the current document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_users: usize,
    pub active_users: usize,
    pub pending_users: usize,
    pub total_services: usize,
}

// Seed dates are fixed literals; fall back to the epoch rather than panic.
fn seed_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

const SAMPLE_SCRIPT: &str = r#"local whitelist = {}

local function check(user_id)
    if whitelist[user_id] then
        return true, "whitelisted"
    end
    return false, "not whitelisted"
end

local function add(user_id, username)
    whitelist[user_id] = { username = username, added_at = os.time() }
    return true
end

local function remove(user_id)
    if whitelist[user_id] == nil then
        return false
    end
    whitelist[user_id] = nil
    return true
end

return { check = check, add = add, remove = remove }
"#;
