//! Admin accounts that may sign in to the panel.
//!
//! Accounts are loaded once at startup from a JSON array:
//!
//! ```json
//! [
//!   {"id": 1, "email": "ops@example.com", "name": "Ops", "role": "admin",
//!    "password_hash": "$2b$12$..."}
//! ]
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use crate::role::Role;

#[derive(Clone, Serialize, Deserialize)]
pub struct AdminAccount {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub password_hash: String,
}

impl fmt::Debug for AdminAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminAccount")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Lookup of admin accounts by email.
pub trait CredentialStore: Send + Sync + fmt::Debug {
    fn find_by_email(&self, email: &str) -> Option<AdminAccount>;
}

/// In-memory store keyed by lowercased email.
#[derive(Debug, Default, Clone)]
pub struct StaticCredentialStore {
    accounts: HashMap<String, AdminAccount>,
}

impl StaticCredentialStore {
    pub fn new(accounts: Vec<AdminAccount>) -> anyhow::Result<Self> {
        let mut by_email = HashMap::with_capacity(accounts.len());
        for account in accounts {
            let key = account.email.trim().to_lowercase();
            if key.is_empty() {
                bail!("admin account {} has an empty email", account.id);
            }
            if by_email.contains_key(&key) {
                bail!("duplicate admin account email: {key}");
            }
            by_email.insert(key, account);
        }

        Ok(Self { accounts: by_email })
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let accounts: Vec<AdminAccount> =
            serde_json::from_str(raw).context("failed to parse admin accounts")?;
        Self::new(accounts)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read admin accounts from {}", path.display()))?;
        Self::from_json(&raw)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl CredentialStore for StaticCredentialStore {
    fn find_by_email(&self, email: &str) -> Option<AdminAccount> {
        self.accounts.get(&email.trim().to_lowercase()).cloned()
    }
}
