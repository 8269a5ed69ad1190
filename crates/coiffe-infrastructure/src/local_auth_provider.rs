//! Local AuthProvider backed by `accounts.toml`.
//!
//! Passwords are never written in plain text: each account stores a random
//! salt and the hex SHA-256 digest of `salt + password`.

use crate::dto::{AccountEntry, AccountsDocument};
use crate::paths::CoiffePaths;
use crate::storage::AtomicTomlFile;
use chrono::Utc;
use coiffe_core::auth::AuthProvider;
use coiffe_core::error::{CoiffeError, Result};
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use tracing::{info, warn};
use uuid::Uuid;

pub const EMAIL_IN_USE: &str = "The email address is already in use by another account.";
pub const EMAIL_BADLY_FORMATTED: &str = "The email address is badly formatted.";
pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";

/// File-backed identity provider for single-machine use.
pub struct LocalAuthProvider {
    file: AtomicTomlFile<AccountsDocument>,
}

impl LocalAuthProvider {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    pub fn from_paths(paths: &CoiffePaths) -> Self {
        Self::new(paths.accounts_file())
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[async_trait::async_trait]
impl AuthProvider for LocalAuthProvider {
    async fn create_account(&self, email: &str, password: &str) -> Result<String> {
        let key = normalize_email(email);
        if !key.contains('@') {
            return Err(CoiffeError::auth(EMAIL_BADLY_FORMATTED));
        }

        let user_id = self.file.update(|doc: &mut AccountsDocument| {
            if doc.accounts.contains_key(&key) {
                return Err(CoiffeError::auth(EMAIL_IN_USE));
            }
            let salt = Uuid::new_v4().simple().to_string();
            let entry = AccountEntry {
                user_id: Uuid::new_v4().to_string(),
                password_digest: digest(&salt, password),
                salt,
                created_at: Utc::now(),
            };
            let user_id = entry.user_id.clone();
            doc.accounts.insert(key.clone(), entry);
            Ok(user_id)
        })?;

        info!(user_id = %user_id, "Created local account");
        Ok(user_id)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<String> {
        let key = normalize_email(email);
        let doc = self.file.load_or_default()?;

        match doc.accounts.get(&key) {
            Some(entry) if entry.password_digest == digest(&entry.salt, password) => {
                info!(user_id = %entry.user_id, "Signed in");
                Ok(entry.user_id.clone())
            }
            _ => {
                warn!("Sign-in rejected");
                Err(CoiffeError::auth(INVALID_CREDENTIALS))
            }
        }
    }
}
