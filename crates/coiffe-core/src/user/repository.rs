//! Profile store trait.
//!
//! Defines the interface for the per-user key-value store.

use super::model::{HairProfileUpdate, UserRecord};
use crate::error::Result;

/// An abstract key-value store holding one record per user id.
///
/// This trait decouples the application's core logic from the specific
/// storage mechanism (TOML file, remote database, in-memory map).
#[async_trait::async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Gets the record stored under `user_id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UserRecord))`: Record found
    /// - `Ok(None)`: No record for this user
    /// - `Err(_)`: The store could not be read
    async fn get(&self, user_id: &str) -> Result<Option<UserRecord>>;

    /// Writes the whole record, replacing any previous one.
    async fn save(&self, record: &UserRecord) -> Result<()>;

    /// Applies a field-level update and returns the updated record.
    ///
    /// Fails with `NotFound` when no record exists for `user_id`.
    async fn update_hair(&self, user_id: &str, update: &HairProfileUpdate) -> Result<UserRecord>;
}
