//! TOML-based ProfileRepository implementation

use crate::dto::{ProfilesDocument, StoredUser};
use crate::paths::CoiffePaths;
use crate::storage::AtomicTomlFile;
use coiffe_core::error::{CoiffeError, Result};
use coiffe_core::user::{HairProfileUpdate, ProfileRepository, UserRecord};
use std::path::PathBuf;
use tracing::debug;

/// A repository storing every user record in `profiles.toml`.
///
/// Responsibilities:
/// - Key records by user id
/// - Apply field-level hair updates under the file lock
/// - Convert between `StoredUser` DTOs and `UserRecord`
///
/// Does NOT:
/// - Handle locking or atomic writes (delegated to AtomicTomlFile)
/// - Validate form input (done before reaching the store)
pub struct TomlProfileRepository {
    file: AtomicTomlFile<ProfilesDocument>,
}

impl TomlProfileRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    pub fn from_paths(paths: &CoiffePaths) -> Self {
        Self::new(paths.profiles_file())
    }
}

#[async_trait::async_trait]
impl ProfileRepository for TomlProfileRepository {
    async fn get(&self, user_id: &str) -> Result<Option<UserRecord>> {
        let mut doc = self.file.load_or_default()?;
        Ok(doc
            .users
            .remove(user_id)
            .map(|stored| stored.into_domain(user_id)))
    }

    async fn save(&self, record: &UserRecord) -> Result<()> {
        self.file.update(|doc: &mut ProfilesDocument| {
            doc.users
                .insert(record.user_id.clone(), StoredUser::from(record));
            Ok::<_, CoiffeError>(())
        })?;
        debug!(user_id = %record.user_id, "Saved user record");
        Ok(())
    }

    async fn update_hair(&self, user_id: &str, update: &HairProfileUpdate) -> Result<UserRecord> {
        let record = self.file.update(|doc: &mut ProfilesDocument| {
            let stored = doc
                .users
                .get_mut(user_id)
                .ok_or_else(|| CoiffeError::not_found("user", user_id))?;
            let mut record = stored.clone().into_domain(user_id);
            record.apply(update);
            *stored = StoredUser::from(&record);
            Ok::<_, CoiffeError>(record)
        })?;
        debug!(user_id, "Updated hair profile");
        Ok(record)
    }
}
