//! Authentication provider trait.

use crate::error::Result;

/// Identity provider that owns credentials.
///
/// Implementations return the stable user id that keys the profile store.
/// Failures are reported as `CoiffeError::Auth` with a provider message such
/// as "email address is already in use" or "invalid email or password".
#[async_trait::async_trait]
pub trait AuthProvider: Send + Sync {
    /// Creates a new account and returns its user id.
    async fn create_account(&self, email: &str, password: &str) -> Result<String>;

    /// Verifies credentials and returns the user id.
    async fn sign_in(&self, email: &str, password: &str) -> Result<String>;
}
