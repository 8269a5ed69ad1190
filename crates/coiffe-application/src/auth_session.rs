//! Authentication session use case.
//!
//! `AuthSession` is created once by the binary and handed to whatever needs
//! the signed-in user. There is no global accessor.

use coiffe_core::auth::AuthProvider;
use coiffe_core::error::{CoiffeError, Result};
use coiffe_core::user::{ProfileRepository, UserRecord};
use coiffe_core::validation::{LoginForm, RegistrationForm, ValidationErrors};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Holds the signed-in user for the lifetime of the process.
pub struct AuthSession {
    provider: Arc<dyn AuthProvider>,
    profiles: Arc<dyn ProfileRepository>,
    current: RwLock<Option<CurrentUser>>,
}

struct CurrentUser {
    user_id: String,
    record: Option<UserRecord>,
}

impl AuthSession {
    pub fn new(provider: Arc<dyn AuthProvider>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self {
            provider,
            profiles,
            current: RwLock::new(None),
        }
    }

    /// Creates an account, stores its user record and signs in.
    ///
    /// Form problems and provider rejections that concern a single field come
    /// back as `CoiffeError::Validation`; anything else as `CoiffeError::Auth`.
    pub async fn register(&self, form: &RegistrationForm) -> Result<UserRecord> {
        let form = form.validate()?;

        let user_id = self
            .provider
            .create_account(&form.email, &form.password)
            .await
            .map_err(map_registration_error)?;

        let record = UserRecord::new(&user_id, &form.email, &form.full_name, &form.phone_number);
        if let Err(err) = self.profiles.save(&record).await {
            // The provider account exists from here on, only the record is missing.
            error!(
                user_id = %user_id,
                error = %err,
                "Partial registration: account created but user record not saved"
            );
            return Err(err);
        }
        info!(user_id = %user_id, "Registered new user");

        *self.current.write().await = Some(CurrentUser {
            user_id,
            record: Some(record.clone()),
        });
        Ok(record)
    }

    /// Signs in and returns the user id.
    pub async fn login(&self, form: &LoginForm) -> Result<String> {
        let form = form.validate()?;
        let user_id = self.provider.sign_in(&form.email, &form.password).await?;
        info!(user_id = %user_id, "User signed in");

        *self.current.write().await = Some(CurrentUser {
            user_id: user_id.clone(),
            record: None,
        });
        Ok(user_id)
    }

    pub async fn logout(&self) {
        if let Some(user) = self.current.write().await.take() {
            info!(user_id = %user.user_id, "User signed out");
        }
    }

    pub async fn current_user_id(&self) -> Option<String> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|user| user.user_id.clone())
    }

    /// Record of the signed-in user, loaded from the profile store once and
    /// cached until [`AuthSession::refresh`].
    pub async fn current_user(&self) -> Result<Option<UserRecord>> {
        let user_id = {
            let current = self.current.read().await;
            match current.as_ref() {
                None => return Ok(None),
                Some(CurrentUser {
                    record: Some(record),
                    ..
                }) => return Ok(Some(record.clone())),
                Some(user) => user.user_id.clone(),
            }
        };

        let record = self.profiles.get(&user_id).await?;
        if record.is_none() {
            warn!(user_id = %user_id, "Signed-in user has no profile record");
        }

        let mut current = self.current.write().await;
        if let Some(user) = current.as_mut().filter(|u| u.user_id == user_id) {
            user.record = record.clone();
        }
        Ok(record)
    }

    /// Drops the cached record so the next [`AuthSession::current_user`] reloads it.
    pub async fn refresh(&self) {
        if let Some(user) = self.current.write().await.as_mut() {
            debug!(user_id = %user.user_id, "Invalidated cached user record");
            user.record = None;
        }
    }
}

/// Maps a provider rejection onto the registration form fields.
fn map_registration_error(err: CoiffeError) -> CoiffeError {
    if !err.is_auth() {
        return err;
    }
    let message = err.user_message();

    if message.contains("email address is already in use") {
        ValidationErrors::single("email", "This email is already registered").into()
    } else if message.contains("badly formatted") {
        ValidationErrors::single("email", "Invalid email format").into()
    } else if message.contains("password") {
        ValidationErrors::single("password", "Invalid password format").into()
    } else {
        warn!(error = %message, "Unmapped registration failure");
        err
    }
}
