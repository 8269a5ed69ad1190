//! Secret service implementation.
//!
//! Reads API keys from `secret.json`. The `GEMINI_API_KEY` environment
//! variable takes precedence over the file.
//!
//! # Security Note
//!
//! - The template file is created with 600 permissions on Unix
//! - Keys are never logged or included in error messages

use coiffe_core::config::{GeminiConfig, SecretConfig};
use coiffe_core::error::{CoiffeError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

pub struct SecretService {
    path: PathBuf,
    env_api_key: Option<String>,
}

impl SecretService {
    /// Creates a service reading `path` and the process environment.
    pub fn new(path: PathBuf) -> Self {
        let env_api_key = std::env::var(GEMINI_API_KEY_ENV).ok();
        Self::with_env_override(path, env_api_key)
    }

    /// Creates a service with an explicit environment override.
    pub fn with_env_override(path: PathBuf, env_api_key: Option<String>) -> Self {
        Self {
            path,
            env_api_key: env_api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the secrets, creating an empty template file if none exists.
    pub fn load(&self) -> Result<SecretConfig> {
        self.ensure_template()?;

        let content = fs::read_to_string(&self.path)?;
        let mut secrets: SecretConfig = serde_json::from_str(&content).map_err(|e| {
            CoiffeError::config(format!(
                "{} is not valid JSON (line {})",
                self.path.display(),
                e.line()
            ))
        })?;

        if let Some(key) = &self.env_api_key {
            debug!("Using Gemini API key from {}", GEMINI_API_KEY_ENV);
            secrets.gemini = Some(GeminiConfig {
                api_key: key.trim().to_string(),
            });
        }

        Ok(secrets)
    }

    /// Returns the configured Gemini key or a configuration error telling the
    /// user where to put it.
    pub fn gemini_api_key(&self) -> Result<String> {
        let secrets = self.load()?;
        secrets
            .gemini_api_key()
            .map(str::to_string)
            .ok_or_else(|| {
                CoiffeError::config(format!(
                    "Gemini API key is not set. Add it to {} or set {}",
                    self.path.display(),
                    GEMINI_API_KEY_ENV
                ))
            })
    }

    fn ensure_template(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let template = SecretConfig {
            gemini: Some(GeminiConfig::default()),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&template)?)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        info!(path = %self.path.display(), "Created secret template");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_creates_template_without_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secret.json");
        let service = SecretService::with_env_override(path.clone(), None);

        let secrets = service.load().unwrap();
        assert!(path.exists());
        assert_eq!(secrets.gemini_api_key(), None);
        assert!(service.gemini_api_key().unwrap_err().to_string().contains("GEMINI_API_KEY"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn test_file_key_is_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secret.json");
        fs::write(&path, r#"{"gemini":{"api_key":"file-key"}}"#).unwrap();

        let service = SecretService::with_env_override(path, None);
        assert_eq!(service.gemini_api_key().unwrap(), "file-key");
    }

    #[test]
    fn test_env_override_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secret.json");
        fs::write(&path, r#"{"gemini":{"api_key":"file-key"}}"#).unwrap();

        let service = SecretService::with_env_override(path, Some("env-key".into()));
        assert_eq!(service.gemini_api_key().unwrap(), "env-key");
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secret.json");
        fs::write(&path, "{ not json").unwrap();

        let err = SecretService::with_env_override(path, None).load().unwrap_err();
        assert!(matches!(err, CoiffeError::Config(_)));
    }
}
