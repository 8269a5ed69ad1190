//! Unified path management for coiffe files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/coiffe/            # Config directory
//! ├── config.toml              # Application configuration
//! └── secret.json              # API keys
//!
//! ~/.local/share/coiffe/       # Data directory (overridable via config)
//! ├── profiles.toml            # Profile store
//! ├── catalog.toml             # Catalog store
//! ├── accounts.toml            # Local credentials
//! └── logs/                    # Application logs
//!     └── coiffe.log.YYYY-MM-DD
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR_NAME: &str = "coiffe";

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Platform directory could not be determined.
    #[error("Cannot find {0} directory")]
    PlatformDirNotFound(&'static str),
}

/// Resolved locations of every file the application reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoiffePaths {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl CoiffePaths {
    /// Resolves the platform directories.
    ///
    /// `data_dir_override` replaces the platform data directory when the
    /// configuration sets `data_dir`.
    pub fn resolve(data_dir_override: Option<&Path>) -> Result<Self, PathError> {
        let config_dir = Self::default_config_dir()?;
        let data_dir = match data_dir_override {
            Some(dir) => dir.to_path_buf(),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::PlatformDirNotFound("data"))?,
        };
        Ok(Self {
            config_dir,
            data_dir,
        })
    }

    /// Places config and data under one root (used by tests).
    pub fn with_root(root: &Path) -> Self {
        Self {
            config_dir: root.join("config"),
            data_dir: root.join("data"),
        }
    }

    /// Platform config directory, e.g. `~/.config/coiffe/`.
    ///
    /// Needed before `config.toml` is read, hence independent of `resolve`.
    pub fn default_config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::PlatformDirNotFound("config"))
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600).
    pub fn secret_file(&self) -> PathBuf {
        self.config_dir.join("secret.json")
    }

    pub fn profiles_file(&self) -> PathBuf {
        self.data_dir.join("profiles.toml")
    }

    pub fn catalog_file(&self) -> PathBuf {
        self.data_dir.join("catalog.toml")
    }

    pub fn accounts_file(&self) -> PathBuf {
        self.data_dir.join("accounts.toml")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_root_layout() {
        let paths = CoiffePaths::with_root(Path::new("/tmp/coiffe-test"));
        assert!(paths.config_file().ends_with("config/config.toml"));
        assert!(paths.secret_file().starts_with(paths.config_dir()));
        assert!(paths.profiles_file().starts_with(paths.data_dir()));
        assert!(paths.catalog_file().ends_with("catalog.toml"));
        assert!(paths.logs_dir().ends_with("data/logs"));
    }

    #[test]
    fn test_data_dir_override() {
        let paths = CoiffePaths::resolve(Some(Path::new("/srv/coiffe"))).unwrap();
        assert_eq!(paths.data_dir(), Path::new("/srv/coiffe"));
        assert!(paths.accounts_file().starts_with("/srv/coiffe"));
        assert!(paths.config_dir().ends_with(APP_DIR_NAME));
    }
}
