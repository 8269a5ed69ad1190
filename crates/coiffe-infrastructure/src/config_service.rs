//! Configuration service implementation.
//!
//! Loads `AppConfig` from `config.toml`, writing the defaults on first run so
//! the user has a file to edit.

use crate::storage::AtomicTomlFile;
use coiffe_core::config::AppConfig;
use coiffe_core::error::Result;
use std::path::PathBuf;
use tracing::info;

pub struct ConfigService {
    file: AtomicTomlFile<AppConfig>,
}

impl ConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    /// Loads the configuration, creating `config.toml` with defaults if missing.
    ///
    /// Keys absent from an existing file take their default values.
    pub fn load(&self) -> Result<AppConfig> {
        match self.file.load()? {
            Some(config) => Ok(config),
            None => {
                let config = AppConfig::default();
                self.file.save(&config)?;
                info!(path = %self.file.path().display(), "Wrote default configuration");
                Ok(config)
            }
        }
    }
}
