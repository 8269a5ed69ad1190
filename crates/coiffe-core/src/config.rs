//! Configuration models.
//!
//! `AppConfig` is read from `config.toml`; `SecretConfig` from `secret.json`.
//! Loading and persistence live in the infrastructure crate.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default Gemini model used for consultation and classification.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Language the assistant is instructed to answer in.
pub const DEFAULT_RESPONSE_LANGUAGE: &str = "Vietnamese";

pub const DEFAULT_LOG_LEVEL: &str = "info";

fn default_gemini_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_response_language() -> String {
    DEFAULT_RESPONSE_LANGUAGE.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// User-editable application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    #[serde(default = "default_response_language")]
    pub response_language: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Overrides the platform data directory for the stores and logs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// HTTP timeout for generation requests. Unset means no timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_model: default_gemini_model(),
            response_language: default_response_language(),
            log_level: default_log_level(),
            data_dir: None,
            request_timeout_secs: None,
        }
    }
}

/// Gemini API credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
}

/// Contents of `secret.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

impl SecretConfig {
    /// The Gemini key, if one is configured and non-blank.
    pub fn gemini_api_key(&self) -> Option<&str> {
        self.gemini
            .as_ref()
            .map(|g| g.api_key.trim())
            .filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: AppConfig = toml::from_str("log_level = \"debug\"").unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.response_language, DEFAULT_RESPONSE_LANGUAGE);
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let secrets: SecretConfig =
            serde_json::from_str(r#"{"gemini":{"api_key":"  "}}"#).unwrap();
        assert_eq!(secrets.gemini_api_key(), None);
        let secrets: SecretConfig =
            serde_json::from_str(r#"{"gemini":{"api_key":"k-123"}}"#).unwrap();
        assert_eq!(secrets.gemini_api_key(), Some("k-123"));
    }
}
