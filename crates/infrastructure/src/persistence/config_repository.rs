//! User config persistence
//!
//! The config file is a small YAML document choosing language, country, the
//! default keyword and the namespace priority list:
//!
//! ```yaml
//! language: de
//! country: de
//! default_keyword: g
//! namespaces: [o, de, .de]
//! ```
//!
//! A missing file yields defaults; an absent namespace list derives the
//! conventional `[o, <language>, .<country>]` order.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;
use wayfinder_domain::Env;

use crate::serialization::{SerializationError, from_yaml_slice};

/// Error type for config operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

/// The user configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Two-letter language code.
    #[serde(default = "default_language")]
    pub language: String,

    /// Two-letter country code.
    #[serde(default = "default_country")]
    pub country: String,

    /// Keyword used when no shortcut matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_keyword: Option<String>,

    /// Namespace names in priority order, highest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub namespaces: Vec<String>,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_country() -> String {
    "us".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            country: default_country(),
            default_keyword: None,
            namespaces: Vec::new(),
        }
    }
}

impl Config {
    /// Returns the namespace priority list, deriving the conventional
    /// `[o, <language>, .<country>]` order when none is configured.
    #[must_use]
    pub fn namespace_names(&self) -> Vec<String> {
        if self.namespaces.is_empty() {
            vec![
                "o".to_string(),
                self.language.clone(),
                format!(".{}", self.country),
            ]
        } else {
            self.namespaces.clone()
        }
    }

    /// Builds the resolution environment described by this config.
    #[must_use]
    pub fn env(&self) -> Env {
        let env = Env::new(self.language.clone(), self.country.clone());
        match &self.default_keyword {
            Some(keyword) => env.with_default_keyword(keyword.clone()),
            None => env,
        }
    }
}

/// Repository for user config persistence.
#[derive(Debug, Clone, Default)]
pub struct ConfigRepository;

impl ConfigRepository {
    /// Creates a new config repository.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Loads the config from the given file.
    ///
    /// Returns the default config if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub async fn load(&self, path: &Path) -> Result<Config, ConfigError> {
        if !fs::try_exists(path).await.unwrap_or(false) {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let bytes = fs::read(path).await?;
        let config = from_yaml_slice(&bytes)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigRepository::new()
            .load(&dir.path().join("config.yml"))
            .await
            .unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.namespace_names(), vec!["o", "en", ".us"]);
    }

    #[tokio::test]
    async fn reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(
            &path,
            "language: de\ncountry: de\ndefault_keyword: g\nnamespaces: [o, de, .de]\n",
        )
        .unwrap();

        let config = ConfigRepository::new().load(&path).await.unwrap();
        assert_eq!(config.language, "de");
        assert_eq!(config.namespace_names(), vec!["o", "de", ".de"]);

        let env = config.env();
        assert_eq!(env.language, "de");
        assert_eq!(env.default_keyword.as_deref(), Some("g"));
    }

    #[tokio::test]
    async fn partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "language: fr\n").unwrap();

        let config = ConfigRepository::new().load(&path).await.unwrap();
        assert_eq!(config.language, "fr");
        assert_eq!(config.country, "us");
        assert_eq!(config.namespace_names(), vec!["o", "fr", ".us"]);
    }
}
