//! # Settings: where the user collection lives
//!
//! Loaded once at startup with the `config` crate, layered lowest to highest:
//!
//! 1. built-in defaults (public Firestore endpoint, `(default)` database,
//!    `users` collection);
//! 2. an optional `directory.toml` next to the binary;
//! 3. environment variables prefixed `DIRECTORY__`, with `__` between path
//!    segments, e.g. `DIRECTORY__FIRESTORE__PROJECT_ID`. A `.env` file is
//!    honoured via `dotenvy`.
//!
//! ```toml
//! [firestore]
//! project_id = "my-project"
//! api_key = "..."            # optional
//! collection = "users"
//! ```
//!
//! The web build cannot read files or the environment, so it embeds its TOML
//! and calls [`Settings::from_toml`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("firestore.project_id must be set")]
    MissingProjectId,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FirestoreSettings {
    pub project_id: String,
    /// Web API key, sent as the `key` query parameter when present.
    #[serde(default)]
    pub api_key: Option<String>,
    pub database: String,
    pub collection: String,
    pub base_url: String,
    /// Documents requested per list call.
    pub page_size: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub firestore: FirestoreSettings,
}

impl Settings {
    /// Defaults, then `directory.toml`, then `DIRECTORY__*` variables.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let config = Self::defaults()?
            .add_source(
                File::with_name("directory.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("DIRECTORY").separator("__"))
            .build()?;
        Self::finish(config)
    }

    /// Defaults overlaid with the given TOML document.
    pub fn from_toml(toml: &str) -> Result<Self, SettingsError> {
        let config = Self::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Self::finish(config)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("firestore.project_id", "")?
            .set_default("firestore.database", "(default)")?
            .set_default("firestore.collection", "users")?
            .set_default("firestore.base_url", DEFAULT_BASE_URL)?
            .set_default("firestore.page_size", 300_i64)
    }

    fn finish(config: Config) -> Result<Self, SettingsError> {
        let settings: Settings = config.try_deserialize()?;
        if settings.firestore.project_id.trim().is_empty() {
            return Err(SettingsError::MissingProjectId);
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_applies_defaults() {
        let settings = Settings::from_toml(
            r#"
            [firestore]
            project_id = "crud-demo"
            "#,
        )
        .unwrap();

        assert_eq!(settings.firestore.project_id, "crud-demo");
        assert_eq!(settings.firestore.database, "(default)");
        assert_eq!(settings.firestore.collection, "users");
        assert_eq!(settings.firestore.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.firestore.page_size, 300);
        assert!(settings.firestore.api_key.is_none());
    }

    #[test]
    fn test_from_toml_overrides() {
        let settings = Settings::from_toml(
            r#"
            [firestore]
            project_id = "crud-demo"
            api_key = "secret"
            collection = "people"
            base_url = "http://localhost:8080"
            page_size = 50
            "#,
        )
        .unwrap();

        assert_eq!(settings.firestore.api_key.as_deref(), Some("secret"));
        assert_eq!(settings.firestore.collection, "people");
        assert_eq!(settings.firestore.base_url, "http://localhost:8080");
        assert_eq!(settings.firestore.page_size, 50);
    }

    #[test]
    fn test_project_id_is_required() {
        let err = Settings::from_toml("[firestore]\ncollection = \"users\"\n").unwrap_err();
        assert!(matches!(err, SettingsError::MissingProjectId));
    }
}
