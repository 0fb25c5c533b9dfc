//! Runtime configuration.
//!
//! Settings merge from two layers: an optional JSON file at
//! `~/.config/cinetrend/config.json`, then environment variables on top
//! (a `.env` file in the working directory is honored). Environment wins.
//! The catalog API key is the only setting with no usable default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::app::DEFAULT_DEBOUNCE;
use crate::catalog::DEFAULT_BASE_URL;
use crate::error::{CinetrendError, Result};

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Trending-store connection. Absent means trending counters are kept
    /// in process memory only and vanish on exit.
    #[serde(default)]
    pub store: Option<StoreConfig>,

    #[serde(default)]
    pub search: SearchConfig,
}

/// Movie catalog service access.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Catalog API root.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token (TMDB API Read Access Token).
    #[serde(default)]
    pub api_key: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
        }
    }
}

/// Remote document-store connection for trending counters.
///
/// All identifiers are required; a partially configured store is a startup
/// error rather than a silent fallback.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct StoreConfig {
    pub endpoint: String,
    pub project_id: String,
    pub database_id: String,
    pub collection_id: String,
    /// Server API key. Optional: without it the store must allow the
    /// operations to unauthenticated clients.
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Quiet period in milliseconds before a typed query is dispatched.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE.as_millis() as u64
}

impl Config {
    /// Default config file location (`~/.config/cinetrend/config.json`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cinetrend").join("config.json"))
    }

    /// Loads configuration: the default config file when present, then
    /// environment variables on top.
    pub fn load() -> Result<Self> {
        // Surface .env entries to the environment pass; no .env is fine.
        let _ = dotenvy::dotenv();

        let mut config = match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Reads and parses a specific config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            CinetrendError::Config(format!("invalid config file {}: {}", path.display(), e))
        })
    }

    /// The catalog Bearer token, or an actionable error when unset.
    pub fn catalog_token(&self) -> Result<&str> {
        if self.catalog.api_key.is_empty() {
            return Err(CinetrendError::Config(
                "no catalog API key configured. Set TMDB_API_KEY (or catalog.api_key \
                 in the config file) to your TMDB API Read Access Token"
                    .to_string(),
            ));
        }
        Ok(&self.catalog.api_key)
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|name| std::env::var(name).ok())
    }

    /// Applies environment overrides from `lookup`. Production passes
    /// `std::env::var`; tests pass a fixed table instead of mutating the
    /// process environment.
    fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(token) = lookup("TMDB_API_KEY") {
            self.catalog.api_key = token;
        }
        if let Some(url) = lookup("TMDB_BASE_URL") {
            self.catalog.base_url = url;
        }
        if let Some(ms) = lookup("CINETREND_DEBOUNCE_MS") {
            match ms.parse() {
                Ok(ms) => self.search.debounce_ms = ms,
                Err(_) => {
                    tracing::warn!("Ignoring non-numeric CINETREND_DEBOUNCE_MS: {:?}", ms)
                }
            }
        }

        let mut store = self.store.clone().unwrap_or_default();
        if let Some(v) = lookup("APPWRITE_ENDPOINT") {
            store.endpoint = v;
        }
        if let Some(v) = lookup("APPWRITE_PROJECT_ID") {
            store.project_id = v;
        }
        if let Some(v) = lookup("APPWRITE_DATABASE_ID") {
            store.database_id = v;
        }
        if let Some(v) = lookup("APPWRITE_COLLECTION_ID") {
            store.collection_id = v;
        }
        if let Some(v) = lookup("APPWRITE_API_KEY") {
            store.api_key = Some(v);
        }
        self.store = resolve_store(store)?;
        Ok(())
    }
}

/// Decides what a merged store section means: fully configured, not
/// configured at all, or an error naming what is missing.
fn resolve_store(store: StoreConfig) -> Result<Option<StoreConfig>> {
    let mut missing = Vec::new();
    if store.endpoint.is_empty() {
        missing.push("APPWRITE_ENDPOINT");
    }
    if store.project_id.is_empty() {
        missing.push("APPWRITE_PROJECT_ID");
    }
    if store.database_id.is_empty() {
        missing.push("APPWRITE_DATABASE_ID");
    }
    if store.collection_id.is_empty() {
        missing.push("APPWRITE_COLLECTION_ID");
    }

    if missing.is_empty() {
        return Ok(Some(store));
    }
    if missing.len() == 4 && store.api_key.is_none() {
        return Ok(None);
    }
    Err(CinetrendError::Config(format!(
        "incomplete trending-store settings, missing: {}",
        missing.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn full_store() -> StoreConfig {
        StoreConfig {
            endpoint: "https://cloud.appwrite.io/v1".to_string(),
            project_id: "proj".to_string(),
            database_id: "db".to_string(),
            collection_id: "metrics".to_string(),
            api_key: None,
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.catalog.base_url, DEFAULT_BASE_URL);
        assert!(config.catalog.api_key.is_empty());
        assert!(config.store.is_none());
        assert_eq!(config.search.debounce_ms, 1000);
    }

    #[test]
    fn test_catalog_token_missing_is_actionable() {
        let config = Config::default();
        match config.catalog_token() {
            Err(CinetrendError::Config(msg)) => assert!(msg.contains("TMDB_API_KEY")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_file_parses_all_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "catalog": {{"api_key": "tok"}},
                "store": {{
                    "endpoint": "https://cloud.appwrite.io/v1",
                    "project_id": "proj",
                    "database_id": "db",
                    "collection_id": "metrics"
                }},
                "search": {{"debounce_ms": 250}}
            }}"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.catalog.api_key, "tok");
        assert_eq!(config.catalog.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.search.debounce_ms, 250);
        assert_eq!(config.debounce_delay(), Duration::from_millis(250));

        // Taking the store field moves it, so it goes last.
        let store = config.store.unwrap();
        assert_eq!(store.project_id, "proj");
        assert_eq!(store.api_key, None);
    }

    #[test]
    fn test_from_file_empty_object_is_all_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_file_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        match Config::from_file(file.path()) {
            Err(CinetrendError::Config(msg)) => assert!(msg.contains("invalid config file")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_store_complete() {
        let resolved = resolve_store(full_store()).unwrap();
        assert!(resolved.is_some());
    }

    #[test]
    fn test_resolve_store_unconfigured_means_none() {
        assert_eq!(resolve_store(StoreConfig::default()).unwrap(), None);
    }

    #[test]
    fn test_resolve_store_partial_names_the_gaps() {
        let mut store = full_store();
        store.database_id = String::new();
        store.collection_id = String::new();
        match resolve_store(store) {
            Err(CinetrendError::Config(msg)) => {
                assert!(msg.contains("APPWRITE_DATABASE_ID"));
                assert!(msg.contains("APPWRITE_COLLECTION_ID"));
                assert!(!msg.contains("APPWRITE_ENDPOINT"));
            }
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_store_key_alone_is_incomplete() {
        let store = StoreConfig {
            api_key: Some("secret".to_string()),
            ..StoreConfig::default()
        };
        assert!(resolve_store(store).is_err());
    }

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = Config {
            catalog: CatalogConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                api_key: "from-file".to_string(),
            },
            store: None,
            search: SearchConfig::default(),
        };

        config
            .apply_env_from(env(&[("TMDB_API_KEY", "from-env")]))
            .unwrap();

        assert_eq!(config.catalog.api_key, "from-env");
        assert_eq!(config.catalog.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_env_assembles_a_complete_store() {
        let mut config = Config::default();
        config
            .apply_env_from(env(&[
                ("APPWRITE_ENDPOINT", "https://cloud.appwrite.io/v1"),
                ("APPWRITE_PROJECT_ID", "proj"),
                ("APPWRITE_DATABASE_ID", "db"),
                ("APPWRITE_COLLECTION_ID", "metrics"),
            ]))
            .unwrap();

        let store = config.store.unwrap();
        assert_eq!(store.endpoint, "https://cloud.appwrite.io/v1");
        assert_eq!(store.collection_id, "metrics");
        assert_eq!(store.api_key, None);
    }

    #[test]
    fn test_env_partial_store_is_rejected() {
        let mut config = Config::default();
        let result = config.apply_env_from(env(&[(
            "APPWRITE_ENDPOINT",
            "https://cloud.appwrite.io/v1",
        )]));

        match result {
            Err(CinetrendError::Config(msg)) => assert!(msg.contains("APPWRITE_PROJECT_ID")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_env_key_completes_a_file_store() {
        let mut config = Config {
            store: Some(full_store()),
            ..Config::default()
        };

        config
            .apply_env_from(env(&[("APPWRITE_API_KEY", "secret")]))
            .unwrap();

        assert_eq!(config.store.unwrap().api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_env_non_numeric_debounce_is_ignored() {
        let mut config = Config::default();
        config
            .apply_env_from(env(&[("CINETREND_DEBOUNCE_MS", "soon")]))
            .unwrap();
        assert_eq!(config.search.debounce_ms, 1000);
    }
}
