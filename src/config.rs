//! Application Configuration
//!
//! Reserved storage keys plus where categories, the desktop database and
//! log files live. Every field has a default, so a missing or partial
//! config file works.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::{DomainError, DomainResult};

/// Wraps reserved key names so they cannot collide with checklist names
pub const RESERVED_MARKER: &str = "~~";

/// Fixed keys of the two singleton records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageKeys {
    /// Checklist index
    pub index_key: String,
    /// Settings record
    pub settings_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            index_key: "~~stored~~".to_string(),
            settings_key: "~~state~~".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub app_name: String,
    pub keys: StorageKeys,
    pub categories_path: PathBuf,
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "Checklist".to_string(),
            keys: StorageKeys::default(),
            categories_path: PathBuf::from("testing.json"),
            database_path: PathBuf::from("checklist.db"),
            log_dir: PathBuf::from("logs"),
        }
    }
}

/// `~~name~~` with a non-empty inner part
pub fn is_marked(key: &str) -> bool {
    key.len() > 2 * RESERVED_MARKER.len()
        && key.starts_with(RESERVED_MARKER)
        && key.ends_with(RESERVED_MARKER)
}

impl AppConfig {
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let config: Self = serde_json::from_str(raw).map_err(|e| DomainError::decode("config", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file; a missing file yields the defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> DomainResult<Self> {
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Reserved keys must be marked and distinct
    pub fn validate(&self) -> DomainResult<()> {
        for key in [&self.keys.index_key, &self.keys.settings_key] {
            if !is_marked(key) {
                return Err(DomainError::InvalidInput(format!(
                    "reserved key '{}' must be wrapped in '{}'",
                    key, RESERVED_MARKER
                )));
            }
        }
        if self.keys.index_key == self.keys.settings_key {
            return Err(DomainError::InvalidInput(
                "index and settings keys must differ".to_string(),
            ));
        }
        Ok(())
    }
}
