//! Preference Store
//!
//! JSON encode/decode at the boundary of a `Storage` medium. No caching:
//! every call round-trips through the medium.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::config::{is_marked, StorageKeys};
use crate::domain::{ChecklistRecord, DomainError, DomainResult, IndexEntry, Settings};
use super::traits::Storage;

/// Typed access to a storage medium
#[derive(Clone)]
pub struct PreferenceStore {
    storage: Arc<dyn Storage>,
    keys: StorageKeys,
}

impl PreferenceStore {
    pub fn new(storage: Arc<dyn Storage>, keys: StorageKeys) -> Self {
        Self { storage, keys }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// True for names inside the reserved keyspace
    pub fn is_reserved(&self, name: &str) -> bool {
        is_marked(name) || name == self.keys.index_key || name == self.keys.settings_key
    }

    /// Decoded value under `key`, `None` when absent
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> DomainResult<Option<T>> {
        match self.storage.get_item(key).await? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| DomainError::decode(key, e)),
        }
    }

    pub async fn set<T: Serialize + Sync + ?Sized>(&self, key: &str, value: &T) -> DomainResult<()> {
        let raw = serde_json::to_string(value)
            .map_err(|e| DomainError::Internal(format!("encode {}: {}", key, e)))?;
        self.storage.set_item(key, &raw).await
    }

    pub async fn remove(&self, key: &str) -> DomainResult<()> {
        self.storage.remove_item(key).await
    }

    /// The checklist index, empty when never written
    pub async fn get_index(&self) -> DomainResult<Vec<IndexEntry>> {
        Ok(self.get(&self.keys.index_key).await?.unwrap_or_default())
    }

    pub async fn set_index(&self, index: &[IndexEntry]) -> DomainResult<()> {
        self.set(&self.keys.index_key, index).await
    }

    pub async fn get_settings(&self) -> DomainResult<Option<Settings>> {
        self.get(&self.keys.settings_key).await
    }

    pub async fn set_settings(&self, settings: &Settings) -> DomainResult<()> {
        self.set(&self.keys.settings_key, settings).await
    }

    /// Record stored under `name`; a missing record is `NotFound`
    pub async fn get_record(&self, name: &str) -> DomainResult<ChecklistRecord> {
        self.get(name)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("checklist '{}'", name)))
    }

    pub async fn set_record(&self, name: &str, record: &ChecklistRecord) -> DomainResult<()> {
        self.set(name, record).await
    }
}
