//! In-Memory Storage
//!
//! BTreeMap-backed medium for tests and throwaway sessions. Counts
//! writes so callers can assert that an operation issued none.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

use crate::domain::DomainResult;
use super::traits::Storage;

#[derive(Default)]
pub struct MemoryStorage {
    items: Mutex<BTreeMap<String, String>>,
    writes: AtomicUsize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated with raw (already serialized) values
    pub fn with_items<K, V>(items: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: Mutex::new(items.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of set/remove calls so far
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn snapshot(&self) -> BTreeMap<String, String> {
        self.items.lock().await.clone()
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.items.lock().await.contains_key(key)
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.items.lock().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.items.lock().await.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> DomainResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.items.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k").await.unwrap(), None);

        storage.set_item("k", "1").await.unwrap();
        storage.set_item("k", "2").await.unwrap();
        assert_eq!(storage.get_item("k").await.unwrap().as_deref(), Some("2"));

        storage.remove_item("k").await.unwrap();
        storage.remove_item("k").await.unwrap();
        assert!(!storage.contains("k").await);
        assert_eq!(storage.writes(), 4);
    }

    #[tokio::test]
    async fn test_with_items_does_not_count_as_writes() {
        let storage = MemoryStorage::with_items([("a", "\"x\"")]);
        assert_eq!(storage.writes(), 0);
        assert_eq!(storage.snapshot().await.len(), 1);
    }
}
