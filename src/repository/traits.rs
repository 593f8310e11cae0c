//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use browser localStorage, SQLite, in-memory, etc.

use async_trait::async_trait;
use crate::domain::{DomainResult, Structure};

/// String-keyed persistent medium
///
/// Mirrors `getItem` / `setItem` / `removeItem` of browser storage.
/// All operations are async to support various backends.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Raw value under `key`, `None` when absent
    async fn get_item(&self, key: &str) -> DomainResult<Option<String>>;

    /// Write `value` under `key`, replacing any prior value
    async fn set_item(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Delete `key`; absent keys are not an error
    async fn remove_item(&self, key: &str) -> DomainResult<()>;
}

/// Source of the category templates, read once at startup
#[async_trait]
pub trait CategorySource: Send + Sync {
    async fn load(&self) -> DomainResult<Structure>;
}
