//! Checklist Core
//!
//! Layered architecture:
//! - domain: entities, color math, errors and outcomes
//! - repository: storage media, the preference store and category sources
//! - state: settings-derived application state
//! - manager: checklist index and record reconciliation
//! - app: the context object composing them

pub mod app;
pub mod config;
pub mod domain;
pub mod logging;
pub mod manager;
pub mod markdown;
pub mod repository;
pub mod state;

pub use app::ChecklistApp;
pub use config::{AppConfig, StorageKeys};
pub use domain::{DomainError, DomainResult, Outcome, Rejection};
pub use manager::ChecklistManager;
pub use repository::{CategorySource, MemoryStorage, PreferenceStore, Storage};
pub use state::AppState;
