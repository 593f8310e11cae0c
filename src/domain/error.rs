//! Domain Errors
//!
//! Failures that abort an operation. Validation problems (empty or
//! duplicate names and the like) are not errors; they come back as
//! `Outcome::Rejected` from the manager and state operations.

use serde::{Deserialize, Serialize};

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    /// A record the operation depends on is missing
    NotFound(String),
    /// Argument outside what the target record allows
    InvalidInput(String),
    /// Stored bytes are not valid JSON for the expected shape
    Decode(String),
    /// The storage medium failed
    Storage(String),
    Internal(String),
}

impl DomainError {
    pub fn decode(key: &str, err: serde_json::Error) -> Self {
        DomainError::Decode(format!("{}: {}", key, err))
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Decode(msg) => write!(f, "Decode error: {}", msg),
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(not(target_arch = "wasm32"))]
impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}
