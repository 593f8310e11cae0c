//! Category Sources
//!
//! Where the `{ categories: [...] }` document comes from.

use async_trait::async_trait;

use crate::domain::{DomainError, DomainResult, Structure};
use super::traits::CategorySource;

/// Document already in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    structure: Structure,
}

impl StaticSource {
    pub fn new(structure: Structure) -> Self {
        Self { structure }
    }

    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let structure = serde_json::from_str(raw).map_err(|e| DomainError::decode("categories", e))?;
        Ok(Self::new(structure))
    }
}

#[async_trait]
impl CategorySource for StaticSource {
    async fn load(&self) -> DomainResult<Structure> {
        Ok(self.structure.clone())
    }
}

/// JSON document on disk (native targets)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl JsonFileSource {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl CategorySource for JsonFileSource {
    async fn load(&self) -> DomainResult<Structure> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::NotFound(format!("categories at {}: {}", self.path.display(), e))
        })?;
        serde_json::from_str(&raw).map_err(|e| DomainError::decode(&self.path.display().to_string(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{"categories":[{"title":"Smoke","questions":[{"title":"Q1","checked":false}]}]}"#;

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticSource::from_json(DOC).unwrap();
        let structure = source.load().await.unwrap();
        assert_eq!(structure.categories[0].title, "Smoke");
    }

    #[test]
    fn test_static_source_rejects_bad_json() {
        assert!(matches!(StaticSource::from_json("categories: nope"), Err(DomainError::Decode(_))));
    }

    #[tokio::test]
    async fn test_json_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("testing.json");
        std::fs::write(&path, DOC).unwrap();

        let structure = JsonFileSource::new(&path).load().await.unwrap();
        assert_eq!(structure.first().unwrap().questions.len(), 1);
    }

    #[tokio::test]
    async fn test_json_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("absent.json"));
        assert!(matches!(source.load().await, Err(DomainError::NotFound(_))));
    }
}
