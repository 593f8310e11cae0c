//! Repository Integration Tests
//!
//! Runs the store and manager against real media: SQLite in memory and
//! on disk.

#[cfg(test)]
mod tests {
    use crate::config::StorageKeys;
    use crate::domain::{CategoryTemplate, DomainError, IndexEntry, Question, Settings};
    use crate::logging::Diagnostics;
    use crate::manager::ChecklistManager;
    use crate::repository::{PreferenceStore, SqliteStorage, Storage};
    use crate::state::AppState;
    use std::sync::Arc;

    fn sqlite_store() -> PreferenceStore {
        let storage = SqliteStorage::open_in_memory().expect("Failed to open test DB");
        PreferenceStore::new(Arc::new(storage), StorageKeys::default())
    }

    fn category() -> CategoryTemplate {
        CategoryTemplate {
            title: "Deploy".to_string(),
            questions: vec![Question::new("Backup taken"), Question::new("Rollback plan")],
        }
    }

    #[tokio::test]
    async fn test_sqlite_get_set_remove() {
        let storage = SqliteStorage::open_in_memory().unwrap();

        assert_eq!(storage.get_item("k").await.unwrap(), None);
        storage.set_item("k", "one").await.unwrap();
        storage.set_item("k", "two").await.unwrap();
        assert_eq!(storage.get_item("k").await.unwrap().as_deref(), Some("two"));

        storage.remove_item("k").await.unwrap();
        storage.remove_item("k").await.unwrap();
        assert_eq!(storage.get_item("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_sqlite_file_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("checklist.db");

        {
            let store = PreferenceStore::new(Arc::new(SqliteStorage::open(&path).unwrap()), StorageKeys::default());
            let manager = ChecklistManager::new(store, Diagnostics::new(false));
            manager.create("prod", &category()).await.unwrap();
            manager.toggle_question("prod", 1, true).await.unwrap();
        }

        let store = PreferenceStore::new(Arc::new(SqliteStorage::open(&path).unwrap()), StorageKeys::default());
        let manager = ChecklistManager::new(store, Diagnostics::new(false));
        assert_eq!(manager.list().await.unwrap(), vec![IndexEntry::new("prod", "Deploy")]);
        let record = manager.open("prod").await.unwrap().record;
        assert!(record.questions[1].checked);
    }

    #[tokio::test]
    async fn test_state_seeds_once_on_sqlite() {
        let store = sqlite_store();

        AppState::init(&store).await.unwrap();
        assert_eq!(store.get_settings().await.unwrap(), Some(Settings::default()));

        let mut state = AppState::init(&store).await.unwrap();
        state.toggle_debug(&store).await.unwrap();
        let reloaded = AppState::init(&store).await.unwrap();
        assert!(reloaded.debug);
    }

    #[tokio::test]
    async fn test_full_lifecycle_on_sqlite() {
        let store = sqlite_store();
        let manager = ChecklistManager::new(store.clone(), Diagnostics::new(true));

        manager.create("staging", &category()).await.unwrap();
        manager.create("prod", &category()).await.unwrap();
        assert_eq!(
            manager.list().await.unwrap().iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["prod", "staging"]
        );

        manager.rename("staging", "qa").await.unwrap();
        manager.toggle_question("qa", 0, true).await.unwrap();
        let text = manager.export_markdown("qa").await.unwrap();
        assert!(text.starts_with("## qa\n"));
        assert!(text.contains("[x] Backup taken"));
        assert!(text.contains("[ ] Rollback plan"));

        manager.delete("qa").await.unwrap();
        manager.delete("prod").await.unwrap();
        assert!(manager.list().await.unwrap().is_empty());
        assert!(matches!(manager.open("qa").await, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_corrupt_record_surfaces_decode_error() {
        let storage = Arc::new(SqliteStorage::open_in_memory().unwrap());
        storage.set_item("broken", "{\"title\": 3}").await.unwrap();
        let store = PreferenceStore::new(storage, StorageKeys::default());
        let manager = ChecklistManager::new(store, Diagnostics::new(false));

        assert!(matches!(manager.open("broken").await, Err(DomainError::Decode(_))));
        assert!(matches!(manager.toggle_question("broken", 0, true).await, Err(DomainError::Decode(_))));
    }
}
