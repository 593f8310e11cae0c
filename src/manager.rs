//! Checklist Index & Record Manager
//!
//! Keeps the sorted `{name, title}` index consistent with the records
//! stored under each name. Every mutating operation runs under one
//! manager-wide write lock, so overlapping create/rename/delete/toggle
//! sequences cannot interleave their read-modify-write steps.

use tokio::sync::Mutex;

use crate::domain::{
    CategoryTemplate, DomainResult, IndexEntry, NamedChecklist, Outcome, Rejection,
};
use crate::logging::Diagnostics;
use crate::markdown::render_checklist;
use crate::repository::PreferenceStore;

pub struct ChecklistManager {
    store: PreferenceStore,
    diagnostics: Diagnostics,
    write_lock: Mutex<()>,
}

fn sort_index(index: &mut [IndexEntry]) {
    index.sort_by(|a, b| a.name.cmp(&b.name));
}

impl ChecklistManager {
    pub fn new(store: PreferenceStore, diagnostics: Diagnostics) -> Self {
        Self {
            store,
            diagnostics,
            write_lock: Mutex::new(()),
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Checks shared by create and rename
    fn validate_name(&self, name: &str, index: &[IndexEntry]) -> Option<Rejection> {
        if name.is_empty() {
            Some(Rejection::EmptyName)
        } else if self.store.is_reserved(name) {
            Some(Rejection::ReservedName(name.to_string()))
        } else if index.iter().any(|entry| entry.name == name) {
            Some(Rejection::DuplicateName(name.to_string()))
        } else {
            None
        }
    }

    /// Current index, sorted by name
    pub async fn list(&self) -> DomainResult<Vec<IndexEntry>> {
        let index = self.store.get_index().await?;
        self.diagnostics.show("list", &index);
        Ok(index)
    }

    /// Load one checklist for display
    pub async fn open(&self, name: &str) -> DomainResult<NamedChecklist> {
        let record = self.store.get_record(name).await?;
        self.diagnostics.show("open", (name, &record));
        Ok(NamedChecklist {
            name: name.to_string(),
            record,
        })
    }

    /// New checklist `name` seeded from `category`
    pub async fn create(&self, name: &str, category: &CategoryTemplate) -> DomainResult<Outcome> {
        let _guard = self.write_lock.lock().await;

        let mut index = self.store.get_index().await?;
        if let Some(rejection) = self.validate_name(name, &index) {
            self.diagnostics.show("create rejected", (name, &rejection));
            return Ok(rejection.into());
        }

        index.push(IndexEntry::new(name, &category.title));
        sort_index(&mut index);

        self.store.set_index(&index).await?;
        self.store.set_record(name, &category.to_record()).await?;

        self.diagnostics.show("create", (name, &category.title));
        Ok(Outcome::Applied)
    }

    /// Move `old_name` to `new_name`, index entry and record together
    ///
    /// The old record is read before anything is written, so a missing
    /// record fails with `NotFound` and leaves storage untouched. A
    /// missing index entry is tolerated: the record still moves.
    pub async fn rename(&self, old_name: &str, new_name: &str) -> DomainResult<Outcome> {
        let _guard = self.write_lock.lock().await;

        if new_name == old_name {
            return Ok(Rejection::UnchangedName.into());
        }
        if self.store.is_reserved(old_name) {
            return Ok(Rejection::ReservedName(old_name.to_string()).into());
        }
        let mut index = self.store.get_index().await?;
        if let Some(rejection) = self.validate_name(new_name, &index) {
            self.diagnostics.show("rename rejected", (old_name, new_name, &rejection));
            return Ok(rejection.into());
        }

        let position = index.iter().position(|entry| entry.name == old_name);
        if let Some(pos) = position {
            let mut entry = index.remove(pos);
            entry.name = new_name.to_string();
            index.push(entry);
            sort_index(&mut index);
        } else {
            self.diagnostics.show("rename: no index entry", old_name);
        }

        let record = self.store.get_record(old_name).await?;

        if position.is_some() {
            self.store.set_index(&index).await?;
        }
        self.store.remove(old_name).await?;
        self.store.set_record(new_name, &record).await?;

        self.diagnostics.show("rename", (old_name, new_name));
        Ok(Outcome::Applied)
    }

    /// Drop the index entry and the record; unknown names are a no-op
    pub async fn delete(&self, name: &str) -> DomainResult<Outcome> {
        let _guard = self.write_lock.lock().await;

        if self.store.is_reserved(name) {
            return Ok(Rejection::ReservedName(name.to_string()).into());
        }

        let mut index = self.store.get_index().await?;
        if let Some(pos) = index.iter().position(|entry| entry.name == name) {
            index.remove(pos);
            self.store.set_index(&index).await?;
        }
        self.store.remove(name).await?;

        self.diagnostics.show("delete", name);
        Ok(Outcome::Applied)
    }

    /// Set one question's checked flag and write the record back
    pub async fn toggle_question(&self, name: &str, question: usize, checked: bool) -> DomainResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut record = self.store.get_record(name).await?;
        record.set_checked(question, checked)?;
        self.store.set_record(name, &record).await?;

        self.diagnostics.show("toggle_question", (name, question, checked));
        Ok(())
    }

    /// Markdown text of one checklist
    pub async fn export_markdown(&self, name: &str) -> DomainResult<String> {
        let record = self.store.get_record(name).await?;
        self.diagnostics.show("export_markdown", name);
        Ok(render_checklist(name, &record))
    }
}
