//! Checklist Entities
//!
//! Index entries, persisted checklist records and the read-only category
//! templates new checklists are seeded from.

use serde::{Deserialize, Serialize};
use super::error::{DomainError, DomainResult};

/// One question of a checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub title: String,
    #[serde(default)]
    pub checked: bool,
}

impl Question {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            checked: false,
        }
    }
}

/// Full persisted content of one checklist, stored under its name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistRecord {
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl ChecklistRecord {
    /// Set one question's flag
    pub fn set_checked(&mut self, index: usize, checked: bool) -> DomainResult<()> {
        let count = self.questions.len();
        let question = self.questions.get_mut(index).ok_or_else(|| {
            DomainError::InvalidInput(format!("question {} out of range (0..{})", index, count))
        })?;
        question.checked = checked;
        Ok(())
    }
}

/// Catalog entry of a saved checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Unique; also the record's storage key
    pub name: String,
    /// Title of the category it was created from
    pub title: String,
}

impl IndexEntry {
    pub fn new(name: &str, title: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
        }
    }
}

/// A record together with the name it is stored under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedChecklist {
    pub name: String,
    pub record: ChecklistRecord,
}

/// Starting structure for new checklists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTemplate {
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl CategoryTemplate {
    /// Fresh record copied from this template
    pub fn to_record(&self) -> ChecklistRecord {
        ChecklistRecord {
            title: self.title.clone(),
            questions: self.questions.clone(),
        }
    }
}

/// The externally sourced `{ categories: [...] }` document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Structure {
    #[serde(default)]
    pub categories: Vec<CategoryTemplate>,
}

impl Structure {
    pub fn find(&self, title: &str) -> Option<&CategoryTemplate> {
        self.categories.iter().find(|c| c.title == title)
    }

    /// Preselected category
    pub fn first(&self) -> Option<&CategoryTemplate> {
        self.categories.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ChecklistRecord {
        ChecklistRecord {
            title: "Setup".to_string(),
            questions: vec![Question::new("Q1"), Question::new("Q2")],
        }
    }

    #[test]
    fn test_set_checked() {
        let mut rec = record();
        rec.set_checked(1, true).unwrap();
        assert!(!rec.questions[0].checked);
        assert!(rec.questions[1].checked);
    }

    #[test]
    fn test_set_checked_out_of_range() {
        let mut rec = record();
        assert!(matches!(rec.set_checked(2, true), Err(DomainError::InvalidInput(_))));
        assert_eq!(rec, record());
    }

    #[test]
    fn test_question_checked_defaults_false() {
        let q: Question = serde_json::from_str(r#"{"title":"Q"}"#).unwrap();
        assert!(!q.checked);
    }

    #[test]
    fn test_structure_lookup() {
        let structure: Structure = serde_json::from_str(
            r#"{"categories":[{"title":"A","questions":[]},{"title":"B","questions":[{"title":"x"}]}]}"#,
        )
        .unwrap();
        assert_eq!(structure.first().map(|c| c.title.as_str()), Some("A"));
        assert_eq!(structure.find("B").unwrap().to_record().questions.len(), 1);
        assert!(structure.find("C").is_none());
    }
}
