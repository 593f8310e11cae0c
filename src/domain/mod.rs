//! Domain Layer
//!
//! Entities, color math, errors and operation outcomes.
//! Storage backend errors are converted into `DomainError` at this boundary.

mod checklist;
pub mod color;
mod error;
mod outcome;
mod settings;

pub use checklist::{CategoryTemplate, ChecklistRecord, IndexEntry, NamedChecklist, Question, Structure};
pub use error::{DomainError, DomainResult};
pub use outcome::{Outcome, Rejection};
pub use settings::{resolve_palette, DisplayMode, Palette, Settings};
