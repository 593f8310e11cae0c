//! Operation Outcomes
//!
//! Validation failures leave state untouched and are reported here
//! instead of through `DomainError`.

use std::fmt;

/// Why a request was not carried out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    EmptyName,
    DuplicateName(String),
    ReservedName(String),
    UnchangedName,
    UnknownCategory(String),
    NotCustomMode,
    InvalidColor,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::EmptyName => write!(f, "name is empty"),
            Rejection::DuplicateName(name) => write!(f, "a checklist named '{}' already exists", name),
            Rejection::ReservedName(name) => write!(f, "'{}' is a reserved key", name),
            Rejection::UnchangedName => write!(f, "name is unchanged"),
            Rejection::UnknownCategory(title) => write!(f, "no category titled '{}'", title),
            Rejection::NotCustomMode => write!(f, "colors can only be changed in custom mode"),
            Rejection::InvalidColor => write!(f, "colors must be 6-digit hex values"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Applied => None,
            Outcome::Rejected(r) => Some(r),
        }
    }
}

impl From<Rejection> for Outcome {
    fn from(r: Rejection) -> Self {
        Outcome::Rejected(r)
    }
}
