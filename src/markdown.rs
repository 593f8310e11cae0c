//! Markdown Export
//!
//! Renders one checklist as copyable Markdown:
//!
//! ```text
//! ## {name}
//!
//! ### {title}
//!
//! [x] checked question
//! [ ] open question
//! ```

use std::fmt::Write;

use crate::domain::ChecklistRecord;

fn marker(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Pure function of the record and the name it is stored under
pub fn render_checklist(name: &str, record: &ChecklistRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "## {}", name);
    let _ = writeln!(out);
    let _ = writeln!(out, "### {}", record.title);
    let _ = writeln!(out);
    for question in &record.questions {
        let _ = writeln!(out, "{} {}", marker(question.checked), question.title);
    }
    out
}
