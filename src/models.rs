//! Frontend Models
//!
//! Data structures matching the remote collection API.

use serde::{Deserialize, Serialize};

/// A single to-do entry. The id is assigned by the server on create.
///
/// The hosted collection still serves the text under its legacy `todo` field
/// name; both spellings deserialize, `text` is canonical on the wire out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    #[serde(alias = "todo")]
    pub text: String,
    pub completed: bool,
}

/// View predicate selecting which todos are displayed. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

/// Filters in display order for the filter bar.
pub const FILTERS: &[Filter] = &[Filter::All, Filter::Active, Filter::Completed];

impl Filter {
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }
}

/// Whitespace-only text never becomes a todo (and never hits the network).
pub fn is_valid_todo_text(text: &str) -> bool {
    !text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, completed: bool) -> Todo {
        Todo {
            id,
            text: format!("Todo {}", id),
            completed,
        }
    }

    #[test]
    fn test_filter_active_keeps_only_incomplete() {
        let todos = vec![make_todo(1, true), make_todo(2, false)];

        let visible: Vec<_> = todos.iter().filter(|t| Filter::Active.matches(t)).collect();

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }

    #[test]
    fn test_filter_completed_keeps_only_complete() {
        let todos = vec![make_todo(1, true), make_todo(2, false)];

        let visible: Vec<_> = todos.iter().filter(|t| Filter::Completed.matches(t)).collect();

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn test_filter_all_keeps_everything() {
        let todos = vec![make_todo(1, true), make_todo(2, false)];

        assert!(todos.iter().all(|t| Filter::All.matches(t)));
    }

    #[test]
    fn test_todo_accepts_legacy_field_name() {
        let legacy: Todo =
            serde_json::from_str(r#"{"id":1,"todo":"buy milk","completed":false,"userId":5}"#)
                .unwrap();
        assert_eq!(legacy.text, "buy milk");

        let canonical: Todo =
            serde_json::from_str(r#"{"id":2,"text":"walk dog","completed":true}"#).unwrap();
        assert_eq!(canonical.text, "walk dog");

        // Outbound payloads use the canonical name
        let json = serde_json::to_string(&canonical).unwrap();
        assert!(json.contains(r#""text""#));
        assert!(!json.contains(r#""todo""#));
    }

    #[test]
    fn test_blank_text_is_rejected() {
        assert!(!is_valid_todo_text(""));
        assert!(!is_valid_todo_text("   "));
        assert!(!is_valid_todo_text("\t\n"));
        assert!(is_valid_todo_text("buy milk"));
        assert!(is_valid_todo_text("  padded  "));
    }
}
