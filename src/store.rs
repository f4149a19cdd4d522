//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All mutation goes
//! through the store_* helpers; the list logic they apply lives in plain
//! functions so it can be tested off-browser.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Filter, Todo};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Local copy of the remote collection
    pub todos: Vec<Todo>,
    /// Active view filter
    pub filter: Filter,
    /// Dark display mode, persisted across sessions
    pub dark_mode: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole list with the server's copy
pub fn store_replace_todos(store: &AppStore, todos: Vec<Todo>) {
    replace_with(&mut store.todos().write(), todos);
}

/// Append a server-created todo
pub fn store_append_todo(store: &AppStore, todo: Todo) {
    store.todos().write().push(todo);
}

/// Flip a todo's completed flag by ID
pub fn store_toggle_todo(store: &AppStore, id: u32) {
    toggle_by_id(&mut store.todos().write(), id);
}

/// Remove a todo from the store by ID
pub fn store_remove_todo(store: &AppStore, id: u32) {
    remove_by_id(&mut store.todos().write(), id);
}

/// Drop every completed todo from the store
pub fn store_retain_active(store: &AppStore) {
    retain_active(&mut store.todos().write());
}

// ========================
// List Logic
// ========================

/// Wholesale replacement: after a load, the local list is the server's list
pub fn replace_with(todos: &mut Vec<Todo>, server: Vec<Todo>) {
    *todos = server;
}

pub fn toggle_by_id(todos: &mut Vec<Todo>, id: u32) {
    if let Some(todo) = todos.iter_mut().find(|t| t.id == id) {
        todo.completed = !todo.completed;
    }
}

pub fn remove_by_id(todos: &mut Vec<Todo>, id: u32) {
    todos.retain(|t| t.id != id);
}

pub fn retain_active(todos: &mut Vec<Todo>) {
    todos.retain(|t| !t.completed);
}

/// IDs of completed todos, in list order
pub fn completed_ids(todos: &[Todo]) -> Vec<u32> {
    todos.iter().filter(|t| t.completed).map(|t| t.id).collect()
}

/// How many todos are still open ("N items left")
pub fn active_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| !t.completed).count()
}

/// Bulk clear is all-or-nothing locally: the list may only shrink when every
/// delete in the batch came back Ok
pub fn all_deletes_succeeded(results: &[Result<(), String>]) -> bool {
    results.iter().all(|r| r.is_ok())
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
    fn test_toggle_flips_matching_todo() {
        let mut todos = vec![make_todo(1, false), make_todo(2, true)];

        toggle_by_id(&mut todos, 1);
        assert!(todos[0].completed);

        toggle_by_id(&mut todos, 1);
        assert!(!todos[0].completed);
        // Other rows untouched
        assert!(todos[1].completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut todos = vec![make_todo(1, false)];
        toggle_by_id(&mut todos, 99);
        assert_eq!(todos, vec![make_todo(1, false)]);
    }

    #[test]
    fn test_remove_by_id() {
        let mut todos = vec![make_todo(1, false), make_todo(2, false)];

        remove_by_id(&mut todos, 1);

        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 2);
    }

    #[test]
    fn test_retain_active_drops_completed() {
        let mut todos = vec![make_todo(1, true), make_todo(2, false)];

        retain_active(&mut todos);

        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 2);
    }

    #[test]
    fn test_completed_ids_in_order() {
        let todos = vec![make_todo(3, true), make_todo(1, false), make_todo(2, true)];
        assert_eq!(completed_ids(&todos), vec![3, 2]);
    }

    #[test]
    fn test_replace_takes_server_copy_wholesale() {
        let mut todos = vec![make_todo(9, true)];
        let server = vec![make_todo(1, false), make_todo(2, true), make_todo(3, false)];

        replace_with(&mut todos, server.clone());

        assert_eq!(todos.len(), server.len());
        assert_eq!(todos, server);
    }

    #[test]
    fn test_bulk_clear_applies_when_all_deletes_ok() {
        let mut todos = vec![make_todo(1, true), make_todo(2, false)];
        let results: Vec<Result<(), String>> = vec![Ok(())];

        assert!(all_deletes_succeeded(&results));
        retain_active(&mut todos);

        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 2);
    }

    #[test]
    fn test_bulk_clear_keeps_list_when_any_delete_fails() {
        let todos = vec![make_todo(1, true), make_todo(2, false)];
        let results: Vec<Result<(), String>> = vec![Ok(()), Err("network".to_string())];

        // The batch failed, so the list is left untouched
        assert!(!all_deletes_succeeded(&results));
        assert_eq!(todos.len(), 2);
    }

    #[test]
    fn test_active_count() {
        let todos = vec![make_todo(1, true), make_todo(2, false), make_todo(3, false)];
        assert_eq!(active_count(&todos), 2);
        assert_eq!(active_count(&[]), 0);
    }
}
