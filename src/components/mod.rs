//! UI Components
//!
//! Reusable Leptos components.

mod filter_bar;
mod new_todo_form;
mod theme_toggle;
mod todo_list;
mod todo_row;

pub use filter_bar::FilterBar;
pub use new_todo_form::NewTodoForm;
pub use theme_toggle::{apply_document_class, ThemeToggle};
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
