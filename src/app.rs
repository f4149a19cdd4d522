//! Todo App
//!
//! Root component: provides the store, restores the persisted theme and
//! fetches the remote collection once on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{apply_document_class, NewTodoForm, ThemeToggle, TodoList};
use crate::storage;
use crate::store::{store_replace_todos, AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let dark_mode = storage::load_dark_mode();
    let store = AppStore::new(AppState {
        dark_mode,
        ..Default::default()
    });

    // Provide the store to all children
    provide_context(store);

    apply_document_class(dark_mode);

    // Initial load: replace the list wholesale with the server's copy.
    // On failure the previous (empty) state stays; no retry.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_todos().await {
                Ok(todos) => {
                    web_sys::console::log_1(&format!("Loaded {} todos", todos.len()).into());
                    store_replace_todos(&store, todos);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching todos: {}", e).into());
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"TODO"</h1>
                <ThemeToggle />
            </header>

            <main class="main-content">
                <NewTodoForm />
                <TodoList />
            </main>
        </div>
    }
}
