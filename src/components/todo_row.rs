//! Todo Row Component
//!
//! A single todo in the list: checkbox, text, delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::Todo;
use crate::store::{store_remove_todo, store_toggle_todo, use_app_store};

/// A single todo row
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let store = use_app_store();

    let id = todo.id;
    let completed = todo.completed;
    let text = todo.text.clone();

    // Optimistic: flip locally first, then tell the server. A failed update
    // is logged but not rolled back.
    let toggle = move |_| {
        store_toggle_todo(&store, id);
        spawn_local(async move {
            if let Err(e) = api::update_todo(id, !completed).await {
                web_sys::console::error_1(&format!("Error updating todo: {}", e).into());
            }
        });
    };

    // Deletion is confirmed remotely before the row disappears
    let delete = move |_| {
        spawn_local(async move {
            match api::delete_todo(id).await {
                Ok(()) => store_remove_todo(&store, id),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error deleting todo: {}", e).into());
                }
            }
        });
    };

    view! {
        <div class=move || if completed { "todo-row completed" } else { "todo-row" }>
            <input type="checkbox" checked=completed on:change=toggle />
            <span class="todo-text">{text}</span>
            <button class="delete-btn" on:click=delete>"×"</button>
        </div>
    }
}
