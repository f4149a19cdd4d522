//! Todo List Component
//!
//! Filtered list with the items-left counter, filter bar and bulk clear.

use futures::future::join_all;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{FilterBar, TodoRow};
use crate::store::{
    active_count, all_deletes_succeeded, completed_ids, store_retain_active, use_app_store,
    AppStateStoreFields,
};

/// Filtered todo list with footer controls
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let visible = move || {
        let filter = store.filter().get();
        store
            .todos()
            .get()
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect::<Vec<_>>()
    };

    let items_left = move || active_count(&store.todos().read());

    let clear_completed = move |_| {
        let ids = completed_ids(&store.todos().read());
        if ids.is_empty() {
            return;
        }

        spawn_local(async move {
            // One delete per completed todo, issued concurrently. The local
            // list only shrinks when every delete came back Ok.
            let results = join_all(ids.into_iter().map(api::delete_todo)).await;
            if all_deletes_succeeded(&results) {
                store_retain_active(&store);
            } else {
                web_sys::console::error_1(&"Error clearing completed todos".into());
            }
        });
    };

    view! {
        <div class="todo-list">
            <For
                each=visible
                key=|todo| (todo.id, todo.completed, todo.text.clone())
                children=move |todo| view! { <TodoRow todo=todo /> }
            />

            <div class="list-footer">
                <span class="items-left">
                    {move || format!("{} items left", items_left())}
                </span>
                <FilterBar />
                <button class="clear-btn" on:click=clear_completed>
                    "Clear Completed"
                </button>
            </div>
        </div>
    }
}
