//! New Todo Form Component
//!
//! Input row for creating todos; submits on Enter.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, CreateTodoArgs};
use crate::models::is_valid_todo_text;
use crate::store::{store_append_todo, use_app_store};

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();
    let (new_text, set_new_text) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        // Blank input never reaches the network
        if !is_valid_todo_text(&text) {
            return;
        }

        spawn_local(async move {
            let args = CreateTodoArgs {
                text: &text,
                completed: false,
            };
            match api::create_todo(&args).await {
                Ok(created) => {
                    store_append_todo(&store, created);
                    // Pending text is only cleared once the server confirmed
                    set_new_text.set(String::new());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error adding todo: {}", e).into());
                }
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <span class="todo-ring"></span>
            <input
                type="text"
                placeholder="Create a new todo..."
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    let Some(target) = ev.target() else { return };
                    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
                        set_new_text.set(input.value());
                    }
                }
            />
        </form>
    }
}
