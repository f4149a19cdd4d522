//! Theme Toggle Component
//!
//! Sun/moon button flipping dark mode; persisted on every change.

use leptos::prelude::*;

use crate::storage;
use crate::store::{use_app_store, AppStateStoreFields};

/// Header button toggling light/dark display mode
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();

    let toggle = move |_| {
        let dark = !store.dark_mode().get();
        store.dark_mode().set(dark);
        storage::save_dark_mode(dark);
        apply_document_class(dark);
    };

    view! {
        <button class="theme-toggle" on:click=toggle>
            {move || if store.dark_mode().get() { "☀" } else { "🌙" }}
        </button>
    }
}

/// Mirror the flag onto the document root so stylesheet selectors follow it.
pub fn apply_document_class(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let result = if dark {
        root.class_list().add_1("dark")
    } else {
        root.class_list().remove_1("dark")
    };
    if result.is_err() {
        web_sys::console::error_1(&"Error applying theme class".into());
    }
}
