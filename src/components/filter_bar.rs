//! Filter Bar Component
//!
//! View filter buttons (All / Active / Completed).

use leptos::prelude::*;

use crate::models::FILTERS;
use crate::store::{use_app_store, AppStateStoreFields};

/// Filter selector buttons
#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filter-bar">
            {FILTERS.iter().map(|filter| {
                let f = *filter;
                let is_selected = move || store.filter().get() == f;
                view! {
                    <button
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| store.filter().set(f)
                    >
                        {f.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
