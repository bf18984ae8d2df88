//! Category Filter Component
//!
//! Horizontal bar of category buttons; selection is written to the URL immediately.

use leptos::prelude::*;

use crate::query_state::use_query_state;
use crate::store::{store_categories, use_menu_store};

#[component]
pub fn CategoryFilter() -> impl IntoView {
    let store = use_menu_store();
    let query = use_query_state();

    let active = move || query.filter.get().category;

    view! {
        <div class="category-filter">
            <button
                class=move || if active().is_none() { "category-btn active" } else { "category-btn" }
                on:click=move |_| query.set_category(None)
            >
                "All"
            </button>
            <For
                each=move || store_categories(&store)
                key=|category| category.id.clone()
                children=move |category| {
                    let id = category.id.clone();
                    let id_for_click = category.id.clone();
                    let is_active = move || active().as_deref() == Some(id.as_str());
                    view! {
                        <button
                            class=move || if is_active() { "category-btn active" } else { "category-btn" }
                            title=category.description.clone()
                            on:click=move |_| query.set_category(Some(id_for_click.clone()))
                        >
                            <span class="category-icon">{category.icon.clone()}</span>
                            <span class="category-name">{category.name.clone()}</span>
                        </button>
                    }
                }
            />
        </div>
    }
}
