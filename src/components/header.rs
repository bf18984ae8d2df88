//! Header Component
//!
//! Restaurant brand, search box and theme toggle.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::query_state::use_query_state;
use crate::store::{store_restaurant_name, store_restaurant_tagline, use_menu_store};
use crate::theme::Theme;

const LOGO_LIGHT: &str = "/assets/logo_light.png";
const LOGO_DARK: &str = "/assets/logo_dark.png";

/// Page header with debounced search
///
/// Keystrokes are written to the URL only after the user pauses; the clear
/// button applies immediately.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_menu_store();
    let query = use_query_state();

    let initial = query.filter.get_untracked().q.unwrap_or_default();
    let (search_text, set_search_text) = signal(initial);

    let has_query = move || query.filter.get().q.is_some();
    let logo = move || match ctx.theme.get() {
        Theme::Light => LOGO_LIGHT,
        Theme::Dark => LOGO_DARK,
    };

    view! {
        <header class="site-header">
            // Logo & Brand
            <div class="brand">
                <img class="brand-logo" src=logo alt=move || format!("{} Logo", store_restaurant_name(&store)) />
                <div class="brand-text">
                    <h1 class="brand-name">{move || store_restaurant_name(&store)}</h1>
                    {move || store_restaurant_tagline(&store).map(|tagline| view! {
                        <p class="brand-tagline">{tagline}</p>
                    })}
                </div>
            </div>

            // Search Bar
            <div class="search-bar">
                <input
                    type="text"
                    id="search-menu"
                    name="q"
                    placeholder="Search your favourite..."
                    autocomplete="off"
                    prop:value=move || search_text.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_search_text.set(value.clone());
                        query.set_search_text(value);
                    }
                />
                <Show when=has_query>
                    <button
                        class="search-clear-btn"
                        aria-label="Clear search"
                        on:click=move |_| {
                            set_search_text.set(String::new());
                            query.clear_search();
                        }
                    >
                        "✕"
                    </button>
                </Show>
            </div>

            // Actions
            <div class="header-actions">
                <button
                    class="theme-toggle-btn"
                    title=move || match ctx.theme.get() {
                        Theme::Light => "Switch to dark mode",
                        Theme::Dark => "Switch to light mode",
                    }
                    on:click=move |ev| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        ctx.toggle_theme();
                    }
                >
                    {move || match ctx.theme.get() {
                        Theme::Light => "🌙",
                        Theme::Dark => "☀️",
                    }}
                </button>
            </div>
        </header>
    }
}
