//! Menu Browser App
//!
//! Root component: provides shared state and lays out the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{use_api_client, ApiClient};
use crate::components::{CategoryFilter, Header, Hero, MenuGrid};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::query_state::QueryState;
use crate::store::{store_set_categories, store_set_restaurant, MenuPageState, MenuStore};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    tracing::info!("[APP] API at {}", config.api_base_url);
    let debounce_ms = config.search_debounce_ms;

    // Provide context to all children
    provide_context(config);
    provide_context(AppContext::new());
    let store = Store::new(MenuPageState::default());
    provide_context(store);
    provide_context(QueryState::from_location(debounce_ms));

    // Load restaurant info and categories once per page load, independently
    let api = use_api_client();
    Effect::new(move |_| {
        spawn_local(load_restaurant(api.clone(), store));
        spawn_local(load_categories(api.clone(), store));
    });

    view! {
        <main class="menu-page">
            <Header />

            <div class="container">
                <Hero />

                <div class="category-bar">
                    <CategoryFilter />
                </div>

                <MenuGrid />
            </div>
        </main>
    }
}

async fn load_restaurant(api: ApiClient, store: MenuStore) {
    match api.restaurant().await {
        Ok(restaurant) => store_set_restaurant(&store, restaurant),
        Err(e) => tracing::warn!("[APP] Failed to fetch restaurant: {}", e),
    }
}

async fn load_categories(api: ApiClient, store: MenuStore) {
    let categories = api.categories_or_empty().await;
    tracing::info!("[APP] Loaded {} categories", categories.len());
    store_set_categories(&store, categories);
}
