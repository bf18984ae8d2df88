//! Page Data Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the data
//! fetched once per page load.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{Category, Restaurant};

/// Restaurant name shown until (or unless) `/restaurant` answers
pub const FALLBACK_RESTAURANT_NAME: &str = "Delicious Bites";

/// Page-level fetched data with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct MenuPageState {
    /// Restaurant info for the header
    pub restaurant: Option<Restaurant>,
    /// Categories for the filter bar (empty if the fetch failed)
    pub categories: Vec<Category>,
}

/// Type alias for the store
pub type MenuStore = Store<MenuPageState>;

/// Get the menu store from context
pub fn use_menu_store() -> MenuStore {
    expect_context::<MenuStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_categories(store: &MenuStore, categories: Vec<Category>) {
    *store.categories().write() = categories;
}

pub fn store_set_restaurant(store: &MenuStore, restaurant: Restaurant) {
    *store.restaurant().write() = Some(restaurant);
}

pub fn store_categories(store: &MenuStore) -> Vec<Category> {
    store.categories().get()
}

pub fn store_restaurant_name(store: &MenuStore) -> String {
    store
        .restaurant()
        .with(|r| r.as_ref().map(|r| r.name.clone()))
        .unwrap_or_else(|| FALLBACK_RESTAURANT_NAME.to_string())
}

pub fn store_restaurant_tagline(store: &MenuStore) -> Option<String> {
    store
        .restaurant()
        .with(|r| r.as_ref().map(|r| r.tagline.clone()))
        .filter(|t| !t.is_empty())
}
