//! Menu Grid Component
//!
//! Renders the menu query state (loading / error / empty / success) and hosts
//! the item detail modal, which is independent of list refetches.

use leptos::prelude::*;

use crate::api::use_api_client;
use crate::components::{ItemDetailModal, MenuItemCard};
use crate::customization::DetailView;
use crate::menu_query::{use_menu_query, ListState};
use crate::models::MenuItem;
use crate::query_state::use_query_state;

/// Skeleton cards shown before the first result arrives
const SKELETON_CARDS: usize = 8;
/// Cards whose images load eagerly
const PRIORITY_IMAGES: usize = 4;

#[component]
pub fn MenuGrid() -> impl IntoView {
    let query = use_query_state();
    let menu = use_menu_query(use_api_client(), query.filter);
    let detail = RwSignal::new(DetailView::default());

    let on_select = Callback::new(move |item: MenuItem| {
        tracing::debug!("[GRID] Opening item {}", item.id);
        detail.update(|d| d.open(item));
    });

    view! {
        <div class="menu-grid-container">
            {move || match menu.state() {
                ListState::Loading => view! {
                    <div class="menu-grid loading">
                        {(0..SKELETON_CARDS).map(|_| view! { <div class="menu-card-skeleton"></div> }).collect_view()}
                    </div>
                }.into_any(),
                ListState::Error(error) => view! {
                    <div class="menu-error">
                        <p class="menu-error-title">"Oops! Something went wrong"</p>
                        <p class="menu-error-detail">{error.to_string()}</p>
                        <button class="retry-btn" on:click=move |_| menu.retry()>
                            "Retry Loading"
                        </button>
                    </div>
                }.into_any(),
                ListState::Empty => view! {
                    <div class="menu-empty">
                        <p class="menu-empty-title">"No items found"</p>
                        <p class="menu-empty-hint">"Try adjusting your search or filters."</p>
                    </div>
                }.into_any(),
                ListState::Success { items, placeholder } => {
                    let grid_class = if placeholder { "menu-grid revalidating" } else { "menu-grid" };
                    view! {
                        <div class=grid_class>
                            {items.into_iter().enumerate().map(|(index, item)| {
                                let priority = index < PRIORITY_IMAGES;
                                view! {
                                    <MenuItemCard item=item on_select=on_select priority=priority />
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}

            <Show when=move || menu.is_fetching()>
                <div class="menu-refresh-indicator" aria-live="polite">"Updating…"</div>
            </Show>

            <ItemDetailModal detail=detail />
        </div>
    }
}
