//! Hero Component

use leptos::prelude::*;

/// Landing heading above the filter bar
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h2 class="hero-title">"Our " <span class="text-primary">"Menu"</span></h2>
            <p class="hero-subtitle">
                "Discover our culinary creations. From fresh appetizers to delightful desserts, crafted with passion for your enjoyment."
            </p>
        </div>
    }
}
