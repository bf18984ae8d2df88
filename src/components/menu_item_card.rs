//! Menu Item Card Component
//!
//! One menu item with image, badges, price and meta. Clicking opens the detail view.

use leptos::prelude::*;

use crate::customization::price_label;
use crate::models::MenuItem;

/// CSS class for a dietary tag badge
pub fn dietary_class(tag: &str) -> &'static str {
    match tag {
        "vegetarian" => "dietary-tag vegetarian",
        "vegan" => "dietary-tag vegan",
        "gluten-free" => "dietary-tag gluten-free",
        _ => "dietary-tag",
    }
}

/// One chilli per spice level
pub fn chilli_string(level: u8) -> String {
    "🌶️".repeat(level as usize)
}

#[component]
pub fn MenuItemCard(
    item: MenuItem,
    #[prop(into)] on_select: Callback<MenuItem>,
    /// Load the image eagerly (first row of the grid)
    #[prop(optional)]
    priority: bool,
) -> impl IntoView {
    let loading = if priority { "eager" } else { "lazy" };
    let is_spicy = item.spicy_level > 0;
    let spicy_title = format!("Spicy Level: {}", item.spicy_level);
    let chillies = chilli_string(item.spicy_level);
    let price = price_label(item.price);
    let prep_time = format!("{} min", item.preparation_time);
    let add_label = format!("Add {} to cart", item.name);
    let popular = item.popular;
    let dietary = item.dietary.clone();
    let item_for_click = item.clone();

    view! {
        <div class="menu-card" on:click=move |_| on_select.run(item_for_click.clone())>
            // Image Container with Badges
            <div class="menu-card-image">
                <img src=item.image.clone() alt=item.name.clone() loading=loading />
                <Show when=move || popular>
                    <div class="popular-badge"><span>"★"</span>" POPULAR"</div>
                </Show>
                <div class="dietary-tags">
                    {dietary.into_iter().map(|tag| view! {
                        <span class=dietary_class(&tag)>{tag.clone()}</span>
                    }).collect_view()}
                </div>
            </div>

            // Item Content
            <div class="menu-card-body">
                <div class="menu-card-header">
                    <h3 class="menu-card-name">{item.name.clone()}</h3>
                    <span class="menu-card-price">{price}</span>
                </div>
                <p class="menu-card-description">{item.description.clone()}</p>

                <div class="menu-card-footer">
                    <div class="menu-card-meta">
                        <Show when=move || is_spicy>
                            <span class="spicy-level" title=spicy_title.clone()>{chillies.clone()}</span>
                        </Show>
                        <span class="prep-time">{prep_time}</span>
                    </div>
                    <button
                        class="add-btn"
                        aria-label=add_label
                        on:click=|ev| ev.stop_propagation()
                    >
                        "+"
                    </button>
                </div>
            </div>
        </div>
    }
}
