//! Item Detail Modal
//!
//! Customization panel for one item: spice level, size, extras and total.
//! Closes on the close button or a click on the backdrop outside the panel.

use leptos::prelude::*;

use crate::customization::{
    price_label, DetailView, Size, SpiceLevel, AVAILABLE_EXTRAS, SPICE_LEVELS,
};
use crate::models::MenuItem;

/// Lock/unlock page scrolling behind the modal
fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", value) {
        tracing::warn!("[ITEM] Failed to set body overflow: {:?}", e);
    }
}

#[component]
pub fn ItemDetailModal(detail: RwSignal<DetailView>) -> impl IntoView {
    // Snapshot of the open item; selection edits don't rebuild the panel
    let item = Memo::new(move |_| detail.with(|d| d.item().cloned()));

    Effect::new(move |_| {
        set_body_scroll_locked(detail.with(|d| d.is_open()));
    });
    on_cleanup(|| set_body_scroll_locked(false));

    move || item.get().map(|item| view! { <DetailPanel item=item detail=detail /> })
}

#[component]
fn DetailPanel(item: MenuItem, detail: RwSignal<DetailView>) -> impl IntoView {
    let close = move |_: web_sys::MouseEvent| detail.update(|d| d.close());

    let spice = move || detail.with(|d| d.selection().map(|s| s.spice_level));
    let size = move || detail.with(|d| d.selection().map(|s| s.size));
    let total = move || detail.with(|d| d.total_label()).unwrap_or_default();

    let item_name = item.name.clone();
    let add_to_order = move |_: web_sys::MouseEvent| {
        detail.with(|d| {
            if let (Some(selection), Some(total)) = (d.selection(), d.total_label()) {
                tracing::info!(
                    "[ITEM] Add to order: {} spice={} size={:?} extras={:?} total={}",
                    item_name,
                    selection.spice_level.get(),
                    selection.size,
                    selection.extras,
                    total
                );
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=close>
            <div class="modal-panel" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" aria-label="Close" on:click=close>"✕"</button>

                // Image
                <div class="modal-image">
                    <img src=item.image.clone() alt=item.name.clone() />
                </div>

                // Details
                <div class="modal-details">
                    <h2 class="modal-title">{item.name.clone()}</h2>
                    <p class="modal-price">{price_label(item.price)}</p>
                    <div class="dietary-tags">
                        {item.dietary.iter().map(|tag| view! {
                            <span class="dietary-tag">{tag.clone()}</span>
                        }).collect_view()}
                    </div>
                    <p class="modal-description">{item.description.clone()}</p>

                    // Spice Level
                    <div class="option-group">
                        <h3>"Spice Level"</h3>
                        <div class="option-buttons">
                            {SPICE_LEVELS.iter().map(|&(level, label)| {
                                let is_active = move || spice().map(|s| s.get()) == Some(level);
                                view! {
                                    <button
                                        class=move || if is_active() { "option-btn spice active" } else { "option-btn spice" }
                                        on:click=move |_| detail.update(|d| {
                                            d.update_selection(|s| s.set_spice_level(SpiceLevel::clamped(level)))
                                        })
                                    >
                                        {label}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    </div>

                    // Size
                    <div class="option-group">
                        <h3>"Portion Size"</h3>
                        <div class="option-buttons">
                            {Size::ALL.into_iter().map(|option| {
                                let is_active = move || size() == Some(option);
                                view! {
                                    <button
                                        class=move || if is_active() { "option-btn active" } else { "option-btn" }
                                        on:click=move |_| detail.update(|d| d.update_selection(|s| s.set_size(option)))
                                    >
                                        {option.label()}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    </div>

                    // Extras
                    <div class="option-group">
                        <h3>"Add Extras"</h3>
                        <div class="extras-list">
                            {AVAILABLE_EXTRAS.iter().map(|extra| {
                                let id = extra.id;
                                let is_selected = move || {
                                    detail.with(|d| d.selection().is_some_and(|s| s.has_extra(id)))
                                };
                                view! {
                                    <button
                                        class=move || if is_selected() { "extra-btn selected" } else { "extra-btn" }
                                        on:click=move |_| detail.update(|d| d.update_selection(|s| {
                                            s.toggle_extra(id);
                                        }))
                                    >
                                        <span>{extra.name}</span>
                                        <span class="extra-price">{format!("+${:.1}", extra.price)}</span>
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    </div>

                    // Add to Order
                    <button class="add-to-order-btn" on:click=add_to_order>
                        <span>"Add to Order"</span>
                        <span class="order-total">{move || format!("${}", total())}</span>
                    </button>
                </div>
            </div>
        </div>
    }
}
