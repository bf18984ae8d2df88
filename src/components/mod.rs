//! UI Components
//!
//! Stateless Leptos views over the query state, menu query and detail view.

mod header;
mod hero;
mod category_filter;
mod menu_grid;
mod menu_item_card;
mod item_detail_modal;

pub use header::Header;
pub use hero::Hero;
pub use category_filter::CategoryFilter;
pub use menu_grid::MenuGrid;
pub use menu_item_card::MenuItemCard;
pub use item_detail_modal::ItemDetailModal;
