//! Query State
//!
//! The page URL is the single source of truth for what the user is looking for.
//! `q` (free text) and `category` are read from `location.search` and written back
//! with `history.replaceState`, so the state survives reloads and can be shared.

use leptos::prelude::*;
use leptos_debounce::{create_debounced, DebouncedHandle};
use url::form_urlencoded;

use crate::api::MenuParams;

pub const SEARCH_PARAM: &str = "q";
pub const CATEGORY_PARAM: &str = "category";

/// Current {search text, category} pair. `None` means no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Filter {
    pub q: Option<String>,
    pub category: Option<String>,
}

impl Filter {
    /// Parse from a query string, with or without the leading `?`
    pub fn from_search(search: &str) -> Self {
        let mut filter = Filter::default();
        for (key, value) in form_urlencoded::parse(search.trim_start_matches('?').as_bytes()) {
            if value.is_empty() {
                continue;
            }
            match &*key {
                SEARCH_PARAM if filter.q.is_none() => filter.q = Some(value.into_owned()),
                CATEGORY_PARAM if filter.category.is_none() => {
                    filter.category = Some(value.into_owned())
                }
                _ => {}
            }
        }
        filter
    }

    pub fn to_params(&self) -> MenuParams {
        MenuParams {
            category: self.category.clone(),
            q: self.q.clone(),
            ..Default::default()
        }
    }
}

/// Set (`Some`, non-empty) or delete (`None`/empty) one key in a query string.
///
/// An existing key keeps its position and later duplicates are dropped;
/// a new key is appended. Other keys are left alone.
pub fn set_search_param(search: &str, key: &str, value: Option<&str>) -> String {
    let value = value.filter(|v| !v.is_empty());
    let mut replaced = false;
    let mut pairs: Vec<(String, String)> = Vec::new();

    for (k, v) in form_urlencoded::parse(search.trim_start_matches('?').as_bytes()) {
        if k != key {
            pairs.push((k.into_owned(), v.into_owned()));
            continue;
        }
        if let (Some(new_value), false) = (value, replaced) {
            pairs.push((k.into_owned(), new_value.to_string()));
            replaced = true;
        }
    }
    if let (Some(new_value), false) = (value, replaced) {
        pairs.push((key.to_string(), new_value.to_string()));
    }

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Relative URL for `pathname` with `search` (no dangling `?`)
pub fn href_with_search(pathname: &str, search: &str) -> String {
    if search.is_empty() {
        pathname.to_string()
    } else {
        format!("{}?{}", pathname, search)
    }
}

fn read_location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Replace the current history entry's URL (no new entry, no scroll)
fn replace_location_search(search: &str) {
    let Some(window) = web_sys::window() else { return };
    let pathname = window.location().pathname().unwrap_or_else(|_| "/".to_string());
    let href = href_with_search(&pathname, search);
    if let Ok(history) = window.history() {
        if let Err(e) =
            history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&href))
        {
            tracing::warn!("[QUERY] replaceState failed: {:?}", e);
        }
    }
}

/// Write one parameter into both the URL and the reactive mirror of it
fn write_param(search: RwSignal<String>, key: &'static str, value: Option<String>) {
    let next = set_search_param(&search.get_untracked(), key, value.as_deref());
    replace_location_search(&next);
    tracing::debug!("[QUERY] {} -> {:?}", key, value);
    search.set(next);
}

/// URL-backed filter state, provided via context
#[derive(Clone, Copy)]
pub struct QueryState {
    /// Mirror of `location.search` (without `?`)
    search: RwSignal<String>,
    /// Current filter derived from the URL
    pub filter: Memo<Filter>,
    debounced_search: DebouncedHandle<String>,
}

impl QueryState {
    pub fn from_location(debounce_ms: u32) -> Self {
        let search = RwSignal::new(read_location_search().trim_start_matches('?').to_string());
        let filter = Memo::new(move |_| Filter::from_search(&search.get()));
        let debounced_search = create_debounced(debounce_ms, move |term: String| {
            write_param(search, SEARCH_PARAM, Some(term));
        });
        Self {
            search,
            filter,
            debounced_search,
        }
    }

    /// Select a category (`None` = view all). Applied immediately.
    pub fn set_category(&self, category: Option<String>) {
        write_param(self.search, CATEGORY_PARAM, category);
    }

    /// Search text from keystrokes; only the last value after a pause is applied
    pub fn set_search_text(&self, text: String) {
        self.debounced_search.call(text);
    }

    /// Clear the search immediately, dropping any pending keystrokes
    pub fn clear_search(&self) {
        self.debounced_search.cancel();
        write_param(self.search, SEARCH_PARAM, None);
    }
}

/// Get the query state from context
pub fn use_query_state() -> QueryState {
    expect_context::<QueryState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_search() {
        let filter = Filter::from_search("?category=desserts&q=choc+cake");
        assert_eq!(filter.category.as_deref(), Some("desserts"));
        assert_eq!(filter.q.as_deref(), Some("choc cake"));
    }

    #[test]
    fn test_empty_values_mean_no_constraint() {
        assert_eq!(Filter::from_search("q=&category="), Filter::default());
        assert_eq!(Filter::from_search(""), Filter::default());
    }

    #[test]
    fn test_filter_maps_to_menu_params() {
        let filter = Filter {
            q: Some("cake".to_string()),
            category: Some("desserts".to_string()),
        };
        assert_eq!(filter.to_params().to_path(), "/menuItems?category=desserts&q=cake");
        assert_eq!(Filter::default().to_params().to_path(), "/menuItems");
    }

    #[test]
    fn test_set_category_leaves_search_untouched() {
        let next = set_search_param("q=pizza", CATEGORY_PARAM, Some("mains"));
        assert_eq!(next, "q=pizza&category=mains");

        let cleared = set_search_param(&next, CATEGORY_PARAM, None);
        assert_eq!(cleared, "q=pizza");
    }

    #[test]
    fn test_existing_key_keeps_position_and_drops_duplicates() {
        let next = set_search_param("q=a&category=x&q=b&utm=1", SEARCH_PARAM, Some("pizza"));
        assert_eq!(next, "q=pizza&category=x&utm=1");
    }

    #[test]
    fn test_empty_search_text_removes_param() {
        assert_eq!(
            set_search_param("q=pizza&category=mains", SEARCH_PARAM, Some("")),
            "category=mains"
        );
    }

    #[test]
    fn test_href_has_no_dangling_question_mark() {
        assert_eq!(href_with_search("/", ""), "/");
        assert_eq!(href_with_search("/menu", "q=pizza"), "/menu?q=pizza");
    }
}
