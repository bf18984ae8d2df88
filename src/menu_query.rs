//! Menu Query Engine
//!
//! Maps the current filter to a displayed item list.
//!
//! Results are cached per exact `MenuParams`. While a request for a new filter
//! is in flight the last successfully displayed list stays on screen; the
//! loading skeleton only appears when nothing has been shown yet.
//! Every request carries a ticket and an entry only accepts its latest ticket,
//! so responses arriving out of order never overwrite newer data and responses
//! for superseded filters never reach the display.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, MenuParams, RequestFailure};
use crate::models::MenuItem;
use crate::query_state::Filter;

/// Filters kept in the cache before least-recently-used ones are dropped
const MAX_CACHED_FILTERS: usize = 16;

/// One logical request for one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub id: u64,
    pub params: MenuParams,
}

#[derive(Debug, Clone, Default)]
struct CacheEntry {
    data: Option<Vec<MenuItem>>,
    error: Option<RequestFailure>,
    in_flight: Option<u64>,
    last_used: u64,
}

/// What the grid should render right now
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    /// Nothing to show yet
    Loading,
    /// Last request for the current filter failed
    Error(RequestFailure),
    /// Request succeeded with zero items
    Empty,
    Success {
        items: Vec<MenuItem>,
        /// Items belong to an earlier filter; fresh data is on its way
        placeholder: bool,
    },
}

#[derive(Debug, Default)]
pub struct MenuQuery {
    entries: HashMap<MenuParams, CacheEntry>,
    current: Option<MenuParams>,
    /// Key whose data was last displayed as fresh
    shown: Option<MenuParams>,
    next_id: u64,
    clock: u64,
}

impl MenuQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to `params`. Returns the request to issue, if one is needed.
    pub fn set_filter(&mut self, params: MenuParams) -> Option<FetchTicket> {
        if self.current.as_ref() == Some(&params) {
            return None;
        }
        self.current = Some(params.clone());
        let ticket = self.request(params);
        self.evict();
        ticket
    }

    /// Re-issue the identical request for the current filter
    pub fn retry(&mut self) -> Option<FetchTicket> {
        let params = self.current.clone()?;
        self.request(params)
    }

    /// Request for a filter change, or for a retry when the filter is unchanged
    pub fn next_request(
        &mut self,
        params: MenuParams,
        retry_requested: bool,
    ) -> Option<FetchTicket> {
        match self.set_filter(params) {
            Some(ticket) => Some(ticket),
            None if retry_requested => self.retry(),
            None => None,
        }
    }

    fn request(&mut self, params: MenuParams) -> Option<FetchTicket> {
        self.clock += 1;
        let entry = self.entries.entry(params.clone()).or_default();
        entry.last_used = self.clock;
        if entry.in_flight.is_some() {
            return None;
        }
        self.next_id += 1;
        entry.in_flight = Some(self.next_id);
        entry.error = None;
        Some(FetchTicket {
            id: self.next_id,
            params,
        })
    }

    /// Drop least-recently-used entries that are idle and not on screen
    fn evict(&mut self) {
        while self.entries.len() > MAX_CACHED_FILTERS {
            let victim = self
                .entries
                .iter()
                .filter(|(key, entry)| {
                    entry.in_flight.is_none()
                        && self.current.as_ref() != Some(*key)
                        && self.shown.as_ref() != Some(*key)
                })
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(key, _)| key.clone());
            match victim {
                Some(key) => {
                    tracing::debug!("[QUERY] Evicting cached {}", key.to_path());
                    self.entries.remove(&key);
                }
                None => break,
            }
        }
    }

    /// Record a response. Returns `true` if it changed what the current filter shows.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<MenuItem>, RequestFailure>,
    ) -> bool {
        let Some(entry) = self.entries.get_mut(&ticket.params) else {
            return false;
        };
        if entry.in_flight != Some(ticket.id) {
            tracing::debug!("[QUERY] Dropping superseded response #{}", ticket.id);
            return false;
        }
        entry.in_flight = None;
        match result {
            Ok(items) => {
                entry.data = Some(items);
                entry.error = None;
            }
            Err(e) => {
                tracing::warn!("[QUERY] Request #{} failed: {}", ticket.id, e);
                entry.error = Some(e);
            }
        }

        let is_current = self.current.as_ref() == Some(&ticket.params);
        if is_current && self.entries[&ticket.params].data.is_some() {
            self.shown = Some(ticket.params.clone());
        }
        is_current
    }

    pub fn is_fetching(&self) -> bool {
        self.current
            .as_ref()
            .and_then(|key| self.entries.get(key))
            .is_some_and(|entry| entry.in_flight.is_some())
    }

    /// Best available state for the current filter
    pub fn state(&self) -> ListState {
        let Some(key) = self.current.as_ref() else {
            return ListState::Loading;
        };
        if let Some(entry) = self.entries.get(key) {
            if let Some(error) = &entry.error {
                return ListState::Error(error.clone());
            }
            if let Some(items) = &entry.data {
                return Self::list(items, false);
            }
        }
        let shown = self
            .shown
            .as_ref()
            .and_then(|k| self.entries.get(k))
            .and_then(|e| e.data.as_ref());
        match shown {
            Some(items) => Self::list(items, true),
            None => ListState::Loading,
        }
    }

    fn list(items: &[MenuItem], placeholder: bool) -> ListState {
        if items.is_empty() {
            ListState::Empty
        } else {
            ListState::Success {
                items: items.to_vec(),
                placeholder,
            }
        }
    }
}

/// Reactive wrapper driving `MenuQuery` from the current filter
#[derive(Clone, Copy)]
pub struct MenuQueryHandle {
    query: RwSignal<MenuQuery>,
    retry_trigger: RwSignal<u32>,
}

impl MenuQueryHandle {
    pub fn state(&self) -> ListState {
        self.query.with(|q| q.state())
    }

    pub fn is_fetching(&self) -> bool {
        self.query.with(|q| q.is_fetching())
    }

    /// Re-issue the request for the current filter
    pub fn retry(&self) {
        self.retry_trigger.update(|v| *v += 1);
    }
}

/// Issue list requests whenever `filter` changes or a retry is requested.
/// Window focus does not refetch.
pub fn use_menu_query(api: ApiClient, filter: Memo<Filter>) -> MenuQueryHandle {
    let query = RwSignal::new(MenuQuery::new());
    let retry_trigger = RwSignal::new(0u32);

    Effect::new(move |last_retry: Option<u32>| {
        let params = filter.get().to_params();
        let retry = retry_trigger.get();

        let retry_changed = last_retry.is_some_and(|last| last != retry);
        let ticket = query
            .try_update(|q| q.next_request(params, retry_changed))
            .flatten();

        if let Some(ticket) = ticket {
            tracing::info!("[QUERY] Request #{} {}", ticket.id, ticket.params.to_path());
            let api = api.clone();
            spawn_local(async move {
                let result = api.menu_items(&ticket.params).await;
                query.update(|q| {
                    q.complete(&ticket, result);
                });
            });
        }
        retry
    });

    MenuQueryHandle {
        query,
        retry_trigger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn make_item(id: &str) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            description: String::new(),
            price: Decimal::new(1000, 2),
            category: "mains".to_string(),
            image: String::new(),
            dietary: vec![],
            popular: false,
            spicy_level: 0,
            preparation_time: 10,
        }
    }

    fn params(category: &str) -> MenuParams {
        MenuParams {
            category: Some(category.to_string()),
            ..Default::default()
        }
    }

    fn items_of(state: ListState) -> Vec<String> {
        match state {
            ListState::Success { items, .. } => items.into_iter().map(|i| i.id).collect(),
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_initial_load_shows_skeleton() {
        let mut q = MenuQuery::new();
        assert_eq!(q.state(), ListState::Loading);
        let t = q.set_filter(MenuParams::default()).unwrap();
        assert_eq!(q.state(), ListState::Loading);
        assert!(q.complete(&t, Ok(vec![make_item("1")])));
        assert_eq!(items_of(q.state()), vec!["1"]);
    }

    #[test]
    fn test_previous_list_stays_while_revalidating() {
        let mut q = MenuQuery::new();
        let t1 = q.set_filter(params("mains")).unwrap();
        q.complete(&t1, Ok(vec![make_item("1")]));

        let t2 = q.set_filter(params("desserts")).unwrap();
        match q.state() {
            ListState::Success { items, placeholder } => {
                assert!(placeholder);
                assert_eq!(items[0].id, "1");
            }
            other => panic!("expected placeholder list, got {:?}", other),
        }

        q.complete(&t2, Ok(vec![make_item("9")]));
        assert_eq!(
            q.state(),
            ListState::Success { items: vec![make_item("9")], placeholder: false }
        );
    }

    #[test]
    fn test_out_of_order_responses_do_not_corrupt_display() {
        let mut q = MenuQuery::new();
        let t_a = q.set_filter(params("a")).unwrap();
        let t_b = q.set_filter(params("b")).unwrap();

        // Newer filter answers first, the stale one straggles in afterwards
        assert!(q.complete(&t_b, Ok(vec![make_item("b1")])));
        assert!(!q.complete(&t_a, Ok(vec![make_item("a1")])));
        assert_eq!(items_of(q.state()), vec!["b1"]);
    }

    #[test]
    fn test_superseded_response_keeps_older_placeholder() {
        let mut q = MenuQuery::new();
        let t_a = q.set_filter(params("a")).unwrap();
        q.complete(&t_a, Ok(vec![make_item("a1")]));

        let t_b = q.set_filter(params("b")).unwrap();
        let t_c = q.set_filter(params("c")).unwrap();

        // B resolves after the user already moved on to C
        q.complete(&t_b, Ok(vec![make_item("b1")]));
        match q.state() {
            ListState::Success { items, placeholder } => {
                assert!(placeholder);
                assert_eq!(items[0].id, "a1");
            }
            other => panic!("expected placeholder list, got {:?}", other),
        }

        q.complete(&t_c, Ok(vec![make_item("c1")]));
        assert_eq!(items_of(q.state()), vec!["c1"]);
    }

    #[test]
    fn test_returning_to_cached_filter_dedups_in_flight_request() {
        let mut q = MenuQuery::new();
        let t_a = q.set_filter(params("a")).unwrap();
        let t_b = q.set_filter(params("b")).unwrap();
        // A is still in flight; switching back does not issue a second request
        assert!(q.set_filter(params("a")).is_none());

        q.complete(&t_b, Ok(vec![make_item("b1")]));
        q.complete(&t_a, Ok(vec![make_item("a1")]));
        assert_eq!(items_of(q.state()), vec!["a1"]);
    }

    #[test]
    fn test_cached_filter_renders_immediately_and_revalidates() {
        let mut q = MenuQuery::new();
        let t_a = q.set_filter(params("a")).unwrap();
        q.complete(&t_a, Ok(vec![make_item("a1")]));
        let t_b = q.set_filter(params("b")).unwrap();
        q.complete(&t_b, Ok(vec![make_item("b1")]));

        let revalidate = q.set_filter(params("a"));
        assert!(revalidate.is_some());
        assert_eq!(
            q.state(),
            ListState::Success { items: vec![make_item("a1")], placeholder: false }
        );
    }

    #[test]
    fn test_same_filter_does_not_refetch() {
        let mut q = MenuQuery::new();
        let t = q.set_filter(params("a")).unwrap();
        q.complete(&t, Ok(vec![]));
        assert!(q.set_filter(params("a")).is_none());
    }

    #[test]
    fn test_zero_items_is_empty_state() {
        let mut q = MenuQuery::new();
        let t = q.set_filter(params("a")).unwrap();
        q.complete(&t, Ok(vec![]));
        assert_eq!(q.state(), ListState::Empty);
    }

    #[test]
    fn test_failure_then_retry_reissues_identical_request() {
        let mut q = MenuQuery::new();
        let t1 = q.set_filter(params("a")).unwrap();
        let failure = RequestFailure::Http {
            status: 500,
            description: "Internal Server Error".to_string(),
        };
        q.complete(&t1, Err(failure.clone()));
        assert_eq!(q.state(), ListState::Error(failure));

        let t2 = q.retry().unwrap();
        assert_eq!(t2.params, t1.params);
        assert_ne!(t2.id, t1.id);
        assert_eq!(q.state(), ListState::Loading);
        assert!(q.is_fetching());

        q.complete(&t2, Ok(vec![make_item("1")]));
        assert_eq!(items_of(q.state()), vec!["1"]);
    }

    #[test]
    fn test_retry_while_in_flight_is_ignored() {
        let mut q = MenuQuery::new();
        q.set_filter(params("a")).unwrap();
        assert!(q.retry().is_none());
    }

    #[test]
    fn test_retry_request_on_unchanged_filter_refetches() {
        let mut q = MenuQuery::new();
        let t1 = q.next_request(params("a"), false).unwrap();
        q.complete(&t1, Err(RequestFailure::Network("offline".to_string())));

        // Same filter without a retry bump stays quiet
        assert!(q.next_request(params("a"), false).is_none());

        let t2 = q.next_request(params("a"), true).unwrap();
        assert_eq!(t2.params, params("a"));
        assert!(t2.id > t1.id);
        assert_eq!(q.state(), ListState::Loading);
    }

    #[test]
    fn test_filter_change_wins_over_retry_request() {
        let mut q = MenuQuery::new();
        let t1 = q.next_request(params("a"), false).unwrap();
        q.complete(&t1, Ok(vec![make_item("1")]));

        let t2 = q.next_request(params("b"), true).unwrap();
        assert_eq!(t2.params, params("b"));
        assert!(q.retry().is_none());
    }

    #[test]
    fn test_cache_drops_oldest_idle_filters() {
        let mut q = MenuQuery::new();
        for n in 0..MAX_CACHED_FILTERS + 4 {
            let t = q.set_filter(params(&format!("c{}", n))).unwrap();
            q.complete(&t, Ok(vec![make_item(&n.to_string())]));
        }
        assert_eq!(q.entries.len(), MAX_CACHED_FILTERS);
        assert!(!q.entries.contains_key(&params("c0")));
        assert!(q.entries.contains_key(&params(&format!("c{}", MAX_CACHED_FILTERS + 3))));
    }

    #[test]
    fn test_eviction_keeps_in_flight_and_shown_entries() {
        let mut q = MenuQuery::new();
        let shown = q.set_filter(params("shown")).unwrap();
        q.complete(&shown, Ok(vec![make_item("s")]));
        // Never answered, stays in flight
        let pending = q.set_filter(params("pending")).unwrap();

        for n in 0..MAX_CACHED_FILTERS + 4 {
            q.set_filter(params(&format!("c{}", n)));
        }
        assert!(q.entries.contains_key(&params("shown")));
        assert!(q.entries.contains_key(&params("pending")));
        assert!(!q.complete(&pending, Ok(vec![])));
        assert_eq!(items_of(q.state()), vec!["s"]);
    }
}
