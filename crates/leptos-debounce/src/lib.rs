//! Leptos Debounce Utilities
//!
//! Coalesces rapid updates (e.g. keystrokes) into a single action that fires
//! after the input has been quiet for a while.
//! Each new call replaces the pending one; only the last call fires.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Pending-value tracker with generation tickets.
///
/// Independent of any timer: the caller schedules a value, waits however it
/// likes, then tries to fire with the ticket it got back. Only the most
/// recent ticket fires.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending value, returning the ticket that may fire it
    pub fn schedule(&mut self, value: T) -> u64 {
        self.generation += 1;
        self.pending = Some(value);
        self.generation
    }

    /// Take the pending value if `ticket` is still the latest one
    pub fn fire(&mut self, ticket: u64) -> Option<T> {
        if ticket == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drop the pending value; outstanding tickets become stale
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Reactive handle: `call` schedules, a timer fires `apply` after `wait_ms`.
pub struct DebouncedHandle<T: Send + Sync + 'static> {
    state: StoredValue<Debouncer<T>>,
    apply: Callback<T>,
    wait_ms: u32,
}

impl<T: Send + Sync + 'static> Clone for DebouncedHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DebouncedHandle<T> {}

impl<T: Send + Sync + 'static> DebouncedHandle<T> {
    /// Schedule `value`; any earlier pending value is discarded
    pub fn call(&self, value: T) {
        let Some(ticket) = self.state.try_update_value(|d| d.schedule(value)) else {
            return;
        };
        let state = self.state;
        let apply = self.apply;
        let wait_ms = self.wait_ms;
        spawn_local(async move {
            TimeoutFuture::new(wait_ms).await;
            if let Some(value) = state.try_update_value(|d| d.fire(ticket)).flatten() {
                apply.run(value);
            }
        });
    }

    pub fn cancel(&self) {
        self.state.update_value(|d| d.cancel());
    }
}

/// Create a debounced handle around `apply`
pub fn create_debounced<T, F>(wait_ms: u32, apply: F) -> DebouncedHandle<T>
where
    T: Send + Sync + 'static,
    F: Fn(T) + Send + Sync + 'static,
{
    DebouncedHandle {
        state: StoredValue::new(Debouncer::new()),
        apply: Callback::new(apply),
        wait_ms,
    }
}
