//! Application Context
//!
//! Shared UI state provided via Leptos Context API.

use leptos::prelude::*;

use crate::theme::{self, Theme, ThemeState};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current theme - read
    pub theme: Memo<Theme>,
    /// Theme plus toggle rate limit - write
    theme_state: RwSignal<ThemeState>,
}

impl AppContext {
    pub fn new() -> Self {
        let theme_state = RwSignal::new(ThemeState::default());
        let theme = Memo::new(move |_| theme_state.get().theme);

        // Keep the document root class in sync
        Effect::new(move |_| {
            let current = theme.get();
            tracing::debug!("[THEME] Syncing DOM to {:?}", current);
            theme::apply_to_document(current);
        });

        Self { theme, theme_state }
    }

    /// Flip light/dark (double clicks are ignored)
    pub fn toggle_theme(&self) {
        let now = js_sys::Date::now();
        self.theme_state.update(|state| {
            state.toggle(now);
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
