//! Theme Toggle
//!
//! Manual light/dark switch. Applied as a `dark` class on the document root;
//! not persisted across reloads.

/// Toggles closer together than this are treated as a double click
pub const TOGGLE_COOLDOWN_MS: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Current theme plus the rate limit on flipping it
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThemeState {
    pub theme: Theme,
    last_toggle_ms: Option<f64>,
}

impl ThemeState {
    /// Flip the theme unless the last flip was under the cooldown. Returns whether it flipped.
    pub fn toggle(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_toggle_ms {
            if now_ms - last < TOGGLE_COOLDOWN_MS {
                tracing::debug!("[THEME] Ignoring double toggle");
                return false;
            }
        }
        self.last_toggle_ms = Some(now_ms);
        self.theme = self.theme.flipped();
        true
    }
}

/// Sync the `dark` class on `<html>`
pub fn apply_to_document(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = match theme {
        Theme::Dark => classes.add_1("dark"),
        Theme::Light => classes.remove_1("dark"),
    };
    if let Err(e) = result {
        tracing::warn!("[THEME] Failed to update root class: {:?}", e);
    }
}
