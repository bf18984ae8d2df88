//! Application Configuration
//!
//! Resolved once at startup from build-time environment, then provided via context.

use leptos::prelude::*;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// API origin without trailing slash
    pub api_base_url: String,
    /// Quiet period before search text is written to the URL
    pub search_debounce_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
        }
    }
}

impl AppConfig {
    /// Read `MENU_API_BASE_URL` / `MENU_SEARCH_DEBOUNCE_MS` baked in at compile time
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("MENU_API_BASE_URL"),
            option_env!("MENU_SEARCH_DEBOUNCE_MS"),
        )
    }

    fn from_values(base_url: Option<&str>, debounce_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        let api_base_url = base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);
        let search_debounce_ms = match debounce_ms.map(|ms| ms.trim().parse::<u32>()) {
            Some(Ok(ms)) => ms,
            Some(Err(e)) => {
                tracing::warn!("[CONFIG] Ignoring MENU_SEARCH_DEBOUNCE_MS: {}", e);
                defaults.search_debounce_ms
            }
            None => defaults.search_debounce_ms,
        };
        Self {
            api_base_url,
            search_debounce_ms,
        }
    }
}

/// Get the app config from context
pub fn use_config() -> AppConfig {
    expect_context::<AppConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(AppConfig::from_values(None, None), AppConfig::default());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = AppConfig::from_values(Some("https://api.example.com/"), Some("150"));
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.search_debounce_ms, 150);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("soon"));
        assert_eq!(config, AppConfig::default());
    }
}
