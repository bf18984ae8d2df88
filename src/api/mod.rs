//! Menu API Client
//!
//! Thin wrappers around the menu JSON API, organized by resource.
//! Each call performs exactly one GET; failures propagate unchanged.

mod category;
mod menu_item;
mod restaurant;

use serde::de::DeserializeOwned;

use crate::config::use_config;

// Re-export all public items
pub use category::*;
pub use menu_item::*;

/// Why a request produced no payload
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestFailure {
    /// The request could not complete (offline, DNS, CORS, ...)
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status
    #[error("API Error: {status} {description}")]
    Http { status: u16, description: String },
    /// Success status but the body was not the expected JSON
    #[error("unexpected response body: {0}")]
    Decode(String),
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestFailure> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("[API] GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| RequestFailure::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("[API] GET {} -> {}", url, status);
            return Err(RequestFailure::Http {
                status: status.as_u16(),
                description: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RequestFailure::Decode(e.to_string()))
    }
}

/// Build a client for the configured API from context
pub fn use_api_client() -> ApiClient {
    ApiClient::new(&use_config().api_base_url)
}
