//! Category Endpoint

use crate::models::Category;
use super::{ApiClient, RequestFailure};

impl ApiClient {
    pub async fn categories(&self) -> Result<Vec<Category>, RequestFailure> {
        self.get_json("/categories").await
    }

    /// Categories for the filter bar; a failure renders an empty bar instead of failing the page
    pub async fn categories_or_empty(&self) -> Vec<Category> {
        categories_or_empty(self.categories().await)
    }
}

pub fn categories_or_empty(result: Result<Vec<Category>, RequestFailure>) -> Vec<Category> {
    match result {
        Ok(categories) => categories,
        Err(e) => {
            tracing::warn!("[API] Failed to fetch categories: {}", e);
            Vec::new()
        }
    }
}
