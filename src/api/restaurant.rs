//! Restaurant Endpoint

use crate::models::Restaurant;
use super::{ApiClient, RequestFailure};

impl ApiClient {
    pub async fn restaurant(&self) -> Result<Restaurant, RequestFailure> {
        self.get_json("/restaurant").await
    }
}
