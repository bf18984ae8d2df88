//! Menu Item Endpoints
//!
//! List (optionally filtered) and single-item lookups.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use rust_decimal::Decimal;
use url::form_urlencoded;

use crate::models::MenuItem;
use super::{ApiClient, RequestFailure};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Filters accepted by `GET /menuItems`. `None` means "not sent".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MenuParams {
    pub category: Option<String>,
    pub popular: Option<bool>,
    pub dietary_like: Option<String>,
    pub spicy_level: Option<u8>,
    pub price_gte: Option<Decimal>,
    pub price_lte: Option<Decimal>,
    pub q: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
}

impl MenuParams {
    /// Present parameters as (key, value) pairs, in wire order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(popular) = self.popular {
            pairs.push(("popular", popular.to_string()));
        }
        if let Some(tag) = &self.dietary_like {
            pairs.push(("dietary_like", tag.clone()));
        }
        if let Some(level) = self.spicy_level {
            pairs.push(("spicyLevel", level.to_string()));
        }
        if let Some(min) = self.price_gte {
            pairs.push(("price_gte", min.normalize().to_string()));
        }
        if let Some(max) = self.price_lte {
            pairs.push(("price_lte", max.normalize().to_string()));
        }
        if let Some(q) = &self.q {
            pairs.push(("q", q.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("_page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("_limit", limit.to_string()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("_sort", sort.clone()));
        }
        if let Some(order) = self.order {
            pairs.push(("_order", order.as_str().to_string()));
        }
        pairs
    }

    /// Request path including the query string (no `?` when nothing is set)
    pub fn to_path(&self) -> String {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return "/menuItems".to_string();
        }
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();
        format!("/menuItems?{}", query)
    }
}

pub fn menu_item_path(id: &str) -> String {
    format!("/menuItems/{}", utf8_percent_encode(id, PATH_SEGMENT))
}

impl ApiClient {
    pub async fn menu_items(&self, params: &MenuParams) -> Result<Vec<MenuItem>, RequestFailure> {
        self.get_json(&params.to_path()).await
    }

    pub async fn menu_item(&self, id: &str) -> Result<MenuItem, RequestFailure> {
        self.get_json(&menu_item_path(id)).await
    }
}
