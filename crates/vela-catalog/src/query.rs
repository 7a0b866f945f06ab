//! # Product Search Query
//!
//! Filters of the discover screen, turned into catalog query parameters.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Filter                Parameter      Sent when                         │
//! │  ──────                ─────────      ─────────                         │
//! │  title text        ──► title          trimmed text is not blank         │
//! │  exact price       ──► price          set ("9.90")                      │
//! │  min price         ──► price_min      set                               │
//! │  max price         ──► price_max      set                               │
//! │  category chip     ──► categoryId     set                               │
//! │  paging            ──► offset, limit  set                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Percent-encoding of the values is left to the HTTP client.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vela_core::money::Money;
use vela_core::types::CategoryId;
use vela_core::validation::{validate_price_filters, validate_search_query, ValidationResult};

/// Search filters for `GET /products`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductQuery {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<Money>,
    #[serde(default)]
    pub price_min: Option<Money>,
    #[serde(default)]
    pub price_max: Option<Money>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub offset: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl ProductQuery {
    /// Query matching product titles.
    pub fn title(title: impl Into<String>) -> Self {
        ProductQuery {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_page(mut self, offset: u32, limit: u32) -> Self {
        self.offset = Some(offset);
        self.limit = Some(limit);
        self
    }

    /// Checks the filters and returns a copy with the title trimmed.
    ///
    /// ## Rules
    /// - Title at most 100 characters after trimming
    /// - Prices non-negative, `price_min ≤ price_max`
    pub fn validated(&self) -> ValidationResult<ProductQuery> {
        let title = match self.title.as_deref() {
            Some(raw) => Some(validate_search_query(raw)?),
            None => None,
        };
        validate_price_filters(self.price, self.price_min, self.price_max)?;

        Ok(ProductQuery {
            title,
            ..self.clone()
        })
    }

    /// Returns true when no filter at all is set.
    pub fn is_empty(&self) -> bool {
        self.to_params().is_empty()
    }

    /// Query parameters in the order the API documents them.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(title) = self.title.as_deref().map(str::trim) {
            if !title.is_empty() {
                params.push(("title", title.to_string()));
            }
        }
        if let Some(price) = self.price {
            params.push(("price", price.to_decimal_string()));
        }
        if let Some(min) = self.price_min {
            params.push(("price_min", min.to_decimal_string()));
        }
        if let Some(max) = self.price_max {
            params.push(("price_max", max.to_decimal_string()));
        }
        if let Some(category_id) = self.category_id {
            params.push(("categoryId", category_id.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset", offset.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }

        params
    }
}
