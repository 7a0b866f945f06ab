//! Wire format of the catalog API and its conversion into `vela-core` types.
//!
//! The API sends prices as JSON numbers in major units (`60`, `9.9`). They
//! are turned into [`Money`] here, once; nothing past this module sees a
//! float.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use vela_core::money::Money;
use vela_core::types::{Category, CategoryId, Product, ProductId};

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireCategory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireProduct {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: WireCategory,
    #[serde(default)]
    pub creation_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

// =============================================================================
// Conversions
// =============================================================================

impl From<WireCategory> for Category {
    fn from(wire: WireCategory) -> Self {
        Category {
            id: CategoryId(wire.id),
            name: wire.name,
            slug: wire.slug,
            image: clean_image_url(&wire.image),
        }
    }
}

impl From<WireProduct> for Product {
    fn from(wire: WireProduct) -> Self {
        Product {
            id: ProductId(wire.id),
            title: wire.title,
            slug: wire.slug,
            price: price_to_money(wire.price),
            description: wire.description,
            images: wire
                .images
                .iter()
                .map(|url| clean_image_url(url))
                .filter(|url| !url.is_empty())
                .collect(),
            category: wire.category.into(),
            created_at: wire.creation_at.as_deref().and_then(parse_timestamp),
            updated_at: wire.updated_at.as_deref().and_then(parse_timestamp),
        }
    }
}

/// Major-unit price to cents, rounded half away from zero.
pub fn price_to_money(price: f64) -> Money {
    Money::from_cents((price * 100.0).round() as i64)
}

/// Some catalog entries carry image URLs that were stored as stringified
/// JSON arrays (`["https://..."]`). Strips the brackets and quotes.
pub fn clean_image_url(raw: &str) -> String {
    raw.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .trim_matches('"')
        .trim()
        .to_string()
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
