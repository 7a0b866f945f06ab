//! # Domain Types
//!
//! Core domain types shared by the catalog, cart, checkout and order code.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │ ShippingAddress │   │ ShippingMethod  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  first/last name│   │  id ("free")    │       │
//! │  │  title          │   │  street, city   │   │  name           │       │
//! │  │  price (Money)  │   │  zip, phone     │   │  unit_price     │       │
//! │  │  category ──────┼─┐ │  state (opt.)   │   │  delivery_time  │       │
//! │  └─────────────────┘ │ └─────────────────┘   └─────────────────┘       │
//! │                      ▼                                                  │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Category     │   │   OrderStatus   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  id, name       │   │  Pending        │                             │
//! │  │  slug, image    │   │  Processing     │                             │
//! │  └─────────────────┘   │  Shipped        │                             │
//! │                        │  Delivered      │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog identifiers are the integer ids the REST API hands out. They are
//! wrapped in newtypes so a category id can never be passed where a product
//! id is expected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Identifiers
// =============================================================================

/// Catalog product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog category identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct CategoryId(pub i64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Catalog Records
// =============================================================================

/// A product category as listed by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    /// Cover image URL.
    pub image: String,
}

/// A product available in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub slug: String,
    /// Unit price, converted to cents at the catalog boundary.
    pub price: Money,
    pub description: String,
    /// Image URLs, first one is the listing thumbnail.
    pub images: Vec<String>,
    pub category: Category,
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Returns the thumbnail image, if the product has any image.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

// =============================================================================
// Shipping
// =============================================================================

/// Delivery address collected on the shipping step of checkout.
///
/// All fields are required except `state`; see
/// [`validate_shipping_address`](crate::validation::validate_shipping_address).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    pub zip_code: String,
    pub phone: String,
}

/// A selectable delivery option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShippingMethod {
    /// Stable identifier ("free", "standard", "fast").
    pub id: String,
    /// Label shown on the option card.
    pub name: String,
    pub unit_price: Money,
    /// Human readable delivery window.
    pub delivery_time: String,
}

impl ShippingMethod {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Money,
        delivery_time: impl Into<String>,
    ) -> Self {
        ShippingMethod {
            id: id.into(),
            name: name.into(),
            unit_price,
            delivery_time: delivery_time.into(),
        }
    }

    /// The delivery options offered when no configuration overrides them.
    pub fn default_options() -> Vec<ShippingMethod> {
        vec![
            ShippingMethod::new(
                "free",
                "Free",
                Money::zero(),
                "Delivery from 3 to 7 business days",
            ),
            ShippingMethod::new(
                "standard",
                "$ 9.90",
                Money::from_cents(990),
                "Delivery from 4 to 6 business days",
            ),
            ShippingMethod::new(
                "fast",
                "$ 9.90",
                Money::from_cents(990),
                "Delivery from 2 to 3 business days",
            ),
        ]
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle status of an order.
///
/// ## Allowed Transitions
/// ```text
/// Pending ──► Processing ──► Shipped ──► Delivered
/// ```
/// One step forward at a time. Status is driven from outside the client
/// (a backend or an operator), never inferred locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OrderStatus {
    /// Just placed at checkout.
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// Returns the only status this one may move to.
    pub const fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Processing),
            OrderStatus::Processing => Some(OrderStatus::Shipped),
            OrderStatus::Shipped => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    /// Checks the allowed-transition table.
    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        self.next() == Some(target)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Processing => write!(f, "processing"),
            OrderStatus::Shipped => write!(f, "shipped"),
            OrderStatus::Delivered => write!(f, "delivered"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
