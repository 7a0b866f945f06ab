//! # vela-core: Pure Business Logic for the Vela Shop Client
//!
//! This crate holds the cart, order and checkout rules of the shopping
//! client as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Vela Client Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Screens (mobile UI)                          │   │
//! │  │    Home ──► Product ──► Cart ──► Shipping ──► Payment          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    vela-client commands                         │   │
//! │  │    add_to_cart, refresh_catalog, place_order, sign_in, etc.    │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────────┐  ┌────────▼──────────────────┐    │
//! │  │   ★ vela-core (THIS CRATE) ★    │  │      vela-catalog         │    │
//! │  │                                 │  │  REST client, cache,      │    │
//! │  │  money  types  cart  order      │  │  pager, search query      │    │
//! │  │  checkout  validation  auth     │  └───────────────────────────┘    │
//! │  │                                 │                                   │
//! │  │  NO I/O • NO NETWORK • PURE     │                                   │
//! │  └─────────────────────────────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog records, shipping, order status
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart and line items
//! - [`checkout`] - Subtotal / shipping / total in one place
//! - [`order`] - Order snapshots and the status lifecycle
//! - [`validation`] - Form and filter validation
//! - [`auth`] - Identity types and the auth provider seam
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use vela_core::cart::{Cart, NewLineItem};
//! use vela_core::money::Money;
//! use vela_core::order::OrderBook;
//! use vela_core::types::{ProductId, ShippingAddress, ShippingMethod};
//!
//! let mut cart = Cart::new();
//! cart.add_item(NewLineItem {
//!     product_id: ProductId(7),
//!     title: "Classic Tee".to_string(),
//!     unit_price: Money::from_cents(1000),
//!     image_url: String::new(),
//!     quantity: Some(2),
//!     size: None,
//!     color: None,
//! });
//!
//! let method = ShippingMethod::new("standard", "$ 9.90", Money::from_cents(990), "4-6 days");
//! let mut orders = OrderBook::new();
//! let order = orders.create_order(cart.snapshot(), ShippingAddress::default(), method);
//!
//! assert_eq!(order.total.cents(), 2990);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use auth::{AuthError, AuthProvider, AuthUser, Credentials, SignUpForm};
pub use cart::{Cart, CartLineItem, CartTotals, NewLineItem};
pub use checkout::CheckoutSummary;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{Order, OrderBook};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of products the home screen requests.
pub const DEFAULT_FEATURED_LIMIT: u32 = 30;

/// Page size of the "all products" list.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
