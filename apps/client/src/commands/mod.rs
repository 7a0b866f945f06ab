//! # Commands Module
//!
//! Everything the screens call.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── product.rs   ◄─── Home cache, product list paging, details, search
//! ├── checkout.rs  ◄─── Shipping options, totals, placing and tracking orders
//! ├── auth.rs      ◄─── Sign in / up / out
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartState) -> CartResponse
//!
//! // Needs the catalog store and the config
//! async fn refresh_catalog(catalog: &CatalogStore<C>, config: &ClientConfig, ..)
//!
//! // Needs cart, orders and config
//! fn place_order(cart: &CartState, orders: &OrderState, config: &ClientConfig, ..)
//! ```
//!
//! Results are plain DTOs (`camelCase` JSON) or an [`ApiError`](crate::error::ApiError).

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod product;

#[cfg(test)]
pub(crate) mod test_support;
