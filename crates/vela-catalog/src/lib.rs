//! # vela-catalog: Catalog Access for the Vela Shop Client
//!
//! Everything between the screens and the REST catalog API.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      vela-catalog Architecture                          │
//! │                                                                         │
//! │  ┌───────────────────────────────────────────────────────────────┐     │
//! │  │                    vela-client commands                       │     │
//! │  └─────────┬──────────────────────┬──────────────────┬───────────┘     │
//! │            │                      │                  │                  │
//! │  ┌─────────▼─────────┐  ┌─────────▼────────┐  ┌──────▼──────────┐      │
//! │  │   CatalogStore    │  │   ProductPager   │  │  ProductQuery   │      │
//! │  │  cache + tickets  │  │  offset paging   │  │  search filters │      │
//! │  └─────────┬─────────┘  └─────────┬────────┘  └──────┬──────────┘      │
//! │            │                      │                  │                  │
//! │  ┌─────────▼──────────────────────▼──────────────────▼───────────┐     │
//! │  │              CatalogApi (trait) / HttpCatalogClient           │     │
//! │  │                 reqwest  ──►  wire JSON  ──►  conversions     │     │
//! │  └───────────────────────────────┬───────────────────────────────┘     │
//! │                                  │ HTTPS                                │
//! │                                  ▼                                      │
//! │                      https://api.escuelajs.co/api/v1                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`client`] - `CatalogApi` trait and the reqwest implementation
//! - [`cache`] - Pure cache state with stale-response detection
//! - [`store`] - Cache + client, the fetch operations
//! - [`pager`] - Offset pagination state
//! - [`query`] - Search filters
//! - [`config`] - Catalog settings
//! - [`conversions`] - Wire format to domain types
//! - [`error`] - Catalog error types

pub mod cache;
pub mod client;
pub mod config;
pub mod conversions;
pub mod error;
pub mod pager;
pub mod query;
pub mod store;

pub use cache::{CatalogCache, CatalogSnapshot, FetchPhase, FetchTicket, Resource};
pub use client::{CatalogApi, HttpCatalogClient};
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use pager::{PageRequest, ProductPage, ProductPager};
pub use query::ProductQuery;
pub use store::CatalogStore;
