//! # Catalog API Client
//!
//! Typed access to the REST catalog.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Method                   Request                          Fallback     │
//! │  ──────                   ───────                          ────────     │
//! │  list_products(o, l)      GET /products?offset=o&limit=l   products     │
//! │  get_product(id)          GET /products/{id}               details      │
//! │  products_by_category(c)  GET /products/?categoryId=c      category     │
//! │  list_categories()        GET /categories                  categories   │
//! │  search_products(q)       GET /products?title&price&...    search       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Handling
//! - Non-2xx: the server's JSON `message` becomes the error text; without
//!   one, the operation's fallback sentence is used.
//! - No response at all: the fallback sentence.
//! - Search answering with something other than an array: empty result.
//!
//! Nothing is retried.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use tracing::{debug, error, instrument, warn};
use vela_core::types::{Category, CategoryId, Product, ProductId};

use crate::config::CatalogConfig;
use crate::conversions::{WireCategory, WireProduct};
use crate::error::{CatalogError, CatalogResult};
use crate::query::ProductQuery;

// =============================================================================
// Fallback Messages
// =============================================================================

pub const PRODUCTS_FAILED: &str = "Failed to fetch products";
pub const PRODUCT_DETAILS_FAILED: &str = "Failed to fetch product details";
pub const CATEGORIES_FAILED: &str = "Failed to fetch categories";
pub const CATEGORY_PRODUCTS_FAILED: &str = "Failed to fetch products for this category";
pub const SEARCH_FAILED: &str = "Failed to find products.";

// =============================================================================
// Catalog API Trait
// =============================================================================

/// Read access to the product catalog.
///
/// [`HttpCatalogClient`] is the production implementation; stores and
/// commands are generic over this trait so tests can swap in fakes.
pub trait CatalogApi: Send + Sync {
    /// One page of products, in catalog order.
    fn list_products(
        &self,
        offset: u32,
        limit: u32,
    ) -> impl Future<Output = CatalogResult<Vec<Product>>> + Send;

    fn get_product(&self, id: ProductId) -> impl Future<Output = CatalogResult<Product>> + Send;

    fn products_by_category(
        &self,
        category_id: CategoryId,
    ) -> impl Future<Output = CatalogResult<Vec<Product>>> + Send;

    fn list_categories(&self) -> impl Future<Output = CatalogResult<Vec<Category>>> + Send;

    fn search_products(
        &self,
        query: &ProductQuery,
    ) -> impl Future<Output = CatalogResult<Vec<Product>>> + Send;
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// reqwest-backed catalog client.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    http: Client,
    api_root: String,
}

impl HttpCatalogClient {
    /// Builds a client from validated configuration.
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| CatalogError::InvalidConfig(format!("HTTP client: {}", e)))?;

        Ok(HttpCatalogClient {
            http,
            api_root: config.api_root().to_string(),
        })
    }

    /// The API root requests are sent to.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path)
    }

    /// Sends a GET and returns the JSON body of a 2xx response.
    async fn get_json(
        &self,
        path: &str,
        params: &[(&str, String)],
        fallback: &'static str,
    ) -> CatalogResult<Value> {
        let url = self.endpoint(path);
        debug!(%url, ?params, "Catalog request");

        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|source| {
                warn!(%url, error = %source, "Catalog request failed before a response");
                CatalogError::Request {
                    context: fallback,
                    source,
                }
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|source| CatalogError::Request {
            context: fallback,
            source,
        })?;

        if !status.is_success() {
            let message = server_message(&body).unwrap_or_else(|| fallback.to_string());
            warn!(%url, status = status.as_u16(), %message, "Catalog returned an error status");
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|source| {
            error!(%url, error = %source, "Catalog body is not JSON");
            CatalogError::Decode {
                context: fallback,
                source,
            }
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
        fallback: &'static str,
    ) -> CatalogResult<T> {
        let body = self.get_json(path, params, fallback).await?;
        decode(body, fallback)
    }
}

impl CatalogApi for HttpCatalogClient {
    #[instrument(skip(self))]
    async fn list_products(&self, offset: u32, limit: u32) -> CatalogResult<Vec<Product>> {
        let params = [("offset", offset.to_string()), ("limit", limit.to_string())];
        let wire: Vec<WireProduct> = self.get("/products", &params, PRODUCTS_FAILED).await?;
        Ok(wire.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: ProductId) -> CatalogResult<Product> {
        let path = format!("/products/{}", id);
        let wire: WireProduct = self.get(&path, &[], PRODUCT_DETAILS_FAILED).await?;
        Ok(wire.into())
    }

    #[instrument(skip(self))]
    async fn products_by_category(&self, category_id: CategoryId) -> CatalogResult<Vec<Product>> {
        let params = [("categoryId", category_id.to_string())];
        let wire: Vec<WireProduct> = self
            .get("/products/", &params, CATEGORY_PRODUCTS_FAILED)
            .await?;
        Ok(wire.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        let wire: Vec<WireCategory> = self.get("/categories", &[], CATEGORIES_FAILED).await?;
        Ok(wire.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self))]
    async fn search_products(&self, query: &ProductQuery) -> CatalogResult<Vec<Product>> {
        let body = self
            .get_json("/products", &query.to_params(), SEARCH_FAILED)
            .await?;

        if !body.is_array() {
            error!(?query, "Search response is not an array, treating as no results");
            return Ok(Vec::new());
        }

        let wire: Vec<WireProduct> = decode(body, SEARCH_FAILED)?;
        Ok(wire.into_iter().map(Product::from).collect())
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn decode<T: DeserializeOwned>(body: Value, fallback: &'static str) -> CatalogResult<T> {
    serde_json::from_value(body).map_err(|source| {
        error!(error = %source, "Catalog body has an unexpected shape");
        CatalogError::Decode {
            context: fallback,
            source,
        }
    })
}

/// Extracts `message` from an error body.
///
/// The API uses a plain string for most errors and a list of strings for
/// validation failures; the list is joined with ", ".
fn server_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let message = match value.get("message")? {
        Value::String(s) => s.trim().to_string(),
        Value::Array(parts) => parts
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };

    (!message.is_empty()).then_some(message)
}

// =============================================================================
// Unit Tests
// =============================================================================
