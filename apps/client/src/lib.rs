//! # Vela Client Library
//!
//! Session state and commands for the Vela Shop mobile client. The mobile
//! shell links this library and calls [`commands`] with the state held in a
//! [`state::Session`]; the `vela-client` binary drives the same path
//! headlessly.
//!
//! ## Module Organization
//! ```text
//! vela_client/
//! ├── lib.rs          ◄─── You are here (tracing setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── Session + state type exports
//! │   ├── cart.rs     ◄─── Cart state
//! │   ├── orders.rs   ◄─── Placed orders
//! │   ├── catalog.rs  ◄─── Product list pager
//! │   ├── auth.rs     ◄─── Signed-in user (watch channel)
//! │   └── config.rs   ◄─── ClientConfig loading
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── product.rs  ◄─── Catalog, paging, details, search
//! │   ├── checkout.rs ◄─── Shipping, totals, orders
//! │   ├── auth.rs     ◄─── Sign in / up / out
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::path::PathBuf;

use tracing::{info, Subscriber};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use vela_catalog::HttpCatalogClient;

use error::ApiError;
use state::{ClientConfig, Session};

/// Loads configuration, builds a session and warms the catalog.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Client Startup                                    │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → client.toml → VELA_* environment                       │
/// │                                                                         │
/// │  2. Build HTTP Client ────────────────────────────────────────────────► │
/// │     • reqwest, rustls, configured timeout                               │
/// │                                                                         │
/// │  3. Initialize Session ───────────────────────────────────────────────► │
/// │     • empty cart, no orders, signed out                                 │
/// │                                                                         │
/// │  4. Warm the Catalog ─────────────────────────────────────────────────► │
/// │     • home screen products + categories (concurrently)                  │
/// │     • first page of the product list                                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(config_path: Option<PathBuf>) -> Result<Session<HttpCatalogClient>, ApiError> {
    info!("Starting Vela Shop client");

    let config = ClientConfig::load(config_path)?;
    info!(base_url = %config.catalog.base_url, "Configuration loaded");

    let client = HttpCatalogClient::new(&config.catalog)?;
    let session = Session::new(config, client);

    let snapshot =
        commands::product::refresh_catalog(&session.catalog, &session.config, None).await;
    if let Some(error) = &snapshot.error {
        return Err(ApiError::new(error::ErrorCode::CatalogError, error.clone()));
    }

    let page = commands::product::load_product_page(&session.catalog, &session.pager, true).await?;
    info!(
        featured = snapshot.products.len(),
        categories = snapshot.categories.len(),
        first_page = page.products.len(),
        has_more = page.has_more,
        "Session ready"
    );

    Ok(session)
}

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,vela=debug,reqwest=warn";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=vela_catalog=trace` - Trace the catalog crate only
/// - Default: [`DEFAULT_LOG_FILTER`]
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    subscriber(filter).init();
}

fn subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt().with_env_filter(filter).finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tracing::Level;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn product_json(id: i64) -> Value {
        json!({
            "id": id,
            "title": format!("Product {}", id),
            "slug": format!("product-{}", id),
            "price": 12.5,
            "description": "",
            "images": ["[\"https://img.example/a.png\"]"],
            "category": { "id": 1, "name": "Clothes", "slug": "clothes", "image": "" }
        })
    }

    fn write_config(server: &MockServer, name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("vela-{}-{}.toml", name, std::process::id()));
        let contents = format!("[catalog]\nbase_url = \"{}\"\n", server.uri());
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_log_filter_applies() {
        let subscriber = subscriber(EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing::subscriber::with_default(subscriber, || {
            assert!(!tracing::enabled!(target: "reqwest", Level::DEBUG));
            assert!(tracing::enabled!(target: "reqwest", Level::WARN));
            assert!(!tracing::enabled!(target: "hyper", Level::DEBUG));
            assert!(tracing::enabled!(target: "hyper", Level::INFO));
            assert!(tracing::enabled!(target: "vela_catalog::store", Level::DEBUG));
            assert!(!tracing::enabled!(target: "vela_catalog::store", Level::TRACE));
        });
    }

    #[tokio::test]
    async fn test_run_warms_catalog() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .and(query_param("limit", "30"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([product_json(1), product_json(2)])),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .and(query_param("offset", "0"))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([product_json(1)])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/categories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 1, "name": "Clothes", "slug": "clothes", "image": "" }
            ])))
            .mount(&server)
            .await;

        let config_path = write_config(&server, "run-ok");
        let session = run(Some(config_path.clone())).await.unwrap();
        let _ = std::fs::remove_file(config_path);

        assert_eq!(session.catalog.products().len(), 2);
        assert_eq!(session.catalog.categories().len(), 1);
        assert_eq!(session.pager.with_pager(|p| p.products().len()), 1);
        assert!(!session.pager.with_pager(|p| p.has_more()));
    }

    #[tokio::test]
    async fn test_run_reports_catalog_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/categories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let config_path = write_config(&server, "run-fail");
        let err = run(Some(config_path.clone())).await.unwrap_err();
        let _ = std::fs::remove_file(config_path);

        assert_eq!(err.code, error::ErrorCode::CatalogError);
        assert_eq!(err.message, "Failed to fetch products");
    }
}
