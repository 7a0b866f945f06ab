//! # Catalog Configuration
//!
//! Where the catalog lives and how much of it to ask for.
//!
//! ## Configuration File Format
//! ```toml
//! # [catalog] section of client.toml
//! [catalog]
//! base_url = "https://api.escuelajs.co/api/v1"
//! page_size = 10            # "all products" list
//! featured_limit = 30       # home screen
//! request_timeout_secs = 30
//! ```
//!
//! Loading (file, environment) is done by the client app; this module only
//! owns the defaults and the validation rules.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::error::{CatalogError, CatalogResult};

/// Public catalog API used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.escuelajs.co/api/v1";

/// Catalog connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// API root; endpoints are appended as `/products`, `/categories`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Rows per page of the product list.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Products requested for the home screen.
    #[serde(default = "default_featured_limit")]
    pub featured_limit: u32,

    /// Per-request timeout (seconds).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    vela_core::DEFAULT_PAGE_SIZE
}

fn default_featured_limit() -> u32 {
    vela_core::DEFAULT_FEATURED_LIMIT
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            base_url: default_base_url(),
            page_size: default_page_size(),
            featured_limit: default_featured_limit(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl CatalogConfig {
    /// Config pointing at a different API root, other values default.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        CatalogConfig {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CatalogResult<()> {
        let url = Url::parse(&self.base_url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(CatalogError::InvalidUrl(format!(
                "Catalog URL must start with http:// or https://, got: {}",
                self.base_url
            )));
        }

        if self.page_size == 0 {
            return Err(CatalogError::InvalidConfig(
                "page_size must be greater than 0".into(),
            ));
        }

        if self.featured_limit == 0 {
            return Err(CatalogError::InvalidConfig(
                "featured_limit must be greater than 0".into(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(CatalogError::InvalidConfig(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }

        debug!(base_url = %self.base_url, "Catalog config validated");
        Ok(())
    }

    /// Base URL without a trailing slash, ready for `format!("{}/products")`.
    pub fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, "https://api.escuelajs.co/api/v1");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.featured_limit, 30);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut config = CatalogConfig::with_base_url("ftp://catalog.example");
        assert!(config.validate().is_err());

        config.base_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(CatalogError::InvalidUrl(_))));

        config.base_url = "http://localhost:8080".to_string();
        assert!(config.validate().is_ok());

        config.page_size = 0;
        assert!(matches!(config.validate(), Err(CatalogError::InvalidConfig(_))));
    }

    #[test]
    fn test_api_root_strips_trailing_slash() {
        let config = CatalogConfig::with_base_url("http://localhost:8080/api/v1/");
        assert_eq!(config.api_root(), "http://localhost:8080/api/v1");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: CatalogConfig = serde_json::from_str(r#"{ "page_size": 20 }"#).unwrap();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.featured_limit, 30);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
