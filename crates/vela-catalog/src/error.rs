//! # Catalog Error Types
//!
//! Error types for catalog requests and catalog configuration.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Response            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Request        │  │  Api (non-2xx)          │ │
//! │  │  InvalidUrl     │  │  (timeout, DNS, │  │  Decode (bad body)      │ │
//! │  │                 │  │   refused)      │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `Display` text of the request errors is what the screens show. A
//! non-2xx response displays the server's own `message` when it sent one;
//! everything else displays the fallback sentence of the operation that
//! failed ("Failed to fetch products", ...).

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog error type.
#[derive(Debug, Error)]
pub enum CatalogError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid catalog configuration.
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    /// Base URL could not be parsed.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    // =========================================================================
    // Request Errors
    // =========================================================================
    /// No response arrived (connection refused, timeout, TLS failure).
    #[error("{context}")]
    Request {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The body of a 2xx response did not have the expected shape.
    #[error("{context}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<url::ParseError> for CatalogError {
    fn from(err: url::ParseError) -> Self {
        CatalogError::InvalidUrl(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl CatalogError {
    /// HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the request gave up waiting for the server.
    pub fn is_timeout(&self) -> bool {
        matches!(self, CatalogError::Request { source, .. } if source.is_timeout())
    }

    /// Returns true for a 404 from the API.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CatalogError::InvalidConfig(_) | CatalogError::InvalidUrl(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_server_message() {
        let err = CatalogError::Api {
            status: 400,
            message: "Could not find any entity".to_string(),
        };
        assert_eq!(err.to_string(), "Could not find any entity");
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_decode_error_displays_context() {
        let source = serde_json::from_str::<Vec<i64>>("{").unwrap_err();
        let err = CatalogError::Decode {
            context: "Failed to fetch categories",
            source,
        };
        assert_eq!(err.to_string(), "Failed to fetch categories");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_config_errors() {
        let err: CatalogError = url::Url::parse("not a url").unwrap_err().into();
        assert!(err.is_config_error());
        assert!(!CatalogError::Api {
            status: 500,
            message: String::new()
        }
        .is_config_error());
    }
}
