//! # API Error Type
//!
//! Unified error type for client commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Vela client                        │
//! │                                                                         │
//! │  Screen                      Rust Core                                  │
//! │  ──────                      ─────────                                  │
//! │                                                                         │
//! │  place_order(address, "standard")                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Catalog Error? ─── CatalogError::Api { 404, .. } ──┐           │  │
//! │  │         │                                           │           │  │
//! │  │         ▼                                           ▼           │  │
//! │  │  Validation Error? ─── ValidationError::Required ── ApiError ──►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  e.code    = "VALIDATION_ERROR"                                         │
//! │  e.message = "zipCode is required"                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use vela_catalog::CatalogError;
use vela_core::auth::auth_error_message;
use vela_core::{AuthError, CoreError, ValidationError};

use crate::state::ConfigError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Order not found: 6f1c..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Order or product does not exist
    NotFound,

    /// Form or filter input rejected
    ValidationError,

    /// Business rule violated (status transition)
    BusinessLogic,

    /// Cart cannot be used for the requested operation
    CartError,

    /// Catalog API unreachable or returned an error
    CatalogError,

    /// Auth provider rejected the request
    AuthError,

    /// Configuration could not be loaded
    ConfigError,

    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::OrderNotFound(id) => ApiError::not_found("Order", &id),
            CoreError::InvalidStatusTransition { .. } => {
                ApiError::new(ErrorCode::BusinessLogic, err.to_string())
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts catalog errors to API errors.
///
/// Transport and decode failures carry a generic, operation-specific
/// message; the detail goes to the log.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match &err {
            CatalogError::Api { status: 404, message } => {
                ApiError::new(ErrorCode::NotFound, message.clone())
            }
            CatalogError::Api { .. } => ApiError::new(ErrorCode::CatalogError, err.to_string()),
            CatalogError::Request { source, .. } => {
                tracing::warn!(error = %source, "Catalog request failed");
                ApiError::new(ErrorCode::CatalogError, err.to_string())
            }
            CatalogError::Decode { source, .. } => {
                tracing::error!(error = %source, "Unexpected catalog response");
                ApiError::new(ErrorCode::CatalogError, err.to_string())
            }
            CatalogError::InvalidConfig(_) | CatalogError::InvalidUrl(_) => {
                ApiError::new(ErrorCode::ConfigError, err.to_string())
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Provider(raw) => {
                ApiError::new(ErrorCode::AuthError, auth_error_message(&raw))
            }
            AuthError::Validation(e) => e.into(),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use vela_core::types::OrderStatus;

    #[test]
    fn test_serializes_screaming_code() {
        let err = ApiError::not_found("Order", "abc");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Order not found: abc");
    }

    #[test]
    fn test_from_core_error() {
        let err: ApiError = CoreError::InvalidStatusTransition {
            order_id: "o1".to_string(),
            from: OrderStatus::Pending,
            to: OrderStatus::Delivered,
        }
        .into();
        assert_eq!(err.code, ErrorCode::BusinessLogic);

        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "city".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_from_catalog_error() {
        let err: ApiError = CatalogError::Api {
            status: 404,
            message: "Could not find any entity".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Could not find any entity");

        let err: ApiError = CatalogError::Api {
            status: 500,
            message: "Failed to fetch products".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::CatalogError);
        assert_eq!(err.to_string(), "[CatalogError] Failed to fetch products");
    }

    #[test]
    fn test_from_auth_error_cleans_message() {
        let err: ApiError =
            AuthError::Provider("Firebase: [auth/wrong-password] Wrong password.".to_string())
                .into();
        assert_eq!(err.code, ErrorCode::AuthError);
        assert_eq!(err.message, "Firebase: Wrong password.");
    }
}
