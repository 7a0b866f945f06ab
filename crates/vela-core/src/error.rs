//! # Error Types
//!
//! Domain-specific error types for vela-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vela-core errors (this file)                                          │
//! │  ├── CoreError        - Order lifecycle errors                          │
//! │  └── ValidationError  - Form / filter validation failures               │
//! │                                                                         │
//! │  vela-catalog errors (separate crate)                                  │
//! │  └── CatalogError     - HTTP / payload / config failures               │
//! │                                                                         │
//! │  client app errors                                                     │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Screen                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart mutations have no error type at all: every input is accepted and
//! out-of-range quantities are handled by the removal policy.

use thiserror::Error;

use crate::types::OrderStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Order id is not in the order list.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Requested status change is not in the allowed-transition table.
    ///
    /// ## When This Occurs
    /// - Skipping a step (pending → shipped)
    /// - Moving backwards (shipped → processing)
    /// - Any change away from delivered
    #[error("Order {order_id} cannot move from {from} to {to}")]
    InvalidStatusTransition {
        order_id: String,
        from: OrderStatus,
        to: OrderStatus,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These mirror the checks the sign-in, sign-up, shipping and search forms
/// run before anything is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Two fields that must agree do not.
    #[error("{field} must match {other}")]
    Mismatch { field: String, other: String },

    /// A lower bound is above its upper bound.
    #[error("{min_field} must not exceed {max_field}")]
    InvalidRange { min_field: String, max_field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
