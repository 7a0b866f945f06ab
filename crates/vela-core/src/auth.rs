//! # Auth Types
//!
//! The identity model the client shares with the external auth service.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Sign-in form ──► Credentials ──┐                                       │
//! │                                 ├──► AuthProvider ──► AuthUser          │
//! │  Sign-up form ──► SignUpForm ───┘        │                              │
//! │                                          └── error ──► AuthError        │
//! │                                                          │              │
//! │                                    auth_error_message() ◄┘              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No provider is implemented here. The client wires a concrete provider in
//! at start-up; tests use fakes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use thiserror::Error;
use ts_rs::TS;

use crate::error::ValidationError;

/// Fallback shown when the provider gives no message at all.
pub const UNKNOWN_AUTH_ERROR: &str = "An unknown error occurred";

// =============================================================================
// Identity
// =============================================================================

/// The signed-in user as reported by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AuthUser {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

/// Sign-in form contents.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Passwords never reach logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Sign-up form contents.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    /// The credentials the provider account is created with.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.trim(), self.password.clone())
    }
}

impl fmt::Debug for SignUpForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Errors from the auth flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Raw message from the provider, e.g. "[auth/user-not-found] User not found."
    #[error("{0}")]
    Provider(String),

    /// The form was rejected before reaching the provider.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl AuthError {
    /// Message suitable for a toast.
    pub fn display_message(&self) -> String {
        match self {
            AuthError::Provider(raw) => auth_error_message(raw),
            AuthError::Validation(err) => err.to_string(),
        }
    }
}

/// Strips the provider's bracketed error code from a message.
///
/// The first `[` that has a `]` later on its line is removed up to the
/// last such `]`, together with any whitespace that follows it. Messages
/// without a bracket pair pass through unchanged. An empty message yields
/// [`UNKNOWN_AUTH_ERROR`].
///
/// ## Example
/// ```rust
/// use vela_core::auth::auth_error_message;
///
/// assert_eq!(
///     auth_error_message("[auth/user-not-found] User not found."),
///     "User not found."
/// );
/// assert_eq!(auth_error_message(""), "An unknown error occurred");
/// ```
pub fn auth_error_message(raw: &str) -> String {
    if raw.is_empty() {
        return UNKNOWN_AUTH_ERROR.to_string();
    }

    for (open, _) in raw.match_indices('[') {
        let line_end = raw[open..]
            .find('\n')
            .map(|i| open + i)
            .unwrap_or(raw.len());

        if let Some(close) = raw[open..line_end].rfind(']').map(|i| open + i) {
            let rest = raw[close + 1..].trim_start();
            return format!("{}{}", &raw[..open], rest);
        }
    }

    raw.to_string()
}

// =============================================================================
// Provider Seam
// =============================================================================

/// The external identity service.
///
/// Implementations talk to a hosted auth backend. Each call resolves to the
/// user the service now considers signed in.
pub trait AuthProvider: Send + Sync {
    fn sign_in(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<AuthUser, AuthError>> + Send;

    /// Creates the account and sets its display name to `form.name`.
    fn sign_up(&self, form: &SignUpForm)
        -> impl Future<Output = Result<AuthUser, AuthError>> + Send;

    fn sign_out(&self) -> impl Future<Output = Result<(), AuthError>> + Send;
}

// =============================================================================
// Unit Tests
// =============================================================================
