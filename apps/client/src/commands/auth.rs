//! # Auth Commands
//!
//! Sign in, sign up and sign out through an [`AuthProvider`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  form ──► validate ──► provider call ──► AuthState::set_user           │
//! │              │               │                                          │
//! │              ▼               ▼                                          │
//! │      VALIDATION_ERROR   AUTH_ERROR (bracketed code stripped)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The state only changes after the provider succeeds.

use tracing::{debug, info, warn};
use vela_core::validation::{validate_credentials, validate_sign_up};
use vela_core::{AuthProvider, AuthUser, Credentials, SignUpForm};

use crate::error::ApiError;
use crate::state::AuthState;

pub async fn sign_in<P: AuthProvider>(
    provider: &P,
    auth: &AuthState,
    credentials: Credentials,
) -> Result<AuthUser, ApiError> {
    debug!(email = %credentials.email, "sign_in command");

    validate_credentials(&credentials)?;
    let user = provider.sign_in(&credentials).await.map_err(|err| {
        warn!(error = %err, "Sign in rejected");
        ApiError::from(err)
    })?;

    auth.set_user(Some(user.clone()));
    info!(uid = %user.uid, "Signed in");
    Ok(user)
}

/// Creates an account and signs it in.
pub async fn sign_up<P: AuthProvider>(
    provider: &P,
    auth: &AuthState,
    form: SignUpForm,
) -> Result<AuthUser, ApiError> {
    debug!(email = %form.email, "sign_up command");

    validate_sign_up(&form)?;
    let user = provider.sign_up(&form).await.map_err(|err| {
        warn!(error = %err, "Sign up rejected");
        ApiError::from(err)
    })?;

    auth.set_user(Some(user.clone()));
    info!(uid = %user.uid, "Account created");
    Ok(user)
}

pub async fn sign_out<P: AuthProvider>(provider: &P, auth: &AuthState) -> Result<(), ApiError> {
    debug!("sign_out command");

    provider.sign_out().await?;
    auth.set_user(None);
    info!("Signed out");
    Ok(())
}

pub fn current_user(auth: &AuthState) -> Option<AuthUser> {
    debug!("current_user command");
    auth.current_user()
}
