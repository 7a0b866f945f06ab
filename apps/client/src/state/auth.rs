//! # Auth State
//!
//! Who is signed in, and a way to hear about it changing.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  sign_in / sign_up ──► set_user(Some(user)) ──┐                        │
//! │  sign_out ───────────► set_user(None) ────────┤                        │
//! │                                               ▼                         │
//! │                                  watch::Sender<Option<AuthUser>>        │
//! │                                               │                         │
//! │                    ┌──────────────────────────┼──────────────┐          │
//! │                    ▼                          ▼              ▼          │
//! │              current_user()             subscribe()     subscribe()     │
//! │                                        (profile tab)   (cart badge)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;
use vela_core::AuthUser;

#[derive(Debug, Clone)]
pub struct AuthState {
    user: Arc<watch::Sender<Option<AuthUser>>>,
}

impl AuthState {
    /// Starts signed out.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        AuthState { user: Arc::new(tx) }
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.user.borrow().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.borrow().is_some()
    }

    /// Replaces the current user and notifies subscribers.
    ///
    /// Works with no subscribers at all.
    pub fn set_user(&self, user: Option<AuthUser>) {
        debug!(uid = ?user.as_ref().map(|u| u.uid.as_str()), "Auth state changed");
        self.user.send_replace(user);
    }

    /// Auth-state change subscription. The receiver starts at the current
    /// value; `changed().await` resolves on every later update.
    pub fn subscribe(&self) -> watch::Receiver<Option<AuthUser>> {
        self.user.subscribe()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
