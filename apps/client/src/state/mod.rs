//! # State Module
//!
//! Session state for the Vela Shop client.
//!
//! Each concern gets its own state type so commands declare exactly what
//! they touch. [`Session`] bundles them; it is built once at start-up and
//! passed by reference to whoever needs it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Session::new(config, client)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │     ┌──────────────┬─────────┼──────────┬──────────────┐               │
//! │     ▼              ▼         ▼          ▼              ▼                │
//! │  ┌─────────┐ ┌──────────┐ ┌────────┐ ┌──────────┐ ┌──────────────┐     │
//! │  │CartState│ │OrderState│ │Catalog │ │PagerState│ │  AuthState   │     │
//! │  │Arc<Mutex│ │Arc<Mutex │ │Store<C>│ │Arc<Mutex │ │watch::Sender │     │
//! │  │ <Cart>> │ │<OrderBook│ │        │ │<Pager>>  │ │<Option<User>>│     │
//! │  └─────────┘ └──────────┘ └────────┘ └──────────┘ └──────────────┘     │
//! │                                                                         │
//! │  ClientConfig: read-only after initialization                          │
//! │  Every mutex is released before any .await                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod auth;
mod cart;
mod catalog;
mod config;
mod orders;

pub use auth::AuthState;
pub use cart::CartState;
pub use catalog::PagerState;
pub use config::{
    CheckoutConfig, ClientConfig, ConfigError, ConfigResult, DisplayConfig, ShippingMethodConfig,
};
pub use orders::OrderState;

use vela_catalog::{CatalogApi, CatalogStore};

/// Everything one running client owns.
#[derive(Debug)]
pub struct Session<C> {
    pub config: ClientConfig,
    pub cart: CartState,
    pub orders: OrderState,
    pub catalog: CatalogStore<C>,
    pub pager: PagerState,
    pub auth: AuthState,
}

impl<C: CatalogApi> Session<C> {
    pub fn new(config: ClientConfig, client: C) -> Self {
        let pager = PagerState::new(config.catalog.page_size);
        Session {
            config,
            cart: CartState::new(),
            orders: OrderState::new(),
            catalog: CatalogStore::new(client),
            pager,
            auth: AuthState::new(),
        }
    }
}
