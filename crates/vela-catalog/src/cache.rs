//! # Catalog Cache
//!
//! Read-through cache of the products and categories the home screen shows,
//! plus the loading / error flags the screens render.
//!
//! ## Fetch State Machine (per resource)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            begin_*()                 finish_*(Ok)                       │
//! │   Idle ─────────────────► Loading ─────────────────► Loaded             │
//! │                              │  ▲                       │               │
//! │                 finish_*(Err)│  │ begin_*()             │ begin_*()     │
//! │                              ▼  │                       │               │
//! │                           Errored ◄─────────────────────┘               │
//! │                                    (via Loading)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stale Responses
//! Every `begin_*` hands out a [`FetchTicket`] carrying the next sequence
//! number for that resource. `finish_*` applies a result only when its
//! ticket is the newest one issued; older results are dropped. Two
//! overlapping product fetches therefore always end with the data of the
//! one started last, whatever order the responses arrive in.
//!
//! ## Flags
//! - `loading` tracks product fetches only. Category fetches never touch it.
//! - Starting either fetch clears `last_error`.
//!
//! This type does no I/O; [`CatalogStore`](crate::store::CatalogStore)
//! drives it around the network calls.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vela_core::types::{Category, CategoryId, Product};

/// Stored when a product fetch fails without any message.
pub const PRODUCTS_FETCH_DEFAULT_ERROR: &str =
    "An unexpected error occurred while fetching products";

/// Stored when a category fetch fails without any message.
pub const CATEGORIES_FETCH_DEFAULT_ERROR: &str = "Failed to load categories";

// =============================================================================
// Fetch Bookkeeping
// =============================================================================

/// Where a cached resource is in its fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// The cached resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Products,
    Categories,
}

/// Handed out when a fetch starts; must be returned with its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a fetch ticket has to be passed back to finish the fetch"]
pub struct FetchTicket {
    resource: Resource,
    seq: u64,
}

impl FetchTicket {
    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ResourceState {
    phase: FetchPhase,
    /// Sequence number of the newest fetch started.
    latest: u64,
}

impl ResourceState {
    fn begin(&mut self, resource: Resource) -> FetchTicket {
        self.latest += 1;
        self.phase = FetchPhase::Loading;
        FetchTicket {
            resource,
            seq: self.latest,
        }
    }

    fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.seq == self.latest
    }
}

// =============================================================================
// Cache
// =============================================================================

/// Cached catalog data and fetch flags.
#[derive(Debug, Clone, Default)]
pub struct CatalogCache {
    products: Vec<Product>,
    categories: Vec<Category>,
    loading: bool,
    last_error: Option<String>,
    products_state: ResourceState,
    categories_state: ResourceState,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Marks a product fetch as started: `loading = true`, error cleared.
    pub fn begin_products_fetch(&mut self) -> FetchTicket {
        self.loading = true;
        self.last_error = None;
        self.products_state.begin(Resource::Products)
    }

    /// Applies the result of a product fetch.
    ///
    /// Returns `false` (and changes nothing) when a newer product fetch has
    /// been started since `ticket` was issued.
    pub fn finish_products_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Product>, String>,
    ) -> bool {
        if ticket.resource != Resource::Products || !self.products_state.is_current(ticket) {
            return false;
        }

        self.loading = false;
        match result {
            Ok(products) => {
                self.products = products;
                self.products_state.phase = FetchPhase::Loaded;
            }
            Err(message) => {
                self.last_error = Some(non_empty_or(message, PRODUCTS_FETCH_DEFAULT_ERROR));
                self.products_state.phase = FetchPhase::Errored;
            }
        }
        true
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// Marks a category fetch as started: error cleared, `loading` untouched.
    pub fn begin_categories_fetch(&mut self) -> FetchTicket {
        self.last_error = None;
        self.categories_state.begin(Resource::Categories)
    }

    /// Applies the result of a category fetch. Same staleness rule as
    /// [`finish_products_fetch`](Self::finish_products_fetch).
    pub fn finish_categories_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Category>, String>,
    ) -> bool {
        if ticket.resource != Resource::Categories || !self.categories_state.is_current(ticket) {
            return false;
        }

        match result {
            Ok(categories) => {
                self.categories = categories;
                self.categories_state.phase = FetchPhase::Loaded;
            }
            Err(message) => {
                self.last_error = Some(non_empty_or(message, CATEGORIES_FETCH_DEFAULT_ERROR));
                self.categories_state.phase = FetchPhase::Errored;
            }
        }
        true
    }

    // =========================================================================
    // Readers
    // =========================================================================

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn phase(&self, resource: Resource) -> FetchPhase {
        match resource {
            Resource::Products => self.products_state.phase,
            Resource::Categories => self.categories_state.phase,
        }
    }

    /// Cached products of one category, or all of them for `None`.
    pub fn products_in_category(&self, category_id: Option<CategoryId>) -> Vec<Product> {
        match category_id {
            Some(id) => self
                .products
                .iter()
                .filter(|p| p.category.id == id)
                .cloned()
                .collect(),
            None => self.products.clone(),
        }
    }

    /// Owned copy of everything a screen renders.
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            products: self.products.clone(),
            categories: self.categories.clone(),
            loading: self.loading,
            error: self.last_error.clone(),
            products_phase: self.products_state.phase,
            categories_phase: self.categories_state.phase,
        }
    }
}

fn non_empty_or(message: String, default: &str) -> String {
    if message.trim().is_empty() {
        default.to_string()
    } else {
        message
    }
}

// =============================================================================
// Snapshot DTO
// =============================================================================

/// Catalog state as returned to the screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub loading: bool,
    pub error: Option<String>,
    pub products_phase: FetchPhase,
    pub categories_phase: FetchPhase,
}

// =============================================================================
// Unit Tests
// =============================================================================
