//! # Catalog Store
//!
//! Pairs a [`CatalogApi`] with a [`CatalogCache`] and runs the fetches.
//!
//! ## Fetch Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  fetch_products(limit)                                                  │
//! │     │                                                                   │
//! │     ├── lock ── begin_products_fetch() ── unlock      (ticket n)        │
//! │     │                                                                   │
//! │     ├── client.list_products(0, limit).await          (no lock held)    │
//! │     │                                                                   │
//! │     └── lock ── finish_products_fetch(ticket n, ..) ── unlock           │
//! │                  └── ticket n no longer newest? dropped                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The mutex is a `std::sync::Mutex` and is only ever held between awaits,
//! never across one.

use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};
use vela_core::types::{Category, CategoryId, Product};

use crate::cache::{CatalogCache, CatalogSnapshot};
use crate::client::CatalogApi;
use crate::error::CatalogResult;

/// Shared catalog state plus the client that fills it.
#[derive(Debug)]
pub struct CatalogStore<C> {
    client: C,
    cache: Mutex<CatalogCache>,
}

impl<C: CatalogApi> CatalogStore<C> {
    pub fn new(client: C) -> Self {
        CatalogStore {
            client,
            cache: Mutex::new(CatalogCache::new()),
        }
    }

    /// The underlying client, for requests that bypass the cache.
    pub fn client(&self) -> &C {
        &self.client
    }

    fn cache(&self) -> MutexGuard<'_, CatalogCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with read access to the cache.
    pub fn with_cache<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CatalogCache) -> R,
    {
        f(&self.cache())
    }

    // =========================================================================
    // Fetches
    // =========================================================================

    /// Fetches the first `limit` products into the cache.
    ///
    /// The outcome is also recorded on the cache (products or error). A
    /// response overtaken by a newer fetch is dropped and reported as `Ok`.
    pub async fn fetch_products(&self, limit: u32) -> CatalogResult<()> {
        let ticket = self.cache().begin_products_fetch();
        debug!(seq = ticket.seq(), limit, "Fetching products");

        let result = self.client.list_products(0, limit).await;

        let (applied, outcome) = match result {
            Ok(products) => {
                let count = products.len();
                let applied = self.cache().finish_products_fetch(ticket, Ok(products));
                if applied {
                    info!(count, "Products loaded");
                }
                (applied, Ok(()))
            }
            Err(err) => {
                let applied = self
                    .cache()
                    .finish_products_fetch(ticket, Err(err.to_string()));
                if applied {
                    warn!(error = %err, "Product fetch failed");
                }
                (applied, if applied { Err(err) } else { Ok(()) })
            }
        };

        if !applied {
            debug!(seq = ticket.seq(), "Discarded stale product response");
        }
        outcome
    }

    /// Fetches all categories into the cache. Never touches `loading`.
    pub async fn fetch_categories(&self) -> CatalogResult<()> {
        let ticket = self.cache().begin_categories_fetch();
        debug!(seq = ticket.seq(), "Fetching categories");

        let result = self.client.list_categories().await;

        let (applied, outcome) = match result {
            Ok(categories) => {
                let count = categories.len();
                let applied = self.cache().finish_categories_fetch(ticket, Ok(categories));
                if applied {
                    info!(count, "Categories loaded");
                }
                (applied, Ok(()))
            }
            Err(err) => {
                let applied = self
                    .cache()
                    .finish_categories_fetch(ticket, Err(err.to_string()));
                if applied {
                    warn!(error = %err, "Category fetch failed");
                }
                (applied, if applied { Err(err) } else { Ok(()) })
            }
        };

        if !applied {
            debug!(seq = ticket.seq(), "Discarded stale category response");
        }
        outcome
    }

    // =========================================================================
    // Cache Access
    // =========================================================================

    pub fn clear_error(&self) {
        self.cache().clear_error();
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        self.cache().snapshot()
    }

    pub fn products(&self) -> Vec<Product> {
        self.cache().products().to_vec()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.cache().categories().to_vec()
    }

    pub fn products_in_category(&self, category_id: Option<CategoryId>) -> Vec<Product> {
        self.cache().products_in_category(category_id)
    }

    pub fn is_loading(&self) -> bool {
        self.cache().is_loading()
    }

    pub fn last_error(&self) -> Option<String> {
        self.cache().last_error().map(str::to_string)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{FetchPhase, Resource};
    use crate::error::CatalogError;
    use crate::query::ProductQuery;
    use std::collections::VecDeque;
    use tokio::sync::oneshot;
    use vela_core::money::Money;
    use vela_core::types::ProductId;

    fn product(id: i64) -> Product {
        Product {
            id: ProductId(id),
            title: format!("Product {}", id),
            slug: format!("product-{}", id),
            price: Money::from_cents(1000 + id),
            description: String::new(),
            images: vec![format!("https://img.example/{}.png", id)],
            category: Category {
                id: CategoryId(1),
                name: "Clothes".to_string(),
                slug: "clothes".to_string(),
                image: String::new(),
            },
            created_at: None,
            updated_at: None,
        }
    }

    /// Each `list_products` call waits for the next queued sender, so a
    /// test decides when (and in which order) responses arrive.
    #[derive(Default)]
    struct GatedClient {
        pending: Mutex<VecDeque<oneshot::Receiver<CatalogResult<Vec<Product>>>>>,
        categories: Mutex<Option<CatalogResult<Vec<Category>>>>,
    }

    impl GatedClient {
        fn gate(&self) -> oneshot::Sender<CatalogResult<Vec<Product>>> {
            let (tx, rx) = oneshot::channel();
            self.pending.lock().unwrap().push_back(rx);
            tx
        }
    }

    impl CatalogApi for GatedClient {
        async fn list_products(&self, _offset: u32, _limit: u32) -> CatalogResult<Vec<Product>> {
            let rx = self.pending.lock().unwrap().pop_front();
            match rx {
                Some(rx) => rx.await.unwrap_or_else(|_| Ok(vec![])),
                None => Ok(vec![]),
            }
        }

        async fn get_product(&self, id: ProductId) -> CatalogResult<Product> {
            Ok(product(id.0))
        }

        async fn products_by_category(&self, _id: CategoryId) -> CatalogResult<Vec<Product>> {
            Ok(vec![])
        }

        async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
            self.categories.lock().unwrap().take().unwrap_or_else(|| Ok(vec![]))
        }

        async fn search_products(&self, _query: &ProductQuery) -> CatalogResult<Vec<Product>> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn test_fetch_products_success() {
        let client = GatedClient::default();
        let gate = client.gate();
        let store = CatalogStore::new(client);

        gate.send(Ok(vec![product(1), product(2)])).unwrap();
        store.fetch_products(30).await.unwrap();

        assert_eq!(store.products().len(), 2);
        assert!(!store.is_loading());
        assert_eq!(store.last_error(), None);
    }

    #[tokio::test]
    async fn test_fetch_products_failure_recorded() {
        let client = GatedClient::default();
        let gate = client.gate();
        let store = CatalogStore::new(client);

        gate.send(Err(CatalogError::Api {
            status: 500,
            message: "Failed to fetch products".to_string(),
        }))
        .unwrap();

        assert!(store.fetch_products(30).await.is_err());
        assert!(!store.is_loading());
        assert_eq!(store.last_error().as_deref(), Some("Failed to fetch products"));

        store.clear_error();
        assert_eq!(store.last_error(), None);
    }

    #[tokio::test]
    async fn test_overlapping_fetches_newer_wins() {
        let client = GatedClient::default();
        let older_gate = client.gate();
        let newer_gate = client.gate();
        let store = CatalogStore::new(client);

        let respond = async move {
            tokio::task::yield_now().await;
            // The newer request resolves first, then the older one.
            newer_gate.send(Ok(vec![product(2)])).unwrap();
            tokio::task::yield_now().await;
            older_gate.send(Ok(vec![product(1), product(3)])).unwrap();
        };

        let (older, newer, ()) =
            tokio::join!(store.fetch_products(30), store.fetch_products(30), respond);
        assert!(older.is_ok());
        assert!(newer.is_ok());

        let products = store.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, ProductId(2));
        assert!(!store.is_loading());
        assert_eq!(
            store.with_cache(|c| c.phase(Resource::Products)),
            FetchPhase::Loaded
        );
    }

    #[tokio::test]
    async fn test_overlapping_fetches_older_error_ignored() {
        let client = GatedClient::default();
        let older_gate = client.gate();
        let newer_gate = client.gate();
        let store = CatalogStore::new(client);

        let respond = async move {
            tokio::task::yield_now().await;
            older_gate
                .send(Err(CatalogError::Api {
                    status: 502,
                    message: "Bad gateway".to_string(),
                }))
                .unwrap();
            tokio::task::yield_now().await;
            newer_gate.send(Ok(vec![product(5)])).unwrap();
        };

        let (older, newer, ()) =
            tokio::join!(store.fetch_products(30), store.fetch_products(30), respond);
        assert!(older.is_ok());
        assert!(newer.is_ok());
        assert_eq!(store.last_error(), None);
        assert_eq!(store.products()[0].id, ProductId(5));
    }

    #[tokio::test]
    async fn test_fetch_categories_does_not_touch_loading() {
        let client = GatedClient::default();
        *client.categories.lock().unwrap() = Some(Err(CatalogError::Api {
            status: 500,
            message: "Failed to fetch categories".to_string(),
        }));
        let store = CatalogStore::new(client);

        assert!(store.fetch_categories().await.is_err());
        assert!(!store.is_loading());
        assert_eq!(store.last_error().as_deref(), Some("Failed to fetch categories"));

        store.fetch_categories().await.unwrap();
        assert_eq!(store.last_error(), None);
        assert!(store.categories().is_empty());
    }
}
