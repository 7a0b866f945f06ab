//! # Product Commands
//!
//! Home screen cache, the paged product list, product details and search.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Screen              Command                  Source                    │
//! │  ──────              ───────                  ──────                    │
//! │  Home                refresh_catalog    ───►  CatalogStore (cached)     │
//! │                      get_catalog        ───►  cache, filtered locally   │
//! │  All products        load_product_page  ───►  PagerState + CatalogApi   │
//! │  Product details     get_product        ───►  CatalogApi (uncached)     │
//! │  Category            get_products_by_category ───► CatalogApi           │
//! │  Discover            search_products    ───►  CatalogApi (uncached)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};
use vela_catalog::{CatalogApi, CatalogSnapshot, CatalogStore, ProductPage, ProductQuery};
use vela_core::types::{CategoryId, Product, ProductId};

use crate::error::ApiError;
use crate::state::{ClientConfig, PagerState};

/// Fetches the home screen products and the category list together.
///
/// Failures do not surface as `Err`; they land in the snapshot's `error`
/// field, which is what the home screen renders.
///
/// ## Arguments
/// * `limit` - Products to fetch (default: `catalog.featured_limit`)
pub async fn refresh_catalog<C: CatalogApi>(
    catalog: &CatalogStore<C>,
    config: &ClientConfig,
    limit: Option<u32>,
) -> CatalogSnapshot {
    let limit = limit.unwrap_or(config.catalog.featured_limit);
    debug!(limit, "refresh_catalog command");

    let (products, categories) =
        tokio::join!(catalog.fetch_products(limit), catalog.fetch_categories());

    let snapshot = catalog.snapshot();
    info!(
        products = snapshot.products.len(),
        categories = snapshot.categories.len(),
        products_ok = products.is_ok(),
        categories_ok = categories.is_ok(),
        "Catalog refreshed"
    );
    snapshot
}

/// Reads the cached catalog, optionally narrowed to one category.
pub fn get_catalog<C: CatalogApi>(
    catalog: &CatalogStore<C>,
    category_id: Option<CategoryId>,
) -> CatalogSnapshot {
    debug!(category_id = ?category_id, "get_catalog command");

    catalog.with_cache(|cache| CatalogSnapshot {
        products: cache.products_in_category(category_id),
        ..cache.snapshot()
    })
}

/// Dismisses the error banner.
pub fn clear_catalog_error<C: CatalogApi>(catalog: &CatalogStore<C>) -> CatalogSnapshot {
    debug!("clear_catalog_error command");
    catalog.clear_error();
    catalog.snapshot()
}

/// Gets one product for the details screen.
///
/// ## Returns
/// The product, or `NOT_FOUND` when the API answers 404
pub async fn get_product<C: CatalogApi>(
    catalog: &CatalogStore<C>,
    id: ProductId,
) -> Result<Product, ApiError> {
    debug!(id = %id, "get_product command");
    Ok(catalog.client().get_product(id).await?)
}

pub async fn get_products_by_category<C: CatalogApi>(
    catalog: &CatalogStore<C>,
    category_id: CategoryId,
) -> Result<Vec<Product>, ApiError> {
    debug!(category_id = %category_id, "get_products_by_category command");

    let products = catalog.client().products_by_category(category_id).await?;
    info!(category_id = %category_id, count = products.len(), "Category products loaded");
    Ok(products)
}

/// Searches the catalog with the discover screen's filters.
///
/// ## Validation
/// - Title at most 100 characters after trimming
/// - Prices non-negative, `priceMin ≤ priceMax`
pub async fn search_products<C: CatalogApi>(
    catalog: &CatalogStore<C>,
    query: ProductQuery,
) -> Result<Vec<Product>, ApiError> {
    debug!(query = ?query, "search_products command");

    let query = query.validated()?;
    let products = catalog.client().search_products(&query).await?;

    info!(count = products.len(), title = ?query.title, "search_products complete");
    Ok(products)
}

/// Loads the next page of the "all products" list.
///
/// ## Behavior
/// - `reset = true`: starts again from offset 0 and replaces the list
/// - otherwise appends the next page
/// - No request is made while one is in flight or after the last page;
///   the current state is returned instead
/// - A failed page leaves the list untouched and can be retried
pub async fn load_product_page<C: CatalogApi>(
    catalog: &CatalogStore<C>,
    pager: &PagerState,
    reset: bool,
) -> Result<ProductPage, ApiError> {
    debug!(reset, "load_product_page command");

    let request = pager.with_pager_mut(|p| if reset { p.first_page() } else { p.next_page() });
    let Some(request) = request else {
        debug!("No page to load");
        return Ok(pager.with_pager(|p| p.snapshot()));
    };

    match catalog
        .client()
        .list_products(request.offset, request.limit)
        .await
    {
        Ok(products) => {
            let count = products.len();
            let page = pager.with_pager_mut(|p| {
                p.complete(request, products);
                p.snapshot()
            });
            info!(
                offset = request.offset,
                count,
                has_more = page.has_more,
                "Product page loaded"
            );
            Ok(page)
        }
        Err(err) => {
            pager.with_pager_mut(|p| p.fail(request));
            Err(err.into())
        }
    }
}
