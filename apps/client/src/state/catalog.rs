//! # Product List State
//!
//! Paging position of the "all products" screen. The home screen cache
//! lives in [`CatalogStore`](vela_catalog::CatalogStore) instead.

use std::sync::{Arc, Mutex, PoisonError};

use vela_catalog::ProductPager;

#[derive(Debug, Clone)]
pub struct PagerState {
    pager: Arc<Mutex<ProductPager>>,
}

impl PagerState {
    pub fn new(page_size: u32) -> Self {
        PagerState {
            pager: Arc::new(Mutex::new(ProductPager::new(page_size))),
        }
    }

    pub fn with_pager<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ProductPager) -> R,
    {
        let pager = self.pager.lock().unwrap_or_else(PoisonError::into_inner);
        f(&pager)
    }

    pub fn with_pager_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ProductPager) -> R,
    {
        let mut pager = self.pager.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut pager)
    }
}
