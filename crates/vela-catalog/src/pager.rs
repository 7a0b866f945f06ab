//! # Product Pager
//!
//! Offset pagination for the "all products" list.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  first_page()  ──► offset 0      ──► complete() replaces the list       │
//! │  next_page()   ──► offset += 10  ──► complete() appends                 │
//! │                                                                         │
//! │  page shorter than the limit ──► has_more = false ──► next_page() None  │
//! │  request already in flight   ──────────────────────► both return None   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pager never performs I/O itself. Callers take a [`PageRequest`],
//! run it against a [`CatalogApi`](crate::client::CatalogApi) and hand the
//! outcome back with [`ProductPager::complete`] or [`ProductPager::fail`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vela_core::types::Product;

/// One page to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a page request has to be completed or failed"]
pub struct PageRequest {
    pub offset: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn is_first(&self) -> bool {
        self.offset == 0
    }
}

/// Accumulated product list and paging position.
#[derive(Debug, Clone)]
pub struct ProductPager {
    page_size: u32,
    products: Vec<Product>,
    /// Offset of the next page to request.
    next_offset: u32,
    has_more: bool,
    in_flight: Option<PageRequest>,
}

impl ProductPager {
    pub fn new(page_size: u32) -> Self {
        ProductPager {
            page_size: page_size.max(1),
            products: Vec::new(),
            next_offset: 0,
            has_more: true,
            in_flight: None,
        }
    }

    /// Starts (or restarts) from offset 0.
    ///
    /// Returns `None` while another page is in flight.
    pub fn first_page(&mut self) -> Option<PageRequest> {
        if self.in_flight.is_some() {
            return None;
        }
        self.start(0)
    }

    /// Requests the page after the last completed one.
    ///
    /// Returns `None` while another page is in flight or once the catalog
    /// is exhausted.
    pub fn next_page(&mut self) -> Option<PageRequest> {
        if self.in_flight.is_some() || !self.has_more {
            return None;
        }
        self.start(self.next_offset)
    }

    fn start(&mut self, offset: u32) -> Option<PageRequest> {
        let request = PageRequest {
            offset,
            limit: self.page_size,
        };
        self.in_flight = Some(request);
        Some(request)
    }

    /// Records a fetched page.
    ///
    /// A first page replaces the list; later pages append. Returns `false`
    /// if `request` is not the one in flight.
    pub fn complete(&mut self, request: PageRequest, page: Vec<Product>) -> bool {
        if self.in_flight != Some(request) {
            return false;
        }
        self.in_flight = None;

        let fetched = page.len() as u32;
        if request.is_first() {
            self.products = page;
        } else {
            self.products.extend(page);
        }

        self.next_offset = request.offset + request.limit;
        self.has_more = fetched >= request.limit;
        true
    }

    /// Releases the in-flight slot after a failed request. The list and
    /// position are unchanged, so the same page can be retried.
    pub fn fail(&mut self, request: PageRequest) {
        if self.in_flight == Some(request) {
            self.in_flight = None;
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn snapshot(&self) -> ProductPage {
        ProductPage {
            products: self.products.clone(),
            has_more: self.has_more,
            loading: self.is_loading(),
            next_offset: self.next_offset,
        }
    }
}

/// Paged list state as returned to the product list screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub has_more: bool,
    pub loading: bool,
    pub next_offset: u32,
}
