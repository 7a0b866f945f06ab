//! # Order State
//!
//! Orders placed during this session. Nothing is persisted; the list is
//! gone when the app exits.

use std::sync::{Arc, Mutex, PoisonError};

use vela_core::OrderBook;

#[derive(Debug, Clone, Default)]
pub struct OrderState {
    book: Arc<Mutex<OrderBook>>,
}

impl OrderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderBook) -> R,
    {
        let book = self.book.lock().unwrap_or_else(PoisonError::into_inner);
        f(&book)
    }

    pub fn with_orders_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderBook) -> R,
    {
        let mut book = self.book.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut book)
    }
}
