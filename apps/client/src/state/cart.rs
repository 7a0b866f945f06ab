//! # Cart State
//!
//! The session's shopping cart.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Screen Action            Command                 Cart Change           │
//! │  ─────────────            ───────                 ───────────           │
//! │                                                                         │
//! │  Add to Cart ────────────► add_to_cart() ───────► merge or append      │
//! │                                                                         │
//! │  + / - buttons ──────────► increment/decrement ─► qty ± 1 (0 removes)  │
//! │                                                                         │
//! │  Edit Quantity ──────────► update_cart_item() ──► qty = n (≤0 removes) │
//! │                                                                         │
//! │  Swipe Remove ───────────► remove_from_cart() ──► items.remove(i)      │
//! │                                                                         │
//! │  Order Placed ───────────► clear_cart() ────────► items.clear()        │
//! │                                                                         │
//! │  NOTE: The lock is never held across an .await.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use vela_core::Cart;

/// Shared handle to the session cart.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vela_core::money::Money;
    use vela_core::types::ProductId;
    use vela_core::NewLineItem;

    fn line(id: i64) -> NewLineItem {
        NewLineItem {
            product_id: ProductId(id),
            title: format!("Product {}", id),
            unit_price: Money::from_cents(500),
            image_url: String::new(),
            quantity: None,
            size: None,
            color: None,
        }
    }

    #[test]
    fn test_clones_share_cart() {
        let state = CartState::new();
        let other = state.clone();

        state.with_cart_mut(|cart| cart.add_item(line(1)));
        other.with_cart_mut(|cart| cart.add_item(line(1)));

        assert_eq!(state.with_cart(|cart| cart.total_quantity()), 2);
        assert_eq!(other.with_cart(|cart| cart.subtotal()), Money::from_cents(1000));
    }
}
