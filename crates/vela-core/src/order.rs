//! # Orders
//!
//! Turns a cart snapshot and the shipping selection into an immutable order.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Cart ──snapshot()──► Vec<CartLineItem> ─┐                            │
//! │                                           │                            │
//! │   ShippingAddress ────────────────────────┼──► OrderBook::create_order │
//! │                                           │          │                 │
//! │   ShippingMethod ─────────────────────────┘          ▼                 │
//! │                                              Order { status: Pending } │
//! │                                                      │                 │
//! │   Cart::clear()  ◄── separate call by the caller ────┘                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Creating an order never touches the cart. Items, address, method and
//! totals are frozen at creation; only the status moves afterwards, and only
//! through [`OrderBook::set_status`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::CartLineItem;
use crate::checkout::CheckoutSummary;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{OrderStatus, ShippingAddress, ShippingMethod};

// =============================================================================
// Order
// =============================================================================

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    /// UUID v4, generated at creation.
    pub id: String,
    pub items: Vec<CartLineItem>,
    pub shipping_address: ShippingAddress,
    pub shipping_method: ShippingMethod,
    pub subtotal: Money,
    pub shipping: Money,
    /// subtotal + shipping, frozen at creation.
    pub total: Money,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}

impl Order {
    /// Total quantity across the order's line items.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |total, i| total.saturating_add(i.quantity))
    }
}

// =============================================================================
// Order Book
// =============================================================================

/// The session's list of placed orders, oldest first.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an order from a cart snapshot, appends it and returns it.
    ///
    /// ## Totals
    /// Computed through [`CheckoutSummary`], so the order total matches
    /// what the payment screen displayed for the same items and method.
    pub fn create_order(
        &mut self,
        items: Vec<CartLineItem>,
        shipping_address: ShippingAddress,
        shipping_method: ShippingMethod,
    ) -> &Order {
        let summary = CheckoutSummary::new(&items, Some(&shipping_method));

        let order = Order {
            id: Uuid::new_v4().to_string(),
            items,
            shipping_address,
            shipping_method,
            subtotal: summary.subtotal,
            shipping: summary.shipping,
            total: summary.total,
            created_at: Utc::now(),
            status: OrderStatus::Pending,
        };

        self.orders.push(order);
        let last = self.orders.len() - 1;
        &self.orders[last]
    }

    /// Moves an order one step along its lifecycle.
    ///
    /// ## Errors
    /// - [`CoreError::OrderNotFound`] for an unknown id
    /// - [`CoreError::InvalidStatusTransition`] when `status` is not the
    ///   next step after the current one
    pub fn set_status(&mut self, order_id: &str, status: OrderStatus) -> CoreResult<&Order> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| CoreError::OrderNotFound(order_id.to_string()))?;

        if !order.status.can_transition_to(status) {
            return Err(CoreError::InvalidStatusTransition {
                order_id: order_id.to_string(),
                from: order.status,
                to: status,
            });
        }

        order.status = status;
        Ok(order)
    }

    pub fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{Cart, NewLineItem};
    use crate::types::ProductId;

    fn address() -> ShippingAddress {
        ShippingAddress {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            country: "UK".to_string(),
            street: "12 St James's Square".to_string(),
            city: "London".to_string(),
            state: None,
            zip_code: "SW1Y 4JH".to_string(),
            phone: "+44 20 7946 0000".to_string(),
        }
    }

    fn standard() -> ShippingMethod {
        ShippingMethod::new(
            "standard",
            "$ 9.90",
            Money::from_cents(990),
            "Delivery from 4 to 6 business days",
        )
    }

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(NewLineItem {
            product_id: ProductId(1),
            title: "Sneakers".to_string(),
            unit_price: Money::from_cents(1000),
            image_url: String::new(),
            quantity: Some(2),
            size: Some("42".to_string()),
            color: None,
        });
        cart.add_item(NewLineItem {
            product_id: ProductId(2),
            title: "Socks".to_string(),
            unit_price: Money::from_cents(500),
            image_url: String::new(),
            quantity: None,
            size: None,
            color: None,
        });
        cart
    }

    #[test]
    fn test_create_order_totals() {
        let cart = cart();
        let mut book = OrderBook::new();

        let order = book.create_order(cart.snapshot(), address(), standard());
        assert_eq!(order.subtotal.cents(), 2500);
        assert_eq!(order.shipping.cents(), 990);
        assert_eq!(order.total.cents(), 3490);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total_quantity(), 3);
        assert!(Uuid::parse_str(&order.id).is_ok());
    }

    #[test]
    fn test_create_order_leaves_cart_untouched() {
        let cart = cart();
        let mut book = OrderBook::new();
        book.create_order(cart.snapshot(), address(), standard());

        assert_eq!(cart.item_count(), 2);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_order_ids_are_unique() {
        let cart = cart();
        let mut book = OrderBook::new();
        let first = book.create_order(cart.snapshot(), address(), standard()).id.clone();
        let second = book.create_order(cart.snapshot(), address(), standard()).id.clone();

        assert_ne!(first, second);
        assert_eq!(book.orders()[0].id, first);
        assert!(book.get(&second).is_some());
    }

    #[test]
    fn test_set_status_follows_table() {
        let cart = cart();
        let mut book = OrderBook::new();
        let id = book.create_order(cart.snapshot(), address(), standard()).id.clone();

        assert!(book.set_status(&id, OrderStatus::Processing).is_ok());
        assert!(book.set_status(&id, OrderStatus::Shipped).is_ok());
        assert!(book.set_status(&id, OrderStatus::Delivered).is_ok());
        assert_eq!(book.get(&id).map(|o| o.status), Some(OrderStatus::Delivered));
    }

    #[test]
    fn test_set_status_rejects_skips_and_reversals() {
        let cart = cart();
        let mut book = OrderBook::new();
        let id = book.create_order(cart.snapshot(), address(), standard()).id.clone();

        let result = book.set_status(&id, OrderStatus::Shipped);
        assert!(matches!(
            result,
            Err(CoreError::InvalidStatusTransition {
                from: OrderStatus::Pending,
                to: OrderStatus::Shipped,
                ..
            })
        ));

        book.set_status(&id, OrderStatus::Processing).unwrap();
        assert!(book.set_status(&id, OrderStatus::Pending).is_err());
        assert_eq!(book.get(&id).map(|o| o.status), Some(OrderStatus::Processing));
    }

    #[test]
    fn test_set_status_unknown_order() {
        let mut book = OrderBook::new();
        let result = book.set_status("missing", OrderStatus::Processing);
        assert!(matches!(result, Err(CoreError::OrderNotFound(id)) if id == "missing"));
    }
}
