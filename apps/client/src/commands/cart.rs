//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Shipping │────►│  Order   │       │
//! │  │  Cart    │     │          │     │ Payment  │     │  Placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                 │              │
//! │                   add_to_cart                       place_order         │
//! │                   update / + / -                   (checkout.rs)        │
//! │                   remove_from_cart                       │              │
//! │                        │                                 │              │
//! │                        ▼                                 ▼              │
//! │                   clear_cart ◄─────────────────── cart cleared          │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart commands cannot fail. Unknown products are ignored and a quantity
//! of zero or less removes the line.

use serde::{Deserialize, Serialize};
use tracing::debug;
use vela_core::types::ProductId;
use vela_core::{Cart, CartLineItem, CartTotals, NewLineItem};

use crate::state::CartState;

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.snapshot(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart with items and calculated totals
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases by the incoming quantity
/// - Product not in cart: appended as a new line
/// - Missing or non-positive quantity counts as one
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product details screen: size M, color Blue, "Add to Cart"             │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  add_to_cart({ productId: 4, title, unitPrice, size: "M", ... })       │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  1. Look for a line with productId 4                           │    │
/// │  │     - Yes: quantity += 1 (first size/color kept)               │    │
/// │  │     - No: append with the price shown on screen                │    │
/// │  │  2. Return updated cart                                        │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn add_to_cart(cart: &CartState, item: NewLineItem) -> CartResponse {
    debug!(
        product_id = %item.product_id,
        quantity = ?item.quantity,
        "add_to_cart command"
    );

    cart.with_cart_mut(|c| {
        c.add_item(item);
        CartResponse::from(&*c)
    })
}

/// Sets the quantity of a line. Zero or below removes it.
pub fn update_cart_item(cart: &CartState, product_id: ProductId, quantity: i64) -> CartResponse {
    debug!(product_id = %product_id, quantity, "update_cart_item command");

    cart.with_cart_mut(|c| {
        c.update_quantity(product_id, quantity);
        CartResponse::from(&*c)
    })
}

/// The cart screen's "+" button.
pub fn increment_cart_item(cart: &CartState, product_id: ProductId) -> CartResponse {
    debug!(product_id = %product_id, "increment_cart_item command");

    cart.with_cart_mut(|c| {
        c.increment(product_id);
        CartResponse::from(&*c)
    })
}

/// The cart screen's "-" button. At quantity one the line goes away.
pub fn decrement_cart_item(cart: &CartState, product_id: ProductId) -> CartResponse {
    debug!(product_id = %product_id, "decrement_cart_item command");

    cart.with_cart_mut(|c| {
        c.decrement(product_id);
        CartResponse::from(&*c)
    })
}

/// Removes a line from the cart.
pub fn remove_from_cart(cart: &CartState, product_id: ProductId) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        if !c.remove_item(product_id) {
            debug!(product_id = %product_id, "Product was not in cart");
        }
        CartResponse::from(&*c)
    })
}

/// Clears all items from the cart.
///
/// ## When Used
/// - User empties the cart
/// - After an order is placed
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::line_item;
    use vela_core::money::Money;

    #[test]
    fn test_merge_and_totals() {
        let cart = CartState::new();

        add_to_cart(&cart, line_item(1, 1000));
        let response = add_to_cart(&cart, line_item(1, 1000).with_quantity(2));

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity, 3);
        assert_eq!(response.totals.subtotal, Money::from_cents(3000));
        assert_eq!(response.totals.total_quantity, 3);
    }

    #[test]
    fn test_zero_and_negative_quantity_remove() {
        let cart = CartState::new();
        add_to_cart(&cart, line_item(1, 1000));
        add_to_cart(&cart, line_item(2, 500));

        let response = update_cart_item(&cart, ProductId(1), 0);
        assert_eq!(response.items.len(), 1);

        let response = update_cart_item(&cart, ProductId(2), -1);
        assert!(response.items.is_empty());
        assert_eq!(response.totals.subtotal, Money::zero());
    }

    #[test]
    fn test_plus_minus_buttons() {
        let cart = CartState::new();
        add_to_cart(&cart, line_item(7, 250));

        let response = increment_cart_item(&cart, ProductId(7));
        assert_eq!(response.items[0].quantity, 2);

        decrement_cart_item(&cart, ProductId(7));
        let response = decrement_cart_item(&cart, ProductId(7));
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let cart = CartState::new();
        add_to_cart(&cart, line_item(1, 1000));
        add_to_cart(&cart, line_item(2, 500));

        let response = remove_from_cart(&cart, ProductId(99));
        assert_eq!(response.items.len(), 2);

        let response = remove_from_cart(&cart, ProductId(1));
        assert_eq!(response.items[0].product_id, ProductId(2));

        let response = clear_cart(&cart);
        assert!(response.items.is_empty());
        assert_eq!(get_cart(&cart).totals.subtotal, Money::zero());
    }

    #[test]
    fn test_response_is_camel_case() {
        let cart = CartState::new();
        let response = add_to_cart(&cart, line_item(1, 1000));
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["totals"].get("totalQuantity").is_some());
        assert!(json["items"][0].get("productId").is_some());
    }
}
