//! # Checkout Commands
//!
//! Shipping options, payment totals, placing orders and moving them along.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Flow                                        │
//! │                                                                         │
//! │  Cart ──► Shipping ──────────────► Payment ─────────────► Order Placed │
//! │           get_shipping_methods     get_checkout_summary   place_order  │
//! │           (address form)           (subtotal, shipping,   (validate,   │
//! │                                     total, label)          snapshot,   │
//! │                                                            clear cart) │
//! │                                                                         │
//! │  Orders tab: list_orders / get_order                                   │
//! │  Backend push: update_order_status                                     │
//! │                pending ──► processing ──► shipped ──► delivered        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart screen, the payment screen and the stored order all compute
//! their numbers through `CheckoutSummary`, so they always agree.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use vela_core::checkout::CheckoutSummary;
use vela_core::types::{OrderStatus, ShippingAddress, ShippingMethod};
use vela_core::validation::validate_shipping_address;
use vela_core::Order;

use crate::error::ApiError;
use crate::state::{CartState, ClientConfig, OrderState};

/// Totals for the payment screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummaryResponse {
    #[serde(flatten)]
    pub summary: CheckoutSummary,
    /// "Freeship" or the formatted shipping amount
    pub shipping_label: String,
    /// Total formatted with the configured currency
    pub total_display: String,
}

/// Lists the delivery options in configured order.
pub fn get_shipping_methods(config: &ClientConfig) -> Vec<ShippingMethod> {
    debug!("get_shipping_methods command");
    config.shipping_methods()
}

fn shipping_method(config: &ClientConfig, id: &str) -> Result<ShippingMethod, ApiError> {
    config
        .shipping_method(id)
        .ok_or_else(|| ApiError::not_found("Shipping method", id))
}

/// Computes what the payment screen shows for the current cart.
///
/// ## Arguments
/// * `method_id` - Selected shipping option; `None` before one is chosen
pub fn get_checkout_summary(
    cart: &CartState,
    config: &ClientConfig,
    method_id: Option<&str>,
) -> Result<CheckoutSummaryResponse, ApiError> {
    debug!(method_id = ?method_id, "get_checkout_summary command");

    let method = method_id.map(|id| shipping_method(config, id)).transpose()?;
    let summary = cart.with_cart(|c| CheckoutSummary::new(&c.items, method.as_ref()));

    Ok(CheckoutSummaryResponse {
        shipping_label: summary.shipping_label(),
        total_display: config.format_currency(summary.total.cents()),
        summary,
    })
}

/// Places an order for everything in the cart.
///
/// ## Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Validate the shipping address       ──► VALIDATION_ERROR           │
/// │  2. Resolve the shipping method         ──► NOT_FOUND                  │
/// │  3. Lock the cart; empty?               ──► CART_ERROR                 │
/// │  4. Snapshot items, create the order (status pending, UUID id)        │
/// │  5. Clear the cart, release the lock                                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Nothing changes when any step fails.
pub fn place_order(
    cart: &CartState,
    orders: &OrderState,
    config: &ClientConfig,
    address: ShippingAddress,
    method_id: &str,
) -> Result<Order, ApiError> {
    debug!(method_id = %method_id, "place_order command");

    validate_shipping_address(&address)?;
    let method = shipping_method(config, method_id)?;

    let order = cart.with_cart_mut(|c| {
        if c.is_empty() {
            return Err(ApiError::cart("Cart is empty"));
        }

        let items = c.snapshot();
        let order = orders.with_orders_mut(|book| book.create_order(items, address, method).clone());
        c.clear();
        Ok(order)
    })?;

    info!(
        order_id = %order.id,
        items = order.items.len(),
        total = %order.total,
        "Order placed"
    );
    Ok(order)
}

/// Lists this session's orders, oldest first.
pub fn list_orders(orders: &OrderState) -> Vec<Order> {
    debug!("list_orders command");
    orders.with_orders(|book| book.orders().to_vec())
}

pub fn get_order(orders: &OrderState, order_id: &str) -> Result<Order, ApiError> {
    debug!(order_id = %order_id, "get_order command");
    orders
        .with_orders(|book| book.get(order_id).cloned())
        .ok_or_else(|| ApiError::not_found("Order", order_id))
}

/// Moves an order to its next status.
///
/// ## Errors
/// - `NOT_FOUND` for an unknown order id
/// - `BUSINESS_LOGIC` when `status` is not the next step
pub fn update_order_status(
    orders: &OrderState,
    order_id: &str,
    status: OrderStatus,
) -> Result<Order, ApiError> {
    debug!(order_id = %order_id, status = %status, "update_order_status command");

    let order = orders.with_orders_mut(|book| book.set_status(order_id, status).cloned())?;
    info!(order_id = %order_id, status = %status, "Order status updated");
    Ok(order)
}
