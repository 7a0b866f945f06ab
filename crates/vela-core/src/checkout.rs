//! # Checkout Summary
//!
//! The single place where subtotal, shipping and grand total are computed.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart screen ─────────┐                                                 │
//! │                       │                                                 │
//! │  Payment screen ──────┼──► CheckoutSummary::new(items, method)          │
//! │                       │       subtotal = Σ unit_price × quantity        │
//! │  create_order() ──────┘       shipping = method.unit_price (or 0)       │
//! │                               total    = subtotal + shipping            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Because all three callers go through this type, the total shown on the
//! payment step is exactly the total frozen into the order.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLineItem;
use crate::money::Money;
use crate::types::ShippingMethod;

/// Label shown instead of an amount when shipping costs nothing.
pub const FREE_SHIPPING_LABEL: &str = "Freeship";

/// Derived totals for a set of line items and an optional shipping method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutSummary {
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
}

impl CheckoutSummary {
    /// Computes the summary. No method selected means no shipping charge.
    pub fn new(items: &[CartLineItem], method: Option<&ShippingMethod>) -> Self {
        let subtotal: Money = items.iter().map(CartLineItem::line_total).sum();
        let shipping = method.map(|m| m.unit_price).unwrap_or_default();

        CheckoutSummary {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }

    pub fn is_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// "Freeship" for zero shipping, otherwise the amount.
    pub fn shipping_label(&self) -> String {
        if self.is_free_shipping() {
            FREE_SHIPPING_LABEL.to_string()
        } else {
            self.shipping.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductId;
    use chrono::Utc;

    fn line(id: i64, price_cents: i64, quantity: i64) -> CartLineItem {
        CartLineItem {
            product_id: ProductId(id),
            title: format!("Product {}", id),
            unit_price: Money::from_cents(price_cents),
            image_url: String::new(),
            quantity,
            size: None,
            color: None,
            added_at: Utc::now(),
        }
    }

    #[test]
    fn test_summary_with_paid_shipping() {
        let items = vec![line(1, 1000, 2), line(2, 500, 1)];
        let standard = ShippingMethod::new("standard", "$ 9.90", Money::from_cents(990), "4-6 days");

        let summary = CheckoutSummary::new(&items, Some(&standard));
        assert_eq!(summary.subtotal.cents(), 2500);
        assert_eq!(summary.shipping.cents(), 990);
        assert_eq!(summary.total.cents(), 3490);
        assert_eq!(summary.shipping_label(), "$9.90");
    }

    #[test]
    fn test_summary_without_method_is_free() {
        let items = vec![line(1, 1250, 1)];
        let summary = CheckoutSummary::new(&items, None);

        assert!(summary.is_free_shipping());
        assert_eq!(summary.total.cents(), 1250);
        assert_eq!(summary.shipping_label(), "Freeship");
    }

    #[test]
    fn test_empty_items() {
        let summary = CheckoutSummary::new(&[], None);
        assert!(summary.subtotal.is_zero());
        assert!(summary.total.is_zero());
    }
}
