//! # Cart
//!
//! The shopping cart owned by the running session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Screen Action            Cart Method             Line Items            │
//! │  ─────────────            ───────────             ──────────            │
//! │                                                                         │
//! │  "Add to cart" ──────────► add_item() ──────────► merge or push         │
//! │                                                                         │
//! │  "+" button ─────────────► increment() ─────────► qty + 1               │
//! │                                                                         │
//! │  "-" button ─────────────► decrement() ─────────► qty - 1 (1 → removed) │
//! │                                                                         │
//! │  Quantity field ─────────► update_quantity() ───► qty = n (≤0 → removed)│
//! │                                                                         │
//! │  Swipe to delete ────────► remove_item() ───────► retain others         │
//! │                                                                         │
//! │  Order placed ───────────► clear() ─────────────► empty                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these operations can fail. Every line item always has a quantity
//! of at least one: a line whose quantity would drop to zero or below is
//! removed instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::checkout::CheckoutSummary;
use crate::money::Money;
use crate::types::{Product, ProductId};

// =============================================================================
// Line Items
// =============================================================================

/// One product entry in the cart.
///
/// ## Price Freezing
/// `unit_price`, `title` and `image_url` are copied from the product when it
/// is added. Later catalog refreshes do not change what the cart shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineItem {
    pub product_id: ProductId,
    pub title: String,
    pub unit_price: Money,
    pub image_url: String,
    /// Always ≥ 1.
    pub quantity: i64,
    pub size: Option<String>,
    pub color: Option<String>,
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLineItem {
    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// Payload for [`Cart::add_item`].
///
/// `quantity` defaults to one when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewLineItem {
    pub product_id: ProductId,
    pub title: String,
    pub unit_price: Money,
    pub image_url: String,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl NewLineItem {
    /// Builds an add-to-cart payload for one unit of a catalog product.
    pub fn from_product(product: &Product) -> Self {
        NewLineItem {
            product_id: product.id,
            title: product.title.clone(),
            unit_price: product.price,
            image_url: product.primary_image().unwrap_or_default().to_string(),
            quantity: None,
            size: None,
            color: None,
        }
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Incoming quantity after defaulting; anything below one counts as one.
    fn effective_quantity(&self) -> i64 {
        self.quantity.unwrap_or(1).max(1)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id` (adding the same product increases quantity)
/// - Quantity is always ≥ 1
/// - Insertion order is preserved for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    pub items: Vec<CartLineItem>,

    /// When the cart was created or last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart or increases its quantity if already present.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity grows by the incoming quantity.
    ///   The existing line keeps its size, color and frozen price.
    /// - Product not in cart: a new line is appended at the end.
    pub fn add_item(&mut self, item: NewLineItem) {
        let quantity = item.effective_quantity();

        if let Some(line) = self.line_mut(item.product_id) {
            line.quantity = line.quantity.saturating_add(quantity);
            return;
        }

        self.items.push(CartLineItem {
            product_id: item.product_id,
            title: item.title,
            unit_price: item.unit_price,
            image_url: item.image_url,
            quantity,
            size: item.size,
            color: item.color,
            added_at: Utc::now(),
        });
    }

    /// Sets the quantity of a line directly.
    ///
    /// ## Behavior
    /// - Quantity ≤ 0: removes the line
    /// - Product not in cart: no-op
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(line) = self.line_mut(product_id) {
            line.quantity = quantity;
        }
    }

    /// Adds one unit to an existing line. No-op for unknown products.
    pub fn increment(&mut self, product_id: ProductId) {
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = line.quantity.saturating_add(1);
        }
    }

    /// Removes one unit from a line; the last unit removes the line.
    pub fn decrement(&mut self, product_id: ProductId) {
        if let Some(quantity) = self.get(product_id).map(|line| line.quantity) {
            self.update_quantity(product_id, quantity - 1);
        }
    }

    /// Removes a line by product ID.
    ///
    /// Returns `true` if a line was removed, `false` if the product was not
    /// in the cart (which is not an error).
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() != initial_len
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Looks up a line by product ID.
    pub fn get(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|i| i.product_id == product_id)
    }

    /// Returns the number of distinct lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines (the tab badge count).
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0, |total, i| total.saturating_add(i.quantity))
    }

    /// Sum of unit price × quantity over all lines. Zero for an empty cart.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Owned copy of the line items, used as the order snapshot.
    pub fn snapshot(&self) -> Vec<CartLineItem> {
        self.items.clone()
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Cart totals summary for the cart screen.
///
/// The cart screen always shows free shipping; the shipping cost of the
/// selected method only enters on the payment step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        let summary = CheckoutSummary::new(&cart.items, None);
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal: summary.subtotal,
            shipping: summary.shipping,
            total: summary.total,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, price_cents: i64) -> NewLineItem {
        NewLineItem {
            product_id: ProductId(id),
            title: format!("Product {}", id),
            unit_price: Money::from_cents(price_cents),
            image_url: format!("https://img.example/{}.png", id),
            quantity: None,
            size: None,
            color: None,
        }
    }

    #[test]
    fn test_add_item_defaults_to_one() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 999));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 1);
        assert_eq!(cart.subtotal().cents(), 999);
    }

    #[test]
    fn test_add_same_product_merges_quantity() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 999).with_quantity(1));
        cart.add_item(item(1, 999).with_quantity(2));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.get(ProductId(1)).map(|l| l.quantity), Some(3));
    }

    #[test]
    fn test_merge_keeps_first_options() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 999).with_size("M"));
        cart.add_item(item(1, 999).with_size("L"));

        let line = cart.get(ProductId(1)).unwrap();
        assert_eq!(line.size.as_deref(), Some("M"));
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add_item(item(3, 100));
        cart.add_item(item(1, 100));
        cart.add_item(item(2, 100));
        cart.add_item(item(3, 100));

        let ids: Vec<i64> = cart.items.iter().map(|l| l.product_id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_add_non_positive_quantity_counts_as_one() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 100).with_quantity(0));
        cart.add_item(item(1, 100).with_quantity(-4));
        assert_eq!(cart.get(ProductId(1)).map(|l| l.quantity), Some(2));
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 999).with_quantity(i64::MAX));
        cart.add_item(item(1, 999));
        cart.increment(ProductId(1));
        cart.add_item(item(2, 100));

        assert_eq!(cart.get(ProductId(1)).map(|l| l.quantity), Some(i64::MAX));
        assert_eq!(cart.total_quantity(), i64::MAX);
        assert_eq!(cart.subtotal().cents(), i64::MAX);
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 100));
        cart.update_quantity(ProductId(1), 7);
        assert_eq!(cart.get(ProductId(1)).map(|l| l.quantity), Some(7));
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 100));
        cart.add_item(item(2, 100));

        cart.update_quantity(ProductId(1), 0);
        assert!(cart.get(ProductId(1)).is_none());

        cart.update_quantity(ProductId(2), -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_unknown_product_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 100));
        cart.update_quantity(ProductId(42), 5);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 1);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 100));

        cart.increment(ProductId(1));
        assert_eq!(cart.get(ProductId(1)).map(|l| l.quantity), Some(2));

        cart.decrement(ProductId(1));
        assert_eq!(cart.get(ProductId(1)).map(|l| l.quantity), Some(1));

        cart.decrement(ProductId(1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 100));

        assert!(!cart.remove_item(ProductId(9)));
        assert!(cart.remove_item(ProductId(1)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 1000).with_quantity(2));
        cart.add_item(item(2, 500));

        assert_eq!(cart.subtotal(), Money::from_cents(2500));
    }

    #[test]
    fn test_clear_then_subtotal_is_zero() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 1000).with_quantity(2));
        cart.clear();

        assert!(cart.is_empty());
        assert!(cart.subtotal().is_zero());
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 1000).with_quantity(2));
        cart.add_item(item(2, 500));

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.subtotal.cents(), 2500);
        assert!(totals.shipping.is_zero());
        assert_eq!(totals.total.cents(), 2500);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 1000));
        let snapshot = cart.snapshot();

        cart.update_quantity(ProductId(1), 5);
        assert_eq!(snapshot[0].quantity, 1);
    }
}
