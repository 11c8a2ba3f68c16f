//! # Cart
//!
//! The shopping cart: an ordered collection of line items keyed by product id,
//! plus the list of observers told about every change.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action             Cart Method              Effect                  │
//! │  ─────────             ───────────              ──────                  │
//! │                                                                         │
//! │  "Add to Cart" ──────► add_item(product) ─────► qty += 1 or append     │
//! │                                                                         │
//! │  "+" / "-" ──────────► update_qty(id, ±1) ────► qty += delta,          │
//! │                                                  removed when ≤ 0       │
//! │                                                                         │
//! │  Discount toggle ────► notify() ──────────────► re-render only         │
//! │                                                                         │
//! │  Every method above ends by calling every observer, in registration    │
//! │  order, with the full current item list.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Execution Model
//! Single-threaded and synchronous: each mutation and its notification runs
//! to completion before the next one starts. Observers receive a borrowed
//! slice and cannot hold on to it past the call.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductId};

// =============================================================================
// Cart Line Item
// =============================================================================

/// A product plus a quantity.
///
/// ## Invariants
/// - `qty >= 1` while the item is stored in a [`Cart`]
/// - Product fields are a verbatim copy taken when the item was first added
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,

    pub qty: i64,
}

impl CartLineItem {
    fn new(product: &Product) -> Self {
        CartLineItem {
            product: product.clone(),
            qty: 1,
        }
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.qty)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// Callback invoked with the current line items on every notification.
pub type Observer = Box<dyn FnMut(&[CartLineItem])>;

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by product id (adding the same product raises `qty`)
/// - Insertion order is preserved for display
/// - No stored item has `qty <= 0`
///
/// Observers accumulate for the cart's lifetime; there is no unsubscribe.
#[derive(Default)]
pub struct Cart {
    items: Vec<CartLineItem>,
    observers: Vec<Observer>,
}

impl Cart {
    /// Creates an empty cart with no observers.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds one unit of `product`, then notifies.
    ///
    /// ## Behavior
    /// - Product already in cart: its `qty` goes up by one
    /// - Product not in cart: appended at the end with `qty = 1`
    pub fn add_item(&mut self, product: &Product) {
        match self.items.iter_mut().find(|i| i.id() == product.id) {
            Some(item) => {
                item.qty += 1;
                debug!(product_id = %product.id, qty = item.qty, "cart item incremented");
            }
            None => {
                self.items.push(CartLineItem::new(product));
                debug!(product_id = %product.id, "cart item added");
            }
        }
        self.notify();
    }

    /// Adds `delta` (may be negative) to an item's quantity, then notifies.
    ///
    /// ## Behavior
    /// - Resulting `qty <= 0`: the item is removed
    /// - Unknown `product_id`: nothing changes
    ///
    /// Observers are called in every case, including the no-op one.
    pub fn update_qty(&mut self, product_id: ProductId, delta: i64) {
        if let Some(pos) = self.items.iter().position(|i| i.id() == product_id) {
            let item = &mut self.items[pos];
            item.qty += delta;
            if item.qty <= 0 {
                self.items.remove(pos);
                debug!(product_id = %product_id, "cart item removed");
            } else {
                debug!(product_id = %product_id, qty = item.qty, "cart item quantity updated");
            }
        } else {
            debug!(product_id = %product_id, "update for product not in cart ignored");
        }
        self.notify();
    }

    /// Empties the cart, then notifies.
    pub fn clear(&mut self) {
        self.items.clear();
        debug!("cart cleared");
        self.notify();
    }

    /// Registers an observer for every future notification.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&[CartLineItem]) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Calls every observer, in registration order, with the current items.
    pub fn notify(&mut self) {
        debug!(
            observers = self.observers.len(),
            items = self.items.len(),
            "notifying cart observers"
        );
        for observer in self.observers.iter_mut() {
            observer(&self.items);
        }
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.id() == product_id)
    }

    /// Number of distinct products in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across all items.
    pub fn total_quantity(&self) -> i64 {
        total_quantity(&self.items)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

/// Sum of quantities across `items`, for observers that only see the slice.
pub fn total_quantity(items: &[CartLineItem]) -> i64 {
    items.iter().map(|i| i.qty).sum()
}

impl fmt::Debug for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cart")
            .field("items", &self.items)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
