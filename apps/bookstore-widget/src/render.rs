//! # Render
//!
//! Turns catalog and cart state into view models for the page, and provides
//! the cart observer that keeps the latest cart view current.
//!
//! ## Cart Render Pass
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart.notify(items)                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. One CartLineView per item (name, author, price, qty, +/- target)   │
//! │  2. total = active calculator(items)                                    │
//! │  3. discount active and base total < threshold?                         │
//! │       ├─ yes: reset to Inactive, total = base total, label "USE"        │
//! │       └─ no:  keep total                                                │
//! │  4. Store the CartView for the next command response                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use bookstore_core::cart::total_quantity;
use bookstore_core::{
    CartLineItem, Catalog, Category, DiscountState, DiscountStatus, Money, ProductId,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::state::{ConfigState, SharedDiscount};

// =============================================================================
// View Models
// =============================================================================

/// A catalog entry as shown in the product grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    /// Target of the card's "Add to Cart" action.
    pub id: ProductId,
    pub name: String,
    pub author: String,
    pub image: String,
    pub category: Category,
    pub price: Money,
    pub price_display: String,
}

/// One row of the cart panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    /// Target of the row's `+` / `-` actions.
    pub id: ProductId,
    pub name: String,
    pub author: String,
    pub image: String,
    pub price_display: String,
    pub qty: i64,
    pub line_total_display: String,
}

/// The whole cart panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub item_count: usize,
    pub total_quantity: i64,

    /// Undiscounted total.
    pub subtotal: Money,

    /// Total shown to the shopper.
    pub total: Money,
    pub total_display: String,

    pub discount: DiscountStatus,

    /// Text of the discount button ("USE" or "REMOVE").
    pub discount_label: String,

    /// Set when this render switched the discount off automatically.
    pub discount_reset: bool,
}

impl CartView {
    /// View of an empty cart with the discount off.
    pub fn empty(config: &ConfigState) -> Self {
        render_cart(&[], &mut DiscountState::with_policy(config.discount_policy()), config)
    }
}

// =============================================================================
// Render Functions
// =============================================================================

/// Renders the product grid in catalog order.
pub fn render_products(catalog: &Catalog, config: &ConfigState) -> Vec<ProductCard> {
    catalog
        .products()
        .iter()
        .map(|p| ProductCard {
            id: p.id,
            name: p.name.clone(),
            author: p.author.clone(),
            image: p.image.clone(),
            category: p.category,
            price: p.price,
            price_display: config.format_currency(p.price),
        })
        .collect()
}

/// Renders the cart panel and applies the discount auto-reset rule.
///
/// The total is first computed with the active calculator. If the discount
/// is active but the undiscounted total is under the threshold, the
/// discount is switched off and the undiscounted total is shown instead.
pub fn render_cart(
    items: &[CartLineItem],
    discount: &mut DiscountState,
    config: &ConfigState,
) -> CartView {
    let lines = items
        .iter()
        .map(|item| CartLineView {
            id: item.id(),
            name: item.product.name.clone(),
            author: item.product.author.clone(),
            image: item.product.image.clone(),
            price_display: config.format_currency(item.product.price),
            qty: item.qty,
            line_total_display: config.format_currency(item.line_total()),
        })
        .collect::<Vec<_>>();

    let subtotal = discount.base_total(items);
    let mut total = discount.total(items);

    let discount_reset = discount.reconcile(items);
    if discount_reset {
        total = subtotal;
    }

    CartView {
        item_count: lines.len(),
        total_quantity: total_quantity(items),
        items: lines,
        subtotal,
        total,
        total_display: config.format_currency(total),
        discount: discount.status(),
        discount_label: discount.action_label().to_string(),
        discount_reset,
    }
}

/// Builds the observer that re-renders the cart on every notification.
///
/// Each pass writes its result into `latest`.
pub fn cart_observer(
    discount: SharedDiscount,
    config: Rc<ConfigState>,
    latest: Rc<RefCell<CartView>>,
) -> impl FnMut(&[CartLineItem]) + 'static {
    move |items: &[CartLineItem]| {
        let view = render_cart(items, &mut discount.borrow_mut(), &config);
        debug!(
            items = view.item_count,
            total = %view.total,
            discount = ?view.discount,
            "cart rendered"
        );
        *latest.borrow_mut() = view;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::catalog::default_catalog;
    use bookstore_core::Cart;

    #[test]
    fn test_render_products_in_catalog_order() {
        let config = ConfigState::default();
        let cards = render_products(&default_catalog(), &config);

        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].name, "The Brothers Karamazov (1880)");
        assert_eq!(cards[2].price_display, "₱250.00");
        assert_eq!(cards[3].category, Category::Thriller);
    }

    #[test]
    fn test_empty_view() {
        let view = CartView::empty(&ConfigState::default());
        assert!(view.items.is_empty());
        assert_eq!(view.total_display, "₱0.00");
        assert_eq!(view.discount, DiscountStatus::Inactive);
        assert_eq!(view.discount_label, "USE");
        assert!(!view.discount_reset);
    }

    #[test]
    fn test_render_cart_lines_and_totals() {
        let config = ConfigState::default();
        let catalog = default_catalog();
        let mut cart = Cart::new();
        cart.add_item(catalog.get(ProductId(3)).unwrap());
        cart.add_item(catalog.get(ProductId(3)).unwrap());
        cart.add_item(catalog.get(ProductId(4)).unwrap());

        let view = render_cart(cart.items(), &mut DiscountState::new(), &config);

        assert_eq!(view.item_count, 2);
        assert_eq!(view.total_quantity, 3);
        assert_eq!(view.items[0].qty, 2);
        assert_eq!(view.items[0].line_total_display, "₱500.00");
        assert_eq!(view.total, Money::from_major(1000));
        assert_eq!(view.subtotal, Money::from_major(1000));
    }

    #[test]
    fn test_render_cart_with_discount() {
        let config = ConfigState::default();
        let catalog = default_catalog();
        let mut cart = Cart::new();
        cart.add_item(catalog.get(ProductId(1)).unwrap());
        let mut discount = DiscountState::new();
        discount.toggle();

        let view = render_cart(cart.items(), &mut discount, &config);

        assert_eq!(view.total_display, "₱450.00");
        assert_eq!(view.subtotal, Money::from_major(900));
        assert_eq!(view.discount_label, "REMOVE");
        assert!(!view.discount_reset);
    }

    #[test]
    fn test_render_cart_auto_reset_shows_base_total() {
        let config = ConfigState::default();
        let mut discount = DiscountState::new();
        discount.toggle();

        let view = render_cart(&[], &mut discount, &config);

        assert!(view.discount_reset);
        assert_eq!(view.discount, DiscountStatus::Inactive);
        assert_eq!(view.discount_label, "USE");
        assert!(!discount.is_active());
    }

    #[test]
    fn test_cart_observer_updates_latest_view() {
        let config = Rc::new(ConfigState::default());
        let discount: SharedDiscount = Rc::new(RefCell::new(DiscountState::new()));
        let latest = Rc::new(RefCell::new(CartView::empty(&config)));

        let mut cart = Cart::new();
        cart.subscribe(cart_observer(
            Rc::clone(&discount),
            Rc::clone(&config),
            Rc::clone(&latest),
        ));

        let catalog = default_catalog();
        cart.add_item(catalog.get(ProductId(2)).unwrap());

        assert_eq!(latest.borrow().item_count, 1);
        assert_eq!(latest.borrow().total_display, "₱900.00");
    }
}
