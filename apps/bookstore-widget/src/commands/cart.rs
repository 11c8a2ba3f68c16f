//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart   ┌──────────┐  update_cart_item(-1)        │
//! │  │  Empty   │───────────────►│ In Cart  │──────────────┐               │
//! │  │  Cart    │                │ qty ≥ 1  │◄─────────────┘ qty still ≥ 1  │
//! │  └──────────┘                └──────────┘                               │
//! │       ▲                           │                                     │
//! │       └───── clear_cart ──────────┤                                     │
//! │       └───── last item reaches qty 0                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command returns the view rendered by the notification it caused.

use bookstore_core::ProductId;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::render::CartView;
use crate::storefront::Storefront;

/// Gets the current cart view.
pub fn get_cart(store: &Storefront) -> CartView {
    debug!("get_cart command");
    store.view().clone()
}

/// Adds one unit of a catalog product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases by one
/// - If product not in cart: appended with quantity one
///
/// ## Errors
/// `NOT_FOUND` when the id is not in the catalog. The cart is untouched and
/// no notification is sent.
pub fn add_to_cart(store: &Storefront, product_id: ProductId) -> Result<CartView, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = store.catalog().require(product_id).map_err(|e| {
        warn!(product_id = %product_id, "add_to_cart for unknown product");
        ApiError::from(e)
    })?;

    store.cart().with_cart_mut(|c| c.add_item(product));
    Ok(store.view().clone())
}

/// Changes an item's quantity by `delta` (the page sends `+1` / `-1`).
///
/// ## Behavior
/// - Quantity reaching 0 or below removes the item
/// - Unknown id: no change, but the cart is still re-rendered
pub fn update_cart_item(store: &Storefront, product_id: ProductId, delta: i64) -> CartView {
    debug!(product_id = %product_id, delta = %delta, "update_cart_item command");

    store.cart().with_cart_mut(|c| c.update_qty(product_id, delta));
    store.view().clone()
}

/// Clears all items from the cart.
pub fn clear_cart(store: &Storefront) -> CartView {
    debug!("clear_cart command");

    store.cart().with_cart_mut(|c| c.clear());
    store.view().clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::ConfigState;
    use bookstore_core::Money;
    use std::cell::Cell;
    use std::rc::Rc;

    fn store() -> Storefront {
        Storefront::with_default_catalog(ConfigState::default())
    }

    #[test]
    fn test_add_to_cart_new_and_repeat() {
        let store = store();

        let view = add_to_cart(&store, ProductId(3)).unwrap();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].qty, 1);
        assert_eq!(view.items[0].name, "Emma (1815)");

        add_to_cart(&store, ProductId(3)).unwrap();
        let view = add_to_cart(&store, ProductId(3)).unwrap();
        assert_eq!(view.items[0].qty, 3);
        assert_eq!(view.total, Money::from_major(750));
    }

    #[test]
    fn test_add_unknown_product() {
        let store = store();
        let err = add_to_cart(&store, ProductId(99)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(store.cart().with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_update_cart_item_removes_at_zero() {
        let store = store();
        add_to_cart(&store, ProductId(1)).unwrap();
        add_to_cart(&store, ProductId(4)).unwrap();

        let view = update_cart_item(&store, ProductId(1), -1);

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].id, ProductId(4));
        assert_eq!(view.total_display, "₱500.00");
    }

    #[test]
    fn test_update_unknown_item_still_renders() {
        let store = store();
        add_to_cart(&store, ProductId(1)).unwrap();

        let renders = Rc::new(Cell::new(0));
        let seen = Rc::clone(&renders);
        store
            .cart()
            .with_cart_mut(|c| c.subscribe(move |_| seen.set(seen.get() + 1)));

        let view = update_cart_item(&store, ProductId(42), 1);

        assert_eq!(renders.get(), 1);
        assert_eq!(view.items[0].qty, 1);
    }

    #[test]
    fn test_clear_cart() {
        let store = store();
        add_to_cart(&store, ProductId(2)).unwrap();

        let view = clear_cart(&store);

        assert!(view.items.is_empty());
        assert_eq!(get_cart(&store), view);
    }
}
