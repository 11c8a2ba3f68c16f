//! # Discount Commands
//!
//! The USE / REMOVE button.
//!
//! ## Toggle Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  click ──► DiscountState::toggle() ──► cart.notify() ──► re-render      │
//! │                                                                         │
//! │  The re-render may immediately switch the discount back off when the   │
//! │  cart's undiscounted total is under the threshold.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::render::CartView;
use crate::storefront::Storefront;

/// Applies or removes the discount, then forces a re-render.
pub fn toggle_discount(store: &Storefront) -> CartView {
    // The borrow must end before notify: the render observer takes it again
    let status = store.discount().borrow_mut().toggle();
    debug!(status = ?status, "toggle_discount command");

    store.cart().with_cart_mut(|c| c.notify());
    store.view().clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::{add_to_cart, update_cart_item};
    use crate::state::ConfigState;
    use bookstore_core::{Catalog, DiscountStatus, Money, ProductFactory, ProductId};
    use std::cell::Cell;
    use std::rc::Rc;

    fn store() -> Storefront {
        Storefront::with_default_catalog(ConfigState::default())
    }

    #[test]
    fn test_apply_discount_to_single_book() {
        let store = store();
        let view = add_to_cart(&store, ProductId(1)).unwrap();
        assert_eq!(view.total, Money::from_major(900));

        let view = toggle_discount(&store);

        assert_eq!(view.total, Money::from_major(450));
        assert_eq!(view.total_display, "₱450.00");
        assert_eq!(view.discount, DiscountStatus::Active);
        assert_eq!(view.discount_label, "REMOVE");
    }

    #[test]
    fn test_remove_discount() {
        let store = store();
        add_to_cart(&store, ProductId(1)).unwrap();
        toggle_discount(&store);

        let view = toggle_discount(&store);

        assert_eq!(view.total, Money::from_major(900));
        assert_eq!(view.discount, DiscountStatus::Inactive);
        assert_eq!(view.discount_label, "USE");
    }

    #[test]
    fn test_discount_on_empty_cart_resets_immediately() {
        let store = store();

        let view = toggle_discount(&store);

        assert!(view.discount_reset);
        assert_eq!(view.discount, DiscountStatus::Inactive);
        assert!(!store.discount().borrow().is_active());
    }

    #[test]
    fn test_auto_reset_when_subtotal_drops() {
        let catalog = Catalog::new(vec![
            ProductFactory::create_product(
                "classic",
                ProductId(1),
                "The Brothers Karamazov (1880)",
                "Fyodor Dostoevsky",
                Money::from_major(900),
                "images/fyodor.jpg",
            ),
            ProductFactory::create_product(
                "pamphlet",
                ProductId(9),
                "Common Sense (1776)",
                "Thomas Paine",
                Money::from_major(80),
                "images/paine.jpg",
            ),
        ])
        .unwrap();
        let store = Storefront::new(ConfigState::default(), catalog);

        add_to_cart(&store, ProductId(1)).unwrap();
        add_to_cart(&store, ProductId(9)).unwrap();
        let view = toggle_discount(&store);
        assert_eq!(view.total, Money::from_major(490));

        let view = update_cart_item(&store, ProductId(1), -1);

        assert!(view.discount_reset);
        assert_eq!(view.total, Money::from_major(80));
        assert_eq!(view.total_display, "₱80.00");
        assert_eq!(view.discount, DiscountStatus::Inactive);
        assert_eq!(view.discount_label, "USE");
        assert!(!store.discount().borrow().is_active());
    }

    #[test]
    fn test_discount_survives_drop_that_stays_above_threshold() {
        let store = store();
        add_to_cart(&store, ProductId(1)).unwrap();
        add_to_cart(&store, ProductId(3)).unwrap();
        toggle_discount(&store);
        assert_eq!(store.view().total, Money::from_major(575));

        let view = update_cart_item(&store, ProductId(1), -1);

        assert!(!view.discount_reset);
        assert_eq!(view.total, Money::from_major(125));
        assert_eq!(view.discount, DiscountStatus::Active);
    }

    #[test]
    fn test_toggle_notifies_once() {
        let store = store();
        let renders = Rc::new(Cell::new(0));
        let seen = Rc::clone(&renders);
        store
            .cart()
            .with_cart_mut(|c| c.subscribe(move |_| seen.set(seen.get() + 1)));

        add_to_cart(&store, ProductId(1)).unwrap();
        update_cart_item(&store, ProductId(1), 1);
        toggle_discount(&store);
        toggle_discount(&store);

        assert_eq!(renders.get(), 4);
    }
}
