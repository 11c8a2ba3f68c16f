//! # Storefront Session
//!
//! One page session: the catalog, the cart, the discount state, the
//! configuration, and the most recent cart render.
//!
//! ## Wiring at Construction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront::new(config, catalog)                                       │
//! │     │                                                                   │
//! │     ├── DiscountState::with_policy(config.discount_policy())            │
//! │     ├── CartState::new()                                                │
//! │     └── cart.subscribe(render::cart_observer(discount, config, view))   │
//! │                                                                         │
//! │  From then on every cart notification re-renders into `view`.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use bookstore_core::catalog::default_catalog;
use bookstore_core::{Catalog, DiscountState};
use tracing::info;

use crate::render::{cart_observer, CartView};
use crate::state::{CartState, ConfigState, SharedDiscount};

/// A storefront page session.
#[derive(Debug)]
pub struct Storefront {
    catalog: Catalog,
    cart: CartState,
    discount: SharedDiscount,
    config: Rc<ConfigState>,
    view: Rc<RefCell<CartView>>,
}

impl Storefront {
    /// Builds a session over `catalog` and subscribes the cart renderer.
    pub fn new(config: ConfigState, catalog: Catalog) -> Self {
        let config = Rc::new(config);
        let discount: SharedDiscount = Rc::new(RefCell::new(DiscountState::with_policy(
            config.discount_policy(),
        )));
        let view = Rc::new(RefCell::new(CartView::empty(&config)));

        let cart = CartState::new();
        cart.with_cart_mut(|c| {
            c.subscribe(cart_observer(
                Rc::clone(&discount),
                Rc::clone(&config),
                Rc::clone(&view),
            ))
        });

        info!(
            store = %config.store_name,
            products = catalog.len(),
            "storefront initialized"
        );

        Storefront {
            catalog,
            cart,
            discount,
            config,
            view,
        }
    }

    /// Session over the built-in five-book catalog.
    pub fn with_default_catalog(config: ConfigState) -> Self {
        Storefront::new(config, default_catalog())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn discount(&self) -> &SharedDiscount {
        &self.discount
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    /// The cart view produced by the latest notification.
    pub fn view(&self) -> Ref<'_, CartView> {
        self.view.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::ProductId;

    #[test]
    fn test_new_session_is_empty() {
        let store = Storefront::with_default_catalog(ConfigState::default());
        assert_eq!(store.catalog().len(), 5);
        assert!(store.cart().with_cart(|c| c.is_empty()));
        assert_eq!(store.cart().with_cart(|c| c.observer_count()), 1);
        assert!(store.view().items.is_empty());
        assert!(!store.discount().borrow().is_active());
    }

    #[test]
    fn test_cart_mutation_refreshes_view() {
        let store = Storefront::with_default_catalog(ConfigState::default());
        let product = store.catalog().get(ProductId(5)).unwrap().clone();

        store.cart().with_cart_mut(|c| c.add_item(&product));

        assert_eq!(store.view().item_count, 1);
        assert_eq!(store.view().total_display, "₱500.00");
    }

    #[test]
    fn test_config_policy_reaches_discount_state() {
        let config = ConfigState {
            discount_rate_bps: 1000,
            ..ConfigState::default()
        };
        let store = Storefront::with_default_catalog(config);
        assert_eq!(store.discount().borrow().policy().rate_bps, 1000);
    }
}
