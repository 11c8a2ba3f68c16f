//! # Cart State
//!
//! Holds the session's cart.
//!
//! ## Single-Threaded Access
//! The widget runs on one event loop: every command runs to completion before
//! the next one starts. A `RefCell` is therefore enough; there is no lock.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Shopper Action           Command                 Cart Change           │
//! │  ──────────────           ───────                 ───────────           │
//! │                                                                         │
//! │  Add to Cart ────────────► add_to_cart() ───────► add_item(product)    │
//! │                                                                         │
//! │  Click + / - ────────────► update_cart_item() ──► update_qty(id, ±1)   │
//! │                                                                         │
//! │  Click USE / REMOVE ─────► toggle_discount() ───► notify()             │
//! │                                                                         │
//! │  NOTE: Observers run inside with_cart_mut and must not re-enter        │
//! │        CartState.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::cell::RefCell;

use bookstore_core::Cart;

/// Session cart holder.
#[derive(Debug, Default)]
pub struct CartState {
    cart: RefCell<Cart>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState::default()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = cart_state.with_cart(|cart| cart.item_count());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        f(&self.cart.borrow())
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(&product));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        f(&mut self.cart.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::catalog::default_catalog;
    use bookstore_core::ProductId;

    #[test]
    fn test_with_cart_mut_then_read() {
        let state = CartState::new();
        let catalog = default_catalog();
        let product = catalog.get(ProductId(3)).unwrap();

        state.with_cart_mut(|cart| {
            cart.add_item(product);
            cart.add_item(product);
        });

        assert_eq!(state.with_cart(|cart| cart.total_quantity()), 2);
    }
}
