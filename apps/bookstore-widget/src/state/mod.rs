//! # State Module
//!
//! Session state for the storefront widget.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────────┐  ┌──────────────────┐      │
//! │  │  CartState   │  │  SharedDiscount      │  │   ConfigState    │      │
//! │  │              │  │                      │  │                  │      │
//! │  │  RefCell<    │  │  Rc<RefCell<         │  │  currency        │      │
//! │  │    Cart      │  │    DiscountState     │  │  discount policy │      │
//! │  │  >           │  │  >>                  │  │  store name      │      │
//! │  └──────────────┘  └──────────────────────┘  └──────────────────┘      │
//! │                                                                         │
//! │  The discount state is shared between the toggle command and the       │
//! │  cart observer that renders (and may auto-reset) it.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;

use std::cell::RefCell;
use std::rc::Rc;

use bookstore_core::DiscountState;

pub use cart::CartState;
pub use config::ConfigState;

/// Discount state shared by the toggle command and the render observer.
pub type SharedDiscount = Rc<RefCell<DiscountState>>;
