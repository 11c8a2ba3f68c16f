//! # bookstore-core: Pure Business Logic for the Bookstore Widget
//!
//! This crate holds the rules of the storefront widget: the product catalog,
//! the shopping cart with its quantity lifecycle, and the total computation
//! with its one-shot discount. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Bookstore Widget Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Render Bridge (apps/bookstore-widget)              │   │
//! │  │   Product cards ──► Cart panel ──► Discount button ──► Total    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ subscribe / add / update / toggle     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ bookstore-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │ catalog  │  │   cart   │  │  total   │  │   discount   │   │   │
//! │  │   │ Factory  │  │  Cart    │  │ BaseTotal│  │ DiscountState│   │   │
//! │  │   │ Catalog  │  │ LineItem │  │ Discount │  │ toggle/reset │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DOM • NO NETWORK • SYNCHRONOUS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, DiscountStatus)
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - Product factory and the immutable catalog
//! - [`cart`] - Cart line items and change notification
//! - [`total`] - Total calculators and the discount wrapper
//! - [`discount`] - Discount activation state machine
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bookstore_core::{catalog, Cart, DiscountState, Money, ProductId};
//!
//! let books = catalog::default_catalog();
//! let mut cart = Cart::new();
//! cart.add_item(books.get(ProductId(1)).unwrap());
//!
//! let mut discount = DiscountState::new();
//! assert_eq!(discount.total(cart.items()), Money::from_major(900));
//!
//! discount.toggle();
//! assert_eq!(discount.total(cart.items()), Money::from_major(450));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod discount;
pub mod error;
pub mod money;
pub mod total;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLineItem};
pub use catalog::{Catalog, ProductFactory};
pub use discount::DiscountState;
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use total::{ActiveCalculator, BaseTotal, DiscountPolicy, DiscountTotal, TotalCalculator};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Undiscounted total at or above which the discount takes effect (200.00).
pub const DISCOUNT_THRESHOLD: Money = Money::from_major(200);

/// Discount rate in basis points (5000 = 50%).
pub const DISCOUNT_RATE_BPS: u32 = 5000;
