//! # Commands Module
//!
//! Every action the storefront page can trigger.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── catalog.rs   ◄─── Product grid
//! ├── cart.rs      ◄─── Add, +/-, clear, read
//! ├── discount.rs  ◄─── USE / REMOVE toggle
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Page event ("Add to Cart" on book 3)                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  add_to_cart(&store, ProductId(3)) -> Result<CartView, ApiError>        │
//! │         │                                                               │
//! │         ├── catalog lookup                                              │
//! │         ├── cart.add_item(product) ──► notify ──► render observer       │
//! │         ▼                                                               │
//! │  Returns the view the observer just rendered                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod discount;
