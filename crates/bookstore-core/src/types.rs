//! # Domain Types
//!
//! Core domain types used throughout the bookstore widget.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │ DiscountStatus  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  Classics       │   │  Inactive       │       │
//! │  │  name, author   │   │  Thriller       │   │  Active         │       │
//! │  │  price (Money)  │   │  Romance        │   └─────────────────┘       │
//! │  │  image          │   │  General        │                             │
//! │  │  category       │   └─────────────────┘                             │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Book variants differ only in their category, so a product is one flat
//! record carrying a [`Category`] tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Stable integer identifier of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Shelf category of a book.
///
/// The wire names keep the storefront's historical spelling: the three
/// genre shelves are lowercase plurals while the fallback is `"General"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    #[serde(rename = "classics")]
    Classics,
    #[serde(rename = "thriller")]
    Thriller,
    #[serde(rename = "romance")]
    Romance,
    #[serde(rename = "General")]
    General,
}

impl Category {
    /// Resolves a product type tag, case-insensitively.
    ///
    /// ## Tags
    /// - `"classic"` → [`Category::Classics`]
    /// - `"thriller"` → [`Category::Thriller`]
    /// - `"romance"` → [`Category::Romance`]
    /// - anything else → [`Category::General`] (never an error)
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "classic" => Category::Classics,
            "thriller" => Category::Thriller,
            "romance" => Category::Romance,
            _ => Category::General,
        }
    }

    /// Returns the category label as shown to shoppers.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Classics => "classics",
            Category::Thriller => "thriller",
            Category::Romance => "romance",
            Category::General => "General",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::General
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A book available in the catalog.
///
/// Created once at startup by [`crate::catalog::ProductFactory`] and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,

    /// Title shown on the product card and in the cart.
    pub name: String,

    pub author: String,

    /// Unit price (non-negative).
    pub price: Money,

    /// Image reference, e.g. `images/emma.jpg`.
    pub image: String,

    pub category: Category,
}

// =============================================================================
// Discount Status
// =============================================================================

/// Whether the one-shot discount is currently applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DiscountStatus {
    /// Totals are computed without the discount.
    Inactive,
    /// Totals are computed through the discount wrapper.
    Active,
}

impl DiscountStatus {
    #[inline]
    pub const fn is_active(&self) -> bool {
        matches!(self, DiscountStatus::Active)
    }
}

impl Default for DiscountStatus {
    fn default() -> Self {
        DiscountStatus::Inactive
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_known_tags() {
        assert_eq!(Category::from_tag("classic"), Category::Classics);
        assert_eq!(Category::from_tag("thriller"), Category::Thriller);
        assert_eq!(Category::from_tag("romance"), Category::Romance);
    }

    #[test]
    fn test_category_tag_is_case_insensitive() {
        assert_eq!(Category::from_tag("CLASSIC"), Category::Classics);
        assert_eq!(Category::from_tag("Thriller"), Category::Thriller);
        assert_eq!(Category::from_tag("rOmAnCe"), Category::Romance);
    }

    #[test]
    fn test_unknown_tag_falls_back_to_general() {
        assert_eq!(Category::from_tag("mystery"), Category::General);
        assert_eq!(Category::from_tag(""), Category::General);
        // The shelf name is not a tag
        assert_eq!(Category::from_tag("classics"), Category::General);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Classics.to_string(), "classics");
        assert_eq!(Category::General.to_string(), "General");
    }

    #[test]
    fn test_category_serializes_with_shelf_names() {
        let json = serde_json::to_string(&Category::Thriller).unwrap();
        assert_eq!(json, "\"thriller\"");
        let json = serde_json::to_string(&Category::General).unwrap();
        assert_eq!(json, "\"General\"");
    }

    #[test]
    fn test_discount_status_default() {
        let status = DiscountStatus::default();
        assert_eq!(status, DiscountStatus::Inactive);
        assert!(!status.is_active());
        assert!(DiscountStatus::Active.is_active());
    }
}
