//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (centavos)                           │
//! │    ₱900.00 = 90000 centavos, ₱900.00 × 50% = 45000 centavos exactly     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstore_core::money::Money;
//!
//! let price = Money::from_major(900);        // ₱900.00
//! let line = price.multiply_quantity(2);     // ₱1800.00
//! assert_eq!(line.minor_units(), 180_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: Subtraction never wraps below zero silently
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.price ──► CartLineItem.line_total ──► BaseTotal ──┐           │
/// │                                                            │           │
/// │                              DiscountTotal (50% ≥ ₱200) ◄──┘           │
/// │                                       │                                │
/// │                                       └──► Displayed as "₱450.00"      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (centavos).
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::money::Money;
    ///
    /// let price = Money::from_minor_units(25_050); // ₱250.50
    /// assert_eq!(price.major(), 250);
    /// assert_eq!(price.minor_part(), 50);
    /// ```
    #[inline]
    pub const fn from_minor_units(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole major units (pesos).
    ///
    /// The catalog literal lists whole-peso prices, so this is the usual
    /// constructor.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Like [`Money::from_major`], but `None` when the amount does not fit.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::money::Money;
    ///
    /// assert_eq!(Money::checked_from_major(200), Some(Money::from_major(200)));
    /// assert_eq!(Money::checked_from_major(i64::MAX / 10), None);
    /// ```
    #[inline]
    pub const fn checked_from_major(major: i64) -> Option<Self> {
        match major.checked_mul(100) {
            Some(minor) => Some(Money(minor)),
            None => None,
        }
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::money::Money;
    ///
    /// let unit_price = Money::from_major(250);
    /// assert_eq!(unit_price.multiply_quantity(3), Money::from_major(750));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (5000 = 50%)
    ///
    /// ## Rounding
    /// The discount amount is rounded half up: `(amount * bps + 5000) / 10000`.
    /// For 50% on an even number of centavos this is exact halving.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::money::Money;
    ///
    /// let subtotal = Money::from_major(900);
    /// assert_eq!(subtotal.apply_percentage_discount(5000), Money::from_major(450));
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        // i128 keeps large carts from overflowing the intermediate product
        let discount_amount = (self.0 as i128 * discount_bps as i128 + 5000) / 10000;
        *self - Money::from_minor_units(discount_amount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the plain decimal amount, e.g. `900.00`.
///
/// The currency symbol is a presentation setting and is prepended by the
/// widget's configuration, not here.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Summing an iterator of line totals.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
