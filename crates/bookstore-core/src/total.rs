//! # Total Calculators
//!
//! A calculator is anything that turns cart line items into a total. The
//! discount is a wrapper around another calculator, not a separate rule.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items ──► BaseTotal ──► Σ price × qty ──────────────────────► total    │
//! │                                                                         │
//! │  items ──► DiscountTotal(BaseTotal)                                     │
//! │              │                                                          │
//! │              ├── inner total ≥ threshold ──► total − 50% ─────► total   │
//! │              └── inner total < threshold ──► unchanged ───────► total   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLineItem;
use crate::money::Money;
use crate::{DISCOUNT_RATE_BPS, DISCOUNT_THRESHOLD};

/// Computes a monetary total from line items.
pub trait TotalCalculator {
    fn get_total(&self, items: &[CartLineItem]) -> Money;
}

// =============================================================================
// Base Total
// =============================================================================

/// Sum of `price × qty` over all items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseTotal;

impl TotalCalculator for BaseTotal {
    fn get_total(&self, items: &[CartLineItem]) -> Money {
        items.iter().map(CartLineItem::line_total).sum()
    }
}

// =============================================================================
// Discount Policy
// =============================================================================

/// When the discount applies and how much it takes off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DiscountPolicy {
    /// Minimum undiscounted total (inclusive).
    pub threshold: Money,

    /// Reduction in basis points.
    pub rate_bps: u32,
}

impl DiscountPolicy {
    pub const fn new(threshold: Money, rate_bps: u32) -> Self {
        DiscountPolicy { threshold, rate_bps }
    }

    /// Whether an undiscounted total qualifies. No hysteresis: exactly the
    /// threshold qualifies, one centavo less does not.
    #[inline]
    pub fn qualifies(&self, undiscounted: Money) -> bool {
        undiscounted >= self.threshold
    }

    /// Applies the policy to an undiscounted total.
    pub fn apply(&self, undiscounted: Money) -> Money {
        if self.qualifies(undiscounted) {
            undiscounted.apply_percentage_discount(self.rate_bps)
        } else {
            undiscounted
        }
    }
}

impl Default for DiscountPolicy {
    /// 50% off at or above 200.00.
    fn default() -> Self {
        DiscountPolicy::new(DISCOUNT_THRESHOLD, DISCOUNT_RATE_BPS)
    }
}

// =============================================================================
// Discount Total
// =============================================================================

/// Wraps a calculator and applies a [`DiscountPolicy`] to its output.
///
/// Holds no state of its own beyond the policy; the result is a pure function
/// of the wrapped calculator's total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountTotal<C> {
    inner: C,
    policy: DiscountPolicy,
}

impl<C: TotalCalculator> DiscountTotal<C> {
    /// Wraps `inner` with the default policy.
    pub fn new(inner: C) -> Self {
        DiscountTotal::with_policy(inner, DiscountPolicy::default())
    }

    pub fn with_policy(inner: C, policy: DiscountPolicy) -> Self {
        DiscountTotal { inner, policy }
    }

    pub fn policy(&self) -> DiscountPolicy {
        self.policy
    }
}

impl<C: TotalCalculator> TotalCalculator for DiscountTotal<C> {
    fn get_total(&self, items: &[CartLineItem]) -> Money {
        self.policy.apply(self.inner.get_total(items))
    }
}

// =============================================================================
// Active Calculator
// =============================================================================

/// The calculator currently used for the displayed total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveCalculator {
    Base(BaseTotal),
    Discounted(DiscountTotal<BaseTotal>),
}

impl ActiveCalculator {
    pub fn base() -> Self {
        ActiveCalculator::Base(BaseTotal)
    }

    pub fn discounted(policy: DiscountPolicy) -> Self {
        ActiveCalculator::Discounted(DiscountTotal::with_policy(BaseTotal, policy))
    }

    pub fn is_discounted(&self) -> bool {
        matches!(self, ActiveCalculator::Discounted(_))
    }
}

impl Default for ActiveCalculator {
    fn default() -> Self {
        ActiveCalculator::base()
    }
}

impl TotalCalculator for ActiveCalculator {
    fn get_total(&self, items: &[CartLineItem]) -> Money {
        match self {
            ActiveCalculator::Base(calc) => calc.get_total(items),
            ActiveCalculator::Discounted(calc) => calc.get_total(items),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
