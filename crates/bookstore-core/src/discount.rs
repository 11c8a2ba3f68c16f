//! # Discount State
//!
//! Owns whether the discount is applied and which calculator produces the
//! displayed total. One value per storefront session, held by the render
//! bridge.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                  toggle()                                               │
//! │   ┌──────────┐ ─────────────────────────────► ┌──────────┐             │
//! │   │ Inactive │                                │  Active  │             │
//! │   │  (base)  │ ◄───────────────────────────── │(discount)│             │
//! │   └──────────┘   toggle()                     └──────────┘             │
//! │        ▲         or reconcile() when base total < threshold            │
//! │        │                                                                │
//! │     initial                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `reconcile` only runs when a render calls it. A quantity decrease with no
//! following render leaves the state `Active` until the next one.

use tracing::info;

use crate::cart::CartLineItem;
use crate::money::Money;
use crate::total::{ActiveCalculator, BaseTotal, DiscountPolicy, TotalCalculator};
use crate::types::DiscountStatus;

/// Label for the discount button while the discount is off.
pub const APPLY_LABEL: &str = "USE";

/// Label for the discount button while the discount is on.
pub const REMOVE_LABEL: &str = "REMOVE";

/// Discount activation state plus the active calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountState {
    status: DiscountStatus,
    calculator: ActiveCalculator,
    policy: DiscountPolicy,
}

impl DiscountState {
    /// Inactive, with the default 50%-at-200 policy.
    pub fn new() -> Self {
        DiscountState::with_policy(DiscountPolicy::default())
    }

    /// Inactive, with a custom policy for when the discount is applied.
    pub fn with_policy(policy: DiscountPolicy) -> Self {
        DiscountState {
            status: DiscountStatus::Inactive,
            calculator: ActiveCalculator::base(),
            policy,
        }
    }

    pub fn status(&self) -> DiscountStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn calculator(&self) -> &ActiveCalculator {
        &self.calculator
    }

    pub fn policy(&self) -> DiscountPolicy {
        self.policy
    }

    /// Flips between `Inactive` and `Active`, swapping the calculator.
    ///
    /// The caller is expected to notify the cart afterwards so the display
    /// is recomputed.
    pub fn toggle(&mut self) -> DiscountStatus {
        match self.status {
            DiscountStatus::Inactive => self.activate(),
            DiscountStatus::Active => self.deactivate(),
        }
        info!(status = ?self.status, "discount toggled");
        self.status
    }

    /// Applies the auto-reset rule.
    ///
    /// While `Active`, an undiscounted total below the threshold reverts to
    /// `Inactive` and the base calculator. Returns `true` if a reset happened.
    pub fn reconcile(&mut self, items: &[CartLineItem]) -> bool {
        if !self.is_active() {
            return false;
        }

        let base = self.base_total(items);
        if self.policy.qualifies(base) {
            return false;
        }

        self.deactivate();
        info!(
            base_total = %base,
            threshold = %self.policy.threshold,
            "discount reset: total below threshold"
        );
        true
    }

    /// Total from the active calculator.
    pub fn total(&self, items: &[CartLineItem]) -> Money {
        self.calculator.get_total(items)
    }

    /// Undiscounted total, regardless of state.
    pub fn base_total(&self, items: &[CartLineItem]) -> Money {
        BaseTotal.get_total(items)
    }

    /// Button text reflecting the current state.
    pub fn action_label(&self) -> &'static str {
        match self.status {
            DiscountStatus::Inactive => APPLY_LABEL,
            DiscountStatus::Active => REMOVE_LABEL,
        }
    }

    fn activate(&mut self) {
        self.status = DiscountStatus::Active;
        self.calculator = ActiveCalculator::discounted(self.policy);
    }

    fn deactivate(&mut self) {
        self.status = DiscountStatus::Inactive;
        self.calculator = ActiveCalculator::base();
    }
}

impl Default for DiscountState {
    fn default() -> Self {
        DiscountState::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::catalog::{default_catalog, ProductFactory};
    use crate::types::ProductId;

    fn priced(id: i64, price: i64) -> crate::types::Product {
        ProductFactory::create_product(
            "general",
            ProductId(id),
            "Book",
            "Author",
            Money::from_major(price),
            "images/book.jpg",
        )
    }

    #[test]
    fn test_initial_state() {
        let state = DiscountState::new();
        assert_eq!(state.status(), DiscountStatus::Inactive);
        assert!(!state.calculator().is_discounted());
        assert_eq!(state.action_label(), "USE");
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut state = DiscountState::new();

        assert_eq!(state.toggle(), DiscountStatus::Active);
        assert!(state.calculator().is_discounted());
        assert_eq!(state.action_label(), "REMOVE");

        assert_eq!(state.toggle(), DiscountStatus::Inactive);
        assert!(!state.calculator().is_discounted());
        assert_eq!(state.action_label(), "USE");
    }

    #[test]
    fn test_scenario_single_expensive_book() {
        let catalog = default_catalog();
        let mut cart = Cart::new();
        let mut state = DiscountState::new();

        cart.add_item(catalog.get(ProductId(1)).unwrap());
        assert_eq!(state.total(cart.items()), Money::from_major(900));

        state.toggle();
        assert_eq!(state.total(cart.items()), Money::from_major(450));
    }

    #[test]
    fn test_scenario_below_threshold_is_unchanged() {
        let mut cart = Cart::new();
        let mut state = DiscountState::new();
        cart.add_item(&priced(1, 100));
        cart.add_item(&priced(2, 80));

        state.toggle();

        assert!(state.is_active());
        assert_eq!(state.total(cart.items()), Money::from_major(180));
    }

    #[test]
    fn test_scenario_auto_reset_after_removal() {
        let mut cart = Cart::new();
        let mut state = DiscountState::new();
        cart.add_item(&priced(1, 900));
        cart.add_item(&priced(2, 80));
        state.toggle();
        assert_eq!(state.total(cart.items()), Money::from_major(490));

        cart.update_qty(ProductId(1), -1);
        assert!(state.reconcile(cart.items()));

        assert_eq!(state.status(), DiscountStatus::Inactive);
        assert_eq!(state.total(cart.items()), Money::from_major(80));
        assert_eq!(state.action_label(), "USE");
    }

    #[test]
    fn test_reconcile_keeps_discount_at_exact_threshold() {
        let mut cart = Cart::new();
        let mut state = DiscountState::new();
        cart.add_item(&priced(1, 200));
        state.toggle();

        assert!(!state.reconcile(cart.items()));
        assert!(state.is_active());
        assert_eq!(state.total(cart.items()), Money::from_major(100));
    }

    #[test]
    fn test_reconcile_is_noop_while_inactive() {
        let mut state = DiscountState::new();
        assert!(!state.reconcile(&[]));
        assert_eq!(state.status(), DiscountStatus::Inactive);
    }

    #[test]
    fn test_reconcile_resets_on_empty_cart() {
        let mut state = DiscountState::new();
        state.toggle();
        assert!(state.reconcile(&[]));
        assert!(!state.is_active());
    }

    #[test]
    fn test_custom_policy_is_used_when_active() {
        let policy = DiscountPolicy::new(Money::from_major(500), 2500);
        let mut state = DiscountState::with_policy(policy);
        let mut cart = Cart::new();
        cart.add_item(&priced(1, 400));
        cart.add_item(&priced(1, 400));

        state.toggle();

        assert_eq!(state.total(cart.items()), Money::from_major(600));
        assert_eq!(state.base_total(cart.items()), Money::from_major(800));
    }
}
