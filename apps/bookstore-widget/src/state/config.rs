//! # Configuration State
//!
//! Stores widget configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BOOKSTORE_*`)
//! 2. Defaults (this file)
//!
//! ## Mutability
//! Configuration is read-only after initialization.

use bookstore_core::{DiscountPolicy, Money, DISCOUNT_RATE_BPS, DISCOUNT_THRESHOLD};
use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

/// Widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name shown in the header.
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Undiscounted total at which the discount starts to apply.
    pub discount_threshold: Money,

    /// Discount rate in basis points
    /// e.g., 5000 = 50%
    pub discount_rate_bps: u32,
}

impl Default for ConfigState {
    /// Returns the storefront defaults.
    ///
    /// ## Default Values
    /// - Store: "Bookshelf"
    /// - Currency: Philippine peso (₱), two decimals
    /// - Discount: 50% at or above ₱200.00
    fn default() -> Self {
        ConfigState {
            store_name: "Bookshelf".to_string(),
            currency_symbol: "₱".to_string(),
            currency_decimals: 2,
            discount_threshold: DISCOUNT_THRESHOLD,
            discount_rate_bps: DISCOUNT_RATE_BPS,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BOOKSTORE_STORE_NAME`: Override store name
    /// - `BOOKSTORE_CURRENCY_SYMBOL`: Override currency symbol
    /// - `BOOKSTORE_DISCOUNT_THRESHOLD`: Threshold in whole units (e.g., "200")
    /// - `BOOKSTORE_DISCOUNT_PERCENT`: Discount percentage (e.g., "50")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Values that fail to parse are logged and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("BOOKSTORE_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("BOOKSTORE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("BOOKSTORE_DISCOUNT_THRESHOLD") {
            let threshold = raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|major| *major >= 0)
                .and_then(Money::checked_from_major);
            match threshold {
                Some(threshold) => config.discount_threshold = threshold,
                None => warn!(value = %raw, "ignoring invalid BOOKSTORE_DISCOUNT_THRESHOLD"),
            }
        }

        if let Some(raw) = lookup("BOOKSTORE_DISCOUNT_PERCENT") {
            match raw.trim().parse::<f64>() {
                Ok(pct) if (0.0..=100.0).contains(&pct) => {
                    config.discount_rate_bps = (pct * 100.0).round() as u32;
                }
                _ => warn!(value = %raw, "ignoring invalid BOOKSTORE_DISCOUNT_PERCENT"),
            }
        }

        config
    }

    /// The discount policy this configuration describes.
    pub fn discount_policy(&self) -> DiscountPolicy {
        DiscountPolicy::new(self.discount_threshold, self.discount_rate_bps)
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::Money;
    /// use bookstore_widget::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_major(450)), "₱450.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let minor = amount.minor_units();
        // Money is fixed at two minor digits; rescale when fewer are shown
        let shown = match self.currency_decimals {
            0 => minor / 100,
            1 => minor / 10,
            _ => minor,
        };
        let decimals = self.currency_decimals.min(2) as u32;
        let divisor = 10_i64.pow(decimals);
        let whole = shown / divisor;
        let frac = (shown % divisor).abs();

        format!(
            "{}{}{}",
            if minor < 0 { "-" } else { "" },
            self.currency_symbol,
            if decimals > 0 {
                format!("{}.{:0width$}", whole.abs(), frac, width = decimals as usize)
            } else {
                whole.abs().to_string()
            }
        )
    }
}
