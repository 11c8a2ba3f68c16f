//! # Config Commands

use tracing::debug;

use crate::state::ConfigState;
use crate::storefront::Storefront;

/// Gets the current widget configuration.
///
/// ## When Used
/// - Page startup (store name, currency symbol)
/// - Explaining the discount rule next to the button
pub fn get_config(store: &Storefront) -> ConfigState {
    debug!("get_config command");
    store.config().clone()
}
