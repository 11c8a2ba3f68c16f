//! # Catalog Commands

use tracing::debug;

use crate::render::{render_products, ProductCard};
use crate::storefront::Storefront;

/// Lists the product grid in catalog order.
pub fn list_products(store: &Storefront) -> Vec<ProductCard> {
    debug!("list_products command");
    render_products(store.catalog(), store.config())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfigState;

    #[test]
    fn test_list_products() {
        let store = Storefront::with_default_catalog(ConfigState::default());
        let cards = list_products(&store);
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[4].name, "Gone Girl (2012)");
        assert_eq!(cards[4].price_display, "₱500.00");
    }
}
