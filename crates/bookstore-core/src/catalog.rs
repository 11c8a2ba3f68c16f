//! # Catalog
//!
//! The product factory and the immutable, ordered catalog built at startup.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ("classic", 1, "The Brothers Karamazov", ...) ──┐                      │
//! │  ("romance", 3, "Emma", ...) ────────────────────┼──► ProductFactory    │
//! │  ("thriller", 4, ...) ───────────────────────────┘         │            │
//! │                                                            ▼            │
//! │                                              Catalog (display order)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Category, Product, ProductId};

// =============================================================================
// Product Factory
// =============================================================================

/// Builds products from a loose type tag.
pub struct ProductFactory;

impl ProductFactory {
    /// Creates a product, resolving `type_tag` to a [`Category`].
    ///
    /// Unknown tags produce a `General` product. This is a silent default,
    /// not a failure.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::{Category, Money, ProductFactory, ProductId};
    ///
    /// let book = ProductFactory::create_product(
    ///     "mystery", ProductId(9), "The Hound", "A. C. Doyle",
    ///     Money::from_major(300), "images/hound.jpg",
    /// );
    /// assert_eq!(book.category, Category::General);
    /// ```
    pub fn create_product(
        type_tag: &str,
        id: ProductId,
        name: impl Into<String>,
        author: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Product {
        Product {
            id,
            name: name.into(),
            author: author.into(),
            price,
            image: image.into(),
            category: Category::from_tag(type_tag),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Ordered, immutable sequence of products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, preserving the given order.
    ///
    /// ## Errors
    /// [`CoreError::DuplicateProductId`] if two products share an id.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CoreError::DuplicateProductId(product.id));
            }
        }
        debug!(count = products.len(), "catalog built");
        Ok(Catalog { products })
    }

    /// Products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`Catalog::get`], but a missing id is an error.
    pub fn require(&self, id: ProductId) -> CoreResult<&Product> {
        self.get(id).ok_or(CoreError::ProductNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// The storefront's startup literal: five books across three shelves.
pub fn default_catalog() -> Catalog {
    let products = vec![
        ProductFactory::create_product(
            "classic",
            ProductId(1),
            "The Brothers Karamazov (1880)",
            "Fyodor Dostoevsky",
            Money::from_major(900),
            "images/fyodor.jpg",
        ),
        ProductFactory::create_product(
            "classic",
            ProductId(2),
            "The Picture of Dorian Gray (1890)",
            "Oscar Wilde",
            Money::from_major(900),
            "images/dorian.jpg",
        ),
        ProductFactory::create_product(
            "romance",
            ProductId(3),
            "Emma (1815)",
            "Jane Austen",
            Money::from_major(250),
            "images/emma.jpg",
        ),
        ProductFactory::create_product(
            "thriller",
            ProductId(4),
            "And Then There Were None (1939)",
            "Agatha Christie",
            Money::from_major(500),
            "images/agatha.jpeg",
        ),
        ProductFactory::create_product(
            "thriller",
            ProductId(5),
            "Gone Girl (2012)",
            "Gillian Flynn",
            Money::from_major(500),
            "images/gone.jpg",
        ),
    ];

    // Ids in the literal above are distinct
    Catalog { products }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn book(tag: &str, id: i64) -> Product {
        ProductFactory::create_product(
            tag,
            ProductId(id),
            format!("Book {}", id),
            "Author",
            Money::from_major(100),
            "images/book.jpg",
        )
    }

    #[test]
    fn test_factory_copies_fields() {
        let p = ProductFactory::create_product(
            "Romance",
            ProductId(3),
            "Emma (1815)",
            "Jane Austen",
            Money::from_major(250),
            "images/emma.jpg",
        );
        assert_eq!(p.id, ProductId(3));
        assert_eq!(p.name, "Emma (1815)");
        assert_eq!(p.author, "Jane Austen");
        assert_eq!(p.price, Money::from_major(250));
        assert_eq!(p.image, "images/emma.jpg");
        assert_eq!(p.category, Category::Romance);
    }

    #[test]
    fn test_factory_unknown_tag_is_general() {
        let p = book("mystery", 7);
        assert_eq!(p.category, Category::General);
        assert_eq!(p.category.as_str(), "General");
    }

    #[test]
    fn test_default_catalog_order_and_categories() {
        let catalog = default_catalog();
        let ids: Vec<i64> = catalog.products().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        assert_eq!(catalog.products()[0].category, Category::Classics);
        assert_eq!(catalog.products()[2].category, Category::Romance);
        assert_eq!(catalog.products()[4].category, Category::Thriller);
        assert_eq!(catalog.products()[2].price, Money::from_major(250));
    }

    #[test]
    fn test_default_catalog_ids_are_unique() {
        let catalog = default_catalog();
        assert!(Catalog::new(catalog.products().to_vec()).is_ok());
    }

    #[test]
    fn test_lookup() {
        let catalog = default_catalog();
        assert_eq!(catalog.get(ProductId(4)).unwrap().author, "Agatha Christie");
        assert!(catalog.get(ProductId(99)).is_none());
        assert_eq!(
            catalog.require(ProductId(99)),
            Err(CoreError::ProductNotFound(ProductId(99)))
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![book("classic", 1), book("thriller", 1)]);
        assert_eq!(result.unwrap_err(), CoreError::DuplicateProductId(ProductId(1)));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
