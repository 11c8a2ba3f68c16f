//! # Error Types
//!
//! Domain-specific error types for bookstore-core.
//!
//! ## Where Errors Can Happen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Surface                                   │
//! │                                                                         │
//! │  Cart operations ........... never fail (unknown ids are no-ops)        │
//! │  Total computation ......... never fails                                │
//! │  Product factory ........... never fails (unknown tags → General)       │
//! │  Catalog construction ...... DuplicateProductId                         │
//! │  Catalog lookup ............ ProductNotFound                            │
//! │                                                                         │
//! │  Flow: CoreError → ApiError (widget app) → frontend                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::ProductId;

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// No catalog product carries this id.
    ///
    /// ## When This Occurs
    /// - An "add to cart" action names an id that is not in the catalog
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two catalog entries share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProductId(ProductId),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::ProductNotFound(ProductId(42)).to_string(),
            "Product not found: 42"
        );
        assert_eq!(
            CoreError::DuplicateProductId(ProductId(3)).to_string(),
            "Duplicate product id in catalog: 3"
        );
    }
}
