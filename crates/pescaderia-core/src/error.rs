//! # Error Types
//!
//! Domain-specific error types for pescaderia-core.
//!
//! ## Error Hierarchy
//! ```text
//! ValidationError  - field-level input failures (missing name, negative price)
//!       │
//!       ▼ (wrapped)
//! CoreError        - business rule violations (empty cart, insufficient stock)
//!       │
//!       ▼ (wrapped by pescaderia-store)
//! StoreError       - adds I/O and persistence failures
//! ```
//!
//! ## Design Principles
//! 1. `thiserror` derive macros, never manual Display impls
//! 2. Include context in error messages (product name, requested quantity)
//! 3. Errors are enum variants, never String
//! 4. Every failure surfaces as a recoverable value before any write happens;
//!    there are no blocking alerts and no panics

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent business rule violations. They are returned before any
/// entity is written, so a failed operation has no partial effects.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Checkout was attempted with no cart lines.
    #[error("cart is empty")]
    EmptyCart,

    /// Product cannot be found in the current snapshot.
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// Customer attached to a checkout does not exist.
    #[error("customer not found: {0}")]
    CustomerNotFound(String),

    /// The product has no stock left at all.
    #[error("{product} is out of stock")]
    OutOfStock { product: String },

    /// Requested quantity exceeds the live stock level.
    ///
    /// Raised both at add-to-cart time (against the stock snapshot the
    /// cashier sees) and again at commit time (against re-read live stock).
    #[error("insufficient stock for {product}: available {available}, requested {requested}")]
    InsufficientStock {
        product: String,
        available: f64,
        requested: f64,
    },

    /// Cart line operations on a product that is not in the cart.
    #[error("product not in cart: {0}")]
    ProductNotInCart(String),

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a record doesn't meet field-level requirements. Checked
/// before business logic runs and before any write.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// Value must not be negative (zero is allowed).
    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Value is not a finite number.
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            product: "Gambas Rojas".to_string(),
            available: 3.0,
            requested: 5.0,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock for Gambas Rojas: available 3, requested 5"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required { field: "name" };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Negative { field: "price" };
        assert_eq!(err.to_string(), "price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required { field: "name" };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
