//! # Validation Module
//!
//! Field-level business rule validation, run by the repositories before any
//! record is written. A failed check aborts the write with a typed error and
//! no side effects.

use crate::error::ValidationError;
use crate::types::{Customer, Product, Supplier};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length for entity display names.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a required display name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most [`MAX_NAME_LEN`] characters
pub fn validate_name(field: &'static str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }

    if value.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a cart line quantity.
///
/// ## Rules
/// - Must be strictly positive (a line with nothing on it is removed, not
///   zeroed)
/// - Must be finite (weight entry comes from free-form input upstream)
pub fn validate_quantity(qty: f64) -> ValidationResult<()> {
    if !qty.is_finite() {
        return Err(ValidationError::NotFinite { field: "quantity" });
    }

    if qty <= 0.0 {
        return Err(ValidationError::MustBePositive { field: "quantity" });
    }

    Ok(())
}

/// Validates a non-negative stock level or reorder threshold.
fn validate_stock_level(field: &'static str, level: f64) -> ValidationResult<()> {
    if !level.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }

    if level < 0.0 {
        return Err(ValidationError::Negative { field });
    }

    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates a product before it is saved.
///
/// ## Rules
/// - `name` is required
/// - `price` is non-negative (zero is allowed: giveaways, tasting trays)
/// - `stock` and `min_stock` are non-negative
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_name("name", &product.name)?;

    if product.price.is_negative() {
        return Err(ValidationError::Negative { field: "price" });
    }

    validate_stock_level("stock", product.stock)?;
    validate_stock_level("minStock", product.min_stock)?;

    Ok(())
}

/// Validates a customer before it is saved. Only the name is required;
/// email, phone and address are optional contact details.
pub fn validate_customer(customer: &Customer) -> ValidationResult<()> {
    validate_name("name", &customer.name)?;

    if customer.total_purchases.is_negative() {
        return Err(ValidationError::Negative {
            field: "totalPurchases",
        });
    }

    Ok(())
}

/// Validates a supplier before it is saved.
pub fn validate_supplier(supplier: &Supplier) -> ValidationResult<()> {
    validate_name("name", &supplier.name)?;
    validate_name("contact", &supplier.contact)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
