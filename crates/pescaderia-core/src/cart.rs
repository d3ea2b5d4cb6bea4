//! # Cart
//!
//! The transient point-of-sale cart: an in-memory list of selected products
//! with quantities, held only during an active POS session. Nothing is
//! persisted until the checkout engine commits.
//!
//! ## Price Freezing
//! Adding a product copies its name and unit price into the line. Editing
//! the product afterwards does not change what the customer is charged; the
//! frozen values flow into the Sale's item snapshots at checkout.
//!
//! ## Stock Guards
//! Cart operations check quantities against the product stock the caller
//! passes in (the snapshot the cashier is looking at). The authoritative
//! check happens again at commit time against re-read live stock, inside the
//! checkout engine.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_quantity;

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product ID (UUID).
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub product_name: String,

    /// Unit price at time of adding (frozen).
    pub price: Money,

    /// Quantity in cart. Fractional for weight-based products.
    pub quantity: f64,
}

impl CartItem {
    /// Creates a cart line from a product, freezing name and price.
    pub fn from_product(product: &Product, quantity: f64) -> Self {
        CartItem {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            price: product.price,
            quantity,
        }
    }

    /// Line subtotal: `price × quantity`, rounded to the cent.
    pub fn subtotal(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The point-of-sale cart.
///
/// ## Invariants
/// - Lines are unique by `product_id`; adding the same product again merges
///   into the existing line
/// - Quantities are strictly positive; updating a line to zero removes it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in the order they were first added. Private so the merge and
    /// positive-quantity invariants can only be reached through the
    /// methods below.
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds a product to the cart, or increases the quantity of its
    /// existing line.
    ///
    /// Rejects the add when the product has no stock at all, or when the
    /// resulting line quantity would exceed the stock level on `product`.
    pub fn add_item(&mut self, product: &Product, quantity: f64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if product.stock <= 0.0 {
            return Err(CoreError::OutOfStock {
                product: product.name.clone(),
            });
        }

        if let Some(line) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_qty = line.quantity + quantity;
            if new_qty > product.stock {
                return Err(CoreError::InsufficientStock {
                    product: product.name.clone(),
                    available: product.stock,
                    requested: new_qty,
                });
            }
            line.quantity = new_qty;
            return Ok(());
        }

        if quantity > product.stock {
            return Err(CoreError::InsufficientStock {
                product: product.name.clone(),
                available: product.stock,
                requested: quantity,
            });
        }

        self.items.push(CartItem::from_product(product, quantity));
        Ok(())
    }

    /// Sets the quantity of an existing line.
    ///
    /// A quantity of zero (or less) removes the line. The frozen name and
    /// price are kept; only the quantity changes.
    pub fn update_quantity(&mut self, product: &Product, quantity: f64) -> CoreResult<()> {
        if quantity <= 0.0 {
            return self.remove_item(&product.id);
        }

        if quantity > product.stock {
            return Err(CoreError::InsufficientStock {
                product: product.name.clone(),
                available: product.stock,
                requested: quantity,
            });
        }

        let line = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id)
            .ok_or_else(|| CoreError::ProductNotInCart(product.id.clone()))?;
        line.quantity = quantity;
        Ok(())
    }

    /// Removes a line by product ID.
    pub fn remove_item(&mut self, product_id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);

        if self.items.len() == initial_len {
            Err(CoreError::ProductNotInCart(product_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The lines in the order they were first added.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of unique lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of line quantities.
    pub fn total_quantity(&self) -> f64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Cart total: sum of the line subtotals.
    pub fn total(&self) -> Money {
        self.items.iter().map(|i| i.subtotal()).sum()
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Unit};
    use chrono::NaiveDate;

    fn test_product(id: &str, price_cents: i64, stock: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: Category::Pescado,
            price: Money::from_cents(price_cents),
            stock,
            unit: Unit::Kg,
            expiry_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            supplier: "Pescados del Norte".to_string(),
            min_stock: 2.0,
            description: None,
        }
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        let product = test_product("1", 1850, 10.0);

        cart.add_item(&product, 2.0).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2.0);
        assert_eq!(cart.total(), Money::from_cents(3700));
    }

    #[test]
    fn test_add_same_product_merges_line() {
        let mut cart = Cart::new();
        let product = test_product("1", 1000, 10.0);

        cart.add_item(&product, 2.0).unwrap();
        cart.add_item(&product, 3.0).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 5.0);
    }

    #[test]
    fn test_add_rejects_out_of_stock() {
        let mut cart = Cart::new();
        let product = test_product("1", 1000, 0.0);

        assert!(matches!(
            cart.add_item(&product, 1.0),
            Err(CoreError::OutOfStock { .. })
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_more_than_stock() {
        let mut cart = Cart::new();
        let product = test_product("1", 1000, 3.0);

        cart.add_item(&product, 2.0).unwrap();
        // Merging would take the line to 4.0 against 3.0 in stock.
        assert!(matches!(
            cart.add_item(&product, 2.0),
            Err(CoreError::InsufficientStock { .. })
        ));
        assert_eq!(cart.total_quantity(), 2.0);
    }

    #[test]
    fn test_price_frozen_at_add_time() {
        let mut cart = Cart::new();
        let mut product = test_product("1", 1000, 10.0);

        cart.add_item(&product, 1.0).unwrap();
        product.price = Money::from_cents(9999);

        assert_eq!(cart.total(), Money::from_cents(1000));
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        let product = test_product("1", 1000, 10.0);

        cart.add_item(&product, 2.0).unwrap();
        cart.update_quantity(&product, 0.0).unwrap();

        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_line_errors() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.remove_item("nope"),
            Err(CoreError::ProductNotInCart(_))
        ));
    }

    #[test]
    fn test_fractional_weight_line() {
        let mut cart = Cart::new();
        let product = test_product("1", 1850, 10.0);

        cart.add_item(&product, 1.5).unwrap();
        assert_eq!(cart.total(), Money::from_cents(2775));
    }

    #[test]
    fn test_items_keeps_first_added_order() {
        let mut cart = Cart::new();
        let p1 = test_product("1", 1000, 10.0);
        let p2 = test_product("2", 500, 10.0);

        cart.add_item(&p1, 1.0).unwrap();
        cart.add_item(&p2, 1.0).unwrap();
        cart.add_item(&p1, 1.0).unwrap();

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(cart.items()[0].quantity, 2.0);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        let product = test_product("1", 1000, 10.0);

        cart.add_item(&product, 2.0).unwrap();
        cart.clear();
        assert!(cart.is_empty());
    }
}
