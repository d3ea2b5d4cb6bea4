//! # Checkout Engine
//!
//! Turns a cart into a persisted sale. This is the only multi-entity write
//! in the system, and it runs as one applied-or-rejected transaction:
//!
//! ```text
//! Cart ──► validate lines against LIVE stock
//!              │ ok
//!              ▼
//!        stage: sale appended, stock decremented, customer totals bumped
//!              │ ok
//!              ▼
//!        commit all three collections
//! ```
//!
//! Any failure (empty cart, stale stock, unknown customer) rejects the whole
//! checkout and leaves every collection untouched.
//!
//! ## Snapshots
//! The sale copies the cart's frozen names and prices; if a product was
//! re-priced between add-to-cart and checkout, the customer pays the price
//! they were shown. Only stock is re-validated live.

use chrono::Utc;
use tracing::{info, warn};

use pescaderia_core::{
    Cart, CoreError, Customer, PaymentMethod, Product, Sale, SaleItem, SaleStatus,
};

use crate::error::StoreResult;
use crate::repository::new_id;
use crate::store::Store;

/// Commits carts as sales.
#[derive(Debug, Clone)]
pub struct CheckoutEngine {
    store: Store,
}

impl CheckoutEngine {
    pub fn new(store: Store) -> Self {
        CheckoutEngine { store }
    }

    /// Validates the cart against live stock and, if every line passes,
    /// persists the sale, decrements product stock and updates the attached
    /// customer's lifetime totals, all in one transaction.
    ///
    /// `customer_id: None` records an anonymous walk-in sale.
    pub fn checkout(
        &self,
        cart: &Cart,
        customer_id: Option<&str>,
        payment_method: PaymentMethod,
    ) -> StoreResult<Sale> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart.into());
        }

        let sale = self.store.transaction(|tx| {
            let mut products: Vec<Product> = tx.list()?;

            // Re-validate every line against live stock; the cart's own
            // checks ran against the snapshot the cashier was shown and may
            // be stale by now.
            let mut items = Vec::with_capacity(cart.item_count());
            for line in cart.items() {
                let product = products
                    .iter_mut()
                    .find(|p| p.id == line.product_id)
                    .ok_or_else(|| CoreError::ProductNotFound(line.product_id.clone()))?;

                if product.stock <= 0.0 {
                    warn!(product = %product.name, "checkout rejected, product sold out");
                    return Err(CoreError::OutOfStock {
                        product: product.name.clone(),
                    }
                    .into());
                }
                if line.quantity > product.stock {
                    warn!(
                        product = %product.name,
                        available = product.stock,
                        requested = line.quantity,
                        "checkout rejected, stale cart quantity"
                    );
                    return Err(CoreError::InsufficientStock {
                        product: product.name.clone(),
                        available: product.stock,
                        requested: line.quantity,
                    }
                    .into());
                }

                product.stock -= line.quantity;
                items.push(SaleItem {
                    product_id: line.product_id.clone(),
                    product_name: line.product_name.clone(),
                    quantity: line.quantity,
                    price: line.price,
                    subtotal: line.subtotal(),
                });
            }

            let total = cart.total();
            let date = Utc::now();

            // Attach and update the customer before anything is staged as
            // final; an unknown id rejects the whole checkout.
            let customer_name = match customer_id {
                Some(id) => {
                    let mut customers: Vec<Customer> = tx.list()?;
                    let customer = customers
                        .iter_mut()
                        .find(|c| c.id == id)
                        .ok_or_else(|| CoreError::CustomerNotFound(id.to_string()))?;
                    customer.total_purchases += total;
                    customer.last_purchase = Some(date.date_naive());
                    let name = customer.name.clone();
                    tx.put(&customers)?;
                    Some(name)
                }
                None => None,
            };

            let sale = Sale {
                id: new_id(),
                customer_id: customer_id.map(str::to_string),
                customer_name,
                items,
                total,
                date,
                payment_method,
                status: SaleStatus::Completada,
            };

            tx.put(&products)?;
            let mut sales: Vec<Sale> = tx.list()?;
            sales.push(sale.clone());
            tx.put(&sales)?;

            Ok(sale)
        })?;

        info!(
            sale = %sale.id,
            total = %sale.total,
            lines = sale.items.len(),
            "sale completed"
        );
        Ok(sale)
    }
}
