//! Product repository: inventory CRUD with validation.

use tracing::info;

use pescaderia_core::validation::validate_product;
use pescaderia_core::Product;

use crate::error::StoreResult;
use crate::store::Store;

/// Typed handle for the `products` collection.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    store: Store,
}

impl ProductRepository {
    pub(crate) fn new(store: Store) -> Self {
        ProductRepository { store }
    }

    /// All products in insertion order.
    pub fn list(&self) -> StoreResult<Vec<Product>> {
        self.store.list()
    }

    pub fn get(&self, id: &str) -> StoreResult<Option<Product>> {
        self.store.get(id)
    }

    /// Validates and upserts a product.
    pub fn save(&self, product: &Product) -> StoreResult<()> {
        validate_product(product)?;
        self.store.upsert(product)?;
        info!(id = %product.id, name = %product.name, "product saved");
        Ok(())
    }

    /// Removes a product. Historical sale lines keep their frozen snapshot
    /// of it; only report category grouping loses the reference.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        self.store.delete::<Product>(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreConfig;
    use chrono::NaiveDate;
    use pescaderia_core::{Category, CoreError, Money, Unit, ValidationError};
    use crate::error::StoreError;
    use tempfile::TempDir;

    fn store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(StoreConfig::new(dir.path()).seed_demo_data(false)).unwrap();
        (dir, store)
    }

    fn sample() -> Product {
        Product {
            id: "p1".to_string(),
            name: "Merluza".to_string(),
            category: Category::Pescado,
            price: Money::from_cents(1280),
            stock: 30.0,
            unit: Unit::Kg,
            expiry_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            supplier: "Pescados del Norte".to_string(),
            min_stock: 8.0,
            description: None,
        }
    }

    #[test]
    fn test_save_rejects_invalid_product_without_writing() {
        let (_dir, store) = store();
        let repo = store.products();

        let mut bad = sample();
        bad.name = String::new();
        let err = repo.save(&bad).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::Validation(ValidationError::Required { .. }))
        ));
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_get_round_trips() {
        let (_dir, store) = store();
        let repo = store.products();

        repo.save(&sample()).unwrap();
        let loaded = repo.get("p1").unwrap().unwrap();
        assert_eq!(loaded.name, "Merluza");
        assert_eq!(loaded.price, Money::from_cents(1280));
    }
}
