//! Supplier repository: contact records with validation.
//!
//! No delete: supplier names are referenced as free text from products, so
//! the record book only grows or gets edited in place.

use tracing::info;

use pescaderia_core::validation::validate_supplier;
use pescaderia_core::Supplier;

use crate::error::StoreResult;
use crate::store::Store;

/// Typed handle for the `suppliers` collection.
#[derive(Debug, Clone)]
pub struct SupplierRepository {
    store: Store,
}

impl SupplierRepository {
    pub(crate) fn new(store: Store) -> Self {
        SupplierRepository { store }
    }

    /// All suppliers in insertion order.
    pub fn list(&self) -> StoreResult<Vec<Supplier>> {
        self.store.list()
    }

    pub fn get(&self, id: &str) -> StoreResult<Option<Supplier>> {
        self.store.get(id)
    }

    /// Validates and upserts a supplier.
    pub fn save(&self, supplier: &Supplier) -> StoreResult<()> {
        validate_supplier(supplier)?;
        self.store.upsert(supplier)?;
        info!(id = %supplier.id, name = %supplier.name, "supplier saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreConfig;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_list() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(StoreConfig::new(dir.path()).seed_demo_data(false)).unwrap();
        let repo = store.suppliers();

        repo.save(&Supplier {
            id: "s1".to_string(),
            name: "Pescados del Norte".to_string(),
            contact: "Carlos Rodríguez".to_string(),
            phone: None,
            email: None,
            products: vec!["Merluza".to_string()],
        })
        .unwrap();

        let suppliers = repo.list().unwrap();
        assert_eq!(suppliers.len(), 1);
        assert_eq!(suppliers[0].contact, "Carlos Rodríguez");
    }
}
