//! Customer repository: relationship records with validation and the
//! manual VIP toggle.

use tracing::info;

use pescaderia_core::validation::validate_customer;
use pescaderia_core::{CoreError, Customer};

use crate::error::StoreResult;
use crate::store::Store;

/// Typed handle for the `customers` collection.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    store: Store,
}

impl CustomerRepository {
    pub(crate) fn new(store: Store) -> Self {
        CustomerRepository { store }
    }

    /// All customers in insertion order.
    pub fn list(&self) -> StoreResult<Vec<Customer>> {
        self.store.list()
    }

    pub fn get(&self, id: &str) -> StoreResult<Option<Customer>> {
        self.store.get(id)
    }

    /// Validates and upserts a customer.
    pub fn save(&self, customer: &Customer) -> StoreResult<()> {
        validate_customer(customer)?;
        self.store.upsert(customer)?;
        info!(id = %customer.id, name = %customer.name, "customer saved");
        Ok(())
    }

    /// Removes a customer. Past sales keep the frozen `customer_name`.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        self.store.delete::<Customer>(id)
    }

    /// Sets the VIP flag. Purely manual; purchase volume never flips it.
    pub fn set_vip(&self, id: &str, is_vip: bool) -> StoreResult<Customer> {
        let mut customer = self
            .get(id)?
            .ok_or_else(|| CoreError::CustomerNotFound(id.to_string()))?;
        customer.is_vip = is_vip;
        self.store.upsert(&customer)?;
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::StoreConfig;
    use pescaderia_core::Money;
    use tempfile::TempDir;

    fn store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(StoreConfig::new(dir.path()).seed_demo_data(false)).unwrap();
        (dir, store)
    }

    fn sample() -> Customer {
        Customer {
            id: "c1".to_string(),
            name: "María García".to_string(),
            email: None,
            phone: None,
            address: None,
            total_purchases: Money::zero(),
            last_purchase: None,
            is_vip: false,
        }
    }

    #[test]
    fn test_set_vip_persists() {
        let (_dir, store) = store();
        let repo = store.customers();
        repo.save(&sample()).unwrap();

        let updated = repo.set_vip("c1", true).unwrap();
        assert!(updated.is_vip);
        assert!(repo.get("c1").unwrap().unwrap().is_vip);
    }

    #[test]
    fn test_set_vip_unknown_customer_errors() {
        let (_dir, store) = store();
        let err = store.customers().set_vip("ghost", true).unwrap_err();
        assert!(matches!(err, StoreError::Core(CoreError::CustomerNotFound(_))));
    }
}
