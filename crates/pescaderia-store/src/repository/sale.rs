//! Sale repository: read-only access to the sales ledger.
//!
//! Sales are create-only and only the checkout engine writes them, inside
//! its transaction. This handle exists for the dashboard and reporting
//! services that read the ledger back.

use pescaderia_core::Sale;

use crate::error::StoreResult;
use crate::store::Store;

/// Typed handle for the `sales` collection.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    store: Store,
}

impl SaleRepository {
    pub(crate) fn new(store: Store) -> Self {
        SaleRepository { store }
    }

    /// All sales in the order they were recorded.
    pub fn list(&self) -> StoreResult<Vec<Sale>> {
        self.store.list()
    }

    pub fn get(&self, id: &str) -> StoreResult<Option<Sale>> {
        self.store.get(id)
    }

    /// The most recent `limit` sales, newest first.
    pub fn recent(&self, limit: usize) -> StoreResult<Vec<Sale>> {
        let mut sales = self.list()?;
        sales.sort_by(|a, b| b.date.cmp(&a.date));
        sales.truncate(limit);
        Ok(sales)
    }
}
