//! # Entity Store
//!
//! A JSON-file-backed key-value store: one collection file per entity type,
//! each holding a single JSON array in insertion order.
//!
//! ## Layout
//! ```text
//! <data_dir>/
//! ├── products.json
//! ├── customers.json
//! ├── sales.json
//! └── suppliers.json
//! ```
//!
//! ## Contract
//! - `list()` returns all records in insertion order
//! - `upsert()` replaces in place by id, or appends
//! - `delete()` removes by id; deleting an absent id is a silent no-op
//! - Collections are independent stores, except inside a [`Store::transaction`],
//!   which stages whole collections in memory and commits every staged file
//!   only after the closure succeeds
//!
//! There is no schema migration. Missing collection files are seeded once on
//! open; existing files are never re-seeded.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use pescaderia_core::{Customer, Product, Sale, Supplier};

use crate::error::{StoreError, StoreResult};
use crate::repository::customer::CustomerRepository;
use crate::repository::product::ProductRepository;
use crate::repository::sale::SaleRepository;
use crate::repository::supplier::SupplierRepository;
use crate::seed;

// =============================================================================
// Entity Trait
// =============================================================================

/// A record type that lives in one of the store's collections.
pub trait Entity: Serialize + DeserializeOwned + Clone {
    /// Collection (file) name for this entity type.
    const COLLECTION: &'static str;

    /// The record's unique id.
    fn id(&self) -> &str;
}

impl Entity for Product {
    const COLLECTION: &'static str = "products";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Customer {
    const COLLECTION: &'static str = "customers";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Sale {
    const COLLECTION: &'static str = "sales";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Supplier {
    const COLLECTION: &'static str = "suppliers";

    fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Entity store configuration.
///
/// ```rust,ignore
/// let store = Store::open(StoreConfig::new("./data"))?;
/// let empty = Store::open(StoreConfig::new(dir).seed_demo_data(false))?;
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the collection files. Created if missing.
    pub data_dir: PathBuf,

    /// Whether missing product/customer/supplier collections are seeded
    /// with the fixed demo records. Default: true. Sales always start
    /// empty. Existing files are never touched either way.
    pub seed_demo_data: bool,
}

impl StoreConfig {
    /// Creates a configuration with the given data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            seed_demo_data: true,
        }
    }

    /// Sets whether demo records are seeded into missing collections.
    pub fn seed_demo_data(mut self, seed: bool) -> Self {
        self.seed_demo_data = seed;
        self
    }
}

// =============================================================================
// Store
// =============================================================================

/// Main store handle providing collection access.
///
/// Cheap to clone; clones share the same data directory and write lock.
/// Constructed explicitly and passed to the services that need it, never a
/// process-wide singleton.
#[derive(Debug, Clone)]
pub struct Store {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    data_dir: PathBuf,

    /// Serializes writers. Reads go straight to the file system; the
    /// synchronous single-session model means a read never races a commit
    /// mid-rename thanks to the temp-file + rename write path.
    write_lock: Mutex<()>,
}

impl Store {
    /// Opens (and, if necessary, creates and seeds) a store at the given
    /// data directory.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        fs::create_dir_all(&config.data_dir)?;

        let store = Store {
            inner: Arc::new(Inner {
                data_dir: config.data_dir,
                write_lock: Mutex::new(()),
            }),
        };

        seed::seed_if_missing(&store, config.seed_demo_data)?;

        info!(path = %store.inner.data_dir.display(), "Entity store opened");
        Ok(store)
    }

    /// The directory the collection files live in.
    pub fn data_dir(&self) -> &Path {
        &self.inner.data_dir
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.inner.data_dir.join(format!("{collection}.json"))
    }

    pub(crate) fn collection_exists(&self, collection: &str) -> bool {
        self.collection_path(collection).exists()
    }

    fn read_collection<E: Entity>(&self) -> StoreResult<Vec<E>> {
        let path = self.collection_path(E::COLLECTION);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let data = fs::read_to_string(&path)?;
        serde_json::from_str(&data).map_err(|e| StoreError::malformed(E::COLLECTION, e))
    }

    /// Writes a collection file via temp-file + rename, so a crash never
    /// leaves a half-written collection behind.
    pub(crate) fn write_raw(&self, collection: &str, json: &str) -> StoreResult<()> {
        let path = self.collection_path(collection);
        let tmp = self.inner.data_dir.join(format!("{collection}.json.tmp"));
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn encode<E: Entity>(records: &[E]) -> StoreResult<String> {
        serde_json::to_string_pretty(records).map_err(|e| StoreError::malformed(E::COLLECTION, e))
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // The guard holds no data, so a poisoned lock is still a valid
        // lock; recover it rather than panicking.
        self.inner
            .write_lock
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }

    // -------------------------------------------------------------------------
    // Collection operations
    // -------------------------------------------------------------------------

    /// Lists all records of a collection in insertion order.
    pub fn list<E: Entity>(&self) -> StoreResult<Vec<E>> {
        self.read_collection()
    }

    /// Finds a record by id.
    pub fn get<E: Entity>(&self, id: &str) -> StoreResult<Option<E>> {
        Ok(self.list::<E>()?.into_iter().find(|e| e.id() == id))
    }

    /// Inserts the record if its id is absent, replaces it in place
    /// otherwise.
    pub fn upsert<E: Entity>(&self, entity: &E) -> StoreResult<()> {
        let _guard = self.lock();

        let mut records: Vec<E> = self.read_collection()?;
        match records.iter().position(|e| e.id() == entity.id()) {
            Some(pos) => records[pos] = entity.clone(),
            None => records.push(entity.clone()),
        }

        self.write_raw(E::COLLECTION, &Self::encode(&records)?)?;
        debug!(collection = E::COLLECTION, id = entity.id(), "record upserted");
        Ok(())
    }

    /// Removes the record with the matching id. Returns whether a record
    /// was actually removed; deleting an absent id is a silent no-op that
    /// leaves the file untouched.
    pub fn delete<E: Entity>(&self, id: &str) -> StoreResult<bool> {
        let _guard = self.lock();

        let mut records: Vec<E> = self.read_collection()?;
        let initial_len = records.len();
        records.retain(|e| e.id() != id);

        if records.len() == initial_len {
            debug!(collection = E::COLLECTION, id, "delete of absent id, no-op");
            return Ok(false);
        }

        self.write_raw(E::COLLECTION, &Self::encode(&records)?)?;
        debug!(collection = E::COLLECTION, id, "record deleted");
        Ok(true)
    }

    // -------------------------------------------------------------------------
    // Transactions
    // -------------------------------------------------------------------------

    /// Runs a multi-collection write as a single applied-or-rejected unit.
    ///
    /// The closure reads and stages whole collections through the
    /// [`Transaction`]; nothing touches disk until it returns `Ok`, at which
    /// point every staged collection is committed. Returning `Err` discards
    /// all staged writes.
    ///
    /// This is the transaction boundary the checkout engine uses to keep
    /// the sale record, the stock decrements and the customer totals
    /// consistent with each other.
    pub fn transaction<T, F>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&mut Transaction<'_>) -> StoreResult<T>,
    {
        let _guard = self.lock();

        let mut tx = Transaction {
            store: self,
            staged: HashMap::new(),
        };

        let out = f(&mut tx)?;

        for (collection, json) in tx.staged {
            self.write_raw(collection, &json)?;
        }

        Ok(out)
    }

    // -------------------------------------------------------------------------
    // Typed accessors
    // -------------------------------------------------------------------------

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.clone())
    }

    /// Returns the customer repository.
    pub fn customers(&self) -> CustomerRepository {
        CustomerRepository::new(self.clone())
    }

    /// Returns the sale repository.
    pub fn sales(&self) -> SaleRepository {
        SaleRepository::new(self.clone())
    }

    /// Returns the supplier repository.
    pub fn suppliers(&self) -> SupplierRepository {
        SupplierRepository::new(self.clone())
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// Staged multi-collection write. Created by [`Store::transaction`].
pub struct Transaction<'a> {
    store: &'a Store,
    staged: HashMap<&'static str, String>,
}

impl Transaction<'_> {
    /// Reads a collection: the staged version if this transaction already
    /// wrote it, otherwise the live file.
    pub fn list<E: Entity>(&self) -> StoreResult<Vec<E>> {
        match self.staged.get(E::COLLECTION) {
            Some(json) => {
                serde_json::from_str(json).map_err(|e| StoreError::malformed(E::COLLECTION, e))
            }
            None => self.store.read_collection(),
        }
    }

    /// Stages the full contents of a collection. Committed only if the
    /// transaction closure succeeds.
    pub fn put<E: Entity>(&mut self, records: &[E]) -> StoreResult<()> {
        self.staged.insert(E::COLLECTION, Store::encode(records)?);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pescaderia_core::{Category, Money, Unit};
    use tempfile::TempDir;

    fn empty_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(StoreConfig::new(dir.path()).seed_demo_data(false)).unwrap();
        (dir, store)
    }

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
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
    fn test_open_seeds_demo_data_once() {
        let dir = TempDir::new().unwrap();

        let store = Store::open(StoreConfig::new(dir.path())).unwrap();
        let products: Vec<Product> = store.list().unwrap();
        assert!(!products.is_empty());
        let sales: Vec<Sale> = store.list().unwrap();
        assert!(sales.is_empty());

        // Mutate, then re-open: the store must not re-seed.
        store.delete::<Product>(&products[0].id).unwrap();
        let reopened = Store::open(StoreConfig::new(dir.path())).unwrap();
        let after: Vec<Product> = reopened.list().unwrap();
        assert_eq!(after.len(), products.len() - 1);
    }

    #[test]
    fn test_upsert_inserts_then_replaces_in_place() {
        let (_dir, store) = empty_store();

        store.upsert(&product("p1", "Merluza")).unwrap();
        store.upsert(&product("p2", "Salmón")).unwrap();

        let mut renamed = product("p1", "Merluza Nacional");
        renamed.stock = 12.0;
        store.upsert(&renamed).unwrap();

        let products: Vec<Product> = store.list().unwrap();
        assert_eq!(products.len(), 2);
        // Replacement preserves insertion order.
        assert_eq!(products[0].name, "Merluza Nacional");
        assert_eq!(products[0].stock, 12.0);
        assert_eq!(products[1].name, "Salmón");
    }

    #[test]
    fn test_delete_absent_id_is_noop() {
        let (_dir, store) = empty_store();
        store.upsert(&product("p1", "Merluza")).unwrap();

        assert!(!store.delete::<Product>("missing").unwrap());
        let products: Vec<Product> = store.list().unwrap();
        assert_eq!(products.len(), 1);

        assert!(store.delete::<Product>("p1").unwrap());
        let products: Vec<Product> = store.list().unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_malformed_collection_surfaces_typed_error() {
        let (dir, store) = empty_store();
        fs::write(dir.path().join("products.json"), "{ not json ]").unwrap();

        let err = store.list::<Product>().unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[test]
    fn test_transaction_commits_all_staged_collections() {
        let (_dir, store) = empty_store();
        store.upsert(&product("p1", "Merluza")).unwrap();

        store
            .transaction(|tx| {
                let mut products: Vec<Product> = tx.list()?;
                products[0].stock = 1.0;
                tx.put(&products)?;

                let customers = vec![Customer {
                    id: "c1".to_string(),
                    name: "María".to_string(),
                    email: None,
                    phone: None,
                    address: None,
                    total_purchases: Money::zero(),
                    last_purchase: None,
                    is_vip: false,
                }];
                tx.put(&customers)?;
                Ok(())
            })
            .unwrap();

        let products: Vec<Product> = store.list().unwrap();
        assert_eq!(products[0].stock, 1.0);
        let customers: Vec<Customer> = store.list().unwrap();
        assert_eq!(customers.len(), 1);
    }

    #[test]
    fn test_failed_transaction_writes_nothing() {
        let (_dir, store) = empty_store();
        store.upsert(&product("p1", "Merluza")).unwrap();

        let result: StoreResult<()> = store.transaction(|tx| {
            let mut products: Vec<Product> = tx.list()?;
            products[0].stock = 0.0;
            tx.put(&products)?;
            Err(pescaderia_core::CoreError::EmptyCart.into())
        });
        assert!(result.is_err());

        let products: Vec<Product> = store.list().unwrap();
        assert_eq!(products[0].stock, 30.0);
    }

    #[test]
    fn test_store_survives_panic_while_locked() {
        let (_dir, store) = empty_store();

        // A panic inside a transaction closure unwinds while the write
        // lock is held, poisoning it.
        let poisoner = store.clone();
        let handle = std::thread::spawn(move || {
            let _: StoreResult<()> = poisoner.transaction(|_tx| panic!("interrupted"));
        });
        assert!(handle.join().is_err());

        // The store stays usable: the lock guards no data.
        store.upsert(&product("p1", "Merluza")).unwrap();
        let products: Vec<Product> = store.list().unwrap();
        assert_eq!(products.len(), 1);
    }

    #[test]
    fn test_transaction_reads_its_own_staged_writes() {
        let (_dir, store) = empty_store();

        store
            .transaction(|tx| {
                tx.put(&[product("p1", "Merluza")])?;
                let staged: Vec<Product> = tx.list()?;
                assert_eq!(staged.len(), 1);
                Ok(())
            })
            .unwrap();
    }
}
