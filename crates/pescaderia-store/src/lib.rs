//! # pescaderia-store: Persistence Layer for the Pescadería POS
//!
//! JSON-file entity store plus the services that orchestrate it. All
//! business rules live in `pescaderia-core`; this crate reads, validates
//! through core, and writes.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      pescaderia-store                       │
//! │                                                             │
//! │  ┌───────────┐  ┌───────────┐  ┌─────────┐  ┌────────────┐ │
//! │  │ checkout  │  │ dashboard │  │ report  │  │    auth    │ │
//! │  │  engine   │  │  service  │  │ service │  │  service   │ │
//! │  └─────┬─────┘  └─────┬─────┘  └────┬────┘  └─────┬──────┘ │
//! │        │              │             │             │        │
//! │  ┌─────▼──────────────▼─────────────▼─────┐ ┌─────▼──────┐ │
//! │  │   repositories (typed, validating)     │ │session.json│ │
//! │  └─────────────────┬──────────────────────┘ └────────────┘ │
//! │                    │                                        │
//! │  ┌─────────────────▼──────────────────────┐                │
//! │  │  Store: one JSON array file per        │                │
//! │  │  collection, transactions staged       │                │
//! │  │  in memory, temp-file + rename commit  │                │
//! │  └────────────────────────────────────────┘                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! let store = Store::open(StoreConfig::new("./data"))?;
//! let sale = CheckoutEngine::new(store.clone())
//!     .checkout(&cart, Some(&customer.id), PaymentMethod::Tarjeta)?;
//! ```

pub mod auth;
pub mod checkout;
pub mod dashboard;
pub mod error;
pub mod report;
pub mod repository;
pub mod store;

mod seed;

pub use auth::AuthService;
pub use checkout::CheckoutEngine;
pub use dashboard::DashboardService;
pub use error::{StoreError, StoreResult};
pub use report::ReportService;
pub use repository::{
    customer::CustomerRepository, product::ProductRepository, sale::SaleRepository,
    supplier::SupplierRepository,
};
pub use store::{Entity, Store, StoreConfig, Transaction};
