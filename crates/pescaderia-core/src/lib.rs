//! # pescaderia-core: Pure Business Logic for the Pescadería POS
//!
//! This crate is the heart of the pescadería point-of-sale system. It
//! contains all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                    Pescadería POS Architecture                     │
//! │                                                                    │
//! │  ┌──────────────────────────────────────────────────────────────┐ │
//! │  │                UI screens (external collaborator)            │ │
//! │  │    Dashboard ──► Inventory ──► POS Cart ──► Reports          │ │
//! │  └──────────────────────────────┬───────────────────────────────┘ │
//! │                                 │                                  │
//! │  ┌──────────────────────────────▼───────────────────────────────┐ │
//! │  │             ★ pescaderia-core (THIS CRATE) ★                 │ │
//! │  │                                                              │ │
//! │  │  ┌────────┐ ┌───────┐ ┌──────┐ ┌─────────┐ ┌──────────────┐ │ │
//! │  │  │ types  │ │ money │ │ cart │ │ metrics │ │    report    │ │ │
//! │  │  │Product │ │ Money │ │ Cart │ │ expiry  │ │ SalesAnalytics│ │ │
//! │  │  │ Sale   │ │ cents │ │ lines│ │ stock   │ │ ReportPeriod │ │ │
//! │  │  └────────┘ └───────┘ └──────┘ └─────────┘ └──────────────┘ │ │
//! │  │                                                              │ │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                      │ │
//! │  └──────────────────────────────┬───────────────────────────────┘ │
//! │                                 │                                  │
//! │  ┌──────────────────────────────▼───────────────────────────────┐ │
//! │  │              pescaderia-store (Persistence Layer)            │ │
//! │  │        JSON entity store, checkout engine, services          │ │
//! │  └──────────────────────────────────────────────────────────────┘ │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Customer, Sale, Supplier, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Transient point-of-sale cart with frozen price snapshots
//! - [`metrics`] - Expiry windows, stock status, dashboard aggregates
//! - [`report`] - Date-range filtering and sales analytics folds
//! - [`export`] - Serializable report document for file download
//! - [`validation`] - Field-level business rule validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: callers pass `today`/`now` explicitly, so every
//!    function is deterministic and trivially testable
//! 2. **Integer Money**: all monetary values are cents (i64); quantities may
//!    be fractional (kilograms) and line totals round to the nearest cent
//! 3. **Explicit Errors**: all errors are typed, never strings or panics

pub mod cart;
pub mod error;
pub mod export;
pub mod metrics;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

pub use cart::{Cart, CartItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

/// Products whose expiry date falls within this many days of today are
/// flagged as "expiring soon" on the dashboard and inventory screens.
pub const EXPIRY_WARNING_DAYS: i64 = 3;
