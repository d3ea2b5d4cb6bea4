//! # Repositories
//!
//! Thin typed handles over the entity store, one per collection. Each
//! repository validates through `pescaderia-core` before writing, so a
//! record that fails a business rule never reaches its collection file.
//!
//! Sales are the exception twice over: they are created only by the
//! checkout engine (inside its transaction) and they are create-only, so
//! [`sale::SaleRepository`] exposes no save or delete.

pub mod customer;
pub mod product;
pub mod sale;
pub mod supplier;

use uuid::Uuid;

/// Generates a fresh record id (UUID v4).
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
