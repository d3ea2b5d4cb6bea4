//! # Domain Types
//!
//! Core domain types for the pescadería POS.
//!
//! ## Entities
//! - [`Product`] - inventory record with stock, expiry and reorder threshold
//! - [`Customer`] - relationship record with lifetime purchase totals
//! - [`Sale`] / [`SaleItem`] - immutable receipt with frozen snapshots
//! - [`Supplier`] - contact record with a free-text product list
//! - [`User`] - demo login identity
//!
//! ## Snapshot (denormalized) fields
//! `Sale.customer_name` and `SaleItem.product_name`/`price` are copies taken
//! at sale time, intentionally never re-synced when the source entity is
//! later renamed or re-priced. Receipts stay historically accurate.
//!
//! ## Wire format
//! All entities serialize with camelCase field names; that is the record
//! format of the JSON collections in the entity store.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// Product category of the fish market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Fresh fish (salmón, merluza, ...).
    Pescado,
    /// Shellfish and seafood (gambas, pulpo, ...).
    Marisco,
    /// Canned and preserved goods.
    Conserva,
    /// Everything else.
    Otros,
}

// =============================================================================
// Unit
// =============================================================================

/// Unit a product is sold in.
///
/// `Kg` lines admit fractional quantities; `Unidad` and `Bandeja` are whole
/// counts in practice, though the cart does not enforce integrality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kg,
    Unidad,
    Bandeja,
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown on the POS screen and receipts.
    pub name: String,

    /// Category used for filtering and report grouping.
    pub category: Category,

    /// Unit price in cents (per kg, per unit or per tray).
    pub price: Money,

    /// Current stock level. Fractional for products sold by weight.
    pub stock: f64,

    /// Unit the product is sold in.
    pub unit: Unit,

    /// Calendar expiry date (fresh produce turns over in days).
    pub expiry_date: NaiveDate,

    /// Supplier name, free text (not a foreign key).
    pub supplier: String,

    /// Reorder threshold: stock at or below this level counts as low.
    pub min_stock: f64,

    /// Optional description for product details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// =============================================================================
// Customer
// =============================================================================

/// A customer relationship record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Customer name (required).
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Running lifetime sum of sale totals, updated by the checkout engine.
    pub total_purchases: Money,

    /// Date of the most recent sale attached to this customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_purchase: Option<NaiveDate>,

    /// Manually toggled flag. No automatic promotion rule is tied to
    /// purchase volume.
    pub is_vip: bool,
}

// =============================================================================
// Sale Status
// =============================================================================

/// The status of a sale.
///
/// The checkout engine only ever writes `Completada`. `Pendiente` and
/// `Cancelada` are reserved values for a cancellation/refund flow that does
/// not exist yet; they are kept so stored records remain forward-compatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    Completada,
    Pendiente,
    Cancelada,
}

// =============================================================================
// Payment Method
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Efectivo,
    /// Card payment.
    Tarjeta,
    /// Bank transfer.
    Transferencia,
}

// =============================================================================
// Sale
// =============================================================================

/// A completed sale transaction. Create-only: never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Customer reference, if one was attached at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// Customer name at sale time (frozen).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    /// Line items in the order they were added to the cart.
    pub items: Vec<SaleItem>,

    /// Sum of the item subtotals.
    pub total: Money,

    /// Creation timestamp. Immutable.
    pub date: DateTime<Utc>,

    pub payment_method: PaymentMethod,

    pub status: SaleStatus,
}

// =============================================================================
// Sale Item
// =============================================================================

/// A line item in a sale.
/// Uses the snapshot pattern to freeze product data at time of sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    /// Product reference. May dangle if the product is later deleted.
    pub product_id: String,

    /// Product name at time of sale (frozen).
    pub product_name: String,

    /// Quantity sold. Fractional for weight-based products.
    pub quantity: f64,

    /// Unit price at time of sale (frozen).
    pub price: Money,

    /// `price × quantity`, rounded to the cent.
    pub subtotal: Money,
}

// =============================================================================
// Supplier
// =============================================================================

/// A supplier contact record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    /// Unique identifier (UUID v4).
    pub id: String,

    pub name: String,

    /// Contact person.
    pub contact: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Product names this supplier provides. Free text, not foreign keys.
    pub products: Vec<String>,
}

// =============================================================================
// User
// =============================================================================

/// Role of a logged-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
}

/// A demo login identity. The password never leaves the auth service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    pub role: Role,
}

// =============================================================================
// Unit Tests
// =============================================================================
