//! # Derived Metrics
//!
//! Pure functions computing expiry windows, stock status and dashboard
//! aggregates from entity snapshots. Callers supply `today`, so every
//! function here is deterministic: calling twice with the same snapshots
//! returns identical values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Customer, Product, Sale};
use crate::EXPIRY_WARNING_DAYS;

// =============================================================================
// Expiry
// =============================================================================

/// True iff the expiry date is between today and `threshold_days` from now
/// (inclusive on both ends). Already-expired products are not "expiring
/// soon"; they get their own flag via [`is_expired`].
pub fn is_expiring_soon(expiry: NaiveDate, today: NaiveDate, threshold_days: i64) -> bool {
    let days_until = (expiry - today).num_days();
    (0..=threshold_days).contains(&days_until)
}

/// True iff the expiry date is strictly before today. Date-only comparison;
/// a product expiring today is still sellable.
pub fn is_expired(expiry: NaiveDate, today: NaiveDate) -> bool {
    expiry < today
}

// =============================================================================
// Stock Status
// =============================================================================

/// Stock level relative to the product's reorder threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    /// At or below the reorder threshold.
    Low,
    /// Above the threshold but within twice its value.
    Normal,
    /// More than twice the reorder threshold.
    High,
}

/// Classifies a product's stock level.
///
/// `low` iff `stock <= min_stock`; `normal` up to `2 × min_stock`; `high`
/// beyond that.
pub fn stock_status(product: &Product) -> StockStatus {
    if product.stock <= product.min_stock {
        StockStatus::Low
    } else if product.stock <= product.min_stock * 2.0 {
        StockStatus::Normal
    } else {
        StockStatus::High
    }
}

// =============================================================================
// Dashboard Stats
// =============================================================================

/// Aggregate summary shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Sum of all sale totals, all time.
    pub total_sales: Money,

    /// Sum of sale totals whose date falls on the current calendar day.
    pub daily_sales: Money,

    /// Count of products with low stock status.
    pub low_stock_items: usize,

    /// Count of products that are expiring soon or already expired.
    pub expiring_items: usize,

    /// Total customer count.
    pub total_customers: usize,
}

/// Computes the dashboard aggregates from current entity snapshots.
///
/// `today` must come from the same clock domain as the sale timestamps
/// (the UTC calendar day); otherwise daily attribution drifts around
/// midnight.
pub fn dashboard_stats(
    products: &[Product],
    customers: &[Customer],
    sales: &[Sale],
    today: NaiveDate,
) -> DashboardStats {
    let total_sales: Money = sales.iter().map(|s| s.total).sum();

    let daily_sales: Money = sales
        .iter()
        .filter(|s| s.date.date_naive() == today)
        .map(|s| s.total)
        .sum();

    let low_stock_items = products
        .iter()
        .filter(|p| stock_status(p) == StockStatus::Low)
        .count();

    let expiring_items = products
        .iter()
        .filter(|p| {
            is_expiring_soon(p.expiry_date, today, EXPIRY_WARNING_DAYS)
                || is_expired(p.expiry_date, today)
        })
        .count();

    DashboardStats {
        total_sales,
        daily_sales,
        low_stock_items,
        expiring_items,
        total_customers: customers.len(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
