//! # Reporting Aggregator
//!
//! Date-range filtering and grouped sales analytics.
//!
//! ## Pipeline
//! ```text
//! all sales ──► ReportPeriod::filter(now) ──► analyze(products)
//!                                                   │
//!                                                   ▼
//!                                           SalesAnalytics
//!                                 top products / top customers /
//!                                 by category / by day / by payment
//! ```
//!
//! Every grouping is a deterministic fold over the filtered sales. Keys are
//! accumulated in first-appearance order and revenue sorts are stable, so
//! ties keep their original order.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Category, PaymentMethod, Product, Sale};

/// Presentation-side trim for the top-products / top-customers lists.
pub const TOP_ENTRIES: usize = 10;

// =============================================================================
// Report Period
// =============================================================================

/// Preset date ranges offered by the reports screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateRange {
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
    #[serde(rename = "all")]
    AllTime,
}

impl DateRange {
    /// Length of the rolling window, or None for all time.
    pub fn days(&self) -> Option<i64> {
        match self {
            DateRange::Last7Days => Some(7),
            DateRange::Last30Days => Some(30),
            DateRange::Last90Days => Some(90),
            DateRange::AllTime => None,
        }
    }
}

/// The date filter applied before aggregation.
///
/// An explicit start/end pair takes precedence over the preset range when
/// both are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPeriod {
    pub range: DateRange,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

impl ReportPeriod {
    /// A preset rolling window ending now.
    pub fn preset(range: DateRange) -> Self {
        ReportPeriod {
            range,
            start: None,
            end: None,
        }
    }

    /// An explicit calendar date range, inclusive on both ends.
    pub fn explicit(start: NaiveDate, end: NaiveDate) -> Self {
        ReportPeriod {
            range: DateRange::AllTime,
            start: Some(start),
            end: Some(end),
        }
    }

    /// Returns the sales falling inside this period, preserving order.
    pub fn filter(&self, sales: &[Sale], now: DateTime<Utc>) -> Vec<Sale> {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            return sales
                .iter()
                .filter(|s| {
                    let d = s.date.date_naive();
                    d >= start && d <= end
                })
                .cloned()
                .collect();
        }

        match self.range.days() {
            Some(days) => {
                let cutoff = now - Duration::days(days);
                sales.iter().filter(|s| s.date >= cutoff).cloned().collect()
            }
            None => sales.to_vec(),
        }
    }
}

impl Default for ReportPeriod {
    fn default() -> Self {
        ReportPeriod::preset(DateRange::Last30Days)
    }
}

// =============================================================================
// Groupings
// =============================================================================

/// Quantity and revenue summed per product name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub name: String,
    pub quantity: f64,
    pub revenue: Money,
}

/// Sale count and revenue summed per customer name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSales {
    pub name: String,
    pub purchases: usize,
    pub revenue: Money,
}

/// Quantity and revenue summed per product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySales {
    pub category: Category,
    pub quantity: f64,
    pub revenue: Money,
}

/// Sale count and revenue per calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySales {
    pub date: NaiveDate,
    pub sales: usize,
    pub revenue: Money,
}

/// Sale count and revenue per payment method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodSales {
    pub method: PaymentMethod,
    pub count: usize,
    pub revenue: Money,
}

/// The full analytics aggregate for a filtered period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesAnalytics {
    /// Count of filtered sales.
    pub total_sales: usize,

    /// Sum of filtered sale totals.
    pub total_revenue: Money,

    /// `total_revenue / total_sales`, zero when there are no sales.
    pub avg_order_value: Money,

    /// Products by summed revenue, descending, trimmed to [`TOP_ENTRIES`].
    pub top_products: Vec<ProductSales>,

    /// Customers by summed revenue, descending, trimmed to [`TOP_ENTRIES`].
    /// Sales with no attached customer are excluded.
    pub top_customers: Vec<CustomerSales>,

    /// Per-category totals. Line items whose product was deleted are
    /// silently dropped (category unresolvable).
    pub sales_by_category: Vec<CategorySales>,

    /// Per-day totals, ascending by date.
    pub sales_by_day: Vec<DaySales>,

    /// Per-payment-method totals.
    pub sales_by_payment_method: Vec<PaymentMethodSales>,
}

// =============================================================================
// Aggregation
// =============================================================================

/// Finds or appends the accumulator entry for `key`, preserving
/// first-appearance order.
fn entry<K: PartialEq + Copy, V: Default>(acc: &mut Vec<(K, V)>, key: K) -> &mut V {
    let pos = match acc.iter().position(|(k, _)| *k == key) {
        Some(pos) => pos,
        None => {
            acc.push((key, V::default()));
            acc.len() - 1
        }
    };
    &mut acc[pos].1
}

/// String-keyed variant of [`entry`].
fn entry_by_name<'a, V: Default>(acc: &'a mut Vec<(String, V)>, key: &str) -> &'a mut V {
    let pos = match acc.iter().position(|(k, _)| k == key) {
        Some(pos) => pos,
        None => {
            acc.push((key.to_string(), V::default()));
            acc.len() - 1
        }
    };
    &mut acc[pos].1
}

/// Produces the grouped analytics for an already-filtered list of sales.
///
/// `products` is the *current* product list, used only to resolve line items
/// to categories.
pub fn analyze(sales: &[Sale], products: &[Product]) -> SalesAnalytics {
    let total_sales = sales.len();
    let total_revenue: Money = sales.iter().map(|s| s.total).sum();
    let avg_order_value = if total_sales > 0 {
        Money::from_cents(total_revenue.cents() / total_sales as i64)
    } else {
        Money::zero()
    };

    // By product: keyed on the frozen name snapshot.
    let mut by_product: Vec<(String, (f64, Money))> = Vec::new();
    for sale in sales {
        for item in &sale.items {
            let acc = entry_by_name(&mut by_product, &item.product_name);
            acc.0 += item.quantity;
            acc.1 += item.subtotal;
        }
    }
    let mut top_products: Vec<ProductSales> = by_product
        .into_iter()
        .map(|(name, (quantity, revenue))| ProductSales {
            name,
            quantity,
            revenue,
        })
        .collect();
    top_products.sort_by(|a, b| b.revenue.cmp(&a.revenue)); // stable: ties keep order
    top_products.truncate(TOP_ENTRIES);

    // By customer: anonymous sales are excluded, not bucketed.
    let mut by_customer: Vec<(String, (usize, Money))> = Vec::new();
    for sale in sales {
        if let Some(name) = &sale.customer_name {
            let acc = entry_by_name(&mut by_customer, name);
            acc.0 += 1;
            acc.1 += sale.total;
        }
    }
    let mut top_customers: Vec<CustomerSales> = by_customer
        .into_iter()
        .map(|(name, (purchases, revenue))| CustomerSales {
            name,
            purchases,
            revenue,
        })
        .collect();
    top_customers.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    top_customers.truncate(TOP_ENTRIES);

    // By category: resolved against the current product list; items whose
    // product no longer exists are dropped.
    let mut by_category: Vec<(Category, (f64, Money))> = Vec::new();
    for sale in sales {
        for item in &sale.items {
            if let Some(product) = products.iter().find(|p| p.id == item.product_id) {
                let acc = entry(&mut by_category, product.category);
                acc.0 += item.quantity;
                acc.1 += item.subtotal;
            }
        }
    }
    let sales_by_category: Vec<CategorySales> = by_category
        .into_iter()
        .map(|(category, (quantity, revenue))| CategorySales {
            category,
            quantity,
            revenue,
        })
        .collect();

    // By day: calendar date extracted from the timestamp, ascending.
    let mut by_day: Vec<(NaiveDate, (usize, Money))> = Vec::new();
    for sale in sales {
        let acc = entry(&mut by_day, sale.date.date_naive());
        acc.0 += 1;
        acc.1 += sale.total;
    }
    let mut sales_by_day: Vec<DaySales> = by_day
        .into_iter()
        .map(|(date, (count, revenue))| DaySales {
            date,
            sales: count,
            revenue,
        })
        .collect();
    sales_by_day.sort_by_key(|d| d.date);

    // By payment method.
    let mut by_payment: Vec<(PaymentMethod, (usize, Money))> = Vec::new();
    for sale in sales {
        let acc = entry(&mut by_payment, sale.payment_method);
        acc.0 += 1;
        acc.1 += sale.total;
    }
    let sales_by_payment_method: Vec<PaymentMethodSales> = by_payment
        .into_iter()
        .map(|(method, (count, revenue))| PaymentMethodSales {
            method,
            count,
            revenue,
        })
        .collect();

    SalesAnalytics {
        total_sales,
        total_revenue,
        avg_order_value,
        top_products,
        top_customers,
        sales_by_category,
        sales_by_day,
        sales_by_payment_method,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
