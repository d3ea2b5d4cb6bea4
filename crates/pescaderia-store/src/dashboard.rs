//! # Dashboard Service
//!
//! Reads the collections and feeds them through the pure aggregation in
//! `pescaderia_core::metrics`. The service owns the clock; the core stays
//! deterministic by taking `today` as a parameter.
//!
//! Sale timestamps are UTC, so `today` is the UTC calendar day as well.
//! Mixing in the local date would drop early-morning sales from the daily
//! total whenever the local and UTC dates disagree.

use chrono::{NaiveDate, Utc};
use tracing::debug;

use pescaderia_core::metrics::{dashboard_stats, is_expiring_soon, stock_status, DashboardStats, StockStatus};
use pescaderia_core::{Product, Sale, EXPIRY_WARNING_DAYS};

use crate::error::StoreResult;
use crate::store::Store;

/// Aggregated views for the main dashboard screen.
#[derive(Debug, Clone)]
pub struct DashboardService {
    store: Store,
}

impl DashboardService {
    pub fn new(store: Store) -> Self {
        DashboardService { store }
    }

    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }

    /// The dashboard headline numbers: totals, today's revenue, low-stock
    /// and expiring counts. Pure read; calling it twice changes nothing.
    pub fn stats(&self) -> StoreResult<DashboardStats> {
        let products = self.store.products().list()?;
        let customers = self.store.customers().list()?;
        let sales = self.store.sales().list()?;

        let stats = dashboard_stats(&products, &customers, &sales, self.today());
        debug!(
            low_stock = stats.low_stock_items,
            expiring = stats.expiring_items,
            "dashboard stats computed"
        );
        Ok(stats)
    }

    /// Products at or below their reorder threshold.
    pub fn low_stock_products(&self) -> StoreResult<Vec<Product>> {
        let products = self.store.products().list()?;
        Ok(products
            .into_iter()
            .filter(|p| stock_status(p) == StockStatus::Low)
            .collect())
    }

    /// Products expiring within the warning window (today included,
    /// already-expired excluded).
    pub fn expiring_products(&self) -> StoreResult<Vec<Product>> {
        let today = self.today();
        let products = self.store.products().list()?;
        Ok(products
            .into_iter()
            .filter(|p| is_expiring_soon(p.expiry_date, today, EXPIRY_WARNING_DAYS))
            .collect())
    }

    /// The latest sales for the activity feed, newest first.
    pub fn recent_sales(&self, limit: usize) -> StoreResult<Vec<Sale>> {
        self.store.sales().recent(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::CheckoutEngine;
    use crate::store::StoreConfig;
    use chrono::Days;
    use pescaderia_core::{Cart, Category, Money, PaymentMethod, Unit};
    use tempfile::TempDir;

    fn store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(StoreConfig::new(dir.path()).seed_demo_data(false)).unwrap();
        (dir, store)
    }

    fn product(id: &str, stock: f64, min_stock: f64, expires_in_days: u64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: Category::Pescado,
            price: Money::from_cents(1000),
            stock,
            unit: Unit::Kg,
            expiry_date: Utc::now().date_naive() + Days::new(expires_in_days),
            supplier: "Pescados del Norte".to_string(),
            min_stock,
            description: None,
        }
    }

    #[test]
    fn test_low_stock_uses_inclusive_threshold() {
        let (_dir, store) = store();
        store.upsert(&product("p1", 5.0, 5.0, 30)).unwrap();
        store.upsert(&product("p2", 6.0, 5.0, 30)).unwrap();

        let service = DashboardService::new(store);
        let low = service.low_stock_products().unwrap();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].id, "p1");
    }

    #[test]
    fn test_expiring_window_includes_today_excludes_beyond() {
        let (_dir, store) = store();
        store.upsert(&product("p1", 10.0, 2.0, 0)).unwrap();
        store.upsert(&product("p2", 10.0, 2.0, 3)).unwrap();
        store.upsert(&product("p3", 10.0, 2.0, 4)).unwrap();

        let service = DashboardService::new(store);
        let expiring = service.expiring_products().unwrap();
        let ids: Vec<&str> = expiring.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn test_sale_made_now_counts_in_daily_sales() {
        let (_dir, store) = store();
        let p = product("p1", 10.0, 2.0, 30);
        store.upsert(&p).unwrap();

        let mut cart = Cart::new();
        cart.add_item(&p, 2.0).unwrap();
        CheckoutEngine::new(store.clone())
            .checkout(&cart, None, PaymentMethod::Efectivo)
            .unwrap();

        // Sale timestamps and `today` share the UTC calendar, so a sale
        // committed just now always lands in today's total, whatever the
        // process timezone is.
        let stats = DashboardService::new(store).stats().unwrap();
        assert_eq!(stats.daily_sales, Money::from_cents(2000));
        assert_eq!(stats.total_sales, Money::from_cents(2000));
    }

    #[test]
    fn test_stats_are_idempotent() {
        let (_dir, store) = store();
        store.upsert(&product("p1", 1.0, 5.0, 1)).unwrap();

        let service = DashboardService::new(store);
        let first = service.stats().unwrap();
        let second = service.stats().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.low_stock_items, 1);
        assert_eq!(first.expiring_items, 1);
    }
}
