//! # Report Service
//!
//! Glue between the sales ledger and the pure aggregation in
//! `pescaderia_core::report`: reads the collections, supplies the clock,
//! and writes the export document to disk.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use pescaderia_core::export::ReportExport;
use pescaderia_core::report::{analyze, ReportPeriod, SalesAnalytics};

use crate::error::StoreResult;
use crate::store::Store;

/// Sales analytics over the persisted ledger.
#[derive(Debug, Clone)]
pub struct ReportService {
    store: Store,
}

impl ReportService {
    pub fn new(store: Store) -> Self {
        ReportService { store }
    }

    /// Filters the ledger to the period and computes the full analytics
    /// aggregate.
    pub fn analytics(&self, period: ReportPeriod) -> StoreResult<SalesAnalytics> {
        let sales = self.store.sales().list()?;
        let products = self.store.products().list()?;

        let filtered = period.filter(&sales, Utc::now());
        Ok(analyze(&filtered, &products))
    }

    /// Writes the export document (`reporte-pescaderia-YYYY-MM-DD.json`)
    /// into `dir` and returns its path.
    pub fn export(&self, period: ReportPeriod, dir: &Path) -> StoreResult<PathBuf> {
        let analytics = self.analytics(period)?;
        let export = ReportExport::new(period, analytics, Utc::now());

        let path = dir.join(export.file_name());
        let json = export
            .to_json()
            .map_err(|e| crate::error::StoreError::malformed("report export", e))?;
        fs::write(&path, json)?;

        info!(path = %path.display(), "report exported");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::CheckoutEngine;
    use crate::store::StoreConfig;
    use chrono::NaiveDate;
    use pescaderia_core::report::DateRange;
    use pescaderia_core::{Cart, Category, Money, PaymentMethod, Product, Unit};
    use tempfile::TempDir;

    fn product(id: &str, price_cents: i64, stock: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: Category::Pescado,
            price: Money::from_cents(price_cents),
            stock,
            unit: Unit::Kg,
            expiry_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            supplier: "Pescados del Norte".to_string(),
            min_stock: 2.0,
            description: None,
        }
    }

    #[test]
    fn test_analytics_over_checked_out_sales() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(StoreConfig::new(dir.path()).seed_demo_data(false)).unwrap();
        let p1 = product("p1", 1000, 10.0);
        store.upsert(&p1).unwrap();

        let mut cart = Cart::new();
        cart.add_item(&p1, 2.0).unwrap();
        CheckoutEngine::new(store.clone())
            .checkout(&cart, None, PaymentMethod::Efectivo)
            .unwrap();

        let analytics = ReportService::new(store)
            .analytics(ReportPeriod::preset(DateRange::Last7Days))
            .unwrap();
        assert_eq!(analytics.total_sales, 1);
        assert_eq!(analytics.total_revenue, Money::from_cents(2000));
        assert_eq!(analytics.top_products[0].name, "Product p1");
    }

    #[test]
    fn test_export_writes_named_file() {
        let data_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        let store = Store::open(StoreConfig::new(data_dir.path()).seed_demo_data(false)).unwrap();

        let path = ReportService::new(store)
            .export(ReportPeriod::default(), out_dir.path())
            .unwrap();

        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("reporte-pescaderia-"));
        assert!(name.ends_with(".json"));

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"analytics\""));
        assert!(contents.contains("\"generatedAt\""));
    }
}
