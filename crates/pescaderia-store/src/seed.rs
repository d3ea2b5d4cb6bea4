//! # Demo Seed Data
//!
//! Fixed demo records written into missing collection files on first open:
//! four products, two customers, two suppliers and an empty sales ledger.
//! Expiry and last-purchase dates are generated relative to the current day
//! so a freshly seeded store always has near-expiry stock to show on the
//! dashboard.

use chrono::{Days, NaiveDate, Utc};
use tracing::info;

use pescaderia_core::{Category, Customer, Money, Product, Sale, Supplier, Unit};

use crate::error::StoreResult;
use crate::store::{Entity, Store};

/// Writes demo records into every missing collection file. Existing files
/// are left untouched, so user data survives re-opens. With `seed_demo`
/// off nothing is written and all collections start empty.
pub(crate) fn seed_if_missing(store: &Store, seed_demo: bool) -> StoreResult<()> {
    if !seed_demo {
        return Ok(());
    }

    // Same clock domain as the sale timestamps: the UTC calendar day.
    let today = Utc::now().date_naive();
    let mut seeded = 0usize;

    if !store.collection_exists(Product::COLLECTION) {
        write_collection(store, &demo_products(today))?;
        seeded += 1;
    }
    if !store.collection_exists(Customer::COLLECTION) {
        write_collection(store, &demo_customers(today))?;
        seeded += 1;
    }
    if !store.collection_exists(Supplier::COLLECTION) {
        write_collection(store, &demo_suppliers())?;
        seeded += 1;
    }
    if !store.collection_exists(Sale::COLLECTION) {
        // The sales ledger always starts empty.
        write_collection::<Sale>(store, &[])?;
        seeded += 1;
    }

    if seeded > 0 {
        info!(collections = seeded, "seeded missing collections with demo data");
    }
    Ok(())
}

fn write_collection<E: Entity>(store: &Store, records: &[E]) -> StoreResult<()> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| crate::error::StoreError::malformed(E::COLLECTION, e))?;
    store.write_raw(E::COLLECTION, &json)
}

fn in_days(today: NaiveDate, days: u64) -> NaiveDate {
    today + Days::new(days)
}

fn days_ago(today: NaiveDate, days: u64) -> NaiveDate {
    today - Days::new(days)
}

pub(crate) fn demo_products(today: NaiveDate) -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Salmón Fresco".to_string(),
            category: Category::Pescado,
            price: Money::from_cents(1850),
            stock: 25.0,
            unit: Unit::Kg,
            expiry_date: in_days(today, 5),
            supplier: "Pescados del Norte".to_string(),
            min_stock: 5.0,
            description: Some("Salmón fresco del Atlántico".to_string()),
        },
        Product {
            id: "2".to_string(),
            name: "Gambas Rojas".to_string(),
            category: Category::Marisco,
            price: Money::from_cents(2400),
            stock: 12.0,
            unit: Unit::Kg,
            expiry_date: in_days(today, 3),
            supplier: "Mariscos Costa Brava".to_string(),
            min_stock: 3.0,
            description: Some("Gambas rojas de Palamós".to_string()),
        },
        Product {
            id: "3".to_string(),
            name: "Merluza".to_string(),
            category: Category::Pescado,
            price: Money::from_cents(1280),
            stock: 30.0,
            unit: Unit::Kg,
            expiry_date: in_days(today, 4),
            supplier: "Pescados del Norte".to_string(),
            min_stock: 8.0,
            description: Some("Merluza del Cantábrico".to_string()),
        },
        Product {
            id: "4".to_string(),
            name: "Pulpo Cocido".to_string(),
            category: Category::Marisco,
            price: Money::from_cents(2800),
            stock: 8.0,
            unit: Unit::Kg,
            expiry_date: in_days(today, 6),
            supplier: "Mariscos Costa Brava".to_string(),
            min_stock: 2.0,
            description: Some("Pulpo cocido gallego".to_string()),
        },
    ]
}

pub(crate) fn demo_customers(today: NaiveDate) -> Vec<Customer> {
    vec![
        Customer {
            id: "1".to_string(),
            name: "María García".to_string(),
            email: Some("maria.garcia@email.com".to_string()),
            phone: Some("666123456".to_string()),
            address: Some("Calle Mayor 15, Madrid".to_string()),
            total_purchases: Money::from_cents(45050),
            last_purchase: Some(days_ago(today, 1)),
            is_vip: true,
        },
        Customer {
            id: "2".to_string(),
            name: "Juan Pérez".to_string(),
            email: Some("juan.perez@email.com".to_string()),
            phone: Some("677987654".to_string()),
            address: Some("Avenida del Mar 8, Valencia".to_string()),
            total_purchases: Money::from_cents(12380),
            last_purchase: Some(days_ago(today, 2)),
            is_vip: false,
        },
    ]
}

pub(crate) fn demo_suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: "1".to_string(),
            name: "Pescados del Norte".to_string(),
            contact: "Carlos Rodríguez".to_string(),
            phone: Some("944567890".to_string()),
            email: Some("pedidos@pescadosdelnorte.com".to_string()),
            products: vec!["Salmón Fresco".to_string(), "Merluza".to_string()],
        },
        Supplier {
            id: "2".to_string(),
            name: "Mariscos Costa Brava".to_string(),
            contact: "Anna Puig".to_string(),
            phone: Some("972345678".to_string()),
            email: Some("ventas@mariscoscostabrava.com".to_string()),
            products: vec!["Gambas Rojas".to_string(), "Pulpo Cocido".to_string()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pescaderia_core::metrics::is_expiring_soon;
    use pescaderia_core::EXPIRY_WARNING_DAYS;

    #[test]
    fn test_demo_products_include_near_expiry_stock() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let products = demo_products(today);
        assert_eq!(products.len(), 4);
        assert!(products
            .iter()
            .any(|p| is_expiring_soon(p.expiry_date, today, EXPIRY_WARNING_DAYS)));
    }

    #[test]
    fn test_demo_customer_dates_precede_today() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        for customer in demo_customers(today) {
            assert!(customer.last_purchase.unwrap() < today);
        }
    }
}
