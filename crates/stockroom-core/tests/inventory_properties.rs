//! End-to-end properties of the inventory store and report engine.

use std::collections::HashMap;

use proptest::prelude::*;
use stockroom_core::report::ValuationReport;
use stockroom_core::validation::{
    normalize_code, validate_category, validate_name, validate_price, validate_stock,
    validate_supplier,
};
use stockroom_core::{
    Confirmation, InventoryConfig, InventoryError, InventoryStore, NewProduct, ReferenceData,
    RemoveOutcome, ValidationError,
};

const CATEGORIES: &[&str] = &["Audio", "Software", "Networking", "Accesorios"];
const SUPPLIERS: &[&str] = &["SonyStore", "AppleStore", "OfficialHP"];

fn new_product(price: f64, stock: u64, category: &str, supplier: &str) -> NewProduct {
    NewProduct {
        name: "Generated product".to_string(),
        price,
        stock,
        category: category.to_string(),
        supplier: supplier.to_string(),
    }
}

fn arb_new_product() -> impl Strategy<Value = NewProduct> {
    (
        100.0f64..5_000_000.0,
        0u64..200,
        prop::sample::select(CATEGORIES),
        prop::sample::select(SUPPLIERS),
    )
        .prop_map(|(price, stock, category, supplier)| {
            new_product(price, stock, category, supplier)
        })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn add_then_find_returns_validated_fields() {
    let config = InventoryConfig::default();
    let reference = ReferenceData::default();
    let mut store = InventoryStore::new(config.clone());

    let added = store
        .add(NewProduct {
            name: validate_name(" Auriculares Sony WH-1000 ").unwrap(),
            price: validate_price("95000", &config).unwrap(),
            stock: validate_stock("2").unwrap(),
            category: validate_category("Audio", &reference).unwrap(),
            supplier: validate_supplier("SonyStore", &reference).unwrap(),
        })
        .unwrap();

    let found = store.find_by_code(&normalize_code(" p001 ")).unwrap();
    assert_eq!(found, &added);
    assert_eq!(found.name, "Auriculares Sony WH-1000");
    assert_eq!(found.price, 95_000.0);
    assert_eq!(found.stock, 2);
    assert_eq!(found.category, "Audio");
    assert_eq!(found.supplier, "SonyStore");
}

#[test]
fn deleting_below_the_max_never_reuses_a_code() {
    let mut store = InventoryStore::new(InventoryConfig::default());
    for _ in 0..3 {
        store.add(new_product(500.0, 1, "Audio", "SonyStore")).unwrap();
    }

    store.remove("P002").unwrap();
    let next = store.add(new_product(500.0, 1, "Audio", "SonyStore")).unwrap();
    assert_eq!(next.code.as_str(), "P004");
    assert!(matches!(store.find_by_code("P002"), Err(InventoryError::NotFound(_))));
}

#[test]
fn confirmation_gates_the_delete() {
    let mut store = InventoryStore::new(InventoryConfig::default());
    store.add(new_product(500.0, 1, "Audio", "SonyStore")).unwrap();

    let outcome = store
        .remove_if_confirmed("P001", Confirmation::parse("n"))
        .unwrap();
    assert_eq!(outcome, RemoveOutcome::Cancelled);
    assert!(store.find_by_code("P001").is_ok());

    let outcome = store
        .remove_if_confirmed("P001", Confirmation::parse("y"))
        .unwrap();
    assert!(matches!(outcome, RemoveOutcome::Deleted(_)));
    assert!(store.find_by_code("P001").is_err());
}

#[test]
fn price_rejections_are_distinct() {
    let config = InventoryConfig::default();
    assert_eq!(validate_price("x", &config), Err(ValidationError::PriceNotANumber));
    assert_eq!(validate_price("0", &config), Err(ValidationError::PriceNotPositive));
    assert_eq!(
        validate_price("50", &config),
        Err(ValidationError::PriceBelowMinimum { min: 100.0 })
    );
    assert_eq!(
        validate_price("6000000", &config),
        Err(ValidationError::PriceAboveMaximum { max: 5_000_000.0 })
    );
    assert_eq!(validate_price("1000", &config), Ok(1000.0));
}

#[test]
fn low_stock_example_inventory() {
    let mut store = InventoryStore::new(InventoryConfig::default());
    for stock in [0, 3, 10] {
        store.add(new_product(500.0, stock, "Audio", "SonyStore")).unwrap();
    }

    let report = store.reports().low_stock_report();
    let zero: Vec<&str> = report.out_of_stock.iter().map(|p| p.code.as_str()).collect();
    let low: Vec<&str> = report.low_stock.iter().map(|p| p.code.as_str()).collect();
    assert_eq!(zero, vec!["P001"]);
    assert_eq!(low, vec!["P002"]);
}

#[test]
fn valuation_on_empty_store_reports_empty() {
    let store = InventoryStore::new(InventoryConfig::default());
    assert_eq!(store.reports().valuation_report(), ValuationReport::Empty);
}

proptest! {
    #[test]
    fn sequential_adds_yield_sequential_codes(count in 1usize..60) {
        let mut store = InventoryStore::new(InventoryConfig::default());
        for i in 1..=count {
            let added = store.add(new_product(500.0, 1, "Audio", "SonyStore")).unwrap();
            prop_assert_eq!(added.code.as_str(), format!("P{:03}", i));
        }
    }

    #[test]
    fn codes_stay_above_every_deleted_non_max_code(
        count in 2usize..30,
        victim_seed in any::<prop::sample::Index>(),
    ) {
        let mut store = InventoryStore::new(InventoryConfig::default());
        for _ in 0..count {
            store.add(new_product(500.0, 1, "Audio", "SonyStore")).unwrap();
        }

        // Any code except the current max.
        let victim = victim_seed.index(count - 1) + 1;
        store.remove(&format!("P{:03}", victim)).unwrap();

        let next = store.add(new_product(500.0, 1, "Audio", "SonyStore")).unwrap();
        prop_assert_eq!(next.code.number(), Some(count as u32 + 1));
    }

    #[test]
    fn category_buckets_match_independent_sums(
        products in prop::collection::vec(arb_new_product(), 0..40),
    ) {
        let mut store = InventoryStore::new(InventoryConfig::default());
        let mut expected: HashMap<String, (usize, u64, f64)> = HashMap::new();
        for p in products {
            let entry = expected.entry(p.category.clone()).or_insert((0, 0, 0.0));
            entry.0 += 1;
            entry.1 += p.stock;
            entry.2 += p.price * p.stock as f64;
            store.add(p).unwrap();
        }

        let buckets = store.reports().group_by_category();
        prop_assert_eq!(buckets.len(), expected.len());
        for bucket in &buckets {
            let (count, stock, value) = expected[&bucket.category];
            prop_assert_eq!(bucket.product_count, count);
            prop_assert_eq!(bucket.total_stock, stock);
            prop_assert!(close(bucket.total_value, value));
        }

        let total: f64 = buckets.iter().map(|b| b.total_value).sum();
        match store.reports().valuation_report() {
            ValuationReport::Empty => prop_assert!(store.is_empty()),
            ValuationReport::Summary(summary) => prop_assert!(close(summary.total_value, total)),
        }
    }

    #[test]
    fn low_stock_lists_partition_by_threshold(
        products in prop::collection::vec(arb_new_product(), 0..40),
        threshold in 0u64..20,
    ) {
        let config = InventoryConfig { stock_threshold: threshold, ..InventoryConfig::default() };
        let mut store = InventoryStore::new(config);
        for p in products {
            store.add(p).unwrap();
        }

        let report = store.reports().low_stock_report();
        prop_assert!(report.out_of_stock.iter().all(|p| p.stock == 0));
        prop_assert!(report.low_stock.iter().all(|p| p.stock > 0 && p.stock < threshold));

        let flagged = report.out_of_stock.len() + report.low_stock.len();
        let expected = store.list().iter().filter(|p| p.stock == 0 || p.stock < threshold).count();
        prop_assert_eq!(flagged, expected);
    }
}
