//! # Report Engine
//!
//! Read-only aggregations over the inventory store.
//!
//! ## Reports
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  group_by_category     one bucket per category, first-seen order        │
//! │                        count • total stock • total value                │
//! │                                                                         │
//! │  low_stock_report      out_of_stock: stock == 0                         │
//! │                        low_stock:    0 < stock < threshold              │
//! │                                                                         │
//! │  valuation_report      Empty  ──► nothing to average                    │
//! │                        Summary ─► totals, mean price, min / max price,  │
//! │                                   highest value (ties: first wins)      │
//! │                                                                         │
//! │  unique_values_report  categories and suppliers actually in use         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every result is an owned snapshot: later store mutations do not change a
//! report already produced.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::inventory::InventoryStore;
use crate::types::{Product, ProductCode, StockStatus};

// =============================================================================
// Report Types
// =============================================================================

/// One line of a category bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMember {
    pub code: ProductCode,
    pub name: String,
    pub stock: u64,
}

/// Totals for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub product_count: usize,
    pub total_stock: u64,
    pub total_value: f64,
    pub members: Vec<CategoryMember>,
}

/// Products needing attention, split by severity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockReport {
    /// Threshold the report was computed against.
    pub threshold: u64,
    /// `stock == 0`, in store order.
    pub out_of_stock: Vec<Product>,
    /// `0 < stock < threshold`, in store order.
    pub low_stock: Vec<Product>,
}

impl LowStockReport {
    /// True when no product is out of stock or low.
    pub fn is_healthy(&self) -> bool {
        self.out_of_stock.is_empty() && self.low_stock.is_empty()
    }
}

/// One row of the valuation detail table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationLine {
    pub code: ProductCode,
    pub name: String,
    pub price: f64,
    pub stock: u64,
    pub value: f64,
}

impl From<&Product> for ValuationLine {
    fn from(p: &Product) -> Self {
        ValuationLine {
            code: p.code.clone(),
            name: p.name.clone(),
            price: p.price,
            stock: p.stock,
            value: p.value(),
        }
    }
}

/// Whole-inventory statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationSummary {
    pub product_count: usize,
    pub total_units: u64,
    pub total_value: f64,
    /// Plain mean of unit prices (not weighted by stock).
    pub average_price: f64,
    pub most_expensive: ValuationLine,
    pub cheapest: ValuationLine,
    pub highest_value: ValuationLine,
    pub lines: Vec<ValuationLine>,
}

/// Valuation result; an empty store has nothing to average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "summary", rename_all = "snake_case")]
pub enum ValuationReport {
    Empty,
    Summary(ValuationSummary),
}

/// Distinct categories and suppliers in use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniqueValuesReport {
    /// Sorted.
    pub categories: Vec<String>,
    /// Sorted.
    pub suppliers: Vec<String>,
    /// Size of categories ∪ suppliers.
    pub union_count: usize,
    /// Strings that are both a category and a supplier, sorted.
    pub intersection: Vec<String>,
}

// =============================================================================
// Report Engine
// =============================================================================

/// Borrowing view that computes reports from an [`InventoryStore`].
///
/// Obtained with [`InventoryStore::reports`].
#[derive(Debug, Clone, Copy)]
pub struct ReportEngine<'a> {
    store: &'a InventoryStore,
}

impl<'a> ReportEngine<'a> {
    pub fn new(store: &'a InventoryStore) -> Self {
        ReportEngine { store }
    }

    /// Buckets products by category in first-encounter order.
    ///
    /// An empty store yields no buckets.
    pub fn group_by_category(&self) -> Vec<CategorySummary> {
        let mut buckets: Vec<CategorySummary> = Vec::new();

        for product in self.store.list() {
            let index = match buckets.iter().position(|b| b.category == product.category) {
                Some(index) => index,
                None => {
                    buckets.push(CategorySummary {
                        category: product.category.clone(),
                        product_count: 0,
                        total_stock: 0,
                        total_value: 0.0,
                        members: Vec::new(),
                    });
                    buckets.len() - 1
                }
            };

            let bucket = &mut buckets[index];
            bucket.product_count += 1;
            bucket.total_stock = bucket.total_stock.saturating_add(product.stock);
            bucket.total_value += product.value();
            bucket.members.push(CategoryMember {
                code: product.code.clone(),
                name: product.name.clone(),
                stock: product.stock,
            });
        }

        buckets
    }

    /// Splits products below the stock threshold into zero and low lists.
    pub fn low_stock_report(&self) -> LowStockReport {
        let threshold = self.store.config().stock_threshold;
        let mut report = LowStockReport {
            threshold,
            out_of_stock: Vec::new(),
            low_stock: Vec::new(),
        };

        for product in self.store.list() {
            match product.stock_status(threshold) {
                StockStatus::OutOfStock => report.out_of_stock.push(product.clone()),
                StockStatus::Low => report.low_stock.push(product.clone()),
                StockStatus::Healthy => {}
            }
        }

        report
    }

    /// Totals, mean price and standout products.
    ///
    /// ## Tie-breaking
    /// For min price, max price and max value the first product in store
    /// order wins a tie.
    pub fn valuation_report(&self) -> ValuationReport {
        let products = self.store.list();
        let Some(first) = products.first() else {
            return ValuationReport::Empty;
        };

        let mut most_expensive = first;
        let mut cheapest = first;
        let mut highest_value = first;
        let mut total_units: u64 = 0;
        let mut total_value = 0.0;
        let mut price_sum = 0.0;

        for product in products {
            total_units = total_units.saturating_add(product.stock);
            total_value += product.value();
            price_sum += product.price;

            if product.price > most_expensive.price {
                most_expensive = product;
            }
            if product.price < cheapest.price {
                cheapest = product;
            }
            if product.value() > highest_value.value() {
                highest_value = product;
            }
        }

        ValuationReport::Summary(ValuationSummary {
            product_count: products.len(),
            total_units,
            total_value,
            average_price: price_sum / products.len() as f64,
            most_expensive: most_expensive.into(),
            cheapest: cheapest.into(),
            highest_value: highest_value.into(),
            lines: products.iter().map(ValuationLine::from).collect(),
        })
    }

    /// Distinct categories and suppliers among current products.
    pub fn unique_values_report(&self) -> UniqueValuesReport {
        let categories: BTreeSet<&str> = self
            .store
            .list()
            .iter()
            .map(|p| p.category.as_str())
            .collect();
        let suppliers: BTreeSet<&str> = self
            .store
            .list()
            .iter()
            .map(|p| p.supplier.as_str())
            .collect();

        UniqueValuesReport {
            union_count: categories.union(&suppliers).count(),
            intersection: categories
                .intersection(&suppliers)
                .map(|s| s.to_string())
                .collect(),
            categories: categories.into_iter().map(String::from).collect(),
            suppliers: suppliers.into_iter().map(String::from).collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
