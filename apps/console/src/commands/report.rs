//! # Report Commands
//!
//! Menu options 6-8 and the one-shot `report` sub-command.
//!
//! Every report is computed by `stockroom_core::ReportEngine`; this module
//! only decides how it looks. In JSON mode the report structure is printed
//! as-is.

use stockroom_core::report::{UniqueValuesReport, ValuationReport};

use crate::output::Output;
use crate::state::AppState;

// =============================================================================
// By Category
// =============================================================================

/// Products, units and value per category.
pub fn category_report(state: &AppState, out: &Output) {
    let buckets = state.inventory.reports().group_by_category();

    if out.is_json() {
        out.json(&buckets);
        return;
    }

    out.header("REPORT BY CATEGORY");
    if buckets.is_empty() {
        out.info("No products registered.");
        return;
    }

    for bucket in &buckets {
        out.blank();
        out.line(&format!("[{}]", bucket.category));
        out.kv("  Products    ", &bucket.product_count.to_string());
        out.kv("  Total stock ", &bucket.total_stock.to_string());
        out.kv("  Total value ", &state.config.format_currency(bucket.total_value));
        for member in &bucket.members {
            out.list_item(&format!(
                "  {} - {} (Stock: {})",
                member.code, member.name, member.stock
            ));
        }
    }
}

// =============================================================================
// Low Stock
// =============================================================================

/// Out-of-stock products, then products below the threshold.
pub fn low_stock_report(state: &AppState, out: &Output) {
    let report = state.inventory.reports().low_stock_report();

    if out.is_json() {
        out.json(&report);
        return;
    }

    out.header(&format!("LOW STOCK REPORT (threshold: {} units)", report.threshold));

    if report.is_healthy() {
        out.success("All products have sufficient stock.");
        return;
    }

    if !report.out_of_stock.is_empty() {
        out.blank();
        out.line(&format!("OUT OF STOCK ({} products)", report.out_of_stock.len()));
        for product in &report.out_of_stock {
            out.list_item(&format!(
                "[{}] {} - Supplier: {}",
                product.code, product.name, product.supplier
            ));
        }
    }

    if !report.low_stock.is_empty() {
        out.blank();
        out.line(&format!("LOW STOCK ({} products)", report.low_stock.len()));
        for product in &report.low_stock {
            out.list_item(&format!(
                "[{}] {} - Stock: {} - Supplier: {}",
                product.code, product.name, product.stock, product.supplier
            ));
        }
    }
}

// =============================================================================
// Valuation
// =============================================================================

const VALUATION_WIDTHS: [usize; 4] = [30, 16, 6, 18];

/// Per-product value table, totals and extremes.
pub fn valuation_report(state: &AppState, out: &Output) {
    let report = state.inventory.reports().valuation_report();

    if out.is_json() {
        out.json(&report);
        return;
    }

    out.header("INVENTORY VALUE REPORT");

    let summary = match report {
        ValuationReport::Empty => {
            out.info("No products registered.");
            return;
        }
        ValuationReport::Summary(summary) => summary,
    };

    let money = |amount: f64| state.config.format_currency(amount);

    out.blank();
    out.table_row(&["Product", "Price", "Stock", "Value"], &VALUATION_WIDTHS);
    for line in &summary.lines {
        let price = format!("{:>16}", money(line.price));
        let stock = format!("{:>6}", line.stock);
        let value = format!("{:>18}", money(line.value));
        out.table_row(
            &[line.name.as_str(), price.as_str(), stock.as_str(), value.as_str()],
            &VALUATION_WIDTHS,
        );
    }

    out.blank();
    out.kv("Products         ", &summary.product_count.to_string());
    out.kv("Total units      ", &summary.total_units.to_string());
    out.kv("Total value      ", &money(summary.total_value));
    out.kv("Average price    ", &money(summary.average_price));
    out.kv(
        "Most expensive   ",
        &format!("{} ({})", summary.most_expensive.name, money(summary.most_expensive.price)),
    );
    out.kv(
        "Cheapest         ",
        &format!("{} ({})", summary.cheapest.name, money(summary.cheapest.price)),
    );
    out.kv(
        "Highest value    ",
        &format!("{} ({})", summary.highest_value.name, money(summary.highest_value.value)),
    );
}

// =============================================================================
// Unique Values
// =============================================================================

/// Distinct categories and suppliers in use.
pub fn unique_values_report(state: &AppState, out: &Output) {
    let report = state.inventory.reports().unique_values_report();

    if out.is_json() {
        out.json(&report);
        return;
    }

    out.header("UNIQUE VALUES REPORT");
    render_unique(&report, out);
}

fn render_unique(report: &UniqueValuesReport, out: &Output) {
    out.kv(
        &format!("Categories in use ({})", report.categories.len()),
        &report.categories.join(", "),
    );
    out.kv(
        &format!("Suppliers in use ({})", report.suppliers.len()),
        &report.suppliers.join(", "),
    );
    out.kv("Distinct values (union)", &report.union_count.to_string());

    if report.intersection.is_empty() {
        out.kv("Shared category/supplier names", "none");
    } else {
        out.kv("Shared category/supplier names", &report.intersection.join(", "));
    }
}
