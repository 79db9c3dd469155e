//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  ProductField   │   │  MenuCommand    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code (P001)    │   │  Name           │   │  ListProducts   │       │
//! │  │  name           │   │  Price          │   │  AddProduct     │       │
//! │  │  price          │   │  Stock          │   │  ...            │       │
//! │  │  stock          │   │  Category       │   │  Exit           │       │
//! │  │  category       │   │  Supplier       │   └─────────────────┘       │
//! │  │  supplier       │   └─────────────────┘                              │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  FieldUpdate    │   │  Confirmation   │   │ RemoveOutcome   │       │
//! │  │  one validated  │   │  Confirmed      │   │ Deleted(Product)│       │
//! │  │  field value    │   │  Declined       │   │ Cancelled       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Product Code
// =============================================================================

/// Product identifier: `P` followed by a zero-padded number (`P001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(String);

impl ProductCode {
    /// Builds the code for a sequence number.
    ///
    /// Numbers above 999 are rendered with as many digits as they need.
    pub fn from_number(number: u32) -> Self {
        ProductCode(format!("P{:03}", number))
    }

    /// Wraps a code string as given (no format check).
    pub fn new(code: impl Into<String>) -> Self {
        ProductCode(code.into())
    }

    /// The code as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric suffix, if the code is `P` followed by digits only.
    pub fn number(&self) -> Option<u32> {
        let digits = self.0.strip_prefix('P')?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for ProductCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProductCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product record held by the inventory store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier assigned on add.
    pub code: ProductCode,

    /// Display name (at least 3 characters, not purely numeric).
    pub name: String,

    /// Unit price, within the configured bounds.
    pub price: f64,

    /// Units on hand.
    pub stock: u64,

    /// Member of the valid category set.
    pub category: String,

    /// Member of the authorized supplier sequence.
    pub supplier: String,
}

impl Product {
    /// Inventory value of this product (price × stock).
    #[inline]
    pub fn value(&self) -> f64 {
        self.price * self.stock as f64
    }

    /// Classifies the stock level against a threshold.
    pub fn stock_status(&self, threshold: u64) -> StockStatus {
        if self.stock == 0 {
            StockStatus::OutOfStock
        } else if self.stock < threshold {
            StockStatus::Low
        } else {
            StockStatus::Healthy
        }
    }
}

/// Stock level classification used by listings and the low-stock report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// `stock == 0`.
    OutOfStock,
    /// `0 < stock < threshold`.
    Low,
    /// `stock >= threshold`.
    Healthy,
}

/// The validated fields of a product about to be added.
///
/// The store assigns the code; everything else must already have passed the
/// matching validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: u64,
    pub category: String,
    pub supplier: String,
}

impl NewProduct {
    pub(crate) fn into_product(self, code: ProductCode) -> Product {
        Product {
            code,
            name: self.name,
            price: self.price,
            stock: self.stock,
            category: self.category,
            supplier: self.supplier,
        }
    }
}

// =============================================================================
// Field Updates
// =============================================================================

/// The editable fields of a product, numbered as on the update sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductField {
    Name,
    Price,
    Stock,
    Category,
    Supplier,
}

impl ProductField {
    /// All fields in sub-menu order.
    pub const ALL: [ProductField; 5] = [
        ProductField::Name,
        ProductField::Price,
        ProductField::Stock,
        ProductField::Category,
        ProductField::Supplier,
    ];

    /// Maps a sub-menu option (1-5) to a field.
    pub fn from_option(option: i64) -> Option<Self> {
        match option {
            1 => Some(ProductField::Name),
            2 => Some(ProductField::Price),
            3 => Some(ProductField::Stock),
            4 => Some(ProductField::Category),
            5 => Some(ProductField::Supplier),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ProductField::Name => "Name",
            ProductField::Price => "Price",
            ProductField::Stock => "Stock",
            ProductField::Category => "Category",
            ProductField::Supplier => "Supplier",
        }
    }
}

/// A validated replacement value for exactly one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldUpdate {
    Name(String),
    Price(f64),
    Stock(u64),
    Category(String),
    Supplier(String),
}

impl FieldUpdate {
    /// Which field this update targets.
    pub fn field(&self) -> ProductField {
        match self {
            FieldUpdate::Name(_) => ProductField::Name,
            FieldUpdate::Price(_) => ProductField::Price,
            FieldUpdate::Stock(_) => ProductField::Stock,
            FieldUpdate::Category(_) => ProductField::Category,
            FieldUpdate::Supplier(_) => ProductField::Supplier,
        }
    }

    pub(crate) fn apply(self, product: &mut Product) {
        match self {
            FieldUpdate::Name(name) => product.name = name,
            FieldUpdate::Price(price) => product.price = price,
            FieldUpdate::Stock(stock) => product.stock = stock,
            FieldUpdate::Category(category) => product.category = category,
            FieldUpdate::Supplier(supplier) => product.supplier = supplier,
        }
    }
}

// =============================================================================
// Menu & Confirmation
// =============================================================================

/// The actions on the main menu, numbered 1-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCommand {
    ListProducts,
    AddProduct,
    SearchProducts,
    UpdateProduct,
    DeleteProduct,
    CategoryReport,
    LowStockReport,
    ValuationReport,
    Exit,
}

impl MenuCommand {
    /// All commands in menu order.
    pub const ALL: [MenuCommand; 9] = [
        MenuCommand::ListProducts,
        MenuCommand::AddProduct,
        MenuCommand::SearchProducts,
        MenuCommand::UpdateProduct,
        MenuCommand::DeleteProduct,
        MenuCommand::CategoryReport,
        MenuCommand::LowStockReport,
        MenuCommand::ValuationReport,
        MenuCommand::Exit,
    ];

    /// Maps a validated menu option to its command.
    pub fn from_option(option: i64) -> Option<Self> {
        let index = usize::try_from(option).ok()?.checked_sub(1)?;
        MenuCommand::ALL.get(index).copied()
    }

    /// The menu number of this command.
    pub fn option(&self) -> i64 {
        MenuCommand::ALL
            .iter()
            .position(|c| c == self)
            .map(|i| i as i64 + 1)
            .unwrap_or_default()
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            MenuCommand::ListProducts => "List all products",
            MenuCommand::AddProduct => "Add new product",
            MenuCommand::SearchProducts => "Search product",
            MenuCommand::UpdateProduct => "Update product",
            MenuCommand::DeleteProduct => "Delete product",
            MenuCommand::CategoryReport => "Report by category",
            MenuCommand::LowStockReport => "Low stock report",
            MenuCommand::ValuationReport => "Inventory value report",
            MenuCommand::Exit => "Exit",
        }
    }
}

/// How to search the inventory (search sub-menu 1/2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    ByCode,
    ByName,
}

impl SearchMode {
    /// Maps the raw sub-menu choice; anything but "1"/"2" is rejected.
    pub fn from_choice(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(SearchMode::ByCode),
            "2" => Some(SearchMode::ByName),
            _ => None,
        }
    }
}

/// Answer to a yes/no confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    /// `y` (any case, surrounding whitespace ignored) confirms; anything
    /// else declines.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("y") {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }

    #[inline]
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Confirmation::Confirmed)
    }
}

/// Result of a confirmation-gated delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "product", rename_all = "snake_case")]
pub enum RemoveOutcome {
    /// The product was removed; here is what it held.
    Deleted(Product),
    /// The operator declined; the store is unchanged.
    Cancelled,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: u64) -> Product {
        Product {
            code: ProductCode::from_number(1),
            name: "Mouse Logitech MX3".to_string(),
            price: 18_500.0,
            stock,
            category: "Accesorios".to_string(),
            supplier: "OfficeSupply".to_string(),
        }
    }

    #[test]
    fn test_code_from_number() {
        assert_eq!(ProductCode::from_number(1).as_str(), "P001");
        assert_eq!(ProductCode::from_number(42).as_str(), "P042");
        assert_eq!(ProductCode::from_number(999).as_str(), "P999");
        assert_eq!(ProductCode::from_number(1000).as_str(), "P1000");
    }

    #[test]
    fn test_code_number() {
        assert_eq!(ProductCode::new("P007").number(), Some(7));
        assert_eq!(ProductCode::new("P1000").number(), Some(1000));
        assert_eq!(ProductCode::new("X007").number(), None);
        assert_eq!(ProductCode::new("P").number(), None);
        assert_eq!(ProductCode::new("P0a1").number(), None);
    }

    #[test]
    fn test_product_value() {
        assert_eq!(product(3).value(), 55_500.0);
        assert_eq!(product(0).value(), 0.0);
    }

    #[test]
    fn test_stock_status() {
        assert_eq!(product(0).stock_status(5), StockStatus::OutOfStock);
        assert_eq!(product(4).stock_status(5), StockStatus::Low);
        assert_eq!(product(5).stock_status(5), StockStatus::Healthy);
        // A zero threshold still flags empty stock.
        assert_eq!(product(0).stock_status(0), StockStatus::OutOfStock);
    }

    #[test]
    fn test_menu_command_options() {
        assert_eq!(MenuCommand::from_option(1), Some(MenuCommand::ListProducts));
        assert_eq!(MenuCommand::from_option(9), Some(MenuCommand::Exit));
        assert_eq!(MenuCommand::from_option(0), None);
        assert_eq!(MenuCommand::from_option(10), None);
        assert_eq!(MenuCommand::from_option(-3), None);
        for (i, cmd) in MenuCommand::ALL.iter().enumerate() {
            assert_eq!(cmd.option(), i as i64 + 1);
        }
    }

    #[test]
    fn test_product_field_options() {
        assert_eq!(ProductField::from_option(2), Some(ProductField::Price));
        assert_eq!(ProductField::from_option(6), None);
    }

    #[test]
    fn test_field_update_apply() {
        let mut p = product(3);
        FieldUpdate::Stock(12).apply(&mut p);
        FieldUpdate::Name("Mouse MX Master".to_string()).apply(&mut p);
        assert_eq!(p.stock, 12);
        assert_eq!(p.name, "Mouse MX Master");
        assert_eq!(p.price, 18_500.0);
    }

    #[test]
    fn test_confirmation_parse() {
        assert_eq!(Confirmation::parse("y"), Confirmation::Confirmed);
        assert_eq!(Confirmation::parse(" Y "), Confirmation::Confirmed);
        assert_eq!(Confirmation::parse("yes"), Confirmation::Declined);
        assert_eq!(Confirmation::parse("n"), Confirmation::Declined);
        assert_eq!(Confirmation::parse(""), Confirmation::Declined);
    }

    #[test]
    fn test_search_mode_choice() {
        assert_eq!(SearchMode::from_choice("1"), Some(SearchMode::ByCode));
        assert_eq!(SearchMode::from_choice(" 2"), Some(SearchMode::ByName));
        assert_eq!(SearchMode::from_choice("3"), None);
    }
}
