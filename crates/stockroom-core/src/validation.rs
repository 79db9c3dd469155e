//! # Validation Module
//!
//! Pure checks over the raw strings the operator types.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Flow                                    │
//! │                                                                         │
//! │  Console prompt ──► raw string                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  THIS MODULE: validate_* (no side effects, no store access)            │
//! │           │                                                             │
//! │           ├── Err(ValidationError) ──► reason shown, prompt again       │
//! │           │                                                             │
//! │           └── Ok(normalized value) ──► InventoryStore::add / update     │
//! │                                                                         │
//! │  The store trusts its callers: it does NOT re-validate.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{validate_price, validate_stock};
//! use stockroom_core::{InventoryConfig, ValidationError};
//!
//! let config = InventoryConfig::default();
//! assert_eq!(validate_price("1000", &config), Ok(1000.0));
//! assert_eq!(validate_price("0", &config), Err(ValidationError::PriceNotPositive));
//! assert_eq!(validate_stock("7"), Ok(7));
//! ```

use crate::config::InventoryConfig;
use crate::error::ValidationError;
use crate::reference::ReferenceData;
use crate::types::{FieldUpdate, Product, ProductCode, ProductField};
use crate::{MAX_STOCK, MIN_NAME_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Menu Validators
// =============================================================================

/// Accepts `raw` when it parses as an integer within `min..=max`.
///
/// Every failure maps to the same [`ValidationError::InvalidOption`].
pub fn validate_menu_option(raw: &str, min: i64, max: i64) -> ValidationResult<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|value| (min..=max).contains(value))
        .ok_or(ValidationError::InvalidOption { min, max })
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - At least 3 characters after trimming
/// - Not made of ASCII digits only (`"½½½"` and `"١٢٣"` are names)
///
/// Returns the trimmed name; case and inner whitespace are preserved.
pub fn validate_name(raw: &str) -> ValidationResult<String> {
    let name = raw.trim();

    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(ValidationError::NameTooShort {
            min: MIN_NAME_LENGTH,
        });
    }

    if name.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NameNumeric);
    }

    Ok(name.to_string())
}

/// Validates a price against the configured bounds.
///
/// ## Rules (checked in this order)
/// ```text
/// "abc" / "inf" / "NaN"  → PriceNotANumber
/// <= 0                   → PriceNotPositive
/// <  config.min_price    → PriceBelowMinimum
/// >  config.max_price    → PriceAboveMaximum
/// otherwise              → Ok(parsed value)
/// ```
pub fn validate_price(raw: &str, config: &InventoryConfig) -> ValidationResult<f64> {
    let price = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or(ValidationError::PriceNotANumber)?;

    check_price(price, config)
}

/// Range checks shared by [`validate_price`] and [`validate_record`].
fn check_price(price: f64, config: &InventoryConfig) -> ValidationResult<f64> {
    if !price.is_finite() {
        return Err(ValidationError::PriceNotANumber);
    }

    if price <= 0.0 {
        return Err(ValidationError::PriceNotPositive);
    }

    if price < config.min_price {
        return Err(ValidationError::PriceBelowMinimum {
            min: config.min_price,
        });
    }

    if price > config.max_price {
        return Err(ValidationError::PriceAboveMaximum {
            max: config.max_price,
        });
    }

    Ok(price)
}

/// Validates a stock quantity.
///
/// ## Rules
/// - An integer, not negative
/// - At most [`MAX_STOCK`], which keeps report totals far from `u64::MAX`
pub fn validate_stock(raw: &str) -> ValidationResult<u64> {
    let stock = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::StockNotAnInteger)?;

    let stock = u64::try_from(stock).map_err(|_| ValidationError::StockNegative)?;
    check_stock(stock)
}

fn check_stock(stock: u64) -> ValidationResult<u64> {
    if stock > MAX_STOCK {
        return Err(ValidationError::StockAboveMaximum { max: MAX_STOCK });
    }
    Ok(stock)
}

/// Validates a category against the valid set (exact match after trimming).
pub fn validate_category(raw: &str, reference: &ReferenceData) -> ValidationResult<String> {
    let category = raw.trim();

    if !reference.is_valid_category(category) {
        return Err(ValidationError::UnknownCategory {
            value: category.to_string(),
            allowed: reference.category_list(),
        });
    }

    Ok(category.to_string())
}

/// Validates a supplier against the authorized sequence (exact match after
/// trimming).
pub fn validate_supplier(raw: &str, reference: &ReferenceData) -> ValidationResult<String> {
    let supplier = raw.trim();

    if !reference.is_authorized_supplier(supplier) {
        return Err(ValidationError::UnauthorizedSupplier {
            value: supplier.to_string(),
            allowed: reference.suppliers().to_vec(),
        });
    }

    Ok(supplier.to_string())
}

// =============================================================================
// Record Validation
// =============================================================================

/// Runs every field rule over an already-built product.
///
/// Used for records that did not come through the prompts, such as the
/// sample catalogue.
pub fn validate_record(
    product: &Product,
    config: &InventoryConfig,
    reference: &ReferenceData,
) -> ValidationResult<()> {
    validate_name(&product.name)?;
    check_price(product.price, config)?;
    check_stock(product.stock)?;
    validate_category(&product.category, reference)?;
    validate_supplier(&product.supplier, reference)?;
    Ok(())
}

// =============================================================================
// Code Validators
// =============================================================================

/// Checks the strict code format: exactly `P` followed by three digits.
///
/// Lookups do not require this; see [`normalize_code`].
pub fn validate_code_format(raw: &str) -> ValidationResult<ProductCode> {
    let mut chars = raw.chars();
    let well_formed = raw.chars().count() == 4
        && chars.next() == Some('P')
        && chars.all(|c| c.is_ascii_digit());

    if !well_formed {
        return Err(ValidationError::InvalidCodeFormat {
            code: raw.to_string(),
        });
    }

    Ok(ProductCode::new(raw))
}

/// Normalizes operator input for a code lookup: trimmed and upper-cased.
///
/// Any string is a legal lookup key; a malformed one simply finds nothing.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

// =============================================================================
// Update Dispatch
// =============================================================================

/// Runs the validator matching `field` and wraps the result as an update.
pub fn validate_update(
    field: ProductField,
    raw: &str,
    config: &InventoryConfig,
    reference: &ReferenceData,
) -> ValidationResult<FieldUpdate> {
    let update = match field {
        ProductField::Name => FieldUpdate::Name(validate_name(raw)?),
        ProductField::Price => FieldUpdate::Price(validate_price(raw, config)?),
        ProductField::Stock => FieldUpdate::Stock(validate_stock(raw)?),
        ProductField::Category => FieldUpdate::Category(validate_category(raw, reference)?),
        ProductField::Supplier => FieldUpdate::Supplier(validate_supplier(raw, reference)?),
    };
    Ok(update)
}

// =============================================================================
// Unit Tests
// =============================================================================
