//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── InventoryError   - Store operations (NotFound, CapacityExceeded)  │
//! │  ├── ValidationError  - Rejected operator input                        │
//! │  └── ConfigError      - Inconsistent configuration values              │
//! │                                                                         │
//! │  Console errors (in app)                                               │
//! │  └── ConsoleError     - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError / InventoryError → ConsoleError → Terminal      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal: the console reports them and returns to the menu.
//! A declined confirmation is not an error at all, see
//! [`RemoveOutcome::Cancelled`](crate::types::RemoveOutcome::Cancelled).

use thiserror::Error;

// =============================================================================
// Inventory Error
// =============================================================================

/// Errors raised by [`InventoryStore`](crate::InventoryStore) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InventoryError {
    /// No product is stored under the given code.
    ///
    /// ## When This Occurs
    /// - Search, update or delete with a code that was never assigned
    /// - The product was deleted earlier in the session
    #[error("No product found with code '{0}'")]
    NotFound(String),

    /// The store already holds the configured maximum number of products.
    #[error("Maximum of {max} products reached")]
    CapacityExceeded { max: usize },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Each variant carries the reason shown to the operator before re-prompting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Menu selection is not an integer in range.
    #[error("Invalid option. Enter a number from {min} to {max}.")]
    InvalidOption { min: i64, max: i64 },

    /// Name shorter than the minimum after trimming.
    #[error("Name must be at least {min} characters long")]
    NameTooShort { min: usize },

    /// Name made of digits only.
    #[error("Name cannot consist only of digits")]
    NameNumeric,

    /// Price did not parse as a finite number.
    #[error("Price must be a valid number")]
    PriceNotANumber,

    /// Price is zero or negative.
    #[error("Price must be greater than 0")]
    PriceNotPositive,

    /// Price below the configured minimum.
    #[error("Minimum allowed price is {min:.2}")]
    PriceBelowMinimum { min: f64 },

    /// Price above the configured maximum.
    #[error("Maximum allowed price is {max:.2}")]
    PriceAboveMaximum { max: f64 },

    /// Stock did not parse as an integer.
    #[error("Stock must be a whole number")]
    StockNotAnInteger,

    /// Stock is negative.
    #[error("Stock cannot be negative")]
    StockNegative,

    /// Stock above [`MAX_STOCK`](crate::MAX_STOCK).
    #[error("Maximum allowed stock is {max} units")]
    StockAboveMaximum { max: u64 },

    /// Category is not in the valid set.
    #[error("Unknown category '{value}'. Choose one of: {}", allowed.join(", "))]
    UnknownCategory { value: String, allowed: Vec<String> },

    /// Supplier is not in the authorized sequence.
    #[error("Unauthorized supplier '{value}'. Choose one of: {}", allowed.join(", "))]
    UnauthorizedSupplier { value: String, allowed: Vec<String> },

    /// Product code is not `P` followed by three digits.
    #[error("Invalid product code '{code}' (expected format P001)")]
    InvalidCodeFormat { code: String },
}

// =============================================================================
// Config Error
// =============================================================================

/// Errors raised when building an [`InventoryConfig`](crate::InventoryConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A value could not be parsed (the payload names the source key).
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    /// Price bounds are not finite, not positive or inverted.
    #[error("Invalid price bounds: min {min}, max {max}")]
    InvalidPriceBounds { min: f64, max: f64 },

    /// Capacity of zero would make every add fail.
    #[error("max_products must be greater than 0")]
    ZeroCapacity,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with InventoryError.
pub type InventoryResult<T> = Result<T, InventoryError>;

// =============================================================================
// Unit Tests
// =============================================================================
