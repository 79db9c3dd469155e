//! # Configuration Store
//!
//! The fixed numeric parameters consulted by validators, the inventory store
//! and the report engine.
//!
//! The struct is built once at process start and never mutated afterwards.
//! Where a caller only knows the parameter by name, [`InventoryConfig::get`]
//! gives a direct keyed lookup.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default low-stock threshold (units).
pub const DEFAULT_STOCK_THRESHOLD: u64 = 5;

/// Default minimum accepted price.
pub const DEFAULT_MIN_PRICE: f64 = 100.00;

/// Default maximum accepted price.
pub const DEFAULT_MAX_PRICE: f64 = 5_000_000.00;

/// Default capacity of the inventory.
pub const DEFAULT_MAX_PRODUCTS: usize = 500;

/// Read-only inventory parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Products with `0 < stock < stock_threshold` are flagged low.
    pub stock_threshold: u64,

    /// Lowest price `validate_price` accepts.
    pub min_price: f64,

    /// Highest price `validate_price` accepts.
    pub max_price: f64,

    /// Maximum number of products the store will hold.
    pub max_products: usize,
}

/// Names of the configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigKey {
    StockThreshold,
    MinPrice,
    MaxPrice,
    MaxProducts,
}

impl ConfigKey {
    /// All keys, in declaration order.
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::StockThreshold,
        ConfigKey::MinPrice,
        ConfigKey::MaxPrice,
        ConfigKey::MaxProducts,
    ];

    /// The snake_case name of the parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::StockThreshold => "stock_threshold",
            ConfigKey::MinPrice => "min_price",
            ConfigKey::MaxPrice => "max_price",
            ConfigKey::MaxProducts => "max_products",
        }
    }

    /// Looks a key up by its snake_case name.
    pub fn from_name(name: &str) -> Option<Self> {
        ConfigKey::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

/// A configuration value: counts are integers, prices are reals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Count(u64),
    Amount(f64),
}

impl ConfigValue {
    /// Returns the value as a float regardless of kind.
    pub fn as_f64(&self) -> f64 {
        match *self {
            ConfigValue::Count(n) => n as f64,
            ConfigValue::Amount(a) => a,
        }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        InventoryConfig {
            stock_threshold: DEFAULT_STOCK_THRESHOLD,
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            max_products: DEFAULT_MAX_PRODUCTS,
        }
    }
}

impl InventoryConfig {
    /// Creates a checked configuration.
    ///
    /// ## Rules
    /// - Both price bounds finite, `0 < min_price <= max_price`
    /// - `max_products > 0`
    pub fn new(
        stock_threshold: u64,
        min_price: f64,
        max_price: f64,
        max_products: usize,
    ) -> Result<Self, ConfigError> {
        let bounds_ok = min_price.is_finite()
            && max_price.is_finite()
            && min_price > 0.0
            && min_price <= max_price;
        if !bounds_ok {
            return Err(ConfigError::InvalidPriceBounds {
                min: min_price,
                max: max_price,
            });
        }

        if max_products == 0 {
            return Err(ConfigError::ZeroCapacity);
        }

        Ok(InventoryConfig {
            stock_threshold,
            min_price,
            max_price,
            max_products,
        })
    }

    /// Returns the value of a parameter by key.
    pub fn get(&self, key: ConfigKey) -> ConfigValue {
        match key {
            ConfigKey::StockThreshold => ConfigValue::Count(self.stock_threshold),
            ConfigKey::MinPrice => ConfigValue::Amount(self.min_price),
            ConfigKey::MaxPrice => ConfigValue::Amount(self.max_price),
            ConfigKey::MaxProducts => ConfigValue::Count(self.max_products as u64),
        }
    }
}
