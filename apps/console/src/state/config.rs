//! # Configuration State
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKROOM_*`)
//! 2. Defaults (`InventoryConfig::default()`)
//!
//! Configuration is read-only after initialization.

use serde::{Deserialize, Serialize};
use stockroom_core::config::{
    DEFAULT_MAX_PRICE, DEFAULT_MAX_PRODUCTS, DEFAULT_MIN_PRICE, DEFAULT_STOCK_THRESHOLD,
};
use stockroom_core::{ConfigError, InventoryConfig};

pub const ENV_STOCK_THRESHOLD: &str = "STOCKROOM_STOCK_THRESHOLD";
pub const ENV_MIN_PRICE: &str = "STOCKROOM_MIN_PRICE";
pub const ENV_MAX_PRICE: &str = "STOCKROOM_MAX_PRICE";
pub const ENV_MAX_PRODUCTS: &str = "STOCKROOM_MAX_PRODUCTS";
pub const ENV_CURRENCY_SYMBOL: &str = "STOCKROOM_CURRENCY_SYMBOL";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Parameters handed to the inventory store and validators.
    pub inventory: InventoryConfig,

    /// Currency symbol (for display)
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            inventory: InventoryConfig::default(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `STOCKROOM_STOCK_THRESHOLD`: low-stock threshold (units)
    /// - `STOCKROOM_MIN_PRICE` / `STOCKROOM_MAX_PRICE`: accepted price range
    /// - `STOCKROOM_MAX_PRODUCTS`: inventory capacity
    /// - `STOCKROOM_CURRENCY_SYMBOL`: symbol used when printing amounts
    pub fn from_env() -> Result<Self, ConfigError> {
        AppConfig::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Unset variables fall back to defaults; set but unparseable ones are
    /// an error naming the variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let inventory = InventoryConfig::new(
            parse_or(&lookup, ENV_STOCK_THRESHOLD, DEFAULT_STOCK_THRESHOLD)?,
            parse_or(&lookup, ENV_MIN_PRICE, DEFAULT_MIN_PRICE)?,
            parse_or(&lookup, ENV_MAX_PRICE, DEFAULT_MAX_PRICE)?,
            parse_or(&lookup, ENV_MAX_PRODUCTS, DEFAULT_MAX_PRODUCTS)?,
        )?;

        let currency_symbol = lookup(ENV_CURRENCY_SYMBOL).unwrap_or_else(|| "$".to_string());

        Ok(AppConfig {
            inventory,
            currency_symbol,
        })
    }

    /// Formats an amount as a currency string with thousands separators.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_console_lib::state::AppConfig;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(1_250_000.0), "$1,250,000.00");
    /// ```
    pub fn format_currency(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return format!("{}{}", self.currency_symbol, amount);
        }

        // Rounded by the formatter, so no integer cast can saturate.
        let rounded = format!("{:.2}", amount.abs());
        let (whole, frac) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
        let negative = amount < 0.0 && rounded.bytes().any(|b| b != b'0' && b != b'.');

        format!(
            "{}{}{}.{}",
            if negative { "-" } else { "" },
            self.currency_symbol,
            group_thousands(whole),
            frac
        )
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name.to_string())),
        None => Ok(default),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
