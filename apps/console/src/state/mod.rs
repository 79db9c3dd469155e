//! # State Module
//!
//! Everything a session reads or mutates, owned in one place.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  main ──► AppState::new(config, reference, seed) ──► Session            │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │  InventoryStore  │  │  ReferenceData   │  │  AppConfig           │  │
//! │  │  (mutable)       │  │  (read-only)     │  │  (read-only)         │  │
//! │  │  products        │  │  categories      │  │  thresholds, bounds  │  │
//! │  │                  │  │  suppliers       │  │  currency symbol     │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  Commands borrow what they need: &mut for CRUD, & for reports.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod seed;

pub use config::AppConfig;
pub use seed::sample_products;

use stockroom_core::error::InventoryResult;
use stockroom_core::validation::validate_record;
use stockroom_core::{InventoryStore, ReferenceData};
use tracing::warn;

/// Session state, constructed once at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub reference: ReferenceData,
    pub inventory: InventoryStore,
}

impl AppState {
    /// State with an empty inventory.
    pub fn new(config: AppConfig, reference: ReferenceData) -> Self {
        let inventory = InventoryStore::new(config.inventory.clone());
        AppState {
            config,
            reference,
            inventory,
        }
    }

    /// State pre-loaded with the sample catalogue.
    ///
    /// ## Rules
    /// - Sample records the configuration rejects (price bounds, unknown
    ///   category...) are skipped with a warning
    /// - At most `max_products` records are loaded, in catalogue order
    pub fn with_sample_data(
        config: AppConfig,
        reference: ReferenceData,
    ) -> InventoryResult<Self> {
        let max = config.inventory.max_products;
        let mut accepted = Vec::new();

        for product in sample_products() {
            if let Err(err) = validate_record(&product, &config.inventory, &reference) {
                warn!(code = %product.code, reason = %err, "Sample product skipped");
                continue;
            }
            if accepted.len() == max {
                warn!(code = %product.code, max, "Sample catalogue truncated to capacity");
                break;
            }
            accepted.push(product);
        }

        let inventory = InventoryStore::with_products(config.inventory.clone(), accepted)?;
        Ok(AppState {
            config,
            reference,
            inventory,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        AppConfig::from_lookup(|name| map.get(name).map(|v| v.to_string())).unwrap()
    }

    #[test]
    fn test_sample_data_with_defaults() {
        let state =
            AppState::with_sample_data(AppConfig::default(), ReferenceData::default()).unwrap();
        assert_eq!(state.inventory.len(), 7);
    }

    #[test]
    fn test_sample_data_honours_capacity_and_price_bounds() {
        let config = config_from(&[
            (config::ENV_MAX_PRODUCTS, "3"),
            (config::ENV_MAX_PRICE, "1000"),
        ]);
        let state = AppState::with_sample_data(config, ReferenceData::default()).unwrap();
        assert!(state.inventory.len() <= 3);
        assert!(state.inventory.list().iter().all(|p| p.price <= 1000.0));

        let config = config_from(&[
            (config::ENV_MAX_PRODUCTS, "2"),
            (config::ENV_MAX_PRICE, "50000"),
        ]);
        let state = AppState::with_sample_data(config, ReferenceData::default()).unwrap();
        let codes: Vec<&str> = state.inventory.list().iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, ["P002", "P006"]);
    }
}
