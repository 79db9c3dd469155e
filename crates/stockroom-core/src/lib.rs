//! # stockroom-core: Pure Inventory Logic for Stockroom
//!
//! This crate is the **heart** of Stockroom. It holds the product catalogue
//! in memory and implements every rule about it as plain Rust with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Console I/O (apps/console)                      │   │
//! │  │    Menu ──► Prompts ──► Retry-until-valid ──► Rendering         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw strings in, structs out            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │  config  │  │reference │  │validation│  │  inventory   │   │   │
//! │  │   │thresholds│─►│categories│─►│  rules   │─►│ InventoryStore│  │   │
//! │  │   │  bounds  │  │suppliers │  │          │  │      │       │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────┼───────┘   │   │
//! │  │                                                    ▼           │   │
//! │  │                                              ┌──────────┐      │   │
//! │  │                                              │  report  │      │   │
//! │  │                                              └──────────┘      │   │
//! │  │   NO TERMINAL • NO FILES • NO ENVIRONMENT • NO GLOBAL STATE     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Read-only numeric parameters (threshold, price bounds, capacity)
//! - [`reference`] - Valid categories and authorized suppliers
//! - [`types`] - Domain types (Product, ProductCode, MenuCommand, etc.)
//! - [`validation`] - Field validators over raw operator input
//! - [`inventory`] - The in-memory product store
//! - [`report`] - Read-only aggregations over the store
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::validation::{validate_name, validate_price, validate_stock};
//! use stockroom_core::{InventoryConfig, InventoryStore, NewProduct};
//!
//! let config = InventoryConfig::default();
//! let mut store = InventoryStore::new(config.clone());
//!
//! let product = store
//!     .add(NewProduct {
//!         name: validate_name("Laptop Dell XPS").unwrap(),
//!         price: validate_price("1250000", &config).unwrap(),
//!         stock: validate_stock("8").unwrap(),
//!         category: "Electrónica".to_string(),
//!         supplier: "TechDistributor".to_string(),
//!     })
//!     .unwrap();
//!
//! assert_eq!(product.code.as_str(), "P001");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod inventory;
pub mod reference;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::{ConfigKey, ConfigValue, InventoryConfig};
pub use error::{ConfigError, InventoryError, ValidationError};
pub use inventory::InventoryStore;
pub use reference::ReferenceData;
pub use report::ReportEngine;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Lowest option on the main menu.
pub const MENU_FIRST_OPTION: i64 = 1;

/// Highest option on the main menu (exit).
pub const MENU_LAST_OPTION: i64 = 9;

/// Minimum number of characters in a product name (after trimming).
pub const MIN_NAME_LENGTH: usize = 3;

/// Largest stock quantity a single product may hold.
pub const MAX_STOCK: u64 = 1_000_000_000;
