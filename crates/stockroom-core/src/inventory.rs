//! # Inventory Store
//!
//! The single owner of every product record.
//!
//! ## Key Operations
//! - Listing in insertion order
//! - Code assignment (`P` + next sequence number)
//! - Lookup by code, search by name fragment
//! - Single-field updates and confirmation-gated deletes
//!
//! ## Code Assignment
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How the next code is chosen                          │
//! │                                                                         │
//! │  Store: P001, P002, P003                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  max(numeric suffix) = 3  ──►  next = P004                              │
//! │                                                                         │
//! │  Delete P002 ──► max still 3 ──► next = P004 (P002 never comes back)    │
//! │  Delete P003 ──► max now 2   ──► next = P003 (the top code is reused)   │
//! │                                                                         │
//! │  Empty store ──► P001                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store trusts its callers: field values must already have passed the
//! matching validator in [`crate::validation`].

use tracing::{debug, info};

use crate::config::InventoryConfig;
use crate::error::{InventoryError, InventoryResult};
use crate::report::ReportEngine;
use crate::types::{Confirmation, FieldUpdate, NewProduct, Product, ProductCode, RemoveOutcome};

/// In-memory product store.
///
/// ## Usage
/// ```rust
/// use stockroom_core::{InventoryConfig, InventoryStore, NewProduct};
///
/// let mut store = InventoryStore::new(InventoryConfig::default());
/// let added = store.add(NewProduct {
///     name: "Mouse Logitech MX3".to_string(),
///     price: 18_500.0,
///     stock: 45,
///     category: "Accesorios".to_string(),
///     supplier: "OfficeSupply".to_string(),
/// })?;
///
/// assert_eq!(store.find_by_code("P001")?.name, "Mouse Logitech MX3");
/// assert_eq!(store.find_by_name_substring("logitech").len(), 1);
/// # Ok::<(), stockroom_core::InventoryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct InventoryStore {
    config: InventoryConfig,
    products: Vec<Product>,
}

impl InventoryStore {
    /// Creates an empty store.
    pub fn new(config: InventoryConfig) -> Self {
        InventoryStore {
            config,
            products: Vec::new(),
        }
    }

    /// Creates a store pre-loaded with products (codes kept as given).
    ///
    /// A later product with a code already present replaces the earlier one
    /// in place. Records are not validated here; run
    /// [`validate_record`](crate::validation::validate_record) first.
    ///
    /// ## Returns
    /// * `Err(InventoryError::CapacityExceeded)` - More distinct codes than
    ///   `config.max_products`
    pub fn with_products(
        config: InventoryConfig,
        products: impl IntoIterator<Item = Product>,
    ) -> InventoryResult<Self> {
        let mut store = InventoryStore::new(config);
        for product in products {
            match store.position(product.code.as_str()) {
                Some(index) => store.products[index] = product,
                None if store.remaining_capacity() == 0 => {
                    return Err(InventoryError::CapacityExceeded {
                        max: store.config.max_products,
                    });
                }
                None => store.products.push(product),
            }
        }
        debug!(count = store.products.len(), "Inventory seeded");
        Ok(store)
    }

    /// The configuration this store was built with.
    #[inline]
    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    /// Number of products held.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when no products are held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// How many more products can be added before hitting the capacity.
    pub fn remaining_capacity(&self) -> usize {
        self.config.max_products.saturating_sub(self.products.len())
    }

    /// All products in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Read-only report view over the current contents.
    pub fn reports(&self) -> ReportEngine<'_> {
        ReportEngine::new(self)
    }

    /// Computes the code the next `add` will assign.
    pub fn generate_next_code(&self) -> ProductCode {
        let next = self
            .products
            .iter()
            .filter_map(|p| p.code.number())
            .max()
            .map_or(1, |max| max.saturating_add(1));
        ProductCode::from_number(next)
    }

    /// Adds a product under a freshly assigned code.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The stored record, code included
    /// * `Err(InventoryError::CapacityExceeded)` - Store is full
    pub fn add(&mut self, new_product: NewProduct) -> InventoryResult<Product> {
        if self.products.len() >= self.config.max_products {
            return Err(InventoryError::CapacityExceeded {
                max: self.config.max_products,
            });
        }

        let code = self.generate_next_code();
        let product = new_product.into_product(code);

        info!(code = %product.code, name = %product.name, "Product added");
        self.products.push(product.clone());

        Ok(product)
    }

    /// Exact lookup by code.
    ///
    /// Matching is case-sensitive; callers upper-case operator input first
    /// (see [`normalize_code`](crate::validation::normalize_code)).
    pub fn find_by_code(&self, code: &str) -> InventoryResult<&Product> {
        debug!(code = %code, "Looking up product");
        self.products
            .iter()
            .find(|p| p.code == code)
            .ok_or_else(|| InventoryError::NotFound(code.to_string()))
    }

    /// Products whose name contains `fragment`, ignoring case.
    ///
    /// No match is an empty result, not an error.
    pub fn find_by_name_substring(&self, fragment: &str) -> Vec<&Product> {
        let needle = fragment.to_lowercase();
        let matches: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect();

        debug!(fragment = %fragment, count = matches.len(), "Name search complete");
        matches
    }

    /// Replaces one field of an existing product.
    ///
    /// ## Returns
    /// * `Ok(&Product)` - The product after the change
    /// * `Err(InventoryError::NotFound)` - Unknown code
    pub fn update_field(&mut self, code: &str, update: FieldUpdate) -> InventoryResult<&Product> {
        let index = self
            .position(code)
            .ok_or_else(|| InventoryError::NotFound(code.to_string()))?;

        let field = update.field();
        let product = &mut self.products[index];
        update.apply(product);

        info!(code = %code, field = field.label(), "Product updated");
        Ok(&self.products[index])
    }

    /// Deletes a product unconditionally and hands it back.
    ///
    /// The confirmation step belongs to the caller; use
    /// [`remove_if_confirmed`](Self::remove_if_confirmed) to have the store
    /// enforce it.
    pub fn remove(&mut self, code: &str) -> InventoryResult<Product> {
        let index = self
            .position(code)
            .ok_or_else(|| InventoryError::NotFound(code.to_string()))?;

        let product = self.products.remove(index);
        info!(code = %code, name = %product.name, "Product deleted");
        Ok(product)
    }

    /// Deletes only when the operator confirmed.
    ///
    /// Presence is checked first, so an unknown code is `NotFound` whatever
    /// the answer was.
    pub fn remove_if_confirmed(
        &mut self,
        code: &str,
        confirmation: Confirmation,
    ) -> InventoryResult<RemoveOutcome> {
        if self.position(code).is_none() {
            return Err(InventoryError::NotFound(code.to_string()));
        }

        if !confirmation.is_confirmed() {
            debug!(code = %code, "Delete cancelled");
            return Ok(RemoveOutcome::Cancelled);
        }

        self.remove(code).map(RemoveOutcome::Deleted)
    }

    fn position(&self, code: &str) -> Option<usize> {
        self.products.iter().position(|p| p.code == code)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product(name: &str, price: f64, stock: u64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price,
            stock,
            category: "Accesorios".to_string(),
            supplier: "OfficeSupply".to_string(),
        }
    }

    fn store_with(names: &[&str]) -> InventoryStore {
        let mut store = InventoryStore::new(InventoryConfig::default());
        for name in names {
            store.add(new_product(name, 1_000.0, 10)).unwrap();
        }
        store
    }

    #[test]
    fn test_empty_store() {
        let store = InventoryStore::new(InventoryConfig::default());
        assert!(store.is_empty());
        assert!(store.list().is_empty());
        assert_eq!(store.generate_next_code().as_str(), "P001");
        assert_eq!(store.remaining_capacity(), 500);
    }

    #[test]
    fn test_add_assigns_sequential_codes() {
        let store = store_with(&["Alpha", "Bravo", "Charlie"]);
        let codes: Vec<&str> = store.list().iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["P001", "P002", "P003"]);
    }

    #[test]
    fn test_add_returns_stored_record() {
        let mut store = InventoryStore::new(InventoryConfig::default());
        let added = store.add(new_product("Webcam C920", 42_000.0, 15)).unwrap();

        let found = store.find_by_code(added.code.as_str()).unwrap();
        assert_eq!(found, &added);
        assert_eq!(found.price, 42_000.0);
        assert_eq!(found.stock, 15);
    }

    #[test]
    fn test_add_respects_capacity() {
        let config = InventoryConfig::new(5, 1.0, 10.0, 2).unwrap();
        let mut store = InventoryStore::new(config);
        store.add(new_product("One", 5.0, 1)).unwrap();
        store.add(new_product("Two", 5.0, 1)).unwrap();

        let err = store.add(new_product("Three", 5.0, 1)).unwrap_err();
        assert_eq!(err, InventoryError::CapacityExceeded { max: 2 });
        assert_eq!(store.len(), 2);
        assert_eq!(store.remaining_capacity(), 0);
    }

    #[test]
    fn test_deleted_middle_code_not_reused() {
        let mut store = store_with(&["Alpha", "Bravo", "Charlie"]);
        store.remove("P002").unwrap();
        assert_eq!(store.generate_next_code().as_str(), "P004");
    }

    #[test]
    fn test_deleted_top_code_is_reused() {
        let mut store = store_with(&["Alpha", "Bravo", "Charlie"]);
        store.remove("P003").unwrap();
        assert_eq!(store.generate_next_code().as_str(), "P003");
    }

    #[test]
    fn test_find_by_code_is_exact() {
        let store = store_with(&["Alpha"]);
        assert!(store.find_by_code("P001").is_ok());
        assert_eq!(
            store.find_by_code("p001").unwrap_err(),
            InventoryError::NotFound("p001".to_string())
        );
        assert!(store.find_by_code("garbage").is_err());
    }

    #[test]
    fn test_find_by_name_substring() {
        let store = store_with(&["Mouse Logitech MX3", "Teclado Razer", "Webcam Logitech C920"]);

        let hits = store.find_by_name_substring("LOGITECH");
        let codes: Vec<&str> = hits.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["P001", "P003"]);

        assert!(store.find_by_name_substring("monitor").is_empty());
        assert_eq!(store.find_by_name_substring("").len(), 3);
    }

    #[test]
    fn test_update_field_replaces_one_field() {
        let mut store = store_with(&["Alpha"]);
        let updated = store.update_field("P001", FieldUpdate::Price(2_500.0)).unwrap();
        assert_eq!(updated.price, 2_500.0);
        assert_eq!(updated.stock, 10);
        assert_eq!(updated.name, "Alpha");
    }

    #[test]
    fn test_update_keeps_position() {
        let mut store = store_with(&["Alpha", "Bravo"]);
        store
            .update_field("P001", FieldUpdate::Name("Alpha Prime".to_string()))
            .unwrap();
        assert_eq!(store.list()[0].name, "Alpha Prime");
    }

    #[test]
    fn test_update_unknown_code() {
        let mut store = store_with(&["Alpha"]);
        let err = store.update_field("P999", FieldUpdate::Stock(1)).unwrap_err();
        assert_eq!(err, InventoryError::NotFound("P999".to_string()));
    }

    #[test]
    fn test_remove_then_lookup_is_not_found() {
        let mut store = store_with(&["Alpha", "Bravo"]);
        let removed = store.remove("P001").unwrap();
        assert_eq!(removed.name, "Alpha");
        assert!(matches!(store.find_by_code("P001"), Err(InventoryError::NotFound(_))));
        assert!(matches!(store.remove("P001"), Err(InventoryError::NotFound(_))));
    }

    #[test]
    fn test_remove_if_confirmed() {
        let mut store = store_with(&["Alpha"]);

        let outcome = store.remove_if_confirmed("P001", Confirmation::Declined).unwrap();
        assert_eq!(outcome, RemoveOutcome::Cancelled);
        assert_eq!(store.len(), 1);

        let outcome = store.remove_if_confirmed("P001", Confirmation::Confirmed).unwrap();
        assert!(matches!(outcome, RemoveOutcome::Deleted(ref p) if p.name == "Alpha"));
        assert!(store.is_empty());

        assert!(store.remove_if_confirmed("P001", Confirmation::Declined).is_err());
    }

    #[test]
    fn test_with_products_keeps_codes() {
        let product = Product {
            code: ProductCode::new("P010"),
            name: "Seeded".to_string(),
            price: 500.0,
            stock: 1,
            category: "Audio".to_string(),
            supplier: "SonyStore".to_string(),
        };
        let store =
            InventoryStore::with_products(InventoryConfig::default(), vec![product]).unwrap();
        assert_eq!(store.generate_next_code().as_str(), "P011");
    }

    #[test]
    fn test_with_products_respects_capacity() {
        let config = InventoryConfig {
            max_products: 2,
            ..InventoryConfig::default()
        };
        let seeded = |n: u32| Product {
            code: ProductCode::from_number(n),
            name: format!("Seeded {}", n),
            price: 500.0,
            stock: 1,
            category: "Audio".to_string(),
            supplier: "SonyStore".to_string(),
        };

        let store = InventoryStore::with_products(config.clone(), (1..=2).map(seeded)).unwrap();
        assert_eq!(store.remaining_capacity(), 0);

        let err = InventoryStore::with_products(config, (1..=3).map(seeded)).unwrap_err();
        assert_eq!(err, InventoryError::CapacityExceeded { max: 2 });
    }
}
