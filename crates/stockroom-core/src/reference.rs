//! # Reference Data
//!
//! The authoritative lists incoming values are checked against:
//! the set of valid categories and the ordered sequence of authorized
//! suppliers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Categories known out of the box.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Electrónica",
    "Accesorios",
    "Audio",
    "Almacenamiento",
    "Software",
    "Networking",
];

/// Suppliers authorized out of the box, in display order.
pub const DEFAULT_SUPPLIERS: &[&str] = &[
    "TechDistributor",
    "OfficeSupply",
    "SamsungOfficial",
    "SonyStore",
    "AppleStore",
    "OfficialHP",
];

/// Valid categories and authorized suppliers.
///
/// Categories are a set (iterated in sorted order). Suppliers keep the order
/// they were given in; the sequence is fixed once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    categories: BTreeSet<String>,
    suppliers: Vec<String>,
}

impl ReferenceData {
    /// Creates reference data from explicit lists.
    ///
    /// Duplicate categories collapse; duplicate suppliers are dropped after
    /// their first occurrence.
    pub fn new<C, S>(categories: C, suppliers: S) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let categories = categories.into_iter().map(Into::into).collect();

        let mut ordered: Vec<String> = Vec::new();
        for supplier in suppliers.into_iter().map(Into::into) {
            if !ordered.contains(&supplier) {
                ordered.push(supplier);
            }
        }

        ReferenceData {
            categories,
            suppliers: ordered,
        }
    }

    /// Valid categories in sorted order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    /// Authorized suppliers in their fixed order.
    pub fn suppliers(&self) -> &[String] {
        &self.suppliers
    }

    /// Exact membership test against the category set.
    pub fn is_valid_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    /// Exact membership test against the supplier sequence.
    pub fn is_authorized_supplier(&self, supplier: &str) -> bool {
        self.suppliers.iter().any(|s| s == supplier)
    }

    /// Owned copy of the categories (sorted), for error payloads.
    pub fn category_list(&self) -> Vec<String> {
        self.categories.iter().cloned().collect()
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        ReferenceData::new(
            DEFAULT_CATEGORIES.iter().copied(),
            DEFAULT_SUPPLIERS.iter().copied(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reference_data() {
        let reference = ReferenceData::default();
        assert_eq!(reference.categories().count(), 6);
        assert_eq!(reference.suppliers().len(), 6);
        assert_eq!(reference.suppliers()[0], "TechDistributor");
        assert_eq!(reference.suppliers()[5], "OfficialHP");
    }

    #[test]
    fn test_categories_iterate_sorted() {
        let reference = ReferenceData::new(["Software", "Audio", "Networking"], ["X"]);
        let cats: Vec<&str> = reference.categories().collect();
        assert_eq!(cats, vec!["Audio", "Networking", "Software"]);
    }

    #[test]
    fn test_suppliers_keep_order_and_dedupe() {
        let reference = ReferenceData::new(["Audio"], ["B", "A", "B", "C"]);
        assert_eq!(reference.suppliers(), &["B", "A", "C"]);
    }

    #[test]
    fn test_membership_is_exact() {
        let reference = ReferenceData::default();
        assert!(reference.is_valid_category("Audio"));
        assert!(!reference.is_valid_category("audio"));
        assert!(reference.is_authorized_supplier("SonyStore"));
        assert!(!reference.is_authorized_supplier("Sony"));
    }
}
