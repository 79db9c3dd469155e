//! # Sample Inventory
//!
//! The catalogue a fresh session starts with (unless `--empty` is given).
//!
//! Seven products across four categories, chosen so every report has
//! something to show:
//! - P005 (stock 2) and P003 (stock 3) are low
//! - P007 (stock 0) is out of stock
//! - P001 is both the most expensive and the highest-value product

use stockroom_core::{Product, ProductCode};

/// (name, price, stock, category, supplier)
const SAMPLE_PRODUCTS: &[(&str, f64, u64, &str, &str)] = &[
    ("Laptop Dell XPS", 1_250_000.00, 8, "Electrónica", "TechDistributor"),
    ("Mouse Logitech MX3", 18_500.00, 45, "Accesorios", "OfficeSupply"),
    ("Teclado Mecánico Razer", 52_000.00, 3, "Accesorios", "TechDistributor"),
    ("Monitor Samsung 27\"", 380_000.00, 12, "Electrónica", "SamsungOfficial"),
    ("Auriculares Sony WH-1000", 95_000.00, 2, "Audio", "SonyStore"),
    ("Cámara Web Logitech C920", 42_000.00, 15, "Accesorios", "OfficeSupply"),
    ("Disco Duro Externo 2TB", 8_900.00, 0, "Almacenamiento", "TechDistributor"),
];

/// Builds the sample products with codes P001..P007.
pub fn sample_products() -> Vec<Product> {
    SAMPLE_PRODUCTS
        .iter()
        .zip(1u32..)
        .map(|(&(name, price, stock, category, supplier), number)| Product {
            code: ProductCode::from_number(number),
            name: name.to_string(),
            price,
            stock,
            category: category.to_string(),
            supplier: supplier.to_string(),
        })
        .collect()
}
