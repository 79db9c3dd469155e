//! # Product Commands
//!
//! The CRUD half of the main menu (options 1-5).
//!
//! ## Input Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Operator Input Flow                                  │
//! │                                                                         │
//! │  Prompt::read_line("Price ($)")                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_price(raw, &config)           (stockroom-core)                │
//! │       │                                                                 │
//! │       ├── Ok(f64)  ──► next field                                       │
//! │       │                                                                 │
//! │       └── Err(ValidationError)                                          │
//! │              │                                                          │
//! │              ├── add:    print reason, ask again                        │
//! │              └── update: print reason, back to menu (single attempt)    │
//! │                                                                         │
//! │  Codes typed by the operator go through normalize_code() first,        │
//! │  so " p001 " finds P001.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockroom_core::validation::{
    normalize_code, validate_category, validate_menu_option, validate_name, validate_price,
    validate_stock, validate_supplier, validate_update, ValidationResult,
};
use stockroom_core::{
    Confirmation, InventoryError, NewProduct, Product, ProductField, RemoveOutcome, SearchMode,
    StockStatus, ValidationError,
};
use tracing::debug;

use crate::error::ConsoleResult;
use crate::output::Output;
use crate::prompt::Prompt;
use crate::state::AppState;

const LIST_WIDTHS: [usize; 6] = [6, 30, 16, 6, 4, 15];

// =============================================================================
// List
// =============================================================================

/// Prints every product, flagging empty and low stock.
pub fn list_products(state: &AppState, out: &Output) {
    let products = state.inventory.list();

    if out.is_json() {
        out.json(&products);
        return;
    }

    if products.is_empty() {
        out.info("No products registered.");
        return;
    }

    out.header("PRODUCT INVENTORY");
    out.table_row(
        &["Code", "Name", "Price", "Stock", "", "Category"],
        &LIST_WIDTHS,
    );
    let rules: Vec<String> = LIST_WIDTHS.iter().map(|w| "-".repeat(*w)).collect();
    let rules: Vec<&str> = rules.iter().map(String::as_str).collect();
    out.table_row(&rules, &LIST_WIDTHS);

    let threshold = state.inventory.config().stock_threshold;
    for product in products {
        let price = format!("{:>16}", state.config.format_currency(product.price));
        let stock = format!("{:>6}", product.stock);
        out.table_row(
            &[
                product.code.as_str(),
                product.name.as_str(),
                price.as_str(),
                stock.as_str(),
                stock_indicator(product.stock_status(threshold)),
                product.category.as_str(),
            ],
            &LIST_WIDTHS,
        );
    }

    out.blank();
    out.kv("Total products", &products.len().to_string());
}

fn stock_indicator(status: StockStatus) -> &'static str {
    match status {
        StockStatus::OutOfStock => "OUT",
        StockStatus::Low => "LOW",
        StockStatus::Healthy => "",
    }
}

// =============================================================================
// Add
// =============================================================================

/// Collects and validates the five fields of a new product, then stores it.
///
/// ## Rules
/// - Capacity is checked before any question is asked
/// - Each field is asked again until its validator accepts it
pub fn add_product(
    state: &mut AppState,
    prompt: &mut dyn Prompt,
    out: &Output,
) -> ConsoleResult<()> {
    out.header("ADD NEW PRODUCT");

    if state.inventory.remaining_capacity() == 0 {
        return Err(InventoryError::CapacityExceeded {
            max: state.inventory.config().max_products,
        }
        .into());
    }

    let config = state.inventory.config().clone();
    let reference = &state.reference;

    let name = ask_until_valid(prompt, out, "Product name", validate_name)?;
    let price = ask_until_valid(prompt, out, "Price ($)", |raw| validate_price(raw, &config))?;
    let stock = ask_until_valid(prompt, out, "Stock quantity", validate_stock)?;

    out.blank();
    out.kv(
        "Available categories",
        &reference.categories().collect::<Vec<_>>().join(", "),
    );
    let category = ask_until_valid(prompt, out, "Category", |raw| {
        validate_category(raw, reference)
    })?;

    out.blank();
    out.kv("Authorized suppliers", &reference.suppliers().join(", "));
    let supplier = ask_until_valid(prompt, out, "Supplier", |raw| {
        validate_supplier(raw, reference)
    })?;

    let product = state.inventory.add(NewProduct {
        name,
        price,
        stock,
        category,
        supplier,
    })?;

    out.blank();
    out.success("Product added.");
    out.kv("Assigned code", product.code.as_str());
    out.kv(
        "Product",
        &format!(
            "{} | {} | Stock: {}",
            product.name,
            state.config.format_currency(product.price),
            product.stock
        ),
    );
    Ok(())
}

fn ask_until_valid<T>(
    prompt: &mut dyn Prompt,
    out: &Output,
    question: &str,
    validate: impl Fn(&str) -> ValidationResult<T>,
) -> ConsoleResult<T> {
    loop {
        let raw = prompt.read_line(question)?;
        match validate(&raw) {
            Ok(value) => return Ok(value),
            Err(err) => {
                debug!(question, error = %err, "Input rejected");
                out.warn(&err.to_string());
                out.debug(&format!("{} rejected {:?}", question, raw));
            }
        }
    }
}

// =============================================================================
// Search
// =============================================================================

/// Looks a product up by exact code or lists products by name fragment.
pub fn search_products(
    state: &AppState,
    prompt: &mut dyn Prompt,
    out: &Output,
) -> ConsoleResult<()> {
    out.header("SEARCH PRODUCT");
    out.line("1. By code (e.g. P001)");
    out.line("2. By name");

    let choice = prompt.read_line("Option (1/2)")?;
    let mode = SearchMode::from_choice(&choice)
        .ok_or(ValidationError::InvalidOption { min: 1, max: 2 })?;

    match mode {
        SearchMode::ByCode => {
            let code = normalize_code(&prompt.read_line("Product code")?);
            let product = state.inventory.find_by_code(&code)?;
            out.blank();
            out.success("Product found:");
            print_details(state, product, out);
        }
        SearchMode::ByName => {
            let fragment = prompt.read_line("Name to search")?.trim().to_lowercase();
            let matches = state.inventory.find_by_name_substring(&fragment);

            out.blank();
            if matches.is_empty() {
                out.info(&format!("No products match '{}'.", fragment));
                return Ok(());
            }

            out.success(&format!("{} result(s):", matches.len()));
            for product in matches {
                out.list_item(&format!(
                    "[{}] {} | {} | Stock: {}",
                    product.code,
                    product.name,
                    state.config.format_currency(product.price),
                    product.stock
                ));
            }
        }
    }
    Ok(())
}

fn print_details(state: &AppState, product: &Product, out: &Output) {
    out.kv("Code    ", product.code.as_str());
    out.kv("Name    ", &product.name);
    out.kv("Price   ", &state.config.format_currency(product.price));
    out.kv("Stock   ", &product.stock.to_string());
    out.kv("Category", &product.category);
    out.kv("Supplier", &product.supplier);
}

// =============================================================================
// Update
// =============================================================================

/// Replaces one field of an existing product.
///
/// ## Rules
/// - Unknown code aborts before the field menu is shown
/// - The new value gets a single attempt; a rejection aborts the update
pub fn update_product(
    state: &mut AppState,
    prompt: &mut dyn Prompt,
    out: &Output,
) -> ConsoleResult<()> {
    out.header("UPDATE PRODUCT");

    let code = normalize_code(&prompt.read_line("Code of the product to update")?);
    let current = state.inventory.find_by_code(&code)?;
    out.kv("Current product", &current.name);

    out.line("What do you want to update?");
    for (i, field) in ProductField::ALL.iter().enumerate() {
        out.line(&format!("{}. {}", i + 1, field.label()));
    }

    let last = ProductField::ALL.len() as i64;
    let option = validate_menu_option(&prompt.read_line("Option (1-5)")?, 1, last)?;
    let field = ProductField::from_option(option)
        .ok_or(ValidationError::InvalidOption { min: 1, max: last })?;

    match field {
        ProductField::Category => out.kv(
            "Categories",
            &state.reference.categories().collect::<Vec<_>>().join(", "),
        ),
        ProductField::Supplier => out.kv("Suppliers", &state.reference.suppliers().join(", ")),
        ProductField::Name | ProductField::Price | ProductField::Stock => {}
    }

    let raw = prompt.read_line(&format!("New {}", field.label().to_lowercase()))?;
    let update = validate_update(field, &raw, state.inventory.config(), &state.reference)?;
    let updated = state.inventory.update_field(&code, update)?;

    let shown = match field {
        ProductField::Name => updated.name.clone(),
        ProductField::Price => state.config.format_currency(updated.price),
        ProductField::Stock => updated.stock.to_string(),
        ProductField::Category => updated.category.clone(),
        ProductField::Supplier => updated.supplier.clone(),
    };
    out.success(&format!("{} updated to: {}", field.label(), shown));
    Ok(())
}

// =============================================================================
// Delete
// =============================================================================

/// Deletes a product after a `(y/n)` confirmation.
pub fn delete_product(
    state: &mut AppState,
    prompt: &mut dyn Prompt,
    out: &Output,
) -> ConsoleResult<()> {
    out.header("DELETE PRODUCT");

    let code = normalize_code(&prompt.read_line("Code of the product to delete")?);
    let name = state.inventory.find_by_code(&code)?.name.clone();

    out.warn(&format!("Product to delete: {}", name));
    let answer = Confirmation::parse(&prompt.read_line("Are you sure? (y/n)")?);

    match state.inventory.remove_if_confirmed(&code, answer)? {
        RemoveOutcome::Deleted(product) => {
            out.success(&format!("Product '{}' deleted.", product.name));
        }
        RemoveOutcome::Cancelled => out.info("Operation cancelled."),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::prompt::ScriptedPrompt;
    use crate::state::AppConfig;
    use stockroom_core::{InventoryConfig, ReferenceData};

    fn sample_state() -> AppState {
        AppState::with_sample_data(AppConfig::default(), ReferenceData::default()).unwrap()
    }

    fn quiet() -> Output {
        Output::new(false, false)
    }

    #[test]
    fn test_add_retries_until_valid() {
        let mut state = AppState::new(AppConfig::default(), ReferenceData::default());
        let mut prompt = ScriptedPrompt::new([
            "ab", "12345", "Parlante JBL", // name: too short, numeric, ok
            "abc", "50", "45000", // price: NaN, below min, ok
            "-1", "3.5", "7", // stock: negative, fractional, ok
            "Toys", "Audio", // category
            "Acme", "SonyStore", // supplier
        ]);

        add_product(&mut state, &mut prompt, &quiet()).unwrap();

        assert_eq!(prompt.remaining(), 0);
        let product = state.inventory.find_by_code("P001").unwrap();
        assert_eq!(product.name, "Parlante JBL");
        assert_eq!(product.price, 45_000.0);
        assert_eq!(product.stock, 7);
        assert_eq!(product.category, "Audio");
        assert_eq!(product.supplier, "SonyStore");
    }

    #[test]
    fn test_add_assigns_next_code_after_sample() {
        let mut state = sample_state();
        let mut prompt =
            ScriptedPrompt::new(["Router Mesh", "150000", "4", "Networking", "OfficialHP"]);

        add_product(&mut state, &mut prompt, &quiet()).unwrap();
        assert_eq!(state.inventory.len(), 8);
        assert!(state.inventory.find_by_code("P008").is_ok());
    }

    #[test]
    fn test_add_at_capacity_asks_nothing() {
        let config = AppConfig {
            inventory: InventoryConfig {
                max_products: 7,
                ..InventoryConfig::default()
            },
            ..AppConfig::default()
        };
        let mut state = AppState::with_sample_data(config, ReferenceData::default()).unwrap();
        let mut prompt = ScriptedPrompt::new(["never read"]);

        let err = add_product(&mut state, &mut prompt, &quiet()).unwrap_err();
        assert_eq!(err.code, ErrorCode::CapacityExceeded);
        assert!(prompt.asked().is_empty());
    }

    #[test]
    fn test_search_by_code_normalizes() {
        let state = sample_state();
        let mut prompt = ScriptedPrompt::new(["1", " p003 "]);
        search_products(&state, &mut prompt, &quiet()).unwrap();

        let mut prompt = ScriptedPrompt::new(["1", "P999"]);
        let err = search_products(&state, &mut prompt, &quiet()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_search_invalid_choice() {
        let state = sample_state();
        let mut prompt = ScriptedPrompt::new(["3"]);
        let err = search_products(&state, &mut prompt, &quiet()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_update_single_attempt() {
        let mut state = sample_state();
        let before = state.inventory.find_by_code("P002").unwrap().clone();

        let mut prompt = ScriptedPrompt::new(["p002", "2", "10"]);
        let err = update_product(&mut state, &mut prompt, &quiet()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(state.inventory.find_by_code("P002").unwrap(), &before);

        let mut prompt = ScriptedPrompt::new(["p002", "3", "40"]);
        update_product(&mut state, &mut prompt, &quiet()).unwrap();
        assert_eq!(state.inventory.find_by_code("P002").unwrap().stock, 40);
    }

    #[test]
    fn test_update_unknown_code_stops_early() {
        let mut state = sample_state();
        let mut prompt = ScriptedPrompt::new(["P404", "1", "New name"]);
        let err = update_product(&mut state, &mut prompt, &quiet()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(prompt.remaining(), 2);
    }

    #[test]
    fn test_delete_confirm_and_cancel() {
        let mut state = sample_state();

        let mut prompt = ScriptedPrompt::new(["P001", "n"]);
        delete_product(&mut state, &mut prompt, &quiet()).unwrap();
        assert_eq!(state.inventory.len(), 7);

        let mut prompt = ScriptedPrompt::new(["p001", "Y"]);
        delete_product(&mut state, &mut prompt, &quiet()).unwrap();
        assert_eq!(state.inventory.len(), 6);
        assert!(state.inventory.find_by_code("P001").is_err());
    }
}
