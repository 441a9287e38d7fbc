//! Validation logic for quotes and shop configuration.

use crate::config::{float_cmp, ShopConfig};
use crate::error::{QuoteError, Result};
use crate::model::{BarItem, GenericProduct, Quote};
use crate::parser::QuoteFile;

/// Maximum bar quantity accepted on a single line item.
pub const MAX_ITEM_QUANTITY: u32 = 1_000;

/// Maximum commercial bar length, in meters.
pub const MAX_BAR_LENGTH_M: f64 = 100.0;

/// Maximum material cost per meter, in R$.
pub const MAX_COST_PER_METER: f64 = 10_000.0;

/// Maximum manual extra cuts or welds per line item.
pub const MAX_EXTRA_OPERATIONS: u32 = 100;

/// Maximum quantity for a generic product line.
pub const MAX_PRODUCT_QUANTITY: f64 = 10_000.0;

/// Maximum unit price for a generic product line, in R$.
pub const MAX_UNIT_PRICE: f64 = 1_000_000.0;

/// Lowest accepted markup factor (1 = selling at cost).
pub const MIN_MARKUP: f64 = 1.0;

/// Highest accepted markup factor.
pub const MAX_MARKUP: f64 = 10.0;

/// Maximum delivery distance, in kilometers.
pub const MAX_DISTANCE_KM: f64 = 1_000.0;

/// Maximum quote validity, in days.
pub const MAX_VALIDITY_DAYS: u32 = 365;

/// Maximum length for names and descriptions, in characters.
pub const MAX_TEXT_LEN: usize = 200;

/// Maximum length for free-form notes, in characters.
pub const MAX_NOTES_LEN: usize = 5_000;

/// Maximum per-operation cost accepted in the shop configuration.
pub const MAX_CONFIG_OPERATION_COST: f64 = 1_000.0;

/// Maximum cost per kilometer accepted in the shop configuration.
pub const MAX_CONFIG_KM_COST: f64 = 100.0;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate a complete quote file: configuration plus quote.
pub fn validate_quote_file(file: &QuoteFile) -> ValidationResult {
    let mut result = validate_config(&file.config);
    result.merge(validate_quote(&file.quote, &file.config));
    result
}

/// Validate the shop configuration.
pub fn validate_config(config: &ShopConfig) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if !config.cost_per_cut.is_finite()
        || !float_cmp::in_range(config.cost_per_cut, 0.0, MAX_CONFIG_OPERATION_COST)
    {
        result.add_error(format!(
            "Config: Cost per cut {} is out of range (0 to {})",
            config.cost_per_cut, MAX_CONFIG_OPERATION_COST
        ));
    }

    if !config.cost_per_weld.is_finite()
        || !float_cmp::in_range(config.cost_per_weld, 0.0, MAX_CONFIG_OPERATION_COST)
    {
        result.add_error(format!(
            "Config: Cost per weld {} is out of range (0 to {})",
            config.cost_per_weld, MAX_CONFIG_OPERATION_COST
        ));
    }

    if !config.cost_per_km.is_finite()
        || !float_cmp::in_range(config.cost_per_km, 0.0, MAX_CONFIG_KM_COST)
    {
        result.add_error(format!(
            "Config: Cost per km {} is out of range (0 to {})",
            config.cost_per_km, MAX_CONFIG_KM_COST
        ));
    }

    if !config.default_paint_percentage.is_finite()
        || !float_cmp::in_range(config.default_paint_percentage, 0.0, 100.0)
    {
        result.add_error(format!(
            "Config: Paint percentage {} is out of range (0 to 100)",
            config.default_paint_percentage
        ));
    }

    if config.default_validity_days == 0 || config.default_validity_days > MAX_VALIDITY_DAYS {
        result.add_error(format!(
            "Config: Validity {} days is out of range (1 to {})",
            config.default_validity_days, MAX_VALIDITY_DAYS
        ));
    }

    result
}

/// Validate a quote against the configuration it will be priced with.
pub fn validate_quote(quote: &Quote, config: &ShopConfig) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if !quote.has_lines() {
        result.add_warning("Quote has no items or products");
    }

    if !quote.markup.is_finite() || !float_cmp::in_range(quote.markup, MIN_MARKUP, MAX_MARKUP) {
        result.add_error(format!(
            "Markup factor {} is out of range ({} to {})",
            quote.markup, MIN_MARKUP, MAX_MARKUP
        ));
    } else if float_cmp::approx_eq(quote.markup, 1.0) {
        result.add_warning("Markup factor 1 leaves no profit margin");
    }

    if !quote.distance_km.is_finite()
        || !float_cmp::in_range(quote.distance_km, 0.0, MAX_DISTANCE_KM)
    {
        result.add_error(format!(
            "Distance {} km is out of range (0 to {})",
            quote.distance_km, MAX_DISTANCE_KM
        ));
    }

    if quote.validity_days == 0 || quote.validity_days > MAX_VALIDITY_DAYS {
        result.add_error(format!(
            "Validity {} days is out of range (1 to {})",
            quote.validity_days, MAX_VALIDITY_DAYS
        ));
    }

    if let Some(name) = &quote.client_name {
        if name.chars().count() > MAX_TEXT_LEN {
            result.add_error(format!("Client name exceeds {} characters", MAX_TEXT_LEN));
        }
    }

    if quote.notes.chars().count() > MAX_NOTES_LEN {
        result.add_error(format!("Notes exceed {} characters", MAX_NOTES_LEN));
    }

    for (idx, item) in quote.items.iter().enumerate() {
        let item_num = idx + 1;
        result.merge(validate_item(item, item_num));

        // Paint flag with an effective percentage of zero adds nothing
        let pct = item.effective_paint_percentage(config.default_paint_percentage);
        if item.paint && pct.is_finite() && float_cmp::approx_zero(pct) {
            result.add_warning(format!(
                "Item {}: Paint requested but paint percentage is zero",
                item_num
            ));
        }
    }

    for (idx, product) in quote.products.iter().enumerate() {
        result.merge(validate_product(product, idx + 1));
    }

    result
}

/// Validate a single bar line item.
pub fn validate_item(item: &BarItem, item_num: usize) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if item.profile_name.trim().is_empty() {
        result.add_error(format!("Item {}: Missing profile name", item_num));
    } else if item.profile_name.chars().count() > MAX_TEXT_LEN {
        result.add_error(format!(
            "Item {}: Profile name exceeds {} characters",
            item_num, MAX_TEXT_LEN
        ));
    }

    if item.quantity == 0 {
        result.add_error(format!("Item {}: Quantity must be at least 1", item_num));
    } else if item.quantity > MAX_ITEM_QUANTITY {
        result.add_error(format!(
            "Item {}: Quantity {} exceeds {} bars",
            item_num, item.quantity, MAX_ITEM_QUANTITY
        ));
    }

    if !item.cost_per_length.is_finite() || item.cost_per_length <= 0.0 {
        result.add_error(format!(
            "Item {}: Invalid cost per meter ({})",
            item_num, item.cost_per_length
        ));
    } else if item.cost_per_length > MAX_COST_PER_METER {
        result.add_error(format!(
            "Item {}: Cost per meter {} exceeds {}",
            item_num, item.cost_per_length, MAX_COST_PER_METER
        ));
    }

    if !item.length_per_bar.is_finite() || item.length_per_bar <= 0.0 {
        result.add_error(format!(
            "Item {}: Invalid bar length ({})",
            item_num, item.length_per_bar
        ));
    } else if item.length_per_bar > MAX_BAR_LENGTH_M {
        result.add_error(format!(
            "Item {}: Bar length {} m exceeds {} m",
            item_num, item.length_per_bar, MAX_BAR_LENGTH_M
        ));
    }

    if item.extra_cuts > MAX_EXTRA_OPERATIONS {
        result.add_error(format!(
            "Item {}: Extra cuts {} exceed {}",
            item_num, item.extra_cuts, MAX_EXTRA_OPERATIONS
        ));
    }

    if item.extra_welds > MAX_EXTRA_OPERATIONS {
        result.add_error(format!(
            "Item {}: Extra welds {} exceed {}",
            item_num, item.extra_welds, MAX_EXTRA_OPERATIONS
        ));
    }

    if let Some(pct) = item.paint_percentage_override {
        if !pct.is_finite() || !float_cmp::in_range(pct, 0.0, 100.0) {
            result.add_error(format!(
                "Item {}: Paint percentage {} is out of range (0 to 100)",
                item_num, pct
            ));
        }
    }

    result
}

/// Validate a single generic product line.
pub fn validate_product(product: &GenericProduct, product_num: usize) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if product.description.trim().is_empty() {
        result.add_error(format!("Product {}: Missing description", product_num));
    } else if product.description.chars().count() > MAX_TEXT_LEN {
        result.add_error(format!(
            "Product {}: Description exceeds {} characters",
            product_num, MAX_TEXT_LEN
        ));
    }

    if !product.quantity.is_finite() || product.quantity <= 0.0 {
        result.add_error(format!(
            "Product {}: Invalid quantity ({})",
            product_num, product.quantity
        ));
    } else if product.quantity > MAX_PRODUCT_QUANTITY {
        result.add_error(format!(
            "Product {}: Quantity {} exceeds {}",
            product_num, product.quantity, MAX_PRODUCT_QUANTITY
        ));
    }

    if !product.unit_price.is_finite() || product.unit_price <= 0.0 {
        result.add_error(format!(
            "Product {}: Invalid unit price ({})",
            product_num, product.unit_price
        ));
    } else if product.unit_price > MAX_UNIT_PRICE {
        result.add_error(format!(
            "Product {}: Unit price {} exceeds {}",
            product_num, product.unit_price, MAX_UNIT_PRICE
        ));
    }

    result
}

/// Quick validation check for the command-line --validate flag.
///
/// Warnings never fail this check; the first batch of errors does.
pub fn quick_validate(file: &QuoteFile) -> Result<()> {
    let config_result = validate_config(&file.config);
    if !config_result.passed {
        return Err(QuoteError::InvalidConfig {
            message: config_result.errors.join("; "),
        });
    }

    let quote_result = validate_quote(&file.quote, &file.config);
    if !quote_result.passed {
        return Err(QuoteError::InvalidQuote {
            message: quote_result.errors.join("; "),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_basic_item() -> BarItem {
        BarItem::new("Metalon 20x20", 8.0, 3, 6.0)
    }

    fn create_basic_product() -> GenericProduct {
        GenericProduct::new("Dobradiça reforçada", 2.0, 25.0)
    }

    fn create_basic_file() -> QuoteFile {
        let mut quote = Quote::new();
        quote.add_item(create_basic_item());
        QuoteFile {
            config: ShopConfig::default(),
            quote,
        }
    }

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_ok() {
        let result = ValidationResult::ok();
        assert!(result.passed);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validation_result_error() {
        let result = ValidationResult::error("Bad quote");
        assert!(!result.passed);
        assert_eq!(result.errors, vec!["Bad quote".to_string()]);
    }

    #[test]
    fn test_validation_result_warnings_keep_passing() {
        let mut result = ValidationResult::ok();
        result.add_warning("Worth a look");
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_validation_result_add_error_fails() {
        let mut result = ValidationResult::ok();
        result.add_error("Broken");
        assert!(!result.passed);
    }

    #[test]
    fn test_validation_result_merge() {
        let mut result1 = ValidationResult::ok();
        result1.add_warning("Warning 1");

        let mut result2 = ValidationResult::ok();
        result2.add_error("Error 1");
        result2.add_warning("Warning 2");

        result1.merge(result2);
        assert!(!result1.passed);
        assert_eq!(result1.warnings.len(), 2);
        assert_eq!(result1.errors.len(), 1);
    }

    // ==================== validate_item tests ====================

    #[test]
    fn test_validate_item_valid() {
        let result = validate_item(&create_basic_item(), 1);
        assert!(result.passed);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_validate_item_missing_profile_name() {
        let mut item = create_basic_item();
        item.profile_name = "   ".to_string();
        let result = validate_item(&item, 1);
        assert!(!result.passed);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("Missing profile name")));
    }

    #[test]
    fn test_validate_item_zero_quantity() {
        let mut item = create_basic_item();
        item.quantity = 0;
        let result = validate_item(&item, 1);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("at least 1")));
    }

    #[test]
    fn test_validate_item_quantity_over_cap() {
        let mut item = create_basic_item();
        item.quantity = 1001;
        let result = validate_item(&item, 1);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("exceeds 1000")));
    }

    #[test]
    fn test_validate_item_nonpositive_cost() {
        let mut item = create_basic_item();
        item.cost_per_length = -8.0;
        let result = validate_item(&item, 1);
        assert!(!result.passed);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("Invalid cost per meter")));
    }

    #[test]
    fn test_validate_item_nan_cost() {
        let mut item = create_basic_item();
        item.cost_per_length = f64::NAN;
        let result = validate_item(&item, 1);
        assert!(!result.passed);
    }

    #[test]
    fn test_validate_item_zero_length() {
        let mut item = create_basic_item();
        item.length_per_bar = 0.0;
        let result = validate_item(&item, 1);
        assert!(!result.passed);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("Invalid bar length")));
    }

    #[test]
    fn test_validate_item_length_over_cap() {
        let mut item = create_basic_item();
        item.length_per_bar = 120.0;
        let result = validate_item(&item, 1);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("exceeds 100 m")));
    }

    #[test]
    fn test_validate_item_extras_over_cap() {
        let mut item = create_basic_item();
        item.set_extras(150, 0);
        let result = validate_item(&item, 1);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("Extra cuts")));
    }

    #[test]
    fn test_validate_item_paint_override_out_of_range() {
        let mut item = create_basic_item();
        item.set_paint(true, Some(150.0));
        let result = validate_item(&item, 1);
        assert!(!result.passed);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("Paint percentage 150")));
    }

    // ==================== validate_product tests ====================

    #[test]
    fn test_validate_product_valid() {
        let result = validate_product(&create_basic_product(), 1);
        assert!(result.passed);
    }

    #[test]
    fn test_validate_product_fractional_quantity() {
        let product = GenericProduct::new("Chapa 2mm (m²)", 1.5, 80.0);
        let result = validate_product(&product, 1);
        assert!(result.passed);
    }

    #[test]
    fn test_validate_product_missing_description() {
        let mut product = create_basic_product();
        product.description = String::new();
        let result = validate_product(&product, 1);
        assert!(!result.passed);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("Missing description")));
    }

    #[test]
    fn test_validate_product_zero_quantity() {
        let mut product = create_basic_product();
        product.quantity = 0.0;
        let result = validate_product(&product, 1);
        assert!(!result.passed);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("Invalid quantity")));
    }

    #[test]
    fn test_validate_product_price_over_cap() {
        let mut product = create_basic_product();
        product.unit_price = 2_000_000.0;
        let result = validate_product(&product, 1);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("Unit price")));
    }

    // ==================== validate_quote tests ====================

    #[test]
    fn test_validate_quote_empty_warns() {
        let quote = Quote::new();
        let result = validate_quote(&quote, &ShopConfig::default());
        assert!(result.passed);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("no items or products")));
    }

    #[test]
    fn test_validate_quote_markup_one_warns() {
        let mut quote = Quote::new();
        quote.add_item(create_basic_item());
        quote.markup = 1.0;
        let result = validate_quote(&quote, &ShopConfig::default());
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("no profit")));
    }

    #[test]
    fn test_validate_quote_markup_below_one() {
        let mut quote = Quote::new();
        quote.markup = 0.5;
        let result = validate_quote(&quote, &ShopConfig::default());
        assert!(!result.passed);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("Markup factor 0.5")));
    }

    #[test]
    fn test_validate_quote_markup_over_cap() {
        let mut quote = Quote::new();
        quote.markup = 12.0;
        let result = validate_quote(&quote, &ShopConfig::default());
        assert!(!result.passed);
    }

    #[test]
    fn test_validate_quote_negative_distance() {
        let mut quote = Quote::new();
        quote.distance_km = -5.0;
        let result = validate_quote(&quote, &ShopConfig::default());
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("Distance")));
    }

    #[test]
    fn test_validate_quote_zero_validity() {
        let mut quote = Quote::new();
        quote.validity_days = 0;
        let result = validate_quote(&quote, &ShopConfig::default());
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("Validity")));
    }

    #[test]
    fn test_validate_quote_paint_without_percentage_warns() {
        let mut item = create_basic_item();
        item.set_paint(true, Some(0.0));
        let mut quote = Quote::new();
        quote.add_item(item);
        let result = validate_quote(&quote, &ShopConfig::default());
        assert!(result.passed);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("paint percentage is zero")));
    }

    #[test]
    fn test_validate_quote_reports_item_position() {
        let mut bad = create_basic_item();
        bad.quantity = 0;
        let mut quote = Quote::new();
        quote.add_item(create_basic_item());
        quote.add_item(bad);
        let result = validate_quote(&quote, &ShopConfig::default());
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.starts_with("Item 2:")));
    }

    // ==================== validate_config tests ====================

    #[test]
    fn test_validate_config_default() {
        let result = validate_config(&ShopConfig::default());
        assert!(result.passed);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_validate_config_negative_cut_cost() {
        let config = ShopConfig::new(-5.0, 10.0, 2.5);
        let result = validate_config(&config);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("Cost per cut")));
    }

    #[test]
    fn test_validate_config_km_cost_over_cap() {
        let config = ShopConfig::new(5.0, 10.0, 200.0);
        let result = validate_config(&config);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("Cost per km")));
    }

    #[test]
    fn test_validate_config_paint_percentage_over_100() {
        let mut config = ShopConfig::default();
        config.default_paint_percentage = 150.0;
        let result = validate_config(&config);
        assert!(!result.passed);
    }

    #[test]
    fn test_validate_config_zero_validity() {
        let mut config = ShopConfig::default();
        config.default_validity_days = 0;
        let result = validate_config(&config);
        assert!(!result.passed);
    }

    // ==================== quick_validate tests ====================

    #[test]
    fn test_quick_validate_success() {
        let file = create_basic_file();
        assert!(quick_validate(&file).is_ok());
    }

    #[test]
    fn test_quick_validate_warnings_do_not_fail() {
        let file = QuoteFile::default();
        assert!(quick_validate(&file).is_ok());
    }

    #[test]
    fn test_quick_validate_bad_config() {
        let mut file = create_basic_file();
        file.config.cost_per_cut = -1.0;
        match quick_validate(&file) {
            Err(QuoteError::InvalidConfig { .. }) => {}
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_quick_validate_bad_quote() {
        let mut file = create_basic_file();
        file.quote.markup = 0.0;
        match quick_validate(&file) {
            Err(QuoteError::InvalidQuote { message }) => {
                assert!(message.contains("Markup factor"));
            }
            other => panic!("Expected InvalidQuote, got {:?}", other),
        }
    }
}
