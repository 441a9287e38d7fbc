//! metalon-core - Core library for metalon structure quote pricing.
//!
//! This library prices fabrication quotes for a metalwork shop: bar line
//! items (metalon profiles cut and welded to length), generic product lines,
//! service costs (cuts, welds, transport, paint) and a markup that applies
//! only to the product cost basis. It also renders the shareable WhatsApp
//! summary text.
//!
//! # Example
//!
//! ```
//! use metalon_core::model::{BarItem, GenericProduct, Quote};
//! use metalon_core::{price_quote, ShopConfig};
//!
//! let mut quote = Quote::new();
//! quote.add_item(BarItem::new("Metalon 20x20", 8.0, 3, 6.0));
//! quote.add_product(GenericProduct::new("Dobradiça", 2.0, 25.0));
//! quote.distance_km = 10.0;
//!
//! let totals = price_quote(&mut quote, &ShopConfig::default()).unwrap();
//! assert_eq!(totals.final_price, 458.0);
//! ```

pub mod calc;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod validation;

// Re-exports for convenience
pub use calc::{compute_item_stats, compute_quote_totals, refresh_item};
pub use config::{MarkupPreset, ShopConfig};
pub use error::{ErrorCode, QuoteError, Result};
pub use generator::{format_currency, generate_whatsapp_text};
pub use model::{BarItem, GenericProduct, ItemStats, Quote, QuoteStatus, QuoteTotals};
pub use parser::{load_quote_file, parse_quote_file, QuoteFile};
pub use validation::{quick_validate, validate_quote_file, ValidationResult};

use std::path::Path;

/// Validate a quote, refresh its derived fields and compute its totals.
///
/// Validation errors abort before any field is touched; warnings are logged
/// and pricing continues.
pub fn price_quote(quote: &mut Quote, config: &ShopConfig) -> Result<QuoteTotals> {
    let config_result = validation::validate_config(config);
    if !config_result.passed {
        return Err(QuoteError::InvalidConfig {
            message: config_result.errors.join("; "),
        });
    }

    let quote_result = validation::validate_quote(quote, config);
    if !quote_result.passed {
        return Err(QuoteError::InvalidQuote {
            message: quote_result.errors.join("; "),
        });
    }

    for warning in config_result.warnings.iter().chain(&quote_result.warnings) {
        tracing::warn!("{}", warning);
    }

    for item in &mut quote.items {
        calc::refresh_item(item, config.default_paint_percentage);
    }
    for product in &mut quote.products {
        product.refresh();
    }

    Ok(calc::compute_quote_totals(
        &quote.items,
        &quote.products,
        config,
        quote.markup,
        quote.distance_km,
    ))
}

/// Load a quote file and price its quote with the embedded configuration.
///
/// Returns the file with derived fields refreshed in place, plus the totals.
pub fn price_quote_file(input_path: &Path) -> Result<(QuoteFile, QuoteTotals)> {
    let mut file = parser::load_quote_file(input_path)?;
    let totals = price_quote(&mut file.quote, &file.config)?;
    Ok((file, totals))
}

/// Convert a quote file to the shareable WhatsApp text.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Read and parse the quote file
/// 2. Validate the configuration and quote
/// 3. Refresh derived fields and compute totals
/// 4. Render the message text
///
/// # Arguments
///
/// * `input_path` - Path to the input quote JSON file
///
/// # Returns
///
/// The generated WhatsApp message as a string.
pub fn quote_file_to_message(input_path: &Path) -> Result<String> {
    let (file, totals) = price_quote_file(input_path)?;
    Ok(generator::generate_whatsapp_text(&file.quote, &totals))
}
