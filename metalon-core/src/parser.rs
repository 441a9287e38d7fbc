//! Quote file parsing.
//!
//! Quote files are JSON documents carrying one quote plus an optional
//! embedded shop configuration. Absent fields take the stock defaults, so a
//! minimal file only needs the line items.

use crate::config::ShopConfig;
use crate::error::{QuoteError, Result};
use crate::model::Quote;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk envelope: shop configuration plus the quote itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteFile {
    /// Shop pricing configuration; stock defaults when absent.
    #[serde(default)]
    pub config: ShopConfig,
    /// The quote to price.
    #[serde(default)]
    pub quote: Quote,
}

/// Read a quote file's raw content.
pub fn read_quote_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(QuoteError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(QuoteError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    Ok(content)
}

/// Parse quote file content.
pub fn parse_quote_file(content: &str) -> Result<QuoteFile> {
    let file: QuoteFile = serde_json::from_str(content)?;
    tracing::debug!(
        items = file.quote.items.len(),
        products = file.quote.products.len(),
        "parsed quote file"
    );
    Ok(file)
}

/// Read and parse a quote file from a path.
pub fn load_quote_file(path: &Path) -> Result<QuoteFile> {
    let content = read_quote_file(path)?;
    parse_quote_file(&content)
}
