//! Quote aggregate - the full editing-session state for one quote.

use super::{BarItem, GenericProduct};
use crate::config::{DEFAULT_VALIDITY_DAYS, STANDARD_MARKUP};
use crate::error::QuoteError;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    #[default]
    Draft,
    Sent,
    Approved,
    Rejected,
}

impl QuoteStatus {
    /// Status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::Draft => "draft",
            QuoteStatus::Sent => "sent",
            QuoteStatus::Approved => "approved",
            QuoteStatus::Rejected => "rejected",
        }
    }

    /// Whether the quote reached a terminal decision.
    pub fn is_settled(&self) -> bool {
        matches!(self, QuoteStatus::Approved | QuoteStatus::Rejected)
    }
}

impl std::str::FromStr for QuoteStatus {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(QuoteStatus::Draft),
            "sent" => Ok(QuoteStatus::Sent),
            "approved" => Ok(QuoteStatus::Approved),
            "rejected" => Ok(QuoteStatus::Rejected),
            other => Err(QuoteError::UnknownStatus {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn default_markup() -> f64 {
    STANDARD_MARKUP
}

fn default_validity_days() -> u32 {
    DEFAULT_VALIDITY_DAYS
}

/// One quote under edition: client, pricing knobs, and line items.
///
/// A transient value object owned by the caller; the engine reads it and
/// returns fresh totals without retaining references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Record identifier, when the quote came from an external store.
    #[serde(default)]
    pub id: Option<String>,
    /// Client name for display; quotes may be drafted before a client exists.
    #[serde(default)]
    pub client_name: Option<String>,
    /// Markup factor applied to the product cost basis (1-10).
    #[serde(default = "default_markup")]
    pub markup: f64,
    /// Round-trip distance to the job site, in km.
    #[serde(default)]
    pub distance_km: f64,
    /// Quote validity period, in days.
    #[serde(default = "default_validity_days")]
    pub validity_days: u32,
    /// Free-form notes appended to the quote message.
    #[serde(default)]
    pub notes: String,
    /// Lifecycle status.
    #[serde(default)]
    pub status: QuoteStatus,
    /// Metal bar line items.
    #[serde(default)]
    pub items: Vec<BarItem>,
    /// Flat-priced products.
    #[serde(default)]
    pub products: Vec<GenericProduct>,
}

impl Default for Quote {
    fn default() -> Self {
        Self {
            id: None,
            client_name: None,
            markup: STANDARD_MARKUP,
            distance_km: 0.0,
            validity_days: DEFAULT_VALIDITY_DAYS,
            notes: String::new(),
            status: QuoteStatus::Draft,
            items: Vec::new(),
            products: Vec::new(),
        }
    }
}

impl Quote {
    /// Create an empty draft quote with stock defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bar item.
    pub fn add_item(&mut self, item: BarItem) {
        self.items.push(item);
    }

    /// Add a generic product.
    pub fn add_product(&mut self, product: GenericProduct) {
        self.products.push(product);
    }

    /// Remove a bar item by record id.
    pub fn remove_item(&mut self, id: &str) -> Option<BarItem> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id.as_deref() == Some(id))?;
        Some(self.items.remove(pos))
    }

    /// Remove a product by record id.
    pub fn remove_product(&mut self, id: &str) -> Option<GenericProduct> {
        let pos = self
            .products
            .iter()
            .position(|p| p.id.as_deref() == Some(id))?;
        Some(self.products.remove(pos))
    }

    /// Whether the quote has any bar items or products.
    pub fn has_lines(&self) -> bool {
        !self.items.is_empty() || !self.products.is_empty()
    }
}
