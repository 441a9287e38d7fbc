//! Generic product - a non-material flat-priced quote line.

use serde::{Deserialize, Serialize};

/// A flat-priced line item (hardware, fittings, outsourced services).
///
/// Not subject to paint or cut/weld charges; its total joins the product
/// cost basis and therefore receives markup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenericProduct {
    /// Record identifier, when the product came from an external store.
    #[serde(default)]
    pub id: Option<String>,
    /// Free-text description.
    pub description: String,
    /// Quantity; fractional values are allowed (e.g. 2.5 kg).
    pub quantity: f64,
    /// Price per unit, in R$.
    pub unit_price: f64,
    /// Derived line total: quantity x unit price.
    #[serde(default)]
    pub total: f64,
}

impl GenericProduct {
    /// Create a new product with its total already computed.
    pub fn new(description: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        let mut product = Self {
            description: description.into(),
            quantity,
            unit_price,
            ..Default::default()
        };
        product.refresh();
        product
    }

    /// Line total from the raw fields.
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }

    /// Recompute the stored total from the raw fields.
    pub fn refresh(&mut self) {
        self.total = self.line_total();
    }
}
