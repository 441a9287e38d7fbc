//! Quote totals - the computed price/profit breakdown.

use serde::{Deserialize, Serialize};

/// Complete cost and price breakdown for one quote.
///
/// Every field is derived by the totals aggregator; nothing here is stored
/// independently or hand-edited. Markup applies only to the product cost
/// basis — the service side (cuts, welds, transport, paint) is passed
/// through at cost.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct QuoteTotals {
    // === Product cost basis (receives markup) ===
    /// Material cost over all bar items, paint excluded.
    pub material_cost: f64,
    /// Sum of generic product line totals.
    pub generic_cost: f64,
    /// material_cost + generic_cost; the only base markup applies to.
    pub product_cost_basis: f64,

    // === Service cost basis (never marked up) ===
    /// Cut charges: one automatic cut per bar plus extras, priced per cut.
    pub cut_cost: f64,
    /// Weld charges: one automatic weld per bar plus extras, priced per weld.
    pub weld_cost: f64,
    /// Transport: distance x cost per km.
    pub transport_cost: f64,
    /// Paint surcharges over all painted items.
    pub paint_cost: f64,
    /// cut_cost + weld_cost + transport_cost + paint_cost.
    pub service_cost_basis: f64,

    // === Price and profit ===
    /// product_cost_basis x (markup - 1); the shop's margin.
    pub markup_reserve: f64,
    /// product_cost_basis + service_cost_basis + markup_reserve.
    pub final_price: f64,
    /// final_price minus the total cost basis; equals markup_reserve.
    pub absolute_profit: f64,
    /// absolute_profit as a percentage of the total cost basis; 0 when the
    /// cost basis is empty.
    pub profit_percentage: f64,

    // === Presentational conveniences (never feed final_price) ===
    /// Material cost including paint surcharges.
    pub material_with_paint: f64,
    /// material_cost x markup, as some consumers display it.
    pub material_with_markup: f64,
    /// generic_cost x markup, as some consumers display it.
    pub products_with_markup: f64,
}

impl QuoteTotals {
    /// Cost basis before markup: products plus services.
    pub fn total_cost_basis(&self) -> f64 {
        self.product_cost_basis + self.service_cost_basis
    }
}
