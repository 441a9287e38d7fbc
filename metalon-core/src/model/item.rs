//! Bar item - one purchased/cut metal profile line in a quote.

use serde::{Deserialize, Serialize};

/// Derived cost metrics for one bar item.
///
/// Produced by the item stats calculator from the item's raw inputs; the
/// aggregator expects every item to already carry these values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemStats {
    /// Total bar length: quantity x length per bar.
    pub total_length: f64,
    /// Material cost before paint: total length x cost per meter.
    pub material_cost: f64,
    /// Paint surcharge; zero when the paint flag is off.
    pub paint_cost: f64,
    /// Material cost plus paint surcharge.
    pub combined_cost: f64,
}

/// One metalon bar line in a quote.
///
/// Raw fields describe what the user entered; derived fields are always
/// recomputed from the raw fields and never edited independently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BarItem {
    /// Record identifier, when the item came from an external store.
    #[serde(default)]
    pub id: Option<String>,
    /// Referenced profile identifier, if any.
    #[serde(default)]
    pub profile_id: Option<String>,
    /// Profile name snapshot for display (e.g. "Metalon 30x30").
    pub profile_name: String,
    /// Profile cost per length unit (R$/m) at the time of quoting.
    pub cost_per_length: f64,
    /// Number of bars.
    pub quantity: u32,
    /// Length of each bar, in meters.
    pub length_per_bar: f64,
    /// Whether the bars get painted.
    #[serde(default)]
    pub paint: bool,
    /// Per-item paint percentage; falls back to the shop default when unset.
    #[serde(default)]
    pub paint_percentage_override: Option<f64>,
    /// Cuts beyond the one automatic cut per bar.
    #[serde(default)]
    pub extra_cuts: u32,
    /// Welds beyond the one automatic weld per bar.
    #[serde(default)]
    pub extra_welds: u32,

    // === Derived fields (stamped by the calc pass) ===
    /// Total bar length: quantity x length per bar.
    #[serde(default)]
    pub total_length: f64,
    /// Material cost before paint.
    #[serde(default)]
    pub material_cost: f64,
    /// Paint surcharge; zero when the paint flag is off.
    #[serde(default)]
    pub paint_cost: f64,
    /// Material cost plus paint surcharge.
    #[serde(default)]
    pub combined_cost: f64,
}

impl BarItem {
    /// Create a new bar item with derived fields zeroed.
    pub fn new(
        profile_name: impl Into<String>,
        cost_per_length: f64,
        quantity: u32,
        length_per_bar: f64,
    ) -> Self {
        Self {
            profile_name: profile_name.into(),
            cost_per_length,
            quantity,
            length_per_bar,
            ..Default::default()
        }
    }

    /// Set the paint flag and optional per-item percentage override.
    pub fn set_paint(&mut self, paint: bool, percentage_override: Option<f64>) {
        self.paint = paint;
        self.paint_percentage_override = percentage_override;
    }

    /// Set extra cut/weld counts.
    pub fn set_extras(&mut self, extra_cuts: u32, extra_welds: u32) {
        self.extra_cuts = extra_cuts;
        self.extra_welds = extra_welds;
    }

    /// Paint percentage in effect for this item.
    pub fn effective_paint_percentage(&self, shop_default: f64) -> f64 {
        self.paint_percentage_override.unwrap_or(shop_default)
    }

    /// Cuts charged for this item: one automatic cut per bar plus extras.
    pub fn cut_count(&self) -> u32 {
        self.quantity + self.extra_cuts
    }

    /// Welds charged for this item: one automatic weld per bar plus extras.
    pub fn weld_count(&self) -> u32 {
        self.quantity + self.extra_welds
    }

    /// Stamp derived fields from a computed stats record.
    pub fn apply_stats(&mut self, stats: &ItemStats) {
        self.total_length = stats.total_length;
        self.material_cost = stats.material_cost;
        self.paint_cost = stats.paint_cost;
        self.combined_cost = stats.combined_cost;
    }

    /// Current derived fields as a stats record.
    pub fn stats(&self) -> ItemStats {
        ItemStats {
            total_length: self.total_length,
            material_cost: self.material_cost,
            paint_cost: self.paint_cost,
            combined_cost: self.combined_cost,
        }
    }
}
