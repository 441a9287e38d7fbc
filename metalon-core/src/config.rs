//! Shop configuration and pricing defaults.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon for monetary values.
pub const EPS: f64 = 1e-6;

/// Default cost charged per cut, in R$.
pub const DEFAULT_COST_PER_CUT: f64 = 5.0;

/// Default cost charged per weld, in R$.
pub const DEFAULT_COST_PER_WELD: f64 = 10.0;

/// Default transport cost per kilometer, in R$.
pub const DEFAULT_COST_PER_KM: f64 = 2.5;

/// Default paint surcharge as a percentage of material cost.
pub const DEFAULT_PAINT_PERCENTAGE: f64 = 15.0;

/// Default quote validity period, in days.
pub const DEFAULT_VALIDITY_DAYS: u32 = 15;

/// Stock markup factor for regular clients.
pub const STANDARD_MARKUP: f64 = 2.0;

/// Stock markup factor for friend-rate clients.
pub const FRIEND_MARKUP: f64 = 1.8;

/// Per-shop pricing constants.
///
/// Immutable during a totals computation; supplied wholesale to the
/// aggregator rather than read from ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Cost charged per cut (automatic + extra), in R$.
    pub cost_per_cut: f64,
    /// Cost charged per weld (automatic + extra), in R$.
    pub cost_per_weld: f64,
    /// Transport cost per kilometer, in R$.
    pub cost_per_km: f64,
    /// Paint surcharge percentage applied to material cost (0-100).
    pub default_paint_percentage: f64,
    /// Default quote validity period, in days.
    pub default_validity_days: u32,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            cost_per_cut: DEFAULT_COST_PER_CUT,
            cost_per_weld: DEFAULT_COST_PER_WELD,
            cost_per_km: DEFAULT_COST_PER_KM,
            default_paint_percentage: DEFAULT_PAINT_PERCENTAGE,
            default_validity_days: DEFAULT_VALIDITY_DAYS,
        }
    }
}

impl ShopConfig {
    /// Create a configuration with explicit unit costs, keeping stock
    /// defaults for the remaining fields.
    pub fn new(cost_per_cut: f64, cost_per_weld: f64, cost_per_km: f64) -> Self {
        Self {
            cost_per_cut,
            cost_per_weld,
            cost_per_km,
            ..Default::default()
        }
    }

    /// Check whether transport is charged at all.
    pub fn charges_transport(&self) -> bool {
        self.cost_per_km > 0.0
    }
}

/// A named, reusable markup factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkupPreset {
    /// Display label (e.g. "Padrão").
    pub label: String,
    /// Markup factor (1-10).
    pub value: f64,
}

impl MarkupPreset {
    /// Create a new preset.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Stock presets offered when the user has not registered any.
    pub fn defaults() -> Vec<MarkupPreset> {
        vec![
            MarkupPreset::new("Padrão", STANDARD_MARKUP),
            MarkupPreset::new("Amigo", FRIEND_MARKUP),
        ]
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }

    /// Check if a is in range [min, max] with epsilon tolerance.
    #[inline]
    pub fn in_range(a: f64, min: f64, max: f64) -> bool {
        a >= min - EPS && a <= max + EPS
    }
}
