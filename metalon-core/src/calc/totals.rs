//! Quote totals aggregation.

use crate::config::ShopConfig;
use crate::model::{BarItem, GenericProduct, QuoteTotals};

/// Aggregate enriched line items into the full price/profit breakdown.
///
/// Items must already carry their derived costs (see
/// [`compute_item_stats`](super::compute_item_stats) and
/// [`refresh_item`](super::refresh_item)); this function never recomputes
/// them. Markup applies only to the product cost basis — material without
/// paint plus generic products. Paint, cuts, welds, and transport are
/// services passed through at cost.
///
/// Inputs are assumed pre-validated; out-of-range magnitudes flow through
/// the arithmetic unclamped.
pub fn compute_quote_totals(
    items: &[BarItem],
    products: &[GenericProduct],
    config: &ShopConfig,
    markup: f64,
    distance_km: f64,
) -> QuoteTotals {
    // Product cost basis: unpainted material plus flat-priced products.
    let material_cost: f64 = items.iter().map(|i| i.material_cost).sum();
    let generic_cost: f64 = products.iter().map(|p| p.total).sum();
    let product_cost_basis = material_cost + generic_cost;

    // Service side: one automatic cut and weld per bar, plus extras.
    let total_cuts: u32 = items.iter().map(|i| i.cut_count()).sum();
    let total_welds: u32 = items.iter().map(|i| i.weld_count()).sum();
    let cut_cost = f64::from(total_cuts) * config.cost_per_cut;
    let weld_cost = f64::from(total_welds) * config.cost_per_weld;
    let transport_cost = distance_km * config.cost_per_km;
    let paint_cost: f64 = items.iter().map(|i| i.paint_cost).sum();
    let service_cost_basis = cut_cost + weld_cost + transport_cost + paint_cost;

    // Markup reserve comes from the product basis only.
    let markup_reserve = product_cost_basis * (markup - 1.0);
    let final_price = product_cost_basis + service_cost_basis + markup_reserve;

    let total_cost_basis = product_cost_basis + service_cost_basis;
    let absolute_profit = final_price - total_cost_basis;
    let profit_percentage = if total_cost_basis > 0.0 {
        (absolute_profit / total_cost_basis) * 100.0
    } else {
        0.0
    };

    QuoteTotals {
        material_cost,
        generic_cost,
        product_cost_basis,
        cut_cost,
        weld_cost,
        transport_cost,
        paint_cost,
        service_cost_basis,
        markup_reserve,
        final_price,
        absolute_profit,
        profit_percentage,
        material_with_paint: material_cost + paint_cost,
        material_with_markup: material_cost * markup,
        products_with_markup: generic_cost * markup,
    }
}
