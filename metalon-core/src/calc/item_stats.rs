//! Per-item cost metrics.

use crate::model::{BarItem, ItemStats};

/// Compute the derived cost metrics for one bar line.
///
/// Pure arithmetic with no validation: range checks happen upstream, and
/// out-of-range inputs simply flow through to the derived values (a zero
/// quantity yields zero costs, a negative cost per meter yields negative
/// costs). The paint surcharge applies only when the paint flag is set.
pub fn compute_item_stats(
    cost_per_length: f64,
    quantity: u32,
    length_per_bar: f64,
    paint: bool,
    paint_percentage: f64,
) -> ItemStats {
    let total_length = f64::from(quantity) * length_per_bar;
    let material_cost = total_length * cost_per_length;

    let paint_cost = if paint {
        material_cost * (paint_percentage / 100.0)
    } else {
        0.0
    };

    ItemStats {
        total_length,
        material_cost,
        paint_cost,
        combined_cost: material_cost + paint_cost,
    }
}

/// Recompute and stamp the derived fields of one bar item.
///
/// The shop's default paint percentage is used unless the item carries its
/// own override.
pub fn refresh_item(item: &mut BarItem, shop_default_paint_percentage: f64) {
    let paint_percentage = item.effective_paint_percentage(shop_default_paint_percentage);
    let stats = compute_item_stats(
        item.cost_per_length,
        item.quantity,
        item.length_per_bar,
        item.paint,
        paint_percentage,
    );
    item.apply_stats(&stats);
}
