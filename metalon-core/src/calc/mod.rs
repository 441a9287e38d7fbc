//! Pure calculation engine for quote pricing.

mod item_stats;
mod totals;

pub use item_stats::{compute_item_stats, refresh_item};
pub use totals::compute_quote_totals;
