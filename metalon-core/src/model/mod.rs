//! Data model types for quote pricing.

mod item;
mod product;
mod quote;
mod totals;

pub use item::{BarItem, ItemStats};
pub use product::GenericProduct;
pub use quote::{Quote, QuoteStatus};
pub use totals::QuoteTotals;
