//! Shared domain types.
//!
//! - [`OrderStatus`] - order lifecycle codes as reported by AnyMarket
//! - [`Marketplace`] - marketplace channel codes with display labels
//! - [`DateRange`] - a validated creation-date filter window

mod date_range;
mod marketplace;
mod status;

pub use date_range::{DateRange, DateRangeError, MAX_RANGE_DAYS};
pub use marketplace::Marketplace;
pub use status::OrderStatus;
