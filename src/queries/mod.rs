//! Query modules for the market SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`MarketData`](crate::source::MarketData) provider, fetches what it needs
//! (live first, static fallback) and runs the pure analytics in
//! [`crate::analytics`] over the result. Every answer is wrapped in
//! [`Sourced`](crate::source::Sourced) so callers can show a demo-data badge.

pub mod climate;
pub mod compare;
pub mod news;
pub mod prices;
pub mod seasonality;

pub use climate::ClimateQuery;
pub use compare::{CompareQuery, ComparisonReport, SelectionAnalysis};
pub use news::NewsQuery;
pub use prices::PriceQuery;
pub use seasonality::SeasonalityQuery;
