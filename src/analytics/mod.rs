//! Pure market-analytics functions.
//!
//! Everything here is synchronous, allocation-light and total: no function
//! returns an error or panics for well-typed input, including empty
//! collections. Missing data degrades to documented sentinel values.
//!
//! Data flows `TimeSeries -> window::filter -> statistics::compute` per
//! entity, and `Selection`s flow through `compare` and `recommend`.
//! `seasonality` is an independent path over pattern tables.

pub mod compare;
pub mod recommend;
pub mod seasonality;
pub mod statistics;
pub mod window;

pub use compare::{compare, compare_all, Metric, MetricCell, MetricComparison};
pub use recommend::{rank, RecommendationSet};
pub use window::TimeWindow;
