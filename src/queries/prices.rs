//! Price history queries and windowed statistics.

use chrono::NaiveDate;

use crate::analytics::{statistics, window, TimeWindow};
use crate::error::Result;
use crate::models::{SeriesStatisticsResult, TimeSeries};
use crate::source::{MarketData, Sourced};

// ---------------------------------------------------------------------------
// PriceQuery
// ---------------------------------------------------------------------------

/// Query interface for per-country price histories.
///
/// Windowed methods take the reference "now" explicitly. For the bundled
/// dataset that is [`PriceQuery::reference_date`].
pub struct PriceQuery<'a> {
    data: &'a MarketData,
}

impl<'a> PriceQuery<'a> {
    pub fn new(data: &'a MarketData) -> Self {
        Self { data }
    }

    /// The date the static dataset treats as today.
    pub fn reference_date(&self) -> NaiveDate {
        self.data.static_source().reference_date()
    }

    /// Full history, empty when the pair is unknown.
    pub fn history(&self, commodity: &str, country: &str) -> Result<Sourced<TimeSeries>> {
        self.data.price_history(commodity, country)
    }

    /// History restricted to `window` ending at `reference_now`.
    pub fn windowed(
        &self,
        commodity: &str,
        country: &str,
        window: TimeWindow,
        reference_now: NaiveDate,
    ) -> Result<Sourced<TimeSeries>> {
        Ok(self
            .history(commodity, country)?
            .map(|s| window::filter(&s, window, reference_now)))
    }

    /// Summary statistics over the windowed history.
    pub fn statistics(
        &self,
        commodity: &str,
        country: &str,
        window: TimeWindow,
        reference_now: NaiveDate,
    ) -> Result<Sourced<SeriesStatisticsResult>> {
        Ok(self
            .windowed(commodity, country, window, reference_now)?
            .map(|s| statistics::compute(&s)))
    }

    /// Windowed history rebased to percent change from its first point.
    pub fn percent_change(
        &self,
        commodity: &str,
        country: &str,
        window: TimeWindow,
        reference_now: NaiveDate,
    ) -> Result<Sourced<Vec<(NaiveDate, f64)>>> {
        Ok(self
            .windowed(commodity, country, window, reference_now)?
            .map(|s| statistics::percent_change_series(&s)))
    }
}
