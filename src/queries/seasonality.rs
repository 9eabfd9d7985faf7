//! Seasonal pattern queries.

use tracing::debug;

use crate::analytics::seasonality;
use crate::config::MAX_SEASONAL_COUNTRIES;
use crate::error::Result;
use crate::models::{SeasonalChartRow, SeasonalInsights, SeasonalPattern, TradingInsights};
use crate::source::{DataOrigin, MarketData, Sourced};

// ---------------------------------------------------------------------------
// SeasonalityQuery
// ---------------------------------------------------------------------------

/// Query interface for monthly price deviation patterns.
pub struct SeasonalityQuery<'a> {
    data: &'a MarketData,
}

impl<'a> SeasonalityQuery<'a> {
    pub fn new(data: &'a MarketData) -> Self {
        Self { data }
    }

    /// Every known pattern for `commodity`.
    pub fn patterns(&self, commodity: &str) -> Result<Sourced<Vec<SeasonalPattern>>> {
        self.data.seasonal_patterns(commodity)
    }

    /// The pattern for one country, neutral when none is known.
    pub fn pattern(&self, commodity: &str, country: &str) -> Result<Sourced<SeasonalPattern>> {
        self.data.seasonal_pattern(commodity, country)
    }

    /// Best buy/sell months and spread for one country.
    pub fn insights(&self, commodity: &str, country: &str) -> Result<Sourced<SeasonalInsights>> {
        Ok(self
            .pattern(commodity, country)?
            .map(|p| seasonality::insights(&p)))
    }

    /// Buy/sell price targets around `base_price`.
    pub fn trading_insights(
        &self,
        commodity: &str,
        country: &str,
        base_price: f64,
    ) -> Result<Sourced<TradingInsights>> {
        Ok(self
            .pattern(commodity, country)?
            .map(|p| seasonality::trading_insights(&p, base_price)))
    }

    /// Month-by-month chart rows for up to four countries.
    ///
    /// Countries past the limit are dropped. Unknown countries chart as flat
    /// lines. The rows are `Demo` if any country was served from static data.
    pub fn chart(&self, commodity: &str, countries: &[&str]) -> Result<Sourced<Vec<SeasonalChartRow>>> {
        if countries.len() > MAX_SEASONAL_COUNTRIES {
            debug!(
                requested = countries.len(),
                limit = MAX_SEASONAL_COUNTRIES,
                "truncating seasonality chart"
            );
        }
        let picked = &countries[..countries.len().min(MAX_SEASONAL_COUNTRIES)];

        let mut origin = if self.data.is_offline() {
            DataOrigin::Demo
        } else {
            DataOrigin::Live
        };
        let mut chosen = Vec::with_capacity(picked.len());
        for country in picked {
            let pattern = self.pattern(commodity, country)?;
            if pattern.is_demo() {
                origin = DataOrigin::Demo;
            }
            chosen.push(pattern.value);
        }
        Ok(Sourced {
            value: seasonality::seasonal_chart(&chosen),
            origin,
        })
    }
}
