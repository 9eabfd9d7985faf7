//! Data sources and the live-then-static provider.
//!
//! A [`DataSource`] is any supplier of market data. Two ship with the crate:
//! [`LiveSource`] (the REST backend) and [`StaticSource`] (bundled demo
//! data). [`MarketData`] tries the live source first and falls back to the
//! static one, tagging every result with its [`DataOrigin`].

pub mod client;
pub mod live;
pub mod static_source;

pub use client::ApiClient;
pub use live::LiveSource;
pub use static_source::StaticSource;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analytics::seasonality;
use crate::error::{MarketError, Result};
use crate::models::{
    ClimateDashboard, Commodity, CountryProfile, NewsArticle, NewsParams, SeasonalPattern,
    TimeSeries,
};

// ---------------------------------------------------------------------------
// DataSource
// ---------------------------------------------------------------------------

/// Read-only market data capability.
///
/// Implementations return empty collections for unknown keys and reserve
/// errors for transport or availability problems.
pub trait DataSource: Send + Sync {
    /// Short name used in log events.
    fn name(&self) -> &str;

    fn commodities(&self) -> Result<Vec<Commodity>>;

    fn country_profiles(&self, commodity: &str) -> Result<Vec<CountryProfile>>;

    fn price_history(&self, commodity: &str, country: &str) -> Result<TimeSeries>;

    fn seasonal_patterns(&self, commodity: &str) -> Result<Vec<SeasonalPattern>>;

    /// The pattern for one `(commodity, country)` pair, or `None` when this
    /// source has no entry for it.
    fn seasonal_pattern(&self, commodity: &str, country: &str) -> Result<Option<SeasonalPattern>> {
        let patterns = self.seasonal_patterns(commodity)?;
        Ok(seasonality::find(&patterns, commodity, country).cloned())
    }

    fn news(&self, params: &NewsParams) -> Result<Vec<NewsArticle>>;

    fn product_news(&self, product: &str, params: &NewsParams) -> Result<Vec<NewsArticle>>;

    fn climate_dashboard(&self, commodities: &[String]) -> Result<ClimateDashboard>;
}

// ---------------------------------------------------------------------------
// Sourced
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    Live,
    /// Static demo data, served because live data was unavailable or disabled.
    Demo,
}

/// A value together with where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sourced<T> {
    pub value: T,
    pub origin: DataOrigin,
}

impl<T> Sourced<T> {
    pub fn live(value: T) -> Self {
        Self {
            value,
            origin: DataOrigin::Live,
        }
    }

    pub fn demo(value: T) -> Self {
        Self {
            value,
            origin: DataOrigin::Demo,
        }
    }

    pub fn is_demo(&self) -> bool {
        self.origin == DataOrigin::Demo
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Sourced<U> {
        Sourced {
            value: f(self.value),
            origin: self.origin,
        }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

// ---------------------------------------------------------------------------
// MarketData
// ---------------------------------------------------------------------------

/// Provider that prefers a live source and falls back to static data.
pub struct MarketData {
    live: Option<Box<dyn DataSource>>,
    fallback: StaticSource,
}

impl MarketData {
    pub fn new(live: Option<Box<dyn DataSource>>, fallback: StaticSource) -> Self {
        Self { live, fallback }
    }

    /// A provider that only ever serves static data.
    pub fn offline(fallback: StaticSource) -> Self {
        Self::new(None, fallback)
    }

    pub fn is_offline(&self) -> bool {
        self.live.is_none()
    }

    pub fn static_source(&self) -> &StaticSource {
        &self.fallback
    }

    /// Run `op` against the live source, falling back to static data on error.
    ///
    /// Live failures are logged, never returned. Errors from the static
    /// source are returned.
    pub fn fetch<T, F>(&self, what: &str, op: F) -> Result<Sourced<T>>
    where
        F: Fn(&dyn DataSource) -> Result<T>,
    {
        if let Some(live) = &self.live {
            match op(live.as_ref()) {
                Ok(value) => return Ok(Sourced::live(value)),
                Err(e) => log_fallback(live.as_ref(), what, &e),
            }
        }
        op(&self.fallback).map(Sourced::demo)
    }

    pub fn commodities(&self) -> Result<Sourced<Vec<Commodity>>> {
        self.fetch("commodities", |s| s.commodities())
    }

    pub fn country_profiles(&self, commodity: &str) -> Result<Sourced<Vec<CountryProfile>>> {
        self.fetch("country_profiles", |s| s.country_profiles(commodity))
    }

    pub fn price_history(&self, commodity: &str, country: &str) -> Result<Sourced<TimeSeries>> {
        self.fetch("price_history", |s| s.price_history(commodity, country))
    }

    pub fn seasonal_patterns(&self, commodity: &str) -> Result<Sourced<Vec<SeasonalPattern>>> {
        self.fetch("seasonal_patterns", |s| s.seasonal_patterns(commodity))
    }

    /// The pattern for one `(commodity, country)` pair.
    ///
    /// A live source with no entry for the pair falls through to static
    /// data. A pair neither source knows resolves to the neutral pattern,
    /// tagged `Demo`.
    pub fn seasonal_pattern(&self, commodity: &str, country: &str) -> Result<Sourced<SeasonalPattern>> {
        if let Some(live) = &self.live {
            match live.seasonal_pattern(commodity, country) {
                Ok(Some(pattern)) => return Ok(Sourced::live(pattern)),
                Ok(None) => {
                    debug!(source = live.name(), commodity, country, "no live pattern; serving demo data");
                }
                Err(e) => log_fallback(live.as_ref(), "seasonal_pattern", &e),
            }
        }
        let pattern = self
            .fallback
            .seasonal_pattern(commodity, country)?
            .unwrap_or_else(|| SeasonalPattern::neutral(commodity, country));
        Ok(Sourced::demo(pattern))
    }

    pub fn news(&self, params: &NewsParams) -> Result<Sourced<Vec<NewsArticle>>> {
        self.fetch("news", |s| s.news(params))
    }

    pub fn product_news(&self, product: &str, params: &NewsParams) -> Result<Sourced<Vec<NewsArticle>>> {
        self.fetch("product_news", |s| s.product_news(product, params))
    }

    pub fn climate_dashboard(&self, commodities: &[String]) -> Result<Sourced<ClimateDashboard>> {
        self.fetch("climate_dashboard", |s| s.climate_dashboard(commodities))
    }
}

/// `Unavailable` is expected for datasets the live source never serves.
fn log_fallback(live: &dyn DataSource, what: &str, error: &MarketError) {
    match error {
        MarketError::Unavailable(reason) => {
            debug!(source = live.name(), what, %reason, "serving demo data");
        }
        e => {
            warn!(source = live.name(), what, error = %e, "live fetch failed; serving demo data");
        }
    }
}
