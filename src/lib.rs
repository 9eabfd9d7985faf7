//! Agricultural commodity market SDK for Rust.
//!
//! Provides seasonal buy/sell analysis, windowed price statistics,
//! side-by-side country comparison with sourcing recommendations, and a thin
//! client for the market news and climate backend. When the backend is
//! unreachable, or does not serve a dataset, reads fall back to a bundled
//! static dataset and are tagged as demo data.
//!
//! # Quick start
//!
//! ```no_run
//! use agrimarket_sdk::state::{ComparisonAction, ComparisonState};
//! use agrimarket_sdk::MarketSdk;
//!
//! let sdk = MarketSdk::builder().build().unwrap();
//!
//! // Best months to buy and sell Russian wheat
//! let insights = sdk.seasonality().insights("wheat", "Russia").unwrap();
//! println!("buy in {}", insights.value.best_buy_month_name());
//!
//! // Compare two origins
//! let profiles = sdk.compare().profiles("wheat").unwrap().value;
//! let mut state = ComparisonState::new();
//! for profile in profiles.into_iter().take(2) {
//!     state = state.reduce(ComparisonAction::Add { commodity: "wheat".into(), profile });
//! }
//! let report = sdk.compare().report(&state, sdk.prices().reference_date()).unwrap();
//! ```
//!
//! The functions in [`analytics`] are pure and can be used without an SDK.

pub mod analytics;
#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod queries;
pub mod source;
pub mod state;

#[cfg(feature = "async")]
pub use async_client::AsyncMarketSdk;
pub use error::{MarketError, Result};
pub use source::{ApiClient, DataOrigin, DataSource, LiveSource, MarketData, Sourced, StaticSource};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// MarketSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`MarketSdk`] instance.
///
/// Use [`MarketSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](MarketSdkBuilder::build) to create the SDK.
pub struct MarketSdkBuilder {
    base_url: Option<String>,
    timeout: Duration,
    offline: bool,
    static_source: Option<StaticSource>,
    live_source: Option<Box<dyn DataSource>>,
}

impl Default for MarketSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: config::DEFAULT_TIMEOUT,
            offline: false,
            static_source: None,
            live_source: None,
        }
    }
}

impl MarketSdkBuilder {
    /// Set the backend base URL, e.g. `http://host:8000/api/v1`.
    ///
    /// If not set, `AGRIMARKET_API_URL` is used, then
    /// [`config::DEFAULT_API_BASE`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, the SDK never contacts the backend and serves the
    /// static dataset only. Defaults to `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Replace the bundled static dataset.
    pub fn static_source(mut self, source: StaticSource) -> Self {
        self.static_source = Some(source);
        self
    }

    /// Use `source` instead of the REST backend as the live data source.
    pub fn live_source(mut self, source: Box<dyn DataSource>) -> Self {
        self.live_source = Some(source);
        self
    }

    /// Build the SDK.
    ///
    /// Parses the static dataset and validates the base URL. No request is
    /// sent until the first query.
    pub fn build(self) -> Result<MarketSdk> {
        let fallback = match self.static_source {
            Some(source) => source,
            None => StaticSource::bundled()?,
        };

        let base_url = self.base_url.unwrap_or_else(config::api_base_from_env);
        let client = ApiClient::new(&base_url, self.timeout)?;

        let live: Option<Box<dyn DataSource>> = if self.offline {
            None
        } else {
            match self.live_source {
                Some(source) => Some(source),
                None => Some(Box::new(LiveSource::new(client.clone()))),
            }
        };

        Ok(MarketSdk {
            data: MarketData::new(live, fallback),
            client,
        })
    }
}

// ---------------------------------------------------------------------------
// MarketSdk
// ---------------------------------------------------------------------------

/// The main entry point for the market SDK.
///
/// Owns the [`MarketData`] provider and exposes domain-specific query
/// interfaces as lightweight borrowing wrappers.
///
/// Created via [`MarketSdk::builder()`].
pub struct MarketSdk {
    data: MarketData,
    client: ApiClient,
}

impl MarketSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> MarketSdkBuilder {
        MarketSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the seasonal pattern query interface.
    pub fn seasonality(&self) -> queries::SeasonalityQuery<'_> {
        queries::SeasonalityQuery::new(&self.data)
    }

    /// Access the price history query interface.
    pub fn prices(&self) -> queries::PriceQuery<'_> {
        queries::PriceQuery::new(&self.data)
    }

    /// Access the comparison query interface.
    pub fn compare(&self) -> queries::CompareQuery<'_> {
        queries::CompareQuery::new(&self.data)
    }

    /// Access the news query interface.
    pub fn news(&self) -> queries::NewsQuery<'_> {
        queries::NewsQuery::new(&self.data)
    }

    /// Access the climate query interface.
    pub fn climate(&self) -> queries::ClimateQuery<'_> {
        queries::ClimateQuery::new(&self.data)
    }

    // -- Lower-level access ------------------------------------------------

    /// Return the underlying data provider.
    pub fn data(&self) -> &MarketData {
        &self.data
    }

    /// Return the REST client for endpoints with no query wrapper
    /// (`health`, `sources`, `cache_stats`, ...).
    ///
    /// The client is available even in offline mode; calling it sends a
    /// request regardless.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn is_offline(&self) -> bool {
        self.data.is_offline()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for MarketSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MarketSdk(base_url={}, offline={}, reference_date={})",
            self.client.base_url(),
            self.data.is_offline(),
            self.data.static_source().reference_date()
        )
    }
}
