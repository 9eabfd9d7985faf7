//! Async wrapper around [`MarketSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client waits on the backend.
//!
//! # Example
//!
//! ```no_run
//! use agrimarket_sdk::AsyncMarketSdk;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncMarketSdk::builder().build().await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let insights = sdk.run(|s| {
//!         s.seasonality().insights("wheat", "Russia")
//!     }).await.unwrap();
//!
//!     let alerts = sdk.climate_alerts(vec!["corn".into()]).await.unwrap();
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{MarketError, Result};
use crate::models::{ClimateAlert, NewsArticle, NewsParams, SeasonalInsights};
use crate::source::{DataSource, Sourced, StaticSource};
use crate::MarketSdk;

// ---------------------------------------------------------------------------
// AsyncMarketSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncMarketSdk`] instance.
#[derive(Default)]
pub struct AsyncMarketSdkBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    offline: bool,
    static_source: Option<StaticSource>,
    live_source: Option<Box<dyn DataSource>>,
}

impl AsyncMarketSdkBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn static_source(mut self, source: StaticSource) -> Self {
        self.static_source = Some(source);
        self
    }

    pub fn live_source(mut self, source: Box<dyn DataSource>) -> Self {
        self.live_source = Some(source);
        self
    }

    /// Build the async SDK.
    ///
    /// Dataset parsing runs on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncMarketSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = MarketSdk::builder().offline(self.offline);
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(source) = self.static_source {
                builder = builder.static_source(source);
            }
            if let Some(source) = self.live_source {
                builder = builder.live_source(source);
            }
            let sdk = builder.build()?;
            Ok(AsyncMarketSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| MarketError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncMarketSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`MarketSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`MarketSdk`] is
/// protected by a [`Mutex`].
pub struct AsyncMarketSdk {
    inner: Arc<Mutex<MarketSdk>>,
}

impl AsyncMarketSdk {
    pub fn builder() -> AsyncMarketSdkBuilder {
        AsyncMarketSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// ```no_run
    /// # use agrimarket_sdk::AsyncMarketSdk;
    /// # async fn example() -> agrimarket_sdk::Result<()> {
    /// # let sdk = AsyncMarketSdk::builder().build().await?;
    /// let profiles = sdk.run(|s| s.compare().profiles("rice")).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&MarketSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| MarketError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| MarketError::InvalidArgument(format!("Task join error: {e}")))?
    }

    pub async fn seasonal_insights(&self, commodity: String, country: String) -> Result<Sourced<SeasonalInsights>> {
        self.run(move |s| s.seasonality().insights(&commodity, &country)).await
    }

    pub async fn news(&self, params: NewsParams) -> Result<Sourced<Vec<NewsArticle>>> {
        self.run(move |s| s.news().list(&params)).await
    }

    pub async fn climate_alerts(&self, commodities: Vec<String>) -> Result<Sourced<Vec<ClimateAlert>>> {
        self.run(move |s| s.climate().alerts(&commodities)).await
    }

    /// `GET /health` on the backend.
    pub async fn health(&self) -> Result<serde_json::Value> {
        self.run(|s| s.client().health()).await
    }

    /// Close the SDK, dropping it on the blocking thread pool.
    ///
    /// Prefer this over a plain drop once a live request has been made,
    /// since the blocking HTTP client must not be dropped on an async
    /// worker thread.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || {
            let sdk = self
                .inner
                .lock()
                .map_err(|_| MarketError::InvalidArgument("SDK lock poisoned".into()))?;
            drop(sdk);
            Ok(())
        })
        .await
        .map_err(|e| MarketError::InvalidArgument(format!("Task join error: {e}")))?
    }
}
