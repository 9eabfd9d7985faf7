//! Blocking REST client for the news/climate backend.
//!
//! A pass-through fetch wrapper: builds URLs, sends the request, checks the
//! HTTP status and unwraps the `{status, data}` envelope. No retries, no
//! request de-duplication; callers decide what to do on failure.

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;
use serde_json::Value;
use tracing::info;

use crate::config;
use crate::error::{MarketError, Result};
use crate::models::{NewsArticle, NewsParams};
use crate::normalize;

/// HTTP client bound to one backend base URL (e.g. `http://host:8000/api/v1`).
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    timeout: Duration,
    client: OnceLock<Client>,
}

impl ApiClient {
    /// Create a client for `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            MarketError::InvalidArgument(format!("Invalid API base URL '{}': {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(MarketError::InvalidArgument(format!(
                "API base URL '{}' cannot carry a path",
                base_url
            )));
        }
        Ok(Self {
            base_url,
            timeout,
            client: OnceLock::new(),
        })
    }

    /// Lazy HTTP client, created on first request.
    fn http(&self) -> Result<&Client> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let built = Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(self.client.get_or_init(|| built))
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Append path segments to the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn climate_endpoint(&self, segments: &[&str]) -> Url {
        let prefix = config::CLIMATE_PREFIX.trim_matches('/');
        let mut all = Vec::with_capacity(segments.len() + 1);
        all.push(prefix);
        all.extend_from_slice(segments);
        self.endpoint(&all)
    }

    /// GET `url` and return the raw JSON body.
    fn get_raw(&self, url: Url, query: &[(&str, String)]) -> Result<Value> {
        info!(url = %url, "GET");
        let resp = self.http()?.get(url).query(query).send()?.error_for_status()?;
        Ok(resp.json()?)
    }

    /// GET `url` and return the envelope's `data` payload.
    fn get_data(&self, url: Url, query: &[(&str, String)]) -> Result<Value> {
        normalize::unwrap_envelope(self.get_raw(url, query)?)
    }

    fn commodity_query(commodities: &[String]) -> Vec<(&'static str, String)> {
        commodities.iter().map(|c| ("commodities", c.clone())).collect()
    }

    // -- General endpoints -------------------------------------------------

    /// `GET /health`. Returns the raw body (`status`, `version`, `timestamp`).
    pub fn health(&self) -> Result<Value> {
        self.get_raw(self.endpoint(&["health"]), &[])
    }

    /// `GET /news` with optional filters.
    pub fn news(&self, params: &NewsParams) -> Result<Vec<NewsArticle>> {
        let data = self.get_data(self.endpoint(&["news"]), &params.to_query())?;
        Ok(normalize::news_articles(&data))
    }

    /// `GET /news/product/{product}`.
    pub fn product_news(&self, product: &str, params: &NewsParams) -> Result<Vec<NewsArticle>> {
        let data = self.get_data(self.endpoint(&["news", "product", product]), &params.to_query())?;
        Ok(normalize::news_articles(&data))
    }

    /// `GET /news/{source}` for a single connector (e.g. `zee_business`).
    pub fn source_news(&self, source: &str, params: &NewsParams) -> Result<Vec<NewsArticle>> {
        let data = self.get_data(self.endpoint(&["news", source]), &params.to_query())?;
        Ok(normalize::news_articles(&data))
    }

    /// `GET /sources`.
    pub fn sources(&self) -> Result<Value> {
        self.get_data(self.endpoint(&["sources"]), &[])
    }

    /// `GET /categories`.
    pub fn categories(&self) -> Result<Value> {
        self.get_data(self.endpoint(&["categories"]), &[])
    }

    /// `GET /cache/stats`.
    pub fn cache_stats(&self) -> Result<Value> {
        self.get_data(self.endpoint(&["cache", "stats"]), &[])
    }

    /// `POST /cache/clear`.
    pub fn clear_cache(&self) -> Result<Value> {
        let url = self.endpoint(&["cache", "clear"]);
        info!(url = %url, "POST");
        let resp = self.http()?.post(url).send()?.error_for_status()?;
        normalize::unwrap_envelope(resp.json()?)
    }

    // -- Climate endpoints -------------------------------------------------

    /// `GET /climate/alerts`, optionally filtered by commodity.
    pub fn climate_alerts(&self, commodities: &[String]) -> Result<Value> {
        self.get_data(self.climate_endpoint(&["alerts"]), &Self::commodity_query(commodities))
    }

    /// `GET /climate/supply-risk`.
    pub fn supply_risk(&self, commodities: &[String]) -> Result<Value> {
        self.get_data(self.climate_endpoint(&["supply-risk"]), &Self::commodity_query(commodities))
    }

    /// `GET /climate/financial-impact`.
    pub fn financial_impact(&self, commodities: &[String]) -> Result<Value> {
        self.get_data(
            self.climate_endpoint(&["financial-impact"]),
            &Self::commodity_query(commodities),
        )
    }

    /// `GET /climate/price-impact-matrix`.
    pub fn price_impact_matrix(&self, commodities: &[String]) -> Result<Value> {
        self.get_data(
            self.climate_endpoint(&["price-impact-matrix"]),
            &Self::commodity_query(commodities),
        )
    }

    /// `GET /climate/dashboard`: alerts, supply risk, financial impact and
    /// the price impact matrix in one payload.
    pub fn climate_dashboard(&self, commodities: &[String]) -> Result<Value> {
        self.get_data(self.climate_endpoint(&["dashboard"]), &Self::commodity_query(commodities))
    }

    /// `GET /climate/seasonality/{commodity}?region=`.
    pub fn seasonality(&self, commodity: &str, region: &str) -> Result<Value> {
        self.get_data(
            self.climate_endpoint(&["seasonality", commodity]),
            &[("region", region.to_string())],
        )
    }

    /// `GET /climate/seasonality-matrix`. Empty slices let the backend pick
    /// its defaults.
    pub fn seasonality_matrix(&self, commodities: &[String], regions: &[String]) -> Result<Value> {
        let mut query = Self::commodity_query(commodities);
        query.extend(regions.iter().map(|r| ("regions", r.clone())));
        self.get_data(self.climate_endpoint(&["seasonality-matrix"]), &query)
    }
}
