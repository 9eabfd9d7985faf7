//! Data source backed by the REST backend.

use crate::error::{MarketError, Result};
use crate::models::{
    ClimateDashboard, Commodity, CountryProfile, NewsArticle, NewsParams, SeasonalPattern,
    TimeSeries,
};
use crate::normalize;

use super::client::ApiClient;
use super::DataSource;

/// Serves news, climate and seasonality from the backend.
///
/// The backend has no commodity catalogue, country profiles or price
/// history; those reads fail with [`MarketError::Unavailable`] so the
/// provider falls back to static data.
#[derive(Debug, Clone)]
pub struct LiveSource {
    client: ApiClient,
}

impl LiveSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    fn unavailable<T>(what: &str) -> Result<T> {
        Err(MarketError::Unavailable(format!("backend does not serve {}", what)))
    }
}

impl DataSource for LiveSource {
    fn name(&self) -> &str {
        "live"
    }

    fn commodities(&self) -> Result<Vec<Commodity>> {
        Self::unavailable("the commodity catalogue")
    }

    fn country_profiles(&self, _commodity: &str) -> Result<Vec<CountryProfile>> {
        Self::unavailable("country profiles")
    }

    fn price_history(&self, _commodity: &str, _country: &str) -> Result<TimeSeries> {
        Self::unavailable("price history")
    }

    fn seasonal_patterns(&self, commodity: &str) -> Result<Vec<SeasonalPattern>> {
        let data = self
            .client
            .seasonality_matrix(&[commodity.to_lowercase()], &[])?;
        Ok(normalize::seasonality_matrix(&data))
    }

    /// Asks the single-region endpoint, so countries outside the matrix's
    /// default regions are still answered by the backend.
    fn seasonal_pattern(&self, commodity: &str, country: &str) -> Result<Option<SeasonalPattern>> {
        let data = self.client.seasonality(&commodity.to_lowercase(), country)?;
        Ok(normalize::seasonal_pattern(&data, commodity, country))
    }

    fn news(&self, params: &NewsParams) -> Result<Vec<NewsArticle>> {
        self.client.news(params)
    }

    fn product_news(&self, product: &str, params: &NewsParams) -> Result<Vec<NewsArticle>> {
        self.client.product_news(product, params)
    }

    fn climate_dashboard(&self, commodities: &[String]) -> Result<ClimateDashboard> {
        let data = self.client.climate_dashboard(commodities)?;
        Ok(normalize::climate_dashboard(&data))
    }
}
