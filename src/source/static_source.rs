//! Data source backed by an in-memory dataset.
//!
//! The bundled dataset is compiled into the library and mirrors the demo
//! tables the dashboard shows when the backend is unreachable. Datasets can
//! also be loaded from a JSON string or file with the same layout.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::config;
use crate::error::Result;
use crate::models::{
    ClimateDashboard, Commodity, CountryProfile, NewsArticle, NewsParams, SeasonalPattern,
    TimeSeries,
};

use super::DataSource;

const BUNDLED_DATASET: &str = include_str!("../data/static_market.json");

/// Price history stored as a start date, a step and evenly spaced prices.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryRecord {
    commodity: String,
    country: String,
    start: NaiveDate,
    #[serde(default = "default_step_days")]
    step_days: u32,
    prices: Vec<f64>,
}

fn default_step_days() -> u32 {
    1
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StaticDataset {
    reference_date: Option<NaiveDate>,
    #[serde(default)]
    commodities: Vec<Commodity>,
    #[serde(default)]
    profiles: Vec<CountryProfile>,
    #[serde(default)]
    price_histories: Vec<HistoryRecord>,
    #[serde(default)]
    seasonal_patterns: Vec<SeasonalPattern>,
    #[serde(default)]
    news: Vec<NewsArticle>,
    #[serde(default)]
    climate: ClimateDashboard,
}

struct HistoryEntry {
    commodity: String,
    country: String,
    series: TimeSeries,
}

/// Serves every dataset from memory. Unknown keys yield empty results.
pub struct StaticSource {
    reference_date: NaiveDate,
    commodities: Vec<Commodity>,
    profiles: Vec<CountryProfile>,
    histories: Vec<HistoryEntry>,
    patterns: Vec<SeasonalPattern>,
    news: Vec<NewsArticle>,
    climate: ClimateDashboard,
}

impl StaticSource {
    /// Load the dataset bundled with the library.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_DATASET)
    }

    /// Parse a dataset from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let dataset: StaticDataset = serde_json::from_str(json)?;
        Ok(Self::from_dataset(dataset))
    }

    /// Read and parse a dataset file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// An empty dataset; every read returns an empty result.
    pub fn empty() -> Self {
        Self::from_dataset(StaticDataset::default())
    }

    fn from_dataset(dataset: StaticDataset) -> Self {
        let histories = dataset
            .price_histories
            .into_iter()
            .map(|h| HistoryEntry {
                series: TimeSeries::from_steps(h.start, h.step_days, &h.prices),
                commodity: h.commodity,
                country: h.country,
            })
            .collect();

        Self {
            reference_date: dataset
                .reference_date
                .unwrap_or_else(config::demo_reference_date),
            commodities: dataset.commodities,
            profiles: dataset.profiles,
            histories,
            patterns: dataset.seasonal_patterns,
            news: dataset.news,
            climate: dataset.climate,
        }
    }

    /// The "now" the dataset was captured at; use it as the window anchor.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }
}

fn same(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

impl DataSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn commodities(&self) -> Result<Vec<Commodity>> {
        Ok(self.commodities.clone())
    }

    fn country_profiles(&self, commodity: &str) -> Result<Vec<CountryProfile>> {
        Ok(self
            .profiles
            .iter()
            .filter(|p| same(&p.commodity, commodity))
            .cloned()
            .collect())
    }

    fn price_history(&self, commodity: &str, country: &str) -> Result<TimeSeries> {
        Ok(self
            .histories
            .iter()
            .find(|h| same(&h.commodity, commodity) && same(&h.country, country))
            .map(|h| h.series.clone())
            .unwrap_or_default())
    }

    fn seasonal_patterns(&self, commodity: &str) -> Result<Vec<SeasonalPattern>> {
        Ok(self
            .patterns
            .iter()
            .filter(|p| same(&p.commodity, commodity))
            .cloned()
            .collect())
    }

    fn news(&self, params: &NewsParams) -> Result<Vec<NewsArticle>> {
        let limit = params.limit.unwrap_or(usize::MAX);
        Ok(self
            .news
            .iter()
            .filter(|a| params.matches(a))
            .take(limit)
            .cloned()
            .collect())
    }

    fn product_news(&self, product: &str, params: &NewsParams) -> Result<Vec<NewsArticle>> {
        let scoped = NewsParams {
            commodity: Some(product.to_string()),
            ..params.clone()
        };
        self.news(&scoped)
    }

    fn climate_dashboard(&self, commodities: &[String]) -> Result<ClimateDashboard> {
        if commodities.is_empty() {
            return Ok(self.climate.clone());
        }
        let wanted = |c: &str| commodities.iter().any(|w| same(w, c));
        Ok(ClimateDashboard {
            alerts: self
                .climate
                .alerts
                .iter()
                .filter(|a| wanted(&a.commodity))
                .cloned()
                .collect(),
            regional_risks: self
                .climate
                .regional_risks
                .iter()
                .filter(|r| wanted(&r.commodity))
                .cloned()
                .collect(),
            supply: self.climate.supply.clone(),
            financial: self.climate.financial.clone(),
            price_impact: self
                .climate
                .price_impact
                .iter()
                .filter(|r| wanted(&r.commodity))
                .cloned()
                .collect(),
        })
    }
}
