//! Shared test fixtures for the market SDK integration tests.
//!
//! Provides profile, selection and series builders plus a handful of fake
//! [`DataSource`] implementations for exercising the live/static fallback.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use agrimarket_sdk::models::{
    ClimateDashboard, Commodity, CountryProfile, NewsArticle, NewsCategory, NewsParams, RiskLevel,
    SeasonalPattern, Selection, TimeSeries, Trend,
};
use agrimarket_sdk::{normalize, DataSource, MarketError, Result};
use chrono::NaiveDate;
use serde_json::{json, Value};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Daily series starting 2025-01-01.
pub fn daily_series(prices: &[f64]) -> TimeSeries {
    TimeSeries::from_steps(date(2025, 1, 1), 1, prices)
}

pub fn profile(country: &str, price: f64, reliability: f64, risk: RiskLevel, lead_days: u32) -> CountryProfile {
    CountryProfile {
        commodity: "wheat".to_string(),
        country: country.to_string(),
        price,
        currency: "USD/MT".to_string(),
        risk_level: risk,
        reliability_score: reliability,
        lead_time_days: lead_days,
        production_capacity: 10.0,
        export_volume: 5.0,
        quality_grade: "Grade A".to_string(),
        trend: Trend::Stable,
        price_change_pct: 0.0,
    }
}

pub fn selection(id: &str, profile: CountryProfile) -> Selection {
    Selection::new(id, profile.commodity.clone(), profile)
}

/// Three selections where B and C tie on price.
pub fn tied_price_selections() -> Vec<Selection> {
    vec![
        selection("A", profile("Russia", 300.0, 80.0, RiskLevel::Medium, 25)),
        selection("B", profile("India", 250.0, 90.0, RiskLevel::Low, 18)),
        selection("C", profile("USA", 250.0, 85.0, RiskLevel::Low, 30)),
    ]
}

pub fn article(headline: &str, commodity: &str, country: &str, category: NewsCategory) -> NewsArticle {
    NewsArticle {
        headline: headline.to_string(),
        source: "test".to_string(),
        category,
        tickers: vec![commodity.to_uppercase()],
        country: Some(country.to_string()),
        state: None,
        commodity_tags: vec![commodity.to_string()],
        timestamp: None,
        url: None,
        summary: None,
    }
}

// ---------------------------------------------------------------------------
// Fake data sources
// ---------------------------------------------------------------------------

/// Fails every read with an HTTP-style API error and counts the attempts.
#[derive(Default, Clone)]
pub struct FailingSource {
    pub calls: Arc<AtomicUsize>,
}

impl FailingSource {
    fn fail<T>(&self) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(MarketError::Api {
            status: "error".to_string(),
            message: "backend down".to_string(),
        })
    }
}

impl DataSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    fn commodities(&self) -> Result<Vec<Commodity>> {
        self.fail()
    }

    fn country_profiles(&self, _commodity: &str) -> Result<Vec<CountryProfile>> {
        self.fail()
    }

    fn price_history(&self, _commodity: &str, _country: &str) -> Result<TimeSeries> {
        self.fail()
    }

    fn seasonal_patterns(&self, _commodity: &str) -> Result<Vec<SeasonalPattern>> {
        self.fail()
    }

    fn news(&self, _params: &NewsParams) -> Result<Vec<NewsArticle>> {
        self.fail()
    }

    fn product_news(&self, _product: &str, _params: &NewsParams) -> Result<Vec<NewsArticle>> {
        self.fail()
    }

    fn climate_dashboard(&self, _commodities: &[String]) -> Result<ClimateDashboard> {
        self.fail()
    }
}

/// Serves a fixed wheat/Russia pattern and one article per product; fails
/// product news for `"cotton"`. Everything else is unavailable.
pub struct FixedSource;

impl FixedSource {
    pub fn pattern() -> SeasonalPattern {
        SeasonalPattern::new(
            "wheat",
            "Russia",
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, -6.0, -5.0, -4.0, -3.0, -2.0, -1.0],
        )
    }
}

impl DataSource for FixedSource {
    fn name(&self) -> &str {
        "fixed"
    }

    fn commodities(&self) -> Result<Vec<Commodity>> {
        Err(MarketError::Unavailable("no catalogue".to_string()))
    }

    fn country_profiles(&self, _commodity: &str) -> Result<Vec<CountryProfile>> {
        Err(MarketError::Unavailable("no profiles".to_string()))
    }

    fn price_history(&self, _commodity: &str, _country: &str) -> Result<TimeSeries> {
        Err(MarketError::Unavailable("no history".to_string()))
    }

    fn seasonal_patterns(&self, _commodity: &str) -> Result<Vec<SeasonalPattern>> {
        Ok(vec![Self::pattern()])
    }

    fn news(&self, _params: &NewsParams) -> Result<Vec<NewsArticle>> {
        Ok(vec![article("Live headline", "wheat", "Russia", NewsCategory::Price)])
    }

    fn product_news(&self, product: &str, _params: &NewsParams) -> Result<Vec<NewsArticle>> {
        if product == "cotton" {
            return Err(MarketError::NotFound(product.to_string()));
        }
        Ok(vec![article(&format!("Live {}", product), product, "USA", NewsCategory::Trade)])
    }

    fn climate_dashboard(&self, _commodities: &[String]) -> Result<ClimateDashboard> {
        Ok(ClimateDashboard::default())
    }
}

/// Answers seasonality the way the backend's matrix endpoint does when no
/// regions are requested: wheat for USA, India and Russia only. Everything
/// else is unavailable.
pub struct MatrixSource;

impl MatrixSource {
    /// Wheat/Russia as the backend's matrix reports it.
    pub const RUSSIA_WHEAT: [f64; 12] = [-8.0, -5.0, 2.0, 8.0, 12.0, 15.0, -8.0, -2.0, 12.0, 15.0, 8.0, 3.0];

    pub fn payload() -> Value {
        json!({
            "seasonality_matrix": [
                {"region": "USA", "commodities": {"wheat": {
                    "Jan": "-8%", "Feb": "-5%", "Mar": "+15%", "Apr": "+18%", "May": "+12%", "Jun": "+5%",
                    "Jul": "-8%", "Aug": "-12%", "Sep": "-18%", "Oct": "-15%", "Nov": "-8%", "Dec": "-3%"
                }}},
                {"region": "India", "commodities": {"wheat": {
                    "Jan": "-12%", "Feb": "-8%", "Mar": "+15%", "Apr": "+18%", "May": "+12%", "Jun": "+5%",
                    "Jul": "-5%", "Aug": "-8%", "Sep": "-12%", "Oct": "-18%", "Nov": "-15%", "Dec": "-5%"
                }}},
                {"region": "Russia", "commodities": {"wheat": {
                    "Jan": "-8%", "Feb": "-5%", "Mar": "+2%", "Apr": "+8%", "May": "+12%", "Jun": "+15%",
                    "Jul": "-8%", "Aug": "-2%", "Sep": "+12%", "Oct": "+15%", "Nov": "+8%", "Dec": "+3%"
                }}}
            ],
            "timestamp": "2025-01-02T10:00:00Z"
        })
    }
}

impl DataSource for MatrixSource {
    fn name(&self) -> &str {
        "matrix"
    }

    fn commodities(&self) -> Result<Vec<Commodity>> {
        Err(MarketError::Unavailable("no catalogue".to_string()))
    }

    fn country_profiles(&self, _commodity: &str) -> Result<Vec<CountryProfile>> {
        Err(MarketError::Unavailable("no profiles".to_string()))
    }

    fn price_history(&self, _commodity: &str, _country: &str) -> Result<TimeSeries> {
        Err(MarketError::Unavailable("no history".to_string()))
    }

    fn seasonal_patterns(&self, commodity: &str) -> Result<Vec<SeasonalPattern>> {
        let all = normalize::seasonality_matrix(&Self::payload());
        Ok(all
            .into_iter()
            .filter(|p| p.commodity.eq_ignore_ascii_case(commodity))
            .collect())
    }

    fn news(&self, _params: &NewsParams) -> Result<Vec<NewsArticle>> {
        Err(MarketError::Unavailable("no news".to_string()))
    }

    fn product_news(&self, _product: &str, _params: &NewsParams) -> Result<Vec<NewsArticle>> {
        Err(MarketError::Unavailable("no news".to_string()))
    }

    fn climate_dashboard(&self, _commodities: &[String]) -> Result<ClimateDashboard> {
        Err(MarketError::Unavailable("no climate".to_string()))
    }
}
