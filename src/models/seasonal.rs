use serde::{Deserialize, Serialize};

use crate::config::MONTH_NAMES;

// ---------------------------------------------------------------------------
// SeasonalPattern -- Monthly % deviation from the annual mean
// ---------------------------------------------------------------------------

/// Twelve monthly deviations, January through December.
///
/// Values are not guaranteed to sum to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalPattern {
    pub commodity: String,
    pub country: String,
    pub monthly_deviation: [f64; 12],
}

impl SeasonalPattern {
    pub fn new(commodity: impl Into<String>, country: impl Into<String>, monthly_deviation: [f64; 12]) -> Self {
        Self {
            commodity: commodity.into(),
            country: country.into(),
            monthly_deviation,
        }
    }

    /// All-zero pattern used when no table entry exists.
    pub fn neutral(commodity: impl Into<String>, country: impl Into<String>) -> Self {
        Self::new(commodity, country, [0.0; 12])
    }

    pub fn is_neutral(&self) -> bool {
        self.monthly_deviation.iter().all(|v| *v == 0.0)
    }
}

// ---------------------------------------------------------------------------
// SeasonalInsights / TradingInsights
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SeasonalInsights {
    /// Zero-based month index (0 = January).
    pub best_buy_month: usize,
    pub best_sell_month: usize,
    pub buy_discount_pct: f64,
    pub sell_premium_pct: f64,
    pub seasonal_spread_pct: f64,
}

impl SeasonalInsights {
    pub fn best_buy_month_name(&self) -> &'static str {
        MONTH_NAMES[self.best_buy_month % 12]
    }

    pub fn best_sell_month_name(&self) -> &'static str {
        MONTH_NAMES[self.best_sell_month % 12]
    }
}

/// Price targets derived from a seasonal pattern and a base price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TradingInsights {
    pub insights: SeasonalInsights,
    pub best_buy_price: f64,
    pub best_sell_price: f64,
    pub profit_potential: f64,
    /// Label such as `"Apr-May"`; `None` when the pattern is flat.
    pub volatility_period: Option<String>,
}

/// One month of a multi-country seasonality chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalChartRow {
    pub month: String,
    /// `(country, deviation)` in the order the patterns were given.
    pub values: Vec<(String, f64)>,
}
