use serde::{Deserialize, Serialize};

use super::profile::Trend;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    #[default]
    Medium,
    Low,
    #[serde(other)]
    Unknown,
}

impl Severity {
    /// Expected price impact, in percent, of an alert at this severity.
    pub fn price_impact_pct(self) -> f64 {
        match self {
            Severity::Critical => 25.0,
            Severity::High => 18.0,
            Severity::Medium => 12.0,
            Severity::Low => 5.0,
            Severity::Unknown => 10.0,
        }
    }
}

// ---------------------------------------------------------------------------
// ClimateAlert / RegionalRisk
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateAlert {
    pub id: String,
    pub region: String,
    pub commodity: String,
    pub threat: String,
    pub severity: Severity,
    pub impact_pct: f64,
    pub days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalRisk {
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub commodity: String,
    #[serde(default = "default_drought_risk")]
    pub drought_risk: String,
    #[serde(default)]
    pub precipitation_30d: f64,
    #[serde(default = "default_temperature_trend")]
    pub temperature_trend: String,
}

fn default_drought_risk() -> String {
    "Low".to_string()
}

fn default_temperature_trend() -> String {
    "stable".to_string()
}

// ---------------------------------------------------------------------------
// SupplyIndicator / FinancialMetric
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyIndicator {
    pub metric: String,
    pub value: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialMetric {
    pub metric: String,
    pub value: String,
    /// Signed change versus the previous reference value, e.g. `"+$12"`.
    pub change: String,
}

// ---------------------------------------------------------------------------
// PriceImpactRow -- One commodity of the weather-scenario price matrix
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceImpactRow {
    #[serde(default)]
    pub commodity: String,
    #[serde(default = "not_available")]
    pub base_price: String,
    #[serde(default = "not_available")]
    pub drought_impact: String,
    #[serde(default = "not_available")]
    pub drought_price: String,
    #[serde(default = "not_available")]
    pub flood_impact: String,
    #[serde(default = "not_available")]
    pub flood_price: String,
    #[serde(default = "not_available")]
    pub frost_impact: String,
    #[serde(default = "not_available")]
    pub frost_price: String,
    #[serde(default = "not_available")]
    pub overall_risk: String,
}

fn not_available() -> String {
    "N/A".to_string()
}

// ---------------------------------------------------------------------------
// ClimateDashboard -- Everything the climate view renders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClimateDashboard {
    #[serde(default)]
    pub alerts: Vec<ClimateAlert>,
    #[serde(default)]
    pub regional_risks: Vec<RegionalRisk>,
    #[serde(default)]
    pub supply: Vec<SupplyIndicator>,
    #[serde(default)]
    pub financial: Vec<FinancialMetric>,
    #[serde(default)]
    pub price_impact: Vec<PriceImpactRow>,
}
