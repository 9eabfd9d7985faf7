use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RiskLevel / Trend
// ---------------------------------------------------------------------------

/// Sourcing risk for a country. Ordered from lowest to highest risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High", alias = "VeryHigh")]
    VeryHigh,
}

impl RiskLevel {
    /// Numeric rank, 1 (Low) through 4 (Very High).
    pub fn rank(self) -> u8 {
        match self {
            RiskLevel::Low => 1,
            RiskLevel::Medium => 2,
            RiskLevel::High => 3,
            RiskLevel::VeryHigh => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Volatile,
    #[default]
    Stable,
}

// ---------------------------------------------------------------------------
// CountryProfile -- Point-in-time sourcing snapshot for (commodity, country)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryProfile {
    pub commodity: String,
    pub country: String,
    pub price: f64,
    #[serde(default)]
    pub currency: String,
    pub risk_level: RiskLevel,
    pub reliability_score: f64,
    #[serde(alias = "leadTime", deserialize_with = "deserialize_lead_time")]
    pub lead_time_days: u32,
    #[serde(default)]
    pub production_capacity: f64,
    #[serde(default)]
    pub export_volume: f64,
    #[serde(default)]
    pub quality_grade: String,
    #[serde(default)]
    pub trend: Trend,
    #[serde(default)]
    pub price_change_pct: f64,
}

/// Parse the leading integer of a label such as `"25-30 days"`.
///
/// Leading whitespace is skipped; returns `None` when no digits lead.
pub fn parse_leading_int(label: &str) -> Option<u32> {
    let digits: String = label
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

fn deserialize_lead_time<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Days(u32),
        Label(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Days(days) => Ok(days),
        Raw::Label(label) => parse_leading_int(&label)
            .ok_or_else(|| de::Error::custom(format!("invalid lead time '{}'", label))),
    }
}

// ---------------------------------------------------------------------------
// Selection -- One entry of a side-by-side comparison
// ---------------------------------------------------------------------------

/// A (commodity, country profile) pair chosen for comparison.
///
/// Identity is the `id`, assigned in insertion order by
/// [`ComparisonState`](crate::state::ComparisonState). The same pair may
/// appear more than once under different ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub id: String,
    pub commodity: String,
    pub profile: CountryProfile,
}

impl Selection {
    pub fn new(id: impl Into<String>, commodity: impl Into<String>, profile: CountryProfile) -> Self {
        Self {
            id: id.into(),
            commodity: commodity.into(),
            profile,
        }
    }

    pub fn country(&self) -> &str {
        &self.profile.country
    }
}
