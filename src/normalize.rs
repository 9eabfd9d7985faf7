//! Normalization of loosely-typed backend JSON into typed records.
//!
//! The backend omits fields freely and formats numbers as display strings
//! (`"$45/MT"`, `"78/100"`, `"-15%"`). Every default and every
//! string-to-number conversion lives here so the rest of the crate only sees
//! typed records.

use chrono::DateTime;
use serde_json::Value;
use tracing::debug;

use crate::config::MONTH_NAMES;
use crate::error::{MarketError, Result};
use crate::models::{
    ClimateAlert, ClimateDashboard, FinancialMetric, NewsArticle, PriceImpactRow, RegionalRisk,
    SeasonalPattern, Severity, SupplyIndicator, Trend,
};

const KNOWN_COMMODITIES: [&str; 4] = ["Corn", "Wheat", "Rice", "Soybean"];

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Unwrap a `{status, data}` envelope.
///
/// A non-success `status` becomes [`MarketError::Api`]. A missing `data`
/// yields `Value::Null`; a body without an envelope is returned as-is.
pub fn unwrap_envelope(body: Value) -> Result<Value> {
    match body {
        Value::Object(mut map) => {
            let status = map.get("status").and_then(Value::as_str).map(str::to_string);
            if let Some(status) = status {
                if status != "success" && status != "ok" && status != "healthy" {
                    let message = map
                        .get("message")
                        .or_else(|| map.get("detail"))
                        .and_then(Value::as_str)
                        .unwrap_or("request failed")
                        .to_string();
                    return Err(MarketError::Api { status, message });
                }
                return Ok(map.remove("data").unwrap_or(Value::Null));
            }
            Ok(map.remove("data").unwrap_or(Value::Object(map)))
        }
        other => Ok(other),
    }
}

// ---------------------------------------------------------------------------
// Number parsing
// ---------------------------------------------------------------------------

/// Parse the number embedded in a display string.
///
/// Keeps ASCII digits and `.` (plus a leading `-` when `signed`), then
/// parses what remains. `"$45/MT"` reads as 45, `"-15%"` as -15 when signed.
pub fn parse_number(text: &str, signed: bool) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || (signed && *c == '-'))
        .collect();
    cleaned.parse().ok()
}

/// Parse `"+8%"` / `"-5%"` / `"12"` as a signed percentage.
pub fn parse_percent(text: &str) -> Option<f64> {
    text.trim().trim_end_matches('%').trim().parse().ok()
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

// ---------------------------------------------------------------------------
// Trend rules
// ---------------------------------------------------------------------------

pub fn trend_from_value(value: Option<&str>) -> Trend {
    match value.and_then(|v| parse_number(v, true)) {
        Some(n) if n < 0.0 => Trend::Down,
        Some(n) if n > 0.0 => Trend::Up,
        _ => Trend::Stable,
    }
}

pub fn trend_from_risk_score(score: Option<&str>) -> Trend {
    let n = score
        .and_then(|s| s.split('/').next())
        .and_then(|s| s.trim().parse::<f64>().ok());
    match n {
        Some(n) if n > 75.0 => Trend::Up,
        Some(n) if n < 50.0 => Trend::Down,
        _ => Trend::Stable,
    }
}

pub fn trend_from_days(days: Option<&str>) -> Trend {
    match days.and_then(|d| parse_number(d, false)) {
        Some(n) if n > 10.0 => Trend::Up,
        Some(n) if n < 5.0 => Trend::Down,
        _ => Trend::Stable,
    }
}

pub fn trend_from_percentage(pct: Option<&str>) -> Trend {
    match pct.and_then(parse_percent) {
        Some(n) if n > 60.0 => Trend::Up,
        Some(n) if n < 40.0 => Trend::Down,
        _ => Trend::Stable,
    }
}

/// Dollar difference between two display values, e.g. `"+$12"`.
pub fn dollar_change(current: Option<&str>, previous: &str) -> String {
    let (Some(current), Some(previous)) = (
        current.and_then(|c| parse_number(c, false)),
        parse_number(previous, false),
    ) else {
        return "+$0".to_string();
    };
    let change = current - previous;
    let sign = if change >= 0.0 { '+' } else { '-' };
    format!("{}${:.0}", sign, change.abs())
}

/// Percentage-point difference between two display values, e.g. `"+5%"`.
pub fn percent_point_change(current: Option<&str>, previous: &str) -> String {
    let (Some(current), Some(previous)) = (current.and_then(parse_percent), parse_percent(previous))
    else {
        return "+0%".to_string();
    };
    let change = current - previous;
    let sign = if change >= 0.0 { '+' } else { '-' };
    format!("{}{:.0}%", sign, change.abs())
}

// ---------------------------------------------------------------------------
// Climate
// ---------------------------------------------------------------------------

/// First known commodity named in `description`, or `"Unknown"`.
pub fn commodity_from_description(description: &str) -> String {
    let lower = description.to_lowercase();
    KNOWN_COMMODITIES
        .iter()
        .find(|c| lower.contains(&c.to_lowercase()))
        .map(|c| c.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Whole days spanned by an alert, rounded up, at least 1.
///
/// Missing or unparseable timestamps count as a single day.
pub fn alert_days(start: Option<&str>, end: Option<&str>) -> u32 {
    let (Some(start), Some(end)) = (start, end) else {
        return 1;
    };
    let (Ok(start), Ok(end)) = (
        DateTime::parse_from_rfc3339(start),
        DateTime::parse_from_rfc3339(end),
    ) else {
        return 1;
    };
    let secs = (end - start).num_seconds().unsigned_abs();
    let days = secs.div_ceil(86_400);
    u32::try_from(days).unwrap_or(u32::MAX).max(1)
}

pub fn alerts(data: &Value) -> Vec<ClimateAlert> {
    array_field(data, "weather_alerts")
        .iter()
        .enumerate()
        .map(|(i, alert)| {
            let severity = alert
                .get("severity")
                .cloned()
                .and_then(|s| serde_json::from_value::<Severity>(s).ok())
                .unwrap_or_default();
            ClimateAlert {
                id: alert
                    .get("id")
                    .map(|v| match v {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .unwrap_or_else(|| format!("alert-{}", i + 1)),
                region: str_field(alert, "region").unwrap_or("Unknown Region").to_string(),
                commodity: commodity_from_description(str_field(alert, "description").unwrap_or("")),
                threat: str_field(alert, "threat").unwrap_or("Weather Alert").to_string(),
                severity,
                impact_pct: severity.price_impact_pct(),
                days: alert_days(str_field(alert, "start_time"), str_field(alert, "end_time")),
            }
        })
        .collect()
}

pub fn regional_risks(data: &Value) -> Vec<RegionalRisk> {
    array_field(data, "regional_risks")
        .iter()
        .filter_map(|r| match serde_json::from_value(r.clone()) {
            Ok(risk) => Some(risk),
            Err(e) => {
                debug!(error = %e, "skipping malformed regional risk");
                None
            }
        })
        .collect()
}

pub fn supply_indicators(data: &Value) -> Vec<SupplyIndicator> {
    let empty = Value::Null;
    let ind = data.get("supply_indicators").unwrap_or(&empty);

    let yield_impact = str_field(ind, "yield_impact");
    let risk_score = str_field(ind, "production_risk_score");
    let disruption = str_field(ind, "supply_disruption_days");
    let alternatives = str_field(ind, "alternative_sources_pct");

    vec![
        SupplyIndicator {
            metric: "Yield Impact".to_string(),
            value: yield_impact.unwrap_or("-15%").to_string(),
            trend: trend_from_value(yield_impact),
        },
        SupplyIndicator {
            metric: "Production Risk".to_string(),
            value: risk_score.unwrap_or("78/100").to_string(),
            trend: trend_from_risk_score(risk_score),
        },
        SupplyIndicator {
            metric: "Supply Disruption".to_string(),
            value: disruption.unwrap_or("12 days").to_string(),
            trend: trend_from_days(disruption),
        },
        SupplyIndicator {
            metric: "Alt Sources".to_string(),
            value: alternatives.unwrap_or("45%").to_string(),
            trend: trend_from_percentage(alternatives),
        },
    ]
}

pub fn financial_metrics(data: &Value) -> Vec<FinancialMetric> {
    let empty = Value::Null;
    let m = data.get("financial_metrics").unwrap_or(&empty);

    let premium = str_field(m, "climate_premium");
    let insurance = str_field(m, "insurance_cost");

    vec![
        FinancialMetric {
            metric: "Current Price".to_string(),
            value: str_field(m, "current_price").unwrap_or("$545/MT").to_string(),
            change: str_field(m, "price_change_pct").unwrap_or("+9.0%").to_string(),
        },
        FinancialMetric {
            metric: "Climate Premium".to_string(),
            value: premium.unwrap_or("$45/MT").to_string(),
            change: dollar_change(premium, "$33/MT"),
        },
        FinancialMetric {
            metric: "Volatility Index".to_string(),
            value: str_field(m, "volatility_index").unwrap_or("75/100").to_string(),
            change: percent_point_change(str_field(m, "volatility_spike_probability"), "70%"),
        },
        FinancialMetric {
            metric: "Insurance Cost".to_string(),
            value: insurance.unwrap_or("+$8/MT").to_string(),
            change: dollar_change(insurance, "+$5/MT"),
        },
    ]
}

pub fn price_impact_matrix(data: &Value) -> Vec<PriceImpactRow> {
    array_field(data, "price_impact_matrix")
        .iter()
        .filter_map(|row| match serde_json::from_value(row.clone()) {
            Ok(row) => Some(row),
            Err(e) => {
                debug!(error = %e, "skipping malformed price impact row");
                None
            }
        })
        .collect()
}

/// Assemble the dashboard payload (`alerts`, `supply_risk`,
/// `financial_impact`, `price_impact_matrix` sections, each optional).
pub fn climate_dashboard(data: &Value) -> ClimateDashboard {
    let empty = Value::Null;
    let alerts_section = data.get("alerts").unwrap_or(&empty);
    ClimateDashboard {
        alerts: alerts(alerts_section),
        regional_risks: regional_risks(alerts_section),
        supply: supply_indicators(data.get("supply_risk").unwrap_or(&empty)),
        financial: financial_metrics(data.get("financial_impact").unwrap_or(&empty)),
        price_impact: price_impact_matrix(data.get("price_impact_matrix").unwrap_or(&empty)),
    }
}

// ---------------------------------------------------------------------------
// Seasonality
// ---------------------------------------------------------------------------

/// Parse the `monthly_patterns` object of a single-region seasonality
/// payload. `None` when the payload carries no month table.
pub fn seasonal_pattern(data: &Value, commodity: &str, country: &str) -> Option<SeasonalPattern> {
    let months = data.get("monthly_patterns").filter(|m| m.is_object())?;
    Some(SeasonalPattern::new(
        commodity.to_lowercase(),
        country,
        monthly_deviation(months),
    ))
}

/// Flatten a `seasonality_matrix` payload
/// (`[{region, commodities: {name: {"Jan": "-5%", ...}}}]`) into patterns.
pub fn seasonality_matrix(data: &Value) -> Vec<SeasonalPattern> {
    let mut patterns = Vec::new();
    for entry in array_field(data, "seasonality_matrix") {
        let Some(region) = str_field(entry, "region") else {
            continue;
        };
        let Some(commodities) = entry.get("commodities").and_then(Value::as_object) else {
            continue;
        };
        for (commodity, months) in commodities {
            patterns.push(SeasonalPattern::new(
                commodity.to_lowercase(),
                region,
                monthly_deviation(months),
            ));
        }
    }
    patterns
}

/// Read `{"Jan": "-5%", ...}` into twelve values; missing or unparseable
/// months read as 0.
fn monthly_deviation(months: &Value) -> [f64; 12] {
    let mut deviation = [0.0; 12];
    for (i, name) in MONTH_NAMES.iter().enumerate() {
        deviation[i] = match months.get(*name) {
            Some(Value::String(s)) => parse_percent(s).unwrap_or(0.0),
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            _ => 0.0,
        };
    }
    deviation
}

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

/// Deserialize an article array, skipping entries that fail to parse.
pub fn news_articles(data: &Value) -> Vec<NewsArticle> {
    let items = match data {
        Value::Array(items) => items.as_slice(),
        _ => &[],
    };
    items
        .iter()
        .filter_map(|item| match serde_json::from_value(item.clone()) {
            Ok(article) => Some(article),
            Err(e) => {
                debug!(error = %e, "skipping malformed news article");
                None
            }
        })
        .collect()
}
