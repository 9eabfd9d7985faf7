use std::time::Duration;

use chrono::NaiveDate;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";
pub const CLIMATE_PREFIX: &str = "/climate";

/// Environment variable that overrides [`DEFAULT_API_BASE`].
pub const API_URL_ENV: &str = "AGRIMARKET_API_URL";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of selections in a side-by-side comparison.
pub const MAX_COMPARISONS: usize = 5;

/// Maximum number of countries plotted on one seasonality chart.
pub const MAX_SEASONAL_COUNTRIES: usize = 4;

/// Moving-average period used when the caller does not pick one.
pub const DEFAULT_MOVING_AVERAGE_PERIOD: usize = 7;

/// Reference "now" of the bundled demo dataset.
pub fn demo_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 1).unwrap_or_default()
}

/// Resolve the API base URL: environment override first, then the default.
pub fn api_base_from_env() -> String {
    std::env::var(API_URL_ENV)
        .ok()
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
