//! Time-window truncation of price series.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::MarketError;
use crate::models::TimeSeries;

/// Fixed lookback windows offered by the price views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeWindow {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[default]
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
}

impl TimeWindow {
    /// All windows, shortest lookback first.
    pub const ALL: [TimeWindow; 6] = [
        TimeWindow::OneDay,
        TimeWindow::OneWeek,
        TimeWindow::OneMonth,
        TimeWindow::ThreeMonths,
        TimeWindow::SixMonths,
        TimeWindow::OneYear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeWindow::OneDay => "1D",
            TimeWindow::OneWeek => "1W",
            TimeWindow::OneMonth => "1M",
            TimeWindow::ThreeMonths => "3M",
            TimeWindow::SixMonths => "6M",
            TimeWindow::OneYear => "1Y",
        }
    }

    /// Earliest date kept when looking back from `reference_now`.
    ///
    /// Month windows use calendar arithmetic, clamped to the end of the
    /// target month (Mar 31 minus one month is Feb 28/29).
    pub fn cutoff(self, reference_now: NaiveDate) -> NaiveDate {
        let cutoff = match self {
            TimeWindow::OneDay => reference_now.checked_sub_days(Days::new(1)),
            TimeWindow::OneWeek => reference_now.checked_sub_days(Days::new(7)),
            TimeWindow::OneMonth => reference_now.checked_sub_months(Months::new(1)),
            TimeWindow::ThreeMonths => reference_now.checked_sub_months(Months::new(3)),
            TimeWindow::SixMonths => reference_now.checked_sub_months(Months::new(6)),
            TimeWindow::OneYear => reference_now.checked_sub_months(Months::new(12)),
        };
        cutoff.unwrap_or(NaiveDate::MIN)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeWindow {
    type Err = MarketError;

    /// Accepts the short labels (`"1W"`) and the dashboard's range names (`"week"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1d" | "day" => Ok(TimeWindow::OneDay),
            "1w" | "week" => Ok(TimeWindow::OneWeek),
            "1m" | "month" => Ok(TimeWindow::OneMonth),
            "3m" | "3month" => Ok(TimeWindow::ThreeMonths),
            "6m" | "6month" => Ok(TimeWindow::SixMonths),
            "1y" | "year" => Ok(TimeWindow::OneYear),
            other => Err(MarketError::InvalidArgument(format!(
                "Unknown time window: {}",
                other
            ))),
        }
    }
}

/// Keep the points dated on or after `window.cutoff(reference_now)`.
///
/// No interpolation or extrapolation; an empty input or a window that
/// excludes everything yields an empty series.
pub fn filter(series: &TimeSeries, window: TimeWindow, reference_now: NaiveDate) -> TimeSeries {
    let cutoff = window.cutoff(reference_now);
    TimeSeries::new(series.iter().filter(|p| p.date >= cutoff).copied())
}
