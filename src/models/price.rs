use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PricePoint -- Single dated price observation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}

// ---------------------------------------------------------------------------
// TimeSeries -- Date-ascending, duplicate-free sequence of price points
// ---------------------------------------------------------------------------

/// Price history for one (commodity, country) pair.
///
/// Points are always sorted by date ascending with no duplicate dates. When
/// the input repeats a date, the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<PricePoint>", into = "Vec<PricePoint>")]
pub struct TimeSeries {
    points: Vec<PricePoint>,
}

impl TimeSeries {
    pub fn new<I: IntoIterator<Item = PricePoint>>(points: I) -> Self {
        let by_date: BTreeMap<NaiveDate, f64> =
            points.into_iter().map(|p| (p.date, p.price)).collect();
        Self {
            points: by_date
                .into_iter()
                .map(|(date, price)| PricePoint { date, price })
                .collect(),
        }
    }

    /// Build a series from evenly spaced prices starting at `start`.
    pub fn from_steps(start: NaiveDate, step_days: u32, prices: &[f64]) -> Self {
        let step = chrono::Duration::days(i64::from(step_days.max(1)));
        let mut date = start;
        let mut points = Vec::with_capacity(prices.len());
        for &price in prices {
            points.push(PricePoint { date, price });
            date += step;
        }
        Self::new(points)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.price)
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|p| p.date)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PricePoint> {
        self.points.iter()
    }
}

impl From<Vec<PricePoint>> for TimeSeries {
    fn from(points: Vec<PricePoint>) -> Self {
        Self::new(points)
    }
}

impl From<TimeSeries> for Vec<PricePoint> {
    fn from(series: TimeSeries) -> Self {
        series.points
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a PricePoint;
    type IntoIter = std::slice::Iter<'a, PricePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

// ---------------------------------------------------------------------------
// SeriesStatisticsResult -- Derived metrics over a (windowed) series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendLabel {
    Bullish,
    Neutral,
    Bearish,
}

/// Derived statistics for a price series. Recomputed on every query.
///
/// An empty series yields `latest_price == 0.0`, zeroed metrics, an empty
/// moving average and a `Neutral` trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SeriesStatisticsResult {
    pub latest_price: f64,
    pub change_over_window: f64,
    pub volatility: f64,
    /// One entry per input point; `None` until `period` points are available.
    pub moving_average: Vec<Option<f64>>,
    pub support: f64,
    pub resistance: f64,
    pub trend: TrendLabel,
    pub data_points: usize,
}
