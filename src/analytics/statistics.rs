//! Summary statistics over a price series.

use chrono::NaiveDate;
use statrs::statistics::Statistics;

use crate::config::DEFAULT_MOVING_AVERAGE_PERIOD;
use crate::models::{SeriesStatisticsResult, TimeSeries, TrendLabel};

/// Change (in percent) beyond which a series is labelled bullish or bearish.
pub const TREND_THRESHOLD_PCT: f64 = 2.0;

/// Compute statistics with the default moving-average period.
pub fn compute(series: &TimeSeries) -> SeriesStatisticsResult {
    compute_with_period(series, DEFAULT_MOVING_AVERAGE_PERIOD)
}

/// Compute statistics with a moving average over `period` points.
pub fn compute_with_period(series: &TimeSeries, period: usize) -> SeriesStatisticsResult {
    let Some(last) = series.last() else {
        return SeriesStatisticsResult {
            latest_price: 0.0,
            change_over_window: 0.0,
            volatility: 0.0,
            moving_average: Vec::new(),
            support: 0.0,
            resistance: 0.0,
            trend: TrendLabel::Neutral,
            data_points: 0,
        };
    };

    let change = change_over_window(series);
    let (support, resistance) = support_resistance(series);

    SeriesStatisticsResult {
        latest_price: last.price,
        change_over_window: change,
        volatility: volatility(series),
        moving_average: moving_average(series, period),
        support,
        resistance,
        trend: trend_label(change),
        data_points: series.len(),
    }
}

/// Percent change between two prices; a zero baseline counts as no change.
fn pct_change(from: f64, to: f64) -> f64 {
    if from == 0.0 {
        0.0
    } else {
        (to - from) / from * 100.0
    }
}

/// Percent change from the first to the last point.
pub fn change_over_window(series: &TimeSeries) -> f64 {
    match (series.first(), series.last()) {
        (Some(first), Some(last)) => pct_change(first.price, last.price),
        _ => 0.0,
    }
}

/// Period-over-period percent changes between consecutive points.
pub fn pct_changes(series: &TimeSeries) -> Vec<f64> {
    series
        .points()
        .windows(2)
        .map(|w| pct_change(w[0].price, w[1].price))
        .collect()
}

/// Population standard deviation of the period-over-period percent changes.
///
/// Zero for fewer than two points.
pub fn volatility(series: &TimeSeries) -> f64 {
    let changes = pct_changes(series);
    if changes.is_empty() {
        return 0.0;
    }
    let sd = changes.iter().population_std_dev();
    if sd.is_finite() {
        sd
    } else {
        0.0
    }
}

/// Trailing simple moving average.
///
/// The output has one entry per point. Entries before index `period - 1`
/// are `None`, as is every entry when `period` is zero.
pub fn moving_average(series: &TimeSeries, period: usize) -> Vec<Option<f64>> {
    let prices: Vec<f64> = series.prices().collect();
    let mut out = vec![None; prices.len()];
    if period == 0 || prices.len() < period {
        return out;
    }

    let mut sum: f64 = prices[..period].iter().sum();
    out[period - 1] = Some(sum / period as f64);
    for i in period..prices.len() {
        sum += prices[i] - prices[i - period];
        out[i] = Some(sum / period as f64);
    }
    out
}

/// Minimum and maximum price, `(0.0, 0.0)` for an empty series.
pub fn support_resistance(series: &TimeSeries) -> (f64, f64) {
    if series.is_empty() {
        return (0.0, 0.0);
    }
    series
        .prices()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p), hi.max(p)))
}

pub fn trend_label(change_pct: f64) -> TrendLabel {
    if change_pct > TREND_THRESHOLD_PCT {
        TrendLabel::Bullish
    } else if change_pct < -TREND_THRESHOLD_PCT {
        TrendLabel::Bearish
    } else {
        TrendLabel::Neutral
    }
}

/// Each point expressed as percent change from the first point.
///
/// Used to overlay series with different price levels on one chart.
pub fn percent_change_series(series: &TimeSeries) -> Vec<(NaiveDate, f64)> {
    let Some(first) = series.first() else {
        return Vec::new();
    };
    series
        .iter()
        .map(|p| (p.date, pct_change(first.price, p.price)))
        .collect()
}
