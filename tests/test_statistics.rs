//! Series statistics tests.

mod common;

use agrimarket_sdk::analytics::statistics;
use agrimarket_sdk::models::{TimeSeries, TrendLabel};
use common::{date, daily_series};

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

#[test]
fn four_point_series() {
    let stats = statistics::compute(&daily_series(&[100.0, 102.0, 98.0, 101.0]));
    assert_eq!(stats.latest_price, 101.0);
    assert!(close(stats.change_over_window, 1.0, 1e-9));
    assert_eq!(stats.support, 98.0);
    assert_eq!(stats.resistance, 102.0);
    // Population stddev of [2.0, -3.9216, 3.0612].
    assert!(close(stats.volatility, 3.0723, 1e-3), "{}", stats.volatility);
    assert_eq!(stats.trend, TrendLabel::Neutral);
    assert_eq!(stats.data_points, 4);
    assert_eq!(stats.moving_average, vec![None; 4]);
}

#[test]
fn empty_series_sentinel() {
    let stats = statistics::compute(&TimeSeries::empty());
    assert_eq!(stats.latest_price, 0.0);
    assert_eq!(stats.change_over_window, 0.0);
    assert_eq!(stats.volatility, 0.0);
    assert_eq!(stats.support, 0.0);
    assert_eq!(stats.resistance, 0.0);
    assert!(stats.moving_average.is_empty());
    assert_eq!(stats.trend, TrendLabel::Neutral);
    assert_eq!(stats.data_points, 0);
}

#[test]
fn single_point_has_no_change() {
    let stats = statistics::compute(&daily_series(&[250.0]));
    assert_eq!(stats.latest_price, 250.0);
    assert_eq!(stats.change_over_window, 0.0);
    assert_eq!(stats.volatility, 0.0);
    assert_eq!(stats.support, 250.0);
    assert_eq!(stats.resistance, 250.0);
}

#[test]
fn zero_baseline_reports_no_change() {
    let series = daily_series(&[0.0, 5.0, 10.0]);
    assert_eq!(statistics::change_over_window(&series), 0.0);
    let stats = statistics::compute(&series);
    assert!(stats.volatility.is_finite());
    assert_eq!(stats.trend, TrendLabel::Neutral);
}

#[test]
fn trend_thresholds() {
    assert_eq!(statistics::trend_label(2.5), TrendLabel::Bullish);
    assert_eq!(statistics::trend_label(2.0), TrendLabel::Neutral);
    assert_eq!(statistics::trend_label(-2.0), TrendLabel::Neutral);
    assert_eq!(statistics::trend_label(-2.01), TrendLabel::Bearish);

    let rising = statistics::compute(&daily_series(&[100.0, 101.0, 105.0]));
    assert_eq!(rising.trend, TrendLabel::Bullish);
    let falling = statistics::compute(&daily_series(&[100.0, 99.0, 90.0]));
    assert_eq!(falling.trend, TrendLabel::Bearish);
}

#[test]
fn moving_average_has_none_prefix() {
    let series = daily_series(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let ma = statistics::moving_average(&series, 3);
    assert_eq!(ma, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
    assert_eq!(statistics::moving_average(&series, 0), vec![None; 5]);
}

#[test]
fn default_period_is_seven() {
    let prices: Vec<f64> = (1..=8).map(f64::from).collect();
    let stats = statistics::compute(&daily_series(&prices));
    assert_eq!(stats.moving_average.len(), 8);
    assert_eq!(stats.moving_average[5], None);
    assert_eq!(stats.moving_average[6], Some(4.0));
    assert_eq!(stats.moving_average[7], Some(5.0));
}

#[test]
fn support_resistance_bound_every_price() {
    let series = daily_series(&[5.0, 3.0, 9.0, 7.0, 3.5]);
    let stats = statistics::compute(&series);
    assert!(series.prices().all(|p| stats.support <= p && p <= stats.resistance));
    assert!(stats.volatility >= 0.0);
}

#[test]
fn percent_change_series_rebases_to_first_point() {
    let series = daily_series(&[200.0, 210.0, 190.0]);
    let rebased = statistics::percent_change_series(&series);
    assert_eq!(rebased.len(), 3);
    assert_eq!(rebased[0], (date(2025, 1, 1), 0.0));
    assert!(close(rebased[1].1, 5.0, 1e-9));
    assert!(close(rebased[2].1, -5.0, 1e-9));
    assert!(statistics::percent_change_series(&TimeSeries::empty()).is_empty());
}

#[test]
fn flat_series_has_zero_volatility() {
    let stats = statistics::compute(&daily_series(&[50.0, 50.0, 50.0, 50.0]));
    assert_eq!(stats.volatility, 0.0);
    assert_eq!(stats.change_over_window, 0.0);
}
