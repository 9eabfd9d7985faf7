//! Time-window filtering tests.

mod common;

use agrimarket_sdk::analytics::window::{filter, TimeWindow};
use agrimarket_sdk::models::{PricePoint, TimeSeries};
use common::date;

/// 400 daily points ending 2025-12-31.
fn long_series() -> TimeSeries {
    let prices: Vec<f64> = (0..400).map(|i| 100.0 + i as f64).collect();
    TimeSeries::from_steps(date(2024, 11, 27), 1, &prices)
}

#[test]
fn cutoff_offsets() {
    let now = date(2025, 12, 1);
    assert_eq!(TimeWindow::OneDay.cutoff(now), date(2025, 11, 30));
    assert_eq!(TimeWindow::OneWeek.cutoff(now), date(2025, 11, 24));
    assert_eq!(TimeWindow::OneMonth.cutoff(now), date(2025, 11, 1));
    assert_eq!(TimeWindow::ThreeMonths.cutoff(now), date(2025, 9, 1));
    assert_eq!(TimeWindow::SixMonths.cutoff(now), date(2025, 6, 1));
    assert_eq!(TimeWindow::OneYear.cutoff(now), date(2024, 12, 1));
}

#[test]
fn month_cutoff_clamps_to_month_end() {
    assert_eq!(TimeWindow::OneMonth.cutoff(date(2025, 3, 31)), date(2025, 2, 28));
    assert_eq!(TimeWindow::OneMonth.cutoff(date(2024, 3, 31)), date(2024, 2, 29));
}

#[test]
fn filter_keeps_points_on_or_after_cutoff() {
    let series = long_series();
    let now = date(2025, 12, 31);
    let week = filter(&series, TimeWindow::OneWeek, now);
    assert_eq!(week.first().unwrap().date, date(2025, 12, 24));
    assert_eq!(week.last().unwrap().date, now);
    assert_eq!(week.len(), 8);
}

#[test]
fn shorter_window_is_subset_of_longer() {
    let series = long_series();
    let now = date(2025, 12, 31);
    let sizes: Vec<usize> = TimeWindow::ALL
        .iter()
        .map(|w| filter(&series, *w, now).len())
        .collect();
    for pair in sizes.windows(2) {
        assert!(pair[0] <= pair[1], "{:?}", sizes);
    }
    let month = filter(&series, TimeWindow::OneMonth, now);
    let year = filter(&series, TimeWindow::OneYear, now);
    assert!(month.iter().all(|p| year.points().contains(p)));
}

#[test]
fn filter_empty_series_is_empty() {
    let filtered = filter(&TimeSeries::empty(), TimeWindow::OneYear, date(2025, 1, 1));
    assert!(filtered.is_empty());
}

#[test]
fn filter_excluding_everything_is_empty() {
    let series = TimeSeries::new(vec![PricePoint::new(date(2020, 1, 1), 10.0)]);
    assert!(filter(&series, TimeWindow::OneYear, date(2025, 1, 1)).is_empty());
}

#[test]
fn series_is_sorted_and_deduplicated() {
    let series = TimeSeries::new(vec![
        PricePoint::new(date(2025, 1, 3), 3.0),
        PricePoint::new(date(2025, 1, 1), 1.0),
        PricePoint::new(date(2025, 1, 3), 4.0),
    ]);
    assert_eq!(series.len(), 2);
    assert_eq!(series.first().unwrap().date, date(2025, 1, 1));
    assert_eq!(series.last().unwrap().price, 4.0);
}

#[test]
fn parse_labels_and_range_names() {
    assert_eq!("1W".parse::<TimeWindow>().unwrap(), TimeWindow::OneWeek);
    assert_eq!("month".parse::<TimeWindow>().unwrap(), TimeWindow::OneMonth);
    assert_eq!("3month".parse::<TimeWindow>().unwrap(), TimeWindow::ThreeMonths);
    assert_eq!(" 1y ".parse::<TimeWindow>().unwrap(), TimeWindow::OneYear);
    assert!("2W".parse::<TimeWindow>().is_err());
}

#[test]
fn serializes_as_short_label() {
    assert_eq!(serde_json::to_string(&TimeWindow::SixMonths).unwrap(), "\"6M\"");
    let w: TimeWindow = serde_json::from_str("\"1D\"").unwrap();
    assert_eq!(w, TimeWindow::OneDay);
    assert_eq!(TimeWindow::default(), TimeWindow::OneMonth);
}
