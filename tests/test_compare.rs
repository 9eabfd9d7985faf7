//! Multi-selection comparison tests.

mod common;

use agrimarket_sdk::analytics::{compare, compare_all, Metric};
use agrimarket_sdk::models::{CountryProfile, RiskLevel};
use common::{profile, selection, tied_price_selections};

#[test]
fn price_tie_marks_both_best() {
    let result = compare(&tied_price_selections(), Metric::Price);
    assert_eq!(result.best, Some(250.0));
    assert!(!result.is_best("A"));
    assert!(result.is_best("B"));
    assert!(result.is_best("C"));
    assert_eq!(result.winners(), vec!["B", "C"]);
}

#[test]
fn reliability_higher_is_better() {
    let result = compare(&tied_price_selections(), Metric::ReliabilityScore);
    assert_eq!(result.best, Some(90.0));
    assert_eq!(result.winners(), vec!["B"]);
}

#[test]
fn reliability_within_tolerance_ties() {
    let selections = vec![
        selection("A", profile("Russia", 300.0, 90.0, RiskLevel::Low, 20)),
        selection("B", profile("India", 300.0, 90.005, RiskLevel::Low, 20)),
        selection("C", profile("USA", 300.0, 89.9, RiskLevel::Low, 20)),
    ];
    let result = compare(&selections, Metric::ReliabilityScore);
    assert!(result.is_best("A"));
    assert!(result.is_best("B"));
    assert!(!result.is_best("C"));
}

#[test]
fn lead_time_lower_is_better() {
    let result = compare(&tied_price_selections(), Metric::LeadTimeDays);
    assert_eq!(result.best, Some(18.0));
    assert_eq!(result.winners(), vec!["B"]);
    assert_eq!(result.get("C").unwrap().value, 30.0);
}

#[test]
fn empty_selection_has_no_best() {
    for metric in Metric::ALL {
        let result = compare(&[], metric);
        assert!(result.is_empty());
        assert_eq!(result.best, None);
    }
}

#[test]
fn compare_all_covers_every_metric_in_order() {
    let results = compare_all(&tied_price_selections());
    let metrics: Vec<Metric> = results.iter().map(|r| r.metric).collect();
    assert_eq!(metrics, Metric::ALL.to_vec());
    for r in &results {
        assert_eq!(r.cells.len(), 3);
        assert!(!r.winners().is_empty());
    }
}

#[test]
fn lead_time_label_parses_leading_integer() {
    let json = serde_json::json!({
        "commodity": "wheat",
        "country": "Russia",
        "price": 268,
        "riskLevel": "Very High",
        "reliabilityScore": 82.5,
        "leadTime": "25-30 days"
    });
    let profile: CountryProfile = serde_json::from_value(json).unwrap();
    assert_eq!(profile.lead_time_days, 25);
    assert_eq!(profile.risk_level, RiskLevel::VeryHigh);
    assert_eq!(Metric::LeadTimeDays.value(&profile), 25.0);
}

#[test]
fn lead_time_label_without_digits_is_rejected() {
    let json = serde_json::json!({
        "commodity": "wheat",
        "country": "Russia",
        "price": 268,
        "riskLevel": "Low",
        "reliabilityScore": 82.5,
        "leadTimeDays": "soon"
    });
    assert!(serde_json::from_value::<CountryProfile>(json).is_err());
}

#[test]
fn metric_labels() {
    assert_eq!(Metric::Price.to_string(), "Price");
    assert!(Metric::Price.lower_is_better());
    assert!(!Metric::ExportVolume.lower_is_better());
    assert_eq!(Metric::Price.tolerance(), None);
    assert_eq!(Metric::ReliabilityScore.tolerance(), Some(0.01));
}

#[test]
fn identical_reliability_marks_both_best() {
    let selections = vec![
        selection("A", profile("Russia", 300.0, 88.0, RiskLevel::Medium, 25)),
        selection("B", profile("India", 280.0, 88.0, RiskLevel::Low, 18)),
    ];
    let result = compare(&selections, Metric::ReliabilityScore);
    assert_eq!(result.winners(), vec!["A", "B"]);
}

#[test]
fn lower_price_pair_wins() {
    let selections = vec![
        selection("A", profile("Russia", 300.0, 80.0, RiskLevel::Medium, 25)),
        selection("B", profile("India", 280.0, 80.0, RiskLevel::Low, 18)),
        selection("C", profile("USA", 280.0, 80.0, RiskLevel::Low, 30)),
    ];
    let result = compare(&selections, Metric::Price);
    assert!(!result.is_best("A"));
    assert!(result.is_best("B"));
    assert!(result.is_best("C"));
}
