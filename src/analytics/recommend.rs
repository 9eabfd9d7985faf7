//! Single-winner sourcing recommendations.

use serde::{Deserialize, Serialize};

use crate::models::Selection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RecommendationSet {
    pub best_price: Selection,
    pub best_reliability: Selection,
    pub lowest_risk: Selection,
}

/// Pick the cheapest, most reliable and lowest-risk selections.
///
/// Ties keep the earliest selection. Returns `None` for an empty input,
/// which is the "no recommendation" state rather than an error.
pub fn rank(selections: &[Selection]) -> Option<RecommendationSet> {
    let first = selections.first()?;

    let mut best_price = first;
    let mut best_reliability = first;
    let mut lowest_risk = first;

    for s in &selections[1..] {
        if s.profile.price < best_price.profile.price {
            best_price = s;
        }
        if s.profile.reliability_score > best_reliability.profile.reliability_score {
            best_reliability = s;
        }
        if s.profile.risk_level.rank() < lowest_risk.profile.risk_level.rank() {
            lowest_risk = s;
        }
    }

    Some(RecommendationSet {
        best_price: best_price.clone(),
        best_reliability: best_reliability.clone(),
        lowest_risk: lowest_risk.clone(),
    })
}
