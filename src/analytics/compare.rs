//! Side-by-side comparison of selections on sourcing metrics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{CountryProfile, Selection};

/// Tolerance used by the floating metrics when deciding ties for best.
pub const FLOAT_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Price,
    LeadTimeDays,
    ReliabilityScore,
    ProductionCapacity,
    ExportVolume,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Price,
        Metric::LeadTimeDays,
        Metric::ReliabilityScore,
        Metric::ProductionCapacity,
        Metric::ExportVolume,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Price => "Price",
            Metric::LeadTimeDays => "Lead Time",
            Metric::ReliabilityScore => "Reliability",
            Metric::ProductionCapacity => "Production",
            Metric::ExportVolume => "Exports",
        }
    }

    /// Whether a lower value is better for this metric.
    pub fn lower_is_better(self) -> bool {
        matches!(self, Metric::Price | Metric::LeadTimeDays)
    }

    /// Tie tolerance; `None` means exact equality.
    pub fn tolerance(self) -> Option<f64> {
        match self {
            Metric::Price | Metric::LeadTimeDays => None,
            _ => Some(FLOAT_TOLERANCE),
        }
    }

    pub fn value(self, profile: &CountryProfile) -> f64 {
        match self {
            Metric::Price => profile.price,
            Metric::LeadTimeDays => f64::from(profile.lead_time_days),
            Metric::ReliabilityScore => profile.reliability_score,
            Metric::ProductionCapacity => profile.production_capacity,
            Metric::ExportVolume => profile.export_volume,
        }
    }

    fn ties(self, value: f64, best: f64) -> bool {
        match self.tolerance() {
            Some(tol) => (value - best).abs() < tol,
            None => value == best,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// MetricComparison
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCell {
    pub selection_id: String,
    pub value: f64,
    pub is_best: bool,
}

/// One metric evaluated across all selections, in selection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricComparison {
    pub metric: Metric,
    /// Optimal value, `None` when there were no selections.
    pub best: Option<f64>,
    pub cells: Vec<MetricCell>,
}

impl MetricComparison {
    pub fn get(&self, selection_id: &str) -> Option<&MetricCell> {
        self.cells.iter().find(|c| c.selection_id == selection_id)
    }

    pub fn is_best(&self, selection_id: &str) -> bool {
        self.get(selection_id).is_some_and(|c| c.is_best)
    }

    /// Ids of every selection tied for best.
    pub fn winners(&self) -> Vec<&str> {
        self.cells
            .iter()
            .filter(|c| c.is_best)
            .map(|c| c.selection_id.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Evaluate `metric` for every selection and flag all values tied for best.
pub fn compare(selections: &[Selection], metric: Metric) -> MetricComparison {
    let values: Vec<f64> = selections.iter().map(|s| metric.value(&s.profile)).collect();

    let best = values.iter().copied().filter(|v| !v.is_nan()).reduce(|a, b| {
        if metric.lower_is_better() {
            a.min(b)
        } else {
            a.max(b)
        }
    });

    let cells = selections
        .iter()
        .zip(values)
        .map(|(s, value)| MetricCell {
            selection_id: s.id.clone(),
            value,
            is_best: best.is_some_and(|b| metric.ties(value, b)),
        })
        .collect();

    MetricComparison { metric, best, cells }
}

/// Evaluate every [`Metric`], in [`Metric::ALL`] order.
pub fn compare_all(selections: &[Selection]) -> Vec<MetricComparison> {
    Metric::ALL.iter().map(|m| compare(selections, *m)).collect()
}
