//! Multi-country comparison reports.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analytics::{self, seasonality, statistics, window, MetricComparison, RecommendationSet, TimeWindow};
use crate::error::Result;
use crate::models::{CountryProfile, SeasonalInsights, SeriesStatisticsResult};
use crate::source::{DataOrigin, MarketData, Sourced};
use crate::state::ComparisonState;

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// Per-selection analytics shown alongside the metric table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionAnalysis {
    pub selection_id: String,
    pub seasonal: SeasonalInsights,
    pub statistics: SeriesStatisticsResult,
    /// Windowed prices rebased to percent change from the first point.
    pub percent_change: Vec<(NaiveDate, f64)>,
}

/// Everything the comparison view renders for one state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub time_window: TimeWindow,
    /// One entry per [`Metric`](crate::analytics::Metric), in `Metric::ALL` order.
    pub metrics: Vec<MetricComparison>,
    pub recommendations: Option<RecommendationSet>,
    pub selections: Vec<SelectionAnalysis>,
    /// `Demo` if any input came from static data.
    pub origin: DataOrigin,
}

impl ComparisonReport {
    pub fn is_demo(&self) -> bool {
        self.origin == DataOrigin::Demo
    }

    pub fn analysis(&self, selection_id: &str) -> Option<&SelectionAnalysis> {
        self.selections.iter().find(|a| a.selection_id == selection_id)
    }
}

// ---------------------------------------------------------------------------
// CompareQuery
// ---------------------------------------------------------------------------

/// Query interface for building side-by-side country comparisons.
pub struct CompareQuery<'a> {
    data: &'a MarketData,
}

impl<'a> CompareQuery<'a> {
    pub fn new(data: &'a MarketData) -> Self {
        Self { data }
    }

    /// Candidate country profiles for `commodity`.
    pub fn profiles(&self, commodity: &str) -> Result<Sourced<Vec<CountryProfile>>> {
        self.data.country_profiles(commodity)
    }

    /// Build the full report for `state`, windowing histories at `reference_now`.
    ///
    /// An empty state produces empty metric rows and no recommendations.
    pub fn report(&self, state: &ComparisonState, reference_now: NaiveDate) -> Result<ComparisonReport> {
        let selections = state.selections();
        let time_window = state.time_window();
        let mut origin = if self.data.is_offline() {
            DataOrigin::Demo
        } else {
            DataOrigin::Live
        };
        let mut analyses = Vec::with_capacity(selections.len());

        for selection in selections {
            let pattern = self.data.seasonal_pattern(&selection.commodity, selection.country())?;
            if pattern.is_demo() {
                origin = DataOrigin::Demo;
            }

            let history = self.data.price_history(&selection.commodity, selection.country())?;
            if history.is_demo() {
                origin = DataOrigin::Demo;
            }
            let windowed = window::filter(&history.value, time_window, reference_now);

            analyses.push(SelectionAnalysis {
                selection_id: selection.id.clone(),
                seasonal: seasonality::insights(&pattern.value),
                statistics: statistics::compute(&windowed),
                percent_change: statistics::percent_change_series(&windowed),
            });
        }

        Ok(ComparisonReport {
            time_window,
            metrics: analytics::compare_all(selections),
            recommendations: analytics::rank(selections),
            selections: analyses,
            origin,
        })
    }
}
