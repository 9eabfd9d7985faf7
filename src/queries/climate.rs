//! Climate risk queries.

use crate::error::Result;
use crate::models::{ClimateAlert, ClimateDashboard, PriceImpactRow, RegionalRisk};
use crate::source::{MarketData, Sourced};

// ---------------------------------------------------------------------------
// ClimateQuery
// ---------------------------------------------------------------------------

/// Query interface for weather alerts and climate price impact.
///
/// Every method takes a commodity filter; an empty slice means all
/// commodities.
pub struct ClimateQuery<'a> {
    data: &'a MarketData,
}

impl<'a> ClimateQuery<'a> {
    pub fn new(data: &'a MarketData) -> Self {
        Self { data }
    }

    pub fn dashboard(&self, commodities: &[String]) -> Result<Sourced<ClimateDashboard>> {
        self.data.climate_dashboard(commodities)
    }

    /// Active alerts, largest price impact first. Ties keep source order.
    pub fn alerts(&self, commodities: &[String]) -> Result<Sourced<Vec<ClimateAlert>>> {
        Ok(self.dashboard(commodities)?.map(|d| {
            let mut alerts = d.alerts;
            alerts.sort_by(|a, b| b.impact_pct.total_cmp(&a.impact_pct));
            alerts
        }))
    }

    pub fn regional_risks(&self, commodities: &[String]) -> Result<Sourced<Vec<RegionalRisk>>> {
        Ok(self.dashboard(commodities)?.map(|d| d.regional_risks))
    }

    pub fn price_impact(&self, commodities: &[String]) -> Result<Sourced<Vec<PriceImpactRow>>> {
        Ok(self.dashboard(commodities)?.map(|d| d.price_impact))
    }
}
