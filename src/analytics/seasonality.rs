//! Seasonal pattern lookup and buy/sell window derivation.

use crate::config::MONTH_NAMES;
use crate::models::{SeasonalChartRow, SeasonalInsights, SeasonalPattern, TradingInsights};

/// The entry for `(commodity, country)` in `patterns`, matched ASCII
/// case-insensitively.
pub fn find<'a>(patterns: &'a [SeasonalPattern], commodity: &str, country: &str) -> Option<&'a SeasonalPattern> {
    patterns
        .iter()
        .find(|p| p.commodity.eq_ignore_ascii_case(commodity) && p.country.eq_ignore_ascii_case(country))
}

/// Look up the pattern for `(commodity, country)` in `patterns`.
///
/// Matching is ASCII case-insensitive. A missing entry resolves to the
/// neutral all-zero pattern rather than an error.
pub fn resolve(patterns: &[SeasonalPattern], commodity: &str, country: &str) -> SeasonalPattern {
    find(patterns, commodity, country)
        .cloned()
        .unwrap_or_else(|| SeasonalPattern::neutral(commodity, country))
}

/// Derive best buy/sell months and the seasonal spread.
///
/// Ties go to the earliest month.
pub fn insights(pattern: &SeasonalPattern) -> SeasonalInsights {
    let values = &pattern.monthly_deviation;

    let mut min_idx = 0;
    let mut max_idx = 0;
    for (i, v) in values.iter().enumerate().skip(1) {
        if *v < values[min_idx] {
            min_idx = i;
        }
        if *v > values[max_idx] {
            max_idx = i;
        }
    }

    let min = values[min_idx];
    let max = values[max_idx];

    SeasonalInsights {
        best_buy_month: min_idx,
        best_sell_month: max_idx,
        buy_discount_pct: min.abs(),
        sell_premium_pct: max,
        seasonal_spread_pct: max - min,
    }
}

/// Price targets for buying at the seasonal low and selling at the high.
pub fn trading_insights(pattern: &SeasonalPattern, base_price: f64) -> TradingInsights {
    let insights = insights(pattern);
    let values = &pattern.monthly_deviation;

    let best_buy_price = base_price * (1.0 + values[insights.best_buy_month] / 100.0);
    let best_sell_price = base_price * (1.0 + values[insights.best_sell_month] / 100.0);

    TradingInsights {
        best_buy_price,
        best_sell_price,
        profit_potential: best_sell_price - best_buy_price,
        volatility_period: volatility_period(pattern),
        insights,
    }
}

/// The consecutive month pair with the largest absolute swing, e.g. `"Apr-May"`.
///
/// Only January through December is considered (no Dec-Jan wrap). A flat
/// pattern has no swing and returns `None`, not a placeholder `"Jan-Feb"`.
pub fn volatility_period(pattern: &SeasonalPattern) -> Option<String> {
    let values = &pattern.monthly_deviation;

    let mut best: Option<(usize, f64)> = None;
    for i in 1..values.len() {
        let swing = (values[i] - values[i - 1]).abs();
        if swing > best.map_or(0.0, |(_, b)| b) {
            best = Some((i - 1, swing));
        }
    }

    best.map(|(i, _)| format!("{}-{}", MONTH_NAMES[i], MONTH_NAMES[i + 1]))
}

/// Pivot several patterns into twelve month rows for charting.
pub fn seasonal_chart(patterns: &[SeasonalPattern]) -> Vec<SeasonalChartRow> {
    MONTH_NAMES
        .iter()
        .enumerate()
        .map(|(idx, month)| SeasonalChartRow {
            month: month.to_string(),
            values: patterns
                .iter()
                .map(|p| (p.country.clone(), p.monthly_deviation[idx]))
                .collect(),
        })
        .collect()
}
