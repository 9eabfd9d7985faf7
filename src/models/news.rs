use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// NewsCategory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewsCategory {
    #[default]
    Overview,
    Trade,
    Price,
    SupplyDemand,
    Climate,
    Geopolitics,
}

impl NewsCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            NewsCategory::Overview => "overview",
            NewsCategory::Trade => "trade",
            NewsCategory::Price => "price",
            NewsCategory::SupplyDemand => "supply_demand",
            NewsCategory::Climate => "climate",
            NewsCategory::Geopolitics => "geopolitics",
        }
    }
}

// ---------------------------------------------------------------------------
// NewsArticle -- Normalized article as returned by the news backend
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub headline: String,
    pub source: String,
    #[serde(default)]
    pub category: NewsCategory,
    #[serde(default)]
    pub tickers: Vec<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    #[serde(default)]
    pub commodity_tags: Vec<String>,
    /// RFC 3339 timestamp, kept as text.
    pub timestamp: Option<String>,
    pub url: Option<String>,
    pub summary: Option<String>,
}

// ---------------------------------------------------------------------------
// NewsParams -- Query parameters for the news endpoints
// ---------------------------------------------------------------------------

/// Parameters for the news methods. Unset fields are omitted from the query.
#[derive(Debug, Clone, Default)]
pub struct NewsParams {
    pub query: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub commodity: Option<String>,
    pub ticker: Option<String>,
    pub category: Option<NewsCategory>,
    pub limit: Option<usize>,
    pub deduplicate: Option<bool>,
    pub refresh: Option<bool>,
}

impl NewsParams {
    /// Render as `(key, value)` query pairs in a stable order.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut q = Vec::new();
        if let Some(v) = &self.query {
            q.push(("query", v.clone()));
        }
        if let Some(v) = &self.country {
            q.push(("country", v.clone()));
        }
        if let Some(v) = &self.state {
            q.push(("state", v.clone()));
        }
        if let Some(v) = &self.commodity {
            q.push(("commodity", v.clone()));
        }
        if let Some(v) = &self.ticker {
            q.push(("ticker", v.clone()));
        }
        if let Some(v) = self.category {
            q.push(("category", v.as_str().to_string()));
        }
        if let Some(v) = self.limit {
            q.push(("limit", v.to_string()));
        }
        if let Some(v) = self.deduplicate {
            q.push(("deduplicate", v.to_string()));
        }
        if let Some(v) = self.refresh {
            q.push(("refresh", v.to_string()));
        }
        q
    }

    /// Whether an article passes the locally checkable filters.
    ///
    /// Used by the static source; the backend applies its own filtering.
    pub fn matches(&self, article: &NewsArticle) -> bool {
        if let Some(c) = self.category {
            if c != NewsCategory::Overview && article.category != c {
                return false;
            }
        }
        if let Some(country) = &self.country {
            if !article
                .country
                .as_deref()
                .is_some_and(|a| a.eq_ignore_ascii_case(country))
            {
                return false;
            }
        }
        if let Some(state) = &self.state {
            if !article
                .state
                .as_deref()
                .is_some_and(|a| a.eq_ignore_ascii_case(state))
            {
                return false;
            }
        }
        if let Some(commodity) = &self.commodity {
            let needle = commodity.to_lowercase();
            let tagged = article
                .commodity_tags
                .iter()
                .chain(article.tickers.iter())
                .any(|t| t.to_lowercase() == needle);
            if !tagged && !article.headline.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(ticker) = &self.ticker {
            if !article.tickers.iter().any(|t| t.eq_ignore_ascii_case(ticker)) {
                return false;
            }
        }
        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            let in_summary = article
                .summary
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(&needle));
            if !article.headline.to_lowercase().contains(&needle) && !in_summary {
                return false;
            }
        }
        true
    }
}
