//! News feed queries.

use tracing::warn;

use crate::error::Result;
use crate::models::{NewsArticle, NewsParams};
use crate::source::{DataOrigin, MarketData, Sourced};

// ---------------------------------------------------------------------------
// NewsQuery
// ---------------------------------------------------------------------------

pub struct NewsQuery<'a> {
    data: &'a MarketData,
}

impl<'a> NewsQuery<'a> {
    pub fn new(data: &'a MarketData) -> Self {
        Self { data }
    }

    /// Articles matching `params`.
    pub fn list(&self, params: &NewsParams) -> Result<Sourced<Vec<NewsArticle>>> {
        self.data.news(params)
    }

    /// Articles about one product (e.g. `"wheat"`).
    pub fn product(&self, product: &str, params: &NewsParams) -> Result<Sourced<Vec<NewsArticle>>> {
        self.data.product_news(product, params)
    }

    /// Articles for several products, fetched independently and flattened.
    ///
    /// A product whose fetch fails is logged and skipped; the rest are
    /// still returned.
    pub fn batch_product(&self, products: &[&str], params: &NewsParams) -> Sourced<Vec<NewsArticle>> {
        let mut articles = Vec::new();
        let mut origin = DataOrigin::Live;
        for product in products {
            match self.product(product, params) {
                Ok(fetched) => {
                    if fetched.is_demo() {
                        origin = DataOrigin::Demo;
                    }
                    articles.extend(fetched.value);
                }
                Err(e) => {
                    warn!(product = %product, error = %e, "skipping product news");
                }
            }
        }
        Sourced { value: articles, origin }
    }
}
