use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::config::ScraperConfig;
use crate::error::ScraperError;
use crate::extract::{build_record, discover_links, NutritionRecord};
use crate::fetch::Fetcher;

/// Per-URL result of the concurrent fan-out; failures are carried alongside
/// their URL so the aggregation step can log and skip them.
struct FetchOutcome {
    url: String,
    result: Result<NutritionRecord, ScraperError>,
}

/// Orchestrates the whole run: listing fetch, concurrent detail fetches,
/// record extraction, completeness sort.
pub struct NutritionScraper<F> {
    config: ScraperConfig,
    fetcher: F,
}

impl<F: Fetcher> NutritionScraper<F> {
    pub fn new(config: ScraperConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    /// Runs the scrape. A listing fetch failure aborts the run; a detail
    /// fetch failure only drops that one item. Records come back sorted by
    /// property count, most complete first.
    pub async fn run(&self) -> Result<Vec<NutritionRecord>, ScraperError> {
        info!("Fetching listing page {}", self.config.listing_url);
        let listing = self.fetcher.fetch(&self.config.listing_url).await?;

        let urls = discover_links(&listing);
        info!("Discovered {} detail pages", urls.len());

        let mut records = self.fetch_all(urls).await;
        records.sort_by(|a, b| b.property_count().cmp(&a.property_count()));

        Ok(records)
    }

    /// Fetches every detail page through a bounded worker pool. Each task
    /// owns its own outcome slot; nothing is shared mutably across tasks,
    /// and one failed page never cancels its siblings.
    async fn fetch_all(&self, urls: Vec<String>) -> Vec<NutritionRecord> {
        let outcomes: Vec<FetchOutcome> = stream::iter(urls)
            .map(|url| async move {
                let result = self
                    .fetcher
                    .fetch(&url)
                    .await
                    .map(|body| build_record(&body));
                FetchOutcome { url, result }
            })
            .buffer_unordered(self.config.max_concurrency)
            .collect()
            .await;

        let mut records = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            match outcome.result {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping detail page {}: {}", outcome.url, e),
            }
        }
        records
    }
}
