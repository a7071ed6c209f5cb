use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use tower::Service;
use tracing::info;

use crate::config::ScraperConfig;
use crate::error::ScraperError;
use crate::export::export_csv;
use crate::fetch::HttpFetcher;
use crate::scraper::NutritionScraper;

/// Scrape request
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    pub listing_url: String,
    pub output_path: PathBuf,
    pub max_concurrency: usize,
    pub timeout: Duration,
}

impl Default for ScrapeRequest {
    fn default() -> Self {
        let config = ScraperConfig::default();
        Self {
            listing_url: config.listing_url,
            output_path: config.output_path,
            max_concurrency: config.max_concurrency,
            timeout: config.timeout,
        }
    }
}

impl ScrapeRequest {
    pub fn new(listing_url: impl Into<String>) -> Self {
        Self {
            listing_url: listing_url.into(),
            ..Default::default()
        }
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }
}

impl From<ScrapeRequest> for ScraperConfig {
    fn from(req: ScrapeRequest) -> Self {
        ScraperConfig::new(req.listing_url)
            .with_output_path(req.output_path)
            .with_max_concurrency(req.max_concurrency)
            .with_timeout(req.timeout)
    }
}

/// Scrape result
#[derive(Debug)]
pub struct ScrapeResult {
    pub csv_path: PathBuf,
    pub record_count: usize,
}

/// tower::Service front for the scraper
#[derive(Debug, Clone, Default)]
pub struct ScraperService {
    // Room for future cross-request state (rate limits, caching).
}

impl ScraperService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Service<ScrapeRequest> for ScraperService {
    type Response = ScrapeResult;
    type Error = ScraperError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: ScrapeRequest) -> Self::Future {
        info!("Scrape request received: listing={}", req.listing_url);

        Box::pin(async move {
            let config: ScraperConfig = req.into();
            let output_path = config.output_path.clone();

            let fetcher = HttpFetcher::with_timeout(config.timeout)?;
            let scraper = NutritionScraper::new(config, fetcher);

            let records = scraper.run().await?;
            export_csv(&records, &output_path)?;

            info!(
                "Scrape finished: path={:?}, records={}",
                output_path,
                records.len()
            );

            Ok(ScrapeResult {
                csv_path: output_path,
                record_count: records.len(),
            })
        })
    }
}
