use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::ScraperError;

/// Transport seam: anything that can turn a URL into a page body.
///
/// The orchestrator only depends on this trait, so tests can swap in a
/// canned-response fetcher and never touch the network.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ScraperError>;
}

/// `reqwest`-backed fetcher. The client is injected (or built from a
/// timeout) rather than living in a process-wide static, and is cheap to
/// share across concurrent requests.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, ScraperError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ScraperError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ScraperError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::Transport {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| ScraperError::Request {
            url: url.to_string(),
            source,
        })
    }
}
