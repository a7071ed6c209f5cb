use std::path::PathBuf;
use std::time::Duration;

/// Default catalog page listing every dish.
pub const DEFAULT_LISTING_URL: &str = "https://wetaca.com/27-nuestros-platos";
/// Default output file, written into the current working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "wetaca.csv";

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub listing_url: String,
    pub output_path: PathBuf,
    pub max_concurrency: usize,
    pub timeout: Duration,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            max_concurrency: 8,
            timeout: Duration::from_secs(30),
        }
    }
}

impl ScraperConfig {
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
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
