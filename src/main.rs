use tower::Service;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nutrition_scraper::{ScrapeRequest, ScraperService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut service = ScraperService::new();
    let result = service.call(ScrapeRequest::default()).await?;

    info!(
        "Scrape complete: {} records -> {}",
        result.record_count,
        result.csv_path.display()
    );
    println!("Terminado");

    Ok(())
}
