//! Nutrition-facts scraper for the Wetaca dish catalog.
//!
//! Fetches the listing page, follows every discovered detail-page link
//! concurrently, extracts each dish's nutrition table by pattern matching,
//! derives the per-portion total energy, and writes one CSV sorted by how
//! complete each record is.
//!
//! # Usage
//!
//! ```rust,ignore
//! use nutrition_scraper::{ScrapeRequest, ScraperService};
//! use tower::Service;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut service = ScraperService::new();
//!
//!     let request = ScrapeRequest::default().with_output_path("./wetaca.csv");
//!
//!     let result = service.call(request).await.unwrap();
//!     println!("CSV written: {:?} ({} records)", result.csv_path, result.record_count);
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod scraper;
pub mod service;

pub use config::ScraperConfig;
pub use error::ScraperError;
pub use export::export_csv;
pub use extract::{NutritionRecord, PropertyKey, PROPERTY_COLUMNS};
pub use fetch::{Fetcher, HttpFetcher};
pub use scraper::NutritionScraper;
pub use service::{ScrapeRequest, ScrapeResult, ScraperService};
