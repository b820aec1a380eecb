//! Snapdeal listing scraper
//!
//! Drives a headless Chromium through a fixed set of category search pages,
//! extracts one row per product card, and writes everything to a single CSV.
//!
//! # Usage
//!
//! ```rust,ignore
//! use snapdeal_scraper::{ScrapeRequest, ScraperService};
//! use tower::Service;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut service = ScraperService::new();
//!
//!     let request = ScrapeRequest::new()
//!         .with_output_path("./snapdeal_products.csv")
//!         .with_headless(true);
//!
//!     let result = service.call(request).await.unwrap();
//!     println!("CSV saved: {:?} ({} rows)", result.csv_path, result.row_count);
//! }
//! ```
//!
//! The lower-level pieces are exposed for direct use: [`SnapdealScraper`]
//! runs the section loop against an owned [`browser::BrowserSession`], and
//! [`extract::scrape_listing`] turns a page snapshot into rows without any
//! browser at all.

pub mod browser;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod scraper;
pub mod service;
pub mod traits;
pub mod types;

pub use config::ScraperConfig;
pub use error::ScraperError;
pub use scraper::SnapdealScraper;
pub use service::{ScrapeRequest, ScrapeResult, ScraperService};
pub use traits::Scraper;
pub use types::ProductRow;
