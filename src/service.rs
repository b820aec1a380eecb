use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::task::{Context, Poll};

use tower::Service;
use tracing::info;

use crate::config::ScraperConfig;
use crate::error::ScraperError;
use crate::scraper::SnapdealScraper;
use crate::traits::Scraper;

/// Scrape request
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    pub sections: Vec<(String, String)>,
    pub output_path: PathBuf,
    pub headless: bool,
    pub max_products: usize,
}

impl Default for ScrapeRequest {
    fn default() -> Self {
        let config = ScraperConfig::default();
        Self {
            sections: config.sections,
            output_path: config.output_path,
            headless: config.headless,
            max_products: config.max_products,
        }
    }
}

impl ScrapeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sections(mut self, sections: Vec<(String, String)>) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_max_products(mut self, max_products: usize) -> Self {
        self.max_products = max_products;
        self
    }
}

impl From<ScrapeRequest> for ScraperConfig {
    fn from(req: ScrapeRequest) -> Self {
        ScraperConfig::default()
            .with_sections(req.sections)
            .with_output_path(req.output_path)
            .with_headless(req.headless)
            .with_max_products(req.max_products)
    }
}

/// Scrape result
#[derive(Debug)]
pub struct ScrapeResult {
    pub csv_path: PathBuf,
    pub row_count: usize,
}

/// tower::Service wrapper around a full scrape run
#[derive(Debug, Clone, Default)]
pub struct ScraperService {
    // Reserved for future state (rate limiting, caching)
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
        info!("Scrape request: {} sections", req.sections.len());

        Box::pin(async move {
            let config: ScraperConfig = req.into();
            let mut scraper = SnapdealScraper::new(config);

            scraper.initialize().await?;
            let rows = scraper.collect().await?;
            let csv_path = scraper.export(&rows).await?;
            scraper.close().await?;

            info!(
                "Scrape complete: path={:?}, rows={}",
                csv_path,
                rows.len()
            );

            Ok(ScrapeResult {
                csv_path,
                row_count: rows.len(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrape_request_builder() {
        let req = ScrapeRequest::new()
            .with_output_path("/tmp/rows.csv")
            .with_headless(false)
            .with_max_products(5);

        assert_eq!(req.output_path, PathBuf::from("/tmp/rows.csv"));
        assert!(!req.headless);
        assert_eq!(req.max_products, 5);
        assert_eq!(req.sections.len(), 5);
    }

    #[test]
    fn test_scrape_request_to_config() {
        let req = ScrapeRequest::new()
            .with_sections(vec![("Shoes".into(), "https://example.com".into())])
            .with_max_products(3);
        let config: ScraperConfig = req.into();

        assert_eq!(config.sections.len(), 1);
        assert_eq!(config.sections[0].0, "Shoes");
        assert_eq!(config.max_products, 3);
    }
}
