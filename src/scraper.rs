//! Section loop: load each search page, extract rows, write the CSV.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::browser::BrowserSession;
use crate::config::ScraperConfig;
use crate::error::ScraperError;
use crate::extract::scrape_listing;
use crate::output::write_csv;
use crate::traits::Scraper;
use crate::types::ProductRow;

pub struct SnapdealScraper {
    config: ScraperConfig,
    session: Option<BrowserSession>,
}

impl SnapdealScraper {
    pub fn new(config: ScraperConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    fn session(&self) -> Result<&BrowserSession, ScraperError> {
        self.session
            .as_ref()
            .ok_or_else(|| ScraperError::BrowserInit("browser not initialized".into()))
    }

    /// Load a search page, recreating the session once if the load fails.
    /// The retried navigation skips the readiness wait and settles longer;
    /// a second failure propagates.
    async fn load_listing(&mut self, url: &str) -> Result<(), ScraperError> {
        let first_attempt = self.session()?.goto_and_wait(url).await;
        match first_attempt {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!("Browser session lost ({}), restarting...", e);

                if let Some(session) = self.session.take() {
                    session.close().await;
                }
                let session = BrowserSession::launch(&self.config).await?;
                session.goto(url).await?;
                sleep(self.config.recovery_settle).await;

                self.session = Some(session);
                Ok(())
            }
        }
    }
}

#[async_trait]
impl Scraper for SnapdealScraper {
    async fn initialize(&mut self) -> Result<(), ScraperError> {
        let session = BrowserSession::launch(&self.config).await?;
        self.session = Some(session);
        Ok(())
    }

    async fn collect(&mut self) -> Result<Vec<ProductRow>, ScraperError> {
        let sections = self.config.sections.clone();
        let mut all_rows = Vec::new();

        for (section, url) in &sections {
            info!("=== Scraping {} ===", section);
            self.load_listing(url).await?;

            let html = self.session()?.content().await?;
            // Subcategory mirrors the section label; per-subcategory
            // navigation was never part of the section list.
            let rows = scrape_listing(&html, section, section, self.config.max_products);
            info!("{}: {} rows", section, rows.len());

            all_rows.extend(rows);
        }

        Ok(all_rows)
    }

    async fn export(&mut self, rows: &[ProductRow]) -> Result<PathBuf, ScraperError> {
        write_csv(&self.config.output_path, rows)?;
        Ok(self.config.output_path.clone())
    }

    async fn close(&mut self) -> Result<(), ScraperError> {
        if let Some(session) = self.session.take() {
            session.close().await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scraper_new() {
        let scraper = SnapdealScraper::new(ScraperConfig::default());
        assert!(scraper.session.is_none());
        assert!(scraper.session().is_err());
    }
}
