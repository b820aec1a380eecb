use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::ScraperError;
use crate::types::ProductRow;

#[async_trait]
pub trait Scraper: Send + Sync {
    /// Launch the browser session
    async fn initialize(&mut self) -> Result<(), ScraperError>;

    /// Scrape every configured section
    async fn collect(&mut self) -> Result<Vec<ProductRow>, ScraperError>;

    /// Write the accumulated rows to the output CSV
    async fn export(&mut self, rows: &[ProductRow]) -> Result<PathBuf, ScraperError>;

    /// Release the browser
    async fn close(&mut self) -> Result<(), ScraperError>;

    /// Full run (initialize → collect → export → close)
    async fn execute(&mut self) -> Result<PathBuf, ScraperError> {
        self.initialize().await?;
        let rows = self.collect().await?;
        let path = self.export(&rows).await?;
        self.close().await?;
        Ok(path)
    }
}
