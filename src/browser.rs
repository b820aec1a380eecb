//! Owned browser session: launch, navigate, snapshot, close.
//!
//! The session is passed explicitly rather than held as shared state, so a
//! crashed browser is replaced by dropping the whole value and launching a
//! fresh one with the same config.

use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::config::ScraperConfig;
use crate::error::ScraperError;

/// Poll step for the document-body readiness wait.
const READY_POLL_INTERVAL: Duration = Duration::from_millis(500);

pub struct BrowserSession {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
    wait_time: Duration,
    settle_delay: Duration,
}

impl BrowserSession {
    /// Launches headless Chromium with the listing-scrape profile: fixed
    /// viewport, sandbox off, automation-detection flag suppressed, and the
    /// configured page-load timeout.
    pub async fn launch(config: &ScraperConfig) -> Result<Self, ScraperError> {
        info!("Launching browser...");

        // Unique profile dir so parallel runs don't fight over the lock.
        let unique_id = format!(
            "{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        );
        let user_data_dir = std::env::temp_dir().join(format!("snapdeal-scraper-{}", unique_id));

        let mut builder = BrowserConfig::builder()
            .user_data_dir(&user_data_dir)
            .window_size(1920, 1080)
            .no_sandbox()
            .request_timeout(config.page_load_timeout)
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-blink-features=AutomationControlled");

        if !config.headless {
            builder = builder.with_head();
        }

        let browser_config = builder
            .build()
            .map_err(|e| ScraperError::BrowserInit(e.to_string()))?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| ScraperError::BrowserInit(e.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                debug!("Browser event: {:?}", event);
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| ScraperError::BrowserInit(e.to_string()))?;

        info!("Browser launched");
        Ok(Self {
            browser,
            page,
            handler_task,
            wait_time: config.wait_time,
            settle_delay: config.settle_delay,
        })
    }

    /// Navigate without any readiness wait. Used on the recovery path.
    pub async fn goto(&self, url: &str) -> Result<(), ScraperError> {
        self.page
            .goto(url)
            .await
            .map_err(|e| ScraperError::Navigation(e.to_string()))?;
        Ok(())
    }

    /// Navigate, wait for the document body to appear, then apply the
    /// settling delay so client-side rendering can finish.
    pub async fn goto_and_wait(&self, url: &str) -> Result<(), ScraperError> {
        self.goto(url).await?;
        self.wait_for_body().await?;
        sleep(self.settle_delay).await;
        Ok(())
    }

    async fn wait_for_body(&self) -> Result<(), ScraperError> {
        let deadline = tokio::time::Instant::now() + self.wait_time;

        loop {
            let has_body = self
                .page
                .evaluate("document.body !== null")
                .await
                .map_err(|e| ScraperError::JavaScript(e.to_string()))?
                .into_value::<bool>()
                .unwrap_or(false);

            if has_body {
                return Ok(());
            }

            if tokio::time::Instant::now() >= deadline {
                return Err(ScraperError::Timeout(format!(
                    "document body did not appear within {:?}",
                    self.wait_time
                )));
            }

            sleep(READY_POLL_INTERVAL).await;
        }
    }

    /// Full HTML snapshot of the current page.
    pub async fn content(&self) -> Result<String, ScraperError> {
        self.page
            .content()
            .await
            .map_err(|e| ScraperError::Navigation(e.to_string()))
    }

    /// Best-effort shutdown; close errors are suppressed since the session
    /// may already be gone when this is called.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            debug!("Failed to close browser: {}", e);
        }
        let _ = self.browser.wait().await;
        self.handler_task.abort();
        info!("Browser closed");
    }
}
