use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("browser init error: {0}")]
    BrowserInit(String),

    #[error("navigation error: {0}")]
    Navigation(String),

    #[error("timeout: {0}")]
    Timeout(String),

    #[error("javascript error: {0}")]
    JavaScript(String),

    #[error("csv write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("file i/o error: {0}")]
    FileIo(#[from] std::io::Error),
}
