use snapdeal_scraper::{ScrapeRequest, ScraperService};
use tower::Service;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut service = ScraperService::new();
    let request = ScrapeRequest::new();

    match service.call(request).await {
        Ok(result) => {
            println!(
                "DONE! File saved as: {} ({} rows)",
                result.csv_path.display(),
                result.row_count
            );
        }
        Err(e) => {
            eprintln!("Scrape failed: {}", e);
            std::process::exit(1);
        }
    }
}
