use std::path::PathBuf;
use std::time::Duration;

/// Default output file, overwritten on every run.
pub const DEFAULT_OUTPUT_CSV: &str = "snapdeal_products.csv";

/// Cap on rows taken from a single search page.
pub const MAX_PRODUCTS_PER_SUBCAT: usize = 10;

/// The fixed section -> search URL list, in scrape order.
pub fn default_sections() -> Vec<(String, String)> {
    [
        (
            "Accessories",
            "https://www.snapdeal.com/search?keyword=accessories&sort=rlvncy",
        ),
        (
            "Footwear",
            "https://www.snapdeal.com/search?keyword=footwear&sort=rlvncy",
        ),
        (
            "Kids Fashion",
            "https://www.snapdeal.com/search?keyword=kids%20fashion&sort=rlvncy",
        ),
        (
            "Men Clothing",
            "https://www.snapdeal.com/search?keyword=men%20clothing&sort=rlvncy",
        ),
        (
            "Women Clothing",
            "https://www.snapdeal.com/search?keyword=women%20clothing&sort=rlvncy",
        ),
    ]
    .into_iter()
    .map(|(s, u)| (s.to_string(), u.to_string()))
    .collect()
}

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Ordered (section name, search URL) pairs.
    pub sections: Vec<(String, String)>,
    pub output_path: PathBuf,
    pub headless: bool,
    /// Upper bound on the document-body readiness poll after navigation.
    pub wait_time: Duration,
    /// Settling delay after a successful load, for client-side rendering.
    /// A fixed pause is a known source of flakiness but matches the site's
    /// behavior better than any DOM signal we found.
    pub settle_delay: Duration,
    /// Longer settling delay used after a session restart.
    pub recovery_settle: Duration,
    /// CDP request timeout, covers page loads.
    pub page_load_timeout: Duration,
    pub max_products: usize,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            sections: default_sections(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_CSV),
            headless: true,
            wait_time: Duration::from_secs(10),
            settle_delay: Duration::from_secs(2),
            recovery_settle: Duration::from_secs(3),
            page_load_timeout: Duration::from_secs(30),
            max_products: MAX_PRODUCTS_PER_SUBCAT,
        }
    }
}

impl ScraperConfig {
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

    pub fn with_wait_time(mut self, wait_time: Duration) -> Self {
        self.wait_time = wait_time;
        self
    }

    pub fn with_max_products(mut self, max_products: usize) -> Self {
        self.max_products = max_products;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScraperConfig::default();
        assert!(config.headless);
        assert_eq!(config.output_path, PathBuf::from("snapdeal_products.csv"));
        assert_eq!(config.max_products, 10);
        assert_eq!(config.wait_time, Duration::from_secs(10));
        assert_eq!(config.sections.len(), 5);
    }

    #[test]
    fn test_section_order() {
        let sections = default_sections();
        let names: Vec<&str> = sections.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(
            names,
            [
                "Accessories",
                "Footwear",
                "Kids Fashion",
                "Men Clothing",
                "Women Clothing"
            ]
        );
        for (_, url) in &sections {
            assert!(url.starts_with("https://www.snapdeal.com/search?keyword="));
        }
    }

    #[test]
    fn test_config_builder() {
        let config = ScraperConfig::new()
            .with_headless(false)
            .with_output_path("/tmp/out.csv")
            .with_max_products(3)
            .with_wait_time(Duration::from_secs(5));

        assert!(!config.headless);
        assert_eq!(config.output_path, PathBuf::from("/tmp/out.csv"));
        assert_eq!(config.max_products, 3);
        assert_eq!(config.wait_time, Duration::from_secs(5));
    }
}
