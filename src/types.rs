//! Row type written to the output CSV.

use serde::Serialize;

/// One scraped product card. Field names are renamed to the exact CSV column
/// headers; `rating` serializes to an empty field when no star-fill style was
/// present, which is distinct from a literal 0 rating.
#[derive(Debug, Clone, Serialize)]
pub struct ProductRow {
    #[serde(rename = "Scraped At")]
    pub scraped_at: String,
    #[serde(rename = "Section")]
    pub section: String,
    #[serde(rename = "Subcategory")]
    pub subcategory: String,
    #[serde(rename = "Product Name")]
    pub name: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Rating")]
    pub rating: Option<f64>,
    #[serde(rename = "Image URL")]
    pub image_url: String,
    #[serde(rename = "Product URL")]
    pub product_url: String,
}
