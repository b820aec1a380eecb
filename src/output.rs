//! CSV serialization: one file, written once, Excel-friendly.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use tracing::info;

use crate::error::ScraperError;
use crate::types::ProductRow;

/// BOM keeps Excel from mangling the rupee sign.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

pub const CSV_HEADERS: [&str; 8] = [
    "Scraped At",
    "Section",
    "Subcategory",
    "Product Name",
    "Price",
    "Rating",
    "Image URL",
    "Product URL",
];

/// Writes all rows to `path`, overwriting any existing file. The header row
/// is always present, even for an empty run.
pub fn write_csv(path: &Path, rows: &[ProductRow]) -> Result<(), ScraperError> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    writer.write_record(CSV_HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!("Wrote {} rows to {:?}", rows.len(), path);
    Ok(())
}
