//! Field extraction over a page-content snapshot.
//!
//! The browser only supplies raw HTML; everything here runs on a parsed
//! document, so card extraction stays testable without a live session.

use std::sync::OnceLock;

use chrono::Local;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::types::ProductRow;

const CARD_SELECTOR: &str = "div.product-tuple-listing";
const NAME_SELECTOR: &str = "p.product-title";
const PRICE_SELECTOR: &str = "span.product-price";
const RATING_SELECTOR: &str = ".filled-stars";
const IMAGE_SELECTOR: &str = "img";
const LINK_SELECTOR: &str = "a";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn percent_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+(?:\.\d+)?)\s*%").unwrap())
}

fn digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").unwrap())
}

struct CardSelectors {
    card: Selector,
    name: Selector,
    price: Selector,
    rating: Selector,
    image: Selector,
    link: Selector,
}

fn card_selectors() -> &'static CardSelectors {
    static SELECTORS: OnceLock<CardSelectors> = OnceLock::new();
    SELECTORS.get_or_init(|| CardSelectors {
        card: Selector::parse(CARD_SELECTOR).unwrap(),
        name: Selector::parse(NAME_SELECTOR).unwrap(),
        price: Selector::parse(PRICE_SELECTOR).unwrap(),
        rating: Selector::parse(RATING_SELECTOR).unwrap(),
        image: Selector::parse(IMAGE_SELECTOR).unwrap(),
        link: Selector::parse(LINK_SELECTOR).unwrap(),
    })
}

/// Trimmed text of the first descendant matching `selector`, or `None` when
/// the element is absent. A present-but-blank element yields `Some("")`.
pub fn find_text(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

/// Attribute value of the first descendant matching `selector`.
pub fn find_attr(card: ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    card.select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::to_string)
}

/// Maps a star-fill style ("width: 80%") onto the 0-5 rating scale, one
/// decimal place. `None` when no percent pattern is present.
pub fn parse_rating_from_style(style: &str) -> Option<f64> {
    let caps = percent_re().captures(style)?;
    let pct: f64 = caps[1].parse().ok()?;
    Some((pct / 20.0 * 10.0).round() / 10.0)
}

/// First run of digits in `text` as an integer, 0 when there is none.
pub fn clean_int(text: &str) -> i64 {
    digits_re()
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

fn extract_row(card: ElementRef<'_>, section: &str, subcat: &str) -> ProductRow {
    let sel = card_selectors();

    let rating = find_attr(card, &sel.rating, "style")
        .and_then(|style| parse_rating_from_style(&style));

    ProductRow {
        scraped_at: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        section: section.to_string(),
        subcategory: subcat.to_string(),
        name: find_text(card, &sel.name).unwrap_or_default(),
        price: find_text(card, &sel.price).unwrap_or_default(),
        rating,
        image_url: find_attr(card, &sel.image, "src").unwrap_or_default(),
        product_url: find_attr(card, &sel.link, "href").unwrap_or_default(),
    }
}

/// Extracts up to `cap` product rows from a search-results snapshot, in DOM
/// order, labelled with the supplied section/subcategory.
pub fn scrape_listing(html: &str, section: &str, subcat: &str, cap: usize) -> Vec<ProductRow> {
    let document = Html::parse_document(html);
    let sel = card_selectors();

    document
        .select(&sel.card)
        .take(cap)
        .map(|card| extract_row(card, section, subcat))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_html(name: &str, price: &str, rating_style: Option<&str>) -> String {
        let stars = rating_style
            .map(|s| format!(r#"<span class="filled-stars" style="{}"></span>"#, s))
            .unwrap_or_default();
        format!(
            r#"<div class="product-tuple-listing">
                 <a href="https://www.snapdeal.com/product/{name}">
                   <img src="https://img.snapdeal.com/{name}.jpg" />
                   <p class="product-title">{name}</p>
                   <span class="product-price">{price}</span>
                   {stars}
                 </a>
               </div>"#
        )
    }

    #[test]
    fn test_rating_from_percent_style() {
        assert_eq!(parse_rating_from_style("width: 80%"), Some(4.0));
        assert_eq!(parse_rating_from_style("width:100%"), Some(5.0));
        assert_eq!(parse_rating_from_style("width: 66.6%"), Some(3.3));
        assert_eq!(parse_rating_from_style("width: 0%"), Some(0.0));
    }

    #[test]
    fn test_rating_without_percent() {
        assert_eq!(parse_rating_from_style(""), None);
        assert_eq!(parse_rating_from_style("display: none"), None);
        assert_eq!(parse_rating_from_style("width: many"), None);
    }

    #[test]
    fn test_clean_int() {
        assert_eq!(clean_int("Rs. 499 only"), 499);
        assert_eq!(clean_int("1,299"), 1);
        assert_eq!(clean_int("no digits here"), 0);
        assert_eq!(clean_int(""), 0);
    }

    #[test]
    fn test_find_text_distinguishes_absent_from_blank() {
        let sel = card_selectors();
        let blank = Html::parse_document(
            r#"<div class="product-tuple-listing"><p class="product-title">  </p></div>"#,
        );
        let card = blank.select(&sel.card).next().unwrap();
        assert_eq!(find_text(card, &sel.name), Some(String::new()));
        assert_eq!(find_text(card, &sel.price), None);
        assert_eq!(find_attr(card, &sel.image, "src"), None);
    }

    #[test]
    fn test_listing_extraction() {
        let html = format!(
            "<html><body>{}{}{}</body></html>",
            card_html("A", "₹100", None),
            card_html("B", "₹200", None),
            card_html("C", "₹300", None),
        );

        let rows = scrape_listing(&html, "Footwear", "Footwear", 10);
        assert_eq!(rows.len(), 3);

        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);

        for (row, price) in rows.iter().zip(["₹100", "₹200", "₹300"]) {
            assert_eq!(row.price, price);
            assert_eq!(row.rating, None);
            assert_eq!(row.section, "Footwear");
            assert_eq!(row.subcategory, "Footwear");
            assert!(!row.scraped_at.is_empty());
        }
    }

    #[test]
    fn test_listing_cap_preserves_dom_order() {
        let cards: String = (0..25)
            .map(|i| card_html(&format!("P{i:02}"), "₹1", None))
            .collect();
        let html = format!("<html><body>{cards}</body></html>");

        let rows = scrape_listing(&html, "Accessories", "Accessories", 10);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].name, "P00");
        assert_eq!(rows[9].name, "P09");
    }

    #[test]
    fn test_card_with_rating_and_urls() {
        let html = card_html("Shoe", "₹999", Some("width: 83%"));
        let rows = scrape_listing(&html, "Footwear", "Footwear", 10);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].rating, Some(4.2));
        assert_eq!(rows[0].image_url, "https://img.snapdeal.com/Shoe.jpg");
        assert_eq!(
            rows[0].product_url,
            "https://www.snapdeal.com/product/Shoe"
        );
    }

    #[test]
    fn test_card_with_missing_fields() {
        let html = r#"<div class="product-tuple-listing"></div>"#;
        let rows = scrape_listing(html, "S", "S", 10);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "");
        assert_eq!(rows[0].price, "");
        assert_eq!(rows[0].rating, None);
        assert_eq!(rows[0].image_url, "");
        assert_eq!(rows[0].product_url, "");
    }
}
