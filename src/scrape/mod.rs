//! Scraping and extraction module
//!
//! Maps the board's unstructured, paginated HTML into structured
//! records: listing rows into [`crate::core::OfferSummary`] values and
//! detail pages into [`crate::core::OfferDetail`] records.

pub mod detail;
pub mod listing;
pub mod text;

use scraper::{ElementRef, Selector};

pub use detail::fetch_detail;
pub use listing::fetch_listings;

/// Parse a CSS selector known to be valid at compile time
pub(crate) fn css(selector: &str) -> Selector {
    Selector::parse(selector).expect("valid selector literal")
}

/// Concatenated text content of an element, trimmed
pub(crate) fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
