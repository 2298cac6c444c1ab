//! Text-normalization helpers for board pages
//!
//! The board pads wrapped text with runs of 5 spaces and renders many
//! fields as "label: value" lines; these helpers undo both quirks.

/// Padding run the board inserts between a field and its overflow text
pub const PADDING: &str = "     ";

/// First padded segment of a field, trimmed
pub fn first_segment(text: &str) -> String {
    text.trim()
        .split(PADDING)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Last padded segment of a field, trimmed
pub fn last_segment(text: &str) -> String {
    text.trim()
        .rsplit(PADDING)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Everything after the final colon, trimmed
///
/// Text with no colon comes back whole, trimmed.
pub fn after_last_colon(text: &str) -> String {
    text.rsplit(':').next().unwrap_or_default().trim().to_string()
}

/// First `limit` whitespace-separated tokens, joined by single spaces
pub fn truncate_words(text: &str, limit: usize) -> String {
    text.split_whitespace()
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
}
