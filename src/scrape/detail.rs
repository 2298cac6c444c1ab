//! Detail extractor
//!
//! Navigates to a single offer's detail page and maps its fixed panel
//! structure into an [`OfferDetail`] record. The expected structure is
//! a declarative field-path table (panel index, selector, position,
//! extraction rule), so tests can run against fixture HTML instead of
//! a live browser.

use scraper::Html;
use serde_json::{Map, Value};
use tracing::info;

use crate::browser::BrowserSession;
use crate::core::{Config, OfferDetail, PostulaError, Result};
use crate::scrape::{css, element_text, text};

/// Title anchor element; its presence marks the page as loaded
pub const TITLE_SELECTOR: &str = "#nombreOferta";

/// Panel body containers, in document order; index 0 is unused
pub const PANEL_SELECTOR: &str = ".panel-body";

/// Number of panels the page must carry
pub const PANEL_COUNT: usize = 5;

/// Titles are reduced to this many whitespace-separated tokens
pub const TITLE_WORD_LIMIT: usize = 10;

/// How a field's raw text becomes its stored value
#[derive(Debug, Clone, Copy)]
enum Rule {
    /// Trimmed verbatim text
    Trimmed,
    /// Substring after the last colon, trimmed
    AfterLastColon,
}

/// One entry of the detail page's structure table
struct FieldPath {
    field: &'static str,
    panel: usize,
    selector: &'static str,
    nth: usize,
    rule: Rule,
}

const FIELD_PATHS: &[FieldPath] = &[
    FieldPath { field: "empresa", panel: 1, selector: ".col-sm-12", nth: 0, rule: Rule::AfterLastColon },
    FieldPath { field: "actividad", panel: 1, selector: ".col-sm-12", nth: 1, rule: Rule::AfterLastColon },
    FieldPath { field: "descripcion", panel: 2, selector: ".col-sm-12", nth: 0, rule: Rule::Trimmed },
    FieldPath { field: "ubicacion", panel: 2, selector: ".col-sm-3", nth: 0, rule: Rule::Trimmed },
    FieldPath { field: "remuneracion", panel: 2, selector: ".col-sm-3", nth: 1, rule: Rule::Trimmed },
    FieldPath { field: "jornada", panel: 2, selector: ".col-sm-3", nth: 2, rule: Rule::Trimmed },
    FieldPath { field: "fecha", panel: 2, selector: "span", nth: 1, rule: Rule::Trimmed },
    FieldPath { field: "expiracion", panel: 2, selector: "span", nth: 2, rule: Rule::Trimmed },
    FieldPath { field: "nivel", panel: 3, selector: ".col-sm-8", nth: 0, rule: Rule::AfterLastColon },
    FieldPath { field: "experiencia", panel: 3, selector: ".col-sm-4", nth: 0, rule: Rule::AfterLastColon },
    FieldPath { field: "contrato", panel: 4, selector: ".col-sm-6", nth: 0, rule: Rule::AfterLastColon },
    FieldPath { field: "cargo", panel: 4, selector: ".col-sm-6", nth: 1, rule: Rule::AfterLastColon },
    FieldPath { field: "origen", panel: 4, selector: ".col-sm-6", nth: 2, rule: Rule::AfterLastColon },
    FieldPath { field: "practica", panel: 4, selector: ".col-sm-6", nth: 3, rule: Rule::AfterLastColon },
];

/// Fetch the full record for one offer code
///
/// Waits up to the configured bound for the title anchor; a structural
/// deviation from the field-path table is fatal. The session is
/// released before the normal return.
pub fn fetch_detail(config: &Config, offer_code: &str) -> Result<OfferDetail> {
    let url = config.detail_url(offer_code);
    info!(url = %url, "detail query");

    let session = BrowserSession::open(&config.browser)?;
    session.goto(&url)?;
    session.wait_for(TITLE_SELECTOR)?;

    let html = session.content()?;
    let detail = parse_detail(&html)?;
    info!(titulo = %detail.titulo, "extracted offer detail");

    session.close()?;
    Ok(detail)
}

/// Extract an [`OfferDetail`] from detail-page HTML
pub fn parse_detail(html: &str) -> Result<OfferDetail> {
    let document = Html::parse_document(html);

    let title_el = document
        .select(&css(TITLE_SELECTOR))
        .next()
        .ok_or_else(|| PostulaError::extraction("detail page has no title anchor"))?;
    let titulo = text::truncate_words(&element_text(&title_el), TITLE_WORD_LIMIT);

    let panels: Vec<_> = document.select(&css(PANEL_SELECTOR)).collect();
    if panels.len() < PANEL_COUNT {
        return Err(PostulaError::extraction(format!(
            "expected {} panels, page has {}",
            PANEL_COUNT,
            panels.len()
        )));
    }

    let mut fields = Map::new();
    fields.insert("titulo".to_string(), Value::String(titulo));

    for path in FIELD_PATHS {
        let element = panels[path.panel]
            .select(&css(path.selector))
            .nth(path.nth)
            .ok_or_else(|| {
                PostulaError::extraction(format!(
                    "panel {}: no '{}' at position {} for field '{}'",
                    path.panel, path.selector, path.nth, path.field
                ))
            })?;

        let raw = element_text(&element);
        let value = match path.rule {
            Rule::Trimmed => raw,
            Rule::AfterLastColon => text::after_last_colon(&raw),
        };
        fields.insert(path.field.to_string(), Value::String(value));
    }

    let detail: OfferDetail = serde_json::from_value(Value::Object(fields))?;
    Ok(detail)
}
