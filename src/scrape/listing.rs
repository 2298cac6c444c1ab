//! Listing extractor
//!
//! Builds the board's search URL from caller-supplied parameters,
//! drives a browser session to it, and extracts up to
//! [`MAX_RESULTS`] offer summaries from the first result page.

use scraper::{ElementRef, Html};
use tracing::{info, warn};
use url::Url;

use crate::browser::BrowserSession;
use crate::core::{Config, OfferSummary, PostulaError, Result, SearchParams};
use crate::scrape::{css, element_text, text};

/// Result-row container on the listing page
pub const RESULT_ROW_SELECTOR: &str =
    ".row.margenVerticales.resultadoOfertas.noMargingLaterales.seccionOferta";

/// Heading the board renders when a query matches nothing
pub const NO_RESULTS_SELECTOR: &str = "#paginaOfertas > h3";

/// Exact message shown under the no-results heading
pub const NO_RESULTS_MESSAGE: &str = "No se encontraron resultados para su búsqueda.";

/// Hard cap on extracted rows; the page may list more
pub const MAX_RESULTS: usize = 5;

// Fixed pagination/sort parameters of the search endpoint
const PAGE_NUMBER: &str = "1";
const PAGE_SIZE: &str = "10";
const TOTAL_ACTIVE_OFFERS: &str = "6188";

/// Assemble the search query URL, percent-encoding every caller field
///
/// Parameter order follows the board's own search form.
pub fn build_search_url(search_endpoint: &str, params: &SearchParams) -> Result<Url> {
    let mut url = Url::parse(search_endpoint)?;
    url.query_pairs_mut()
        .append_pair("mostrar", "empleo")
        .append_pair("textoLibre", &params.search_keyword)
        .append_pair("idRegion", &params.region)
        .append_pair("idNivelEducacional", &params.nivel_educativo)
        .append_pair("idTipoJornada", &params.jornada_laboral)
        .append_pair("fechaIniPublicacion", &params.fecha_publicacion)
        .append_pair("numPaginaRecuperar", PAGE_NUMBER)
        .append_pair("numResultadosPorPagina", PAGE_SIZE)
        .append_pair("clasificarYPaginar", "true")
        .append_pair("totalOfertasActivas", TOTAL_ACTIVE_OFFERS);
    Ok(url)
}

/// Fetch offer summaries for a JSON-encoded [`SearchParams`] value
///
/// Returns an empty vector when the board reports no matches. The
/// browser session is released before the normal return on both
/// paths; error paths propagate without closing it.
pub fn fetch_listings(config: &Config, params_json: &str) -> Result<Vec<OfferSummary>> {
    let params: SearchParams = serde_json::from_str(params_json)?;
    let base = Url::parse(&config.board.base_url)?;
    let url = build_search_url(&config.search_url(), &params)?;
    info!(url = %url, "listing query");

    let session = BrowserSession::open(&config.browser)?;
    session.goto(url.as_str())?;
    session.wait_for(RESULT_ROW_SELECTOR)?;

    // The probe is a heuristic: a missing heading is read as a normal
    // result page, not as confirmation that results exist.
    if session.try_find(NO_RESULTS_SELECTOR).is_some() {
        if session.wait_for_text(NO_RESULTS_SELECTOR, NO_RESULTS_MESSAGE)? {
            info!("board reported no matches");
            session.close()?;
            return Ok(Vec::new());
        }
        warn!("no-results heading present without the expected message, continuing");
    }

    let html = session.content()?;
    let offers = parse_listings(&html, &base)?;
    info!(count = offers.len(), "extracted offer summaries");

    session.close()?;
    Ok(offers)
}

/// Extract offer summaries from listing-page HTML
///
/// Relative detail links are resolved against `base`.
pub fn parse_listings(html: &str, base: &Url) -> Result<Vec<OfferSummary>> {
    let document = Html::parse_document(html);
    let rows = css(RESULT_ROW_SELECTOR);

    document
        .select(&rows)
        .take(MAX_RESULTS)
        .enumerate()
        .map(|(index, row)| parse_row(index, row, base))
        .collect()
}

/// Whether the page carries the no-results heading with its message
pub fn has_no_results_banner(html: &str) -> bool {
    let document = Html::parse_document(html);
    document
        .select(&css(NO_RESULTS_SELECTOR))
        .next()
        .map(|h| element_text(&h).contains(NO_RESULTS_MESSAGE))
        .unwrap_or(false)
}

fn parse_row(index: usize, row: ElementRef<'_>, base: &Url) -> Result<OfferSummary> {
    let empresa_raw = field_text(row, "datosEmpresaOferta", index)?;

    let titulo_el = find_field(row, "tituloOferta", index)?;
    let titulo_raw = element_text(&titulo_el);
    let anchor = titulo_el.select(&css("a")).next().ok_or_else(|| {
        PostulaError::extraction(format!("offer {}: title carries no link anchor", index))
    })?;
    let href = anchor.value().attr("href").ok_or_else(|| {
        PostulaError::extraction(format!("offer {}: title anchor has no href", index))
    })?;
    let link = base.join(href)?.to_string();

    Ok(OfferSummary {
        index,
        datos_empresa_oferta: text::first_segment(&empresa_raw),
        titulo_oferta: text::first_segment(&titulo_raw),
        descripcion_oferta: text::first_segment(&field_text(row, "descripcionOferta", index)?),
        fecha_oferta: text::first_segment(&field_text(row, "fechaOferta", index)?),
        link,
        ubicacion_oferta: text::last_segment(&empresa_raw),
    })
}

fn find_field<'a>(row: ElementRef<'a>, class: &str, index: usize) -> Result<ElementRef<'a>> {
    row.select(&css(&format!(".{}", class)))
        .next()
        .ok_or_else(|| PostulaError::extraction(format!("offer {}: missing '{}'", index, class)))
}

fn field_text(row: ElementRef<'_>, class: &str, index: usize) -> Result<String> {
    Ok(element_text(&find_field(row, class, index)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SearchParams {
        SearchParams {
            search_keyword: "desarrollador".to_string(),
            region: "378".to_string(),
            nivel_educativo: "5".to_string(),
            jornada_laboral: "9".to_string(),
            fecha_publicacion: "22/11/2024".to_string(),
        }
    }

    fn base() -> Url {
        Url::parse("https://www.bne.cl").unwrap()
    }

    fn offer_row(n: usize) -> String {
        format!(
            r#"<div class="row margenVerticales resultadoOfertas noMargingLaterales seccionOferta">
                 <div class="datosEmpresaOferta">Empresa {n} SpA     Santiago, Región Metropolitana</div>
                 <div class="tituloOferta"><a href="/oferta/2024-10000{n}">Oferta {n}     texto envuelto</a></div>
                 <div class="descripcionOferta">Descripción {n}     relleno</div>
                 <div class="fechaOferta">2{n}/11/2024</div>
               </div>"#
        )
    }

    fn listing_page(rows: usize) -> String {
        let body: String = (0..rows).map(offer_row).collect();
        format!(r#"<html><body><div id="paginaOfertas">{}</div></body></html>"#, body)
    }

    #[test]
    fn test_search_url_has_each_field_once_in_order() {
        let url = build_search_url("https://www.bne.cl/ofertas", &params()).unwrap();
        let s = url.as_str();

        let names = [
            "mostrar=",
            "textoLibre=",
            "idRegion=",
            "idNivelEducacional=",
            "idTipoJornada=",
            "fechaIniPublicacion=",
            "numPaginaRecuperar=",
            "numResultadosPorPagina=",
            "clasificarYPaginar=",
            "totalOfertasActivas=",
        ];

        let mut last = 0;
        for name in names {
            assert_eq!(s.matches(name).count(), 1, "{} should appear once", name);
            let pos = s.find(name).unwrap();
            assert!(pos >= last, "{} out of order", name);
            last = pos;
        }
    }

    #[test]
    fn test_search_url_encodes_caller_fields() {
        let url = build_search_url("https://www.bne.cl/ofertas", &params()).unwrap();
        let s = url.as_str();
        assert!(s.contains("textoLibre=desarrollador"));
        assert!(s.contains("idRegion=378"));
        assert!(s.contains("fechaIniPublicacion=22%2F11%2F2024"));
        assert!(s.contains("numPaginaRecuperar=1"));
        assert!(s.contains("numResultadosPorPagina=10"));
        assert!(s.contains("clasificarYPaginar=true"));
        assert!(s.contains("totalOfertasActivas=6188"));
    }

    #[test]
    fn test_parse_listings_extracts_rows_in_page_order() {
        let offers = parse_listings(&listing_page(3), &base()).unwrap();

        assert_eq!(offers.len(), 3);
        for (i, offer) in offers.iter().enumerate() {
            assert_eq!(offer.index, i);
        }

        let first = &offers[0];
        assert_eq!(first.datos_empresa_oferta, "Empresa 0 SpA");
        assert_eq!(first.ubicacion_oferta, "Santiago, Región Metropolitana");
        assert_eq!(first.titulo_oferta, "Oferta 0");
        assert_eq!(first.descripcion_oferta, "Descripción 0");
        assert_eq!(first.fecha_oferta, "20/11/2024");
        assert_eq!(first.link, "https://www.bne.cl/oferta/2024-100000");
    }

    #[test]
    fn test_parse_listings_caps_at_five_rows() {
        let offers = parse_listings(&listing_page(8), &base()).unwrap();
        assert_eq!(offers.len(), MAX_RESULTS);
        assert_eq!(offers.last().unwrap().index, MAX_RESULTS - 1);
    }

    #[test]
    fn test_parse_listings_empty_page_yields_no_offers() {
        let offers = parse_listings(&listing_page(0), &base()).unwrap();
        assert!(offers.is_empty());
    }

    #[test]
    fn test_parse_listings_missing_field_is_fatal() {
        let html = r#"<html><body>
            <div class="row margenVerticales resultadoOfertas noMargingLaterales seccionOferta">
              <div class="datosEmpresaOferta">Empresa</div>
              <div class="descripcionOferta">Descripción</div>
              <div class="fechaOferta">22/11/2024</div>
            </div>
        </body></html>"#;

        let err = parse_listings(html, &base()).unwrap_err();
        assert!(matches!(err, PostulaError::Extraction(_)));
        assert!(err.to_string().contains("tituloOferta"));
    }

    #[test]
    fn test_no_results_banner_detection() {
        let html = format!(
            r#"<html><body><div id="paginaOfertas"><h3>{}</h3></div></body></html>"#,
            NO_RESULTS_MESSAGE
        );
        assert!(has_no_results_banner(&html));
        assert!(!has_no_results_banner(&listing_page(1)));
    }
}
