//! Shared types used across Postula modules
//!
//! Contains the search parameters, extracted offer records, and chat
//! message structures.

use serde::{Deserialize, Serialize};

/// Search parameters for a listing query, decoded from caller JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    /// Free-text keyword
    #[serde(rename = "searchKeyword")]
    pub search_keyword: String,
    /// Region identifier
    pub region: String,
    /// Education-level identifier
    #[serde(rename = "nivelEducativo")]
    pub nivel_educativo: String,
    /// Work-schedule identifier
    #[serde(rename = "jornadaLaboral")]
    pub jornada_laboral: String,
    /// Earliest publication date, dd/mm/yyyy
    #[serde(rename = "fechaPublicacion")]
    pub fecha_publicacion: String,
}

/// One offer row from the listing page, at most 5 per query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferSummary {
    /// 0-based position in the result page
    pub index: usize,
    /// Company line, first padded segment
    #[serde(rename = "datosEmpresaOferta")]
    pub datos_empresa_oferta: String,
    /// Offer title, first padded segment
    #[serde(rename = "tituloOferta")]
    pub titulo_oferta: String,
    /// Short description
    #[serde(rename = "descripcionOferta")]
    pub descripcion_oferta: String,
    /// Publication date as shown on the page
    #[serde(rename = "fechaOferta")]
    pub fecha_oferta: String,
    /// Absolute URL of the detail page
    pub link: String,
    /// Trailing location segment of the company line
    #[serde(rename = "ubicacionOferta")]
    pub ubicacion_oferta: String,
}

/// Full record extracted from an offer detail page
///
/// The offer code is not retained here; it lives only in the URL used
/// to fetch the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferDetail {
    /// Title, reduced to its first 10 whitespace-separated tokens
    pub titulo: String,
    pub empresa: String,
    pub actividad: String,
    pub descripcion: String,
    pub ubicacion: String,
    pub remuneracion: String,
    pub jornada: String,
    pub nivel: String,
    pub experiencia: String,
    pub contrato: String,
    pub cargo: String,
    pub origen: String,
    pub practica: String,
    pub fecha: String,
    pub expiracion: String,
}

/// A message in a chat-completion conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender (user, assistant, system)
    pub role: String,
    /// Content of the message
    pub content: String,
}

impl Message {
    /// Create a new user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create a new system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_params_decode_board_keys() {
        let json = r#"{
            "searchKeyword": "desarrollador",
            "region": "378",
            "nivelEducativo": "5",
            "jornadaLaboral": "9",
            "fechaPublicacion": "22/11/2024"
        }"#;

        let params: SearchParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.search_keyword, "desarrollador");
        assert_eq!(params.region, "378");
        assert_eq!(params.nivel_educativo, "5");
        assert_eq!(params.jornada_laboral, "9");
        assert_eq!(params.fecha_publicacion, "22/11/2024");
    }

    #[test]
    fn test_offer_summary_serializes_board_keys() {
        let summary = OfferSummary {
            index: 0,
            datos_empresa_oferta: "Acme SpA".to_string(),
            titulo_oferta: "Desarrollador".to_string(),
            descripcion_oferta: "Backend".to_string(),
            fecha_oferta: "22/11/2024".to_string(),
            link: "https://www.bne.cl/oferta/2024-107738".to_string(),
            ubicacion_oferta: "Santiago".to_string(),
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["index"], 0);
        assert_eq!(value["datosEmpresaOferta"], "Acme SpA");
        assert_eq!(value["tituloOferta"], "Desarrollador");
        assert_eq!(value["descripcionOferta"], "Backend");
        assert_eq!(value["fechaOferta"], "22/11/2024");
        assert_eq!(value["ubicacionOferta"], "Santiago");
    }

    #[test]
    fn test_message_constructors() {
        let msg = Message::user("hola");
        assert_eq!(msg.role, "user");
        assert_eq!(msg.content, "hola");

        let msg = Message::system("instrucción");
        assert_eq!(msg.role, "system");
    }
}
