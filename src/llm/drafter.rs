//! Email drafter
//!
//! Turns one extracted offer record into an application email by
//! prompting a chat provider with a fixed AIDA-structured template.

use std::sync::Arc;

use tracing::info;

use crate::core::{Message, OfferDetail, Result};
use crate::llm::traits::ChatProvider;

/// Fixed system instruction sent with every draft request
pub const SYSTEM_INSTRUCTION: &str =
    "Eres un asistente que genera correos formales siguiendo la estructura AIDA.";

/// Drafts application emails from offer records
pub struct EmailDrafter {
    provider: Arc<dyn ChatProvider>,
}

impl EmailDrafter {
    /// Create a drafter backed by the given provider
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    /// Build the AIDA prompt for an offer
    pub fn build_prompt(offer: &OfferDetail) -> String {
        format!(
            "Genera un correo formal siguiendo el formato AIDA para postularme a la siguiente oferta de trabajo:\n\
             \n\
             - Empresa: {empresa}\n\
             - Título del puesto: {titulo}\n\
             - Descripción del puesto: {descripcion}\n\
             \n\
             Estructura del correo (AIDA):\n\
             1. **Atención**: Captura la atención del reclutador de forma atractiva.\n\
             2. **Interés**: Desarrolla el interés destacando cómo mis habilidades y experiencia se alinean con la oferta de trabajo.\n\
             3. **Deseo**: Genera deseo mostrando cómo mi contribución puede beneficiar a la empresa.\n\
             4. **Acción**: Termina con una llamada a la acción, como expresar mi disposición para una entrevista.\n\
             \n\
             Mi nombre es [mi nombre] y tengo experiencia relevante en este sector. Por favor, utiliza un tono profesional y cortés, y sigue la estructura AIDA al escribir el correo.",
            empresa = offer.empresa,
            titulo = offer.titulo,
            descripcion = offer.descripcion,
        )
    }

    /// Request a drafted email for the offer
    ///
    /// Service failures and malformed responses propagate unhandled.
    pub async fn draft(&self, offer: &OfferDetail) -> Result<String> {
        let messages = vec![
            Message::system(SYSTEM_INSTRUCTION),
            Message::user(Self::build_prompt(offer)),
        ];

        info!(provider = self.provider.name(), "requesting email draft");
        let email = self.provider.chat(&messages).await?;
        Ok(email.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StubProvider;

    #[async_trait]
    impl ChatProvider for StubProvider {
        async fn chat(&self, messages: &[Message]) -> Result<String> {
            assert_eq!(messages.len(), 2);
            assert_eq!(messages[0].role, "system");
            assert_eq!(messages[1].role, "user");
            Ok("  Estimado equipo de Acme: quisiera postular al cargo.  ".to_string())
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    fn offer() -> OfferDetail {
        OfferDetail {
            titulo: "Dev".to_string(),
            empresa: "Acme".to_string(),
            actividad: String::new(),
            descripcion: "Build things".to_string(),
            ubicacion: String::new(),
            remuneracion: String::new(),
            jornada: String::new(),
            nivel: String::new(),
            experiencia: String::new(),
            contrato: String::new(),
            cargo: String::new(),
            origen: String::new(),
            practica: String::new(),
            fecha: String::new(),
            expiracion: String::new(),
        }
    }

    #[test]
    fn test_prompt_embeds_offer_fields() {
        let prompt = EmailDrafter::build_prompt(&offer());
        assert!(prompt.contains("- Empresa: Acme"));
        assert!(prompt.contains("- Título del puesto: Dev"));
        assert!(prompt.contains("- Descripción del puesto: Build things"));
        assert!(prompt.contains("**Atención**"));
        assert!(prompt.contains("**Acción**"));
    }

    #[tokio::test]
    async fn test_draft_returns_trimmed_completion() {
        let drafter = EmailDrafter::new(Arc::new(StubProvider));
        let email = drafter.draft(&offer()).await.unwrap();

        assert!(!email.is_empty());
        assert_eq!(email, "Estimado equipo de Acme: quisiera postular al cargo.");
        // the provider's output is returned, not an echo of the template
        assert_ne!(email, EmailDrafter::build_prompt(&offer()));
        assert!(!email.contains("Estructura del correo"));
    }
}
