// src/common/i18n.rs

use std::collections::HashMap;

// Catálogo de mensagens por idioma. O produto é para o público
// hispanofalante, então "es" é o idioma padrão e o fallback final.
const DEFAULT_LANG: &str = "es";

type Catalog = HashMap<&'static str, &'static str>;

#[derive(Clone)]
pub struct I18nStore {
    languages: HashMap<&'static str, Catalog>,
}

impl I18nStore {
    pub fn new() -> Self {
        let mut languages = HashMap::new();

        // --- Espanhol (padrão) ---
        let mut es = Catalog::new();
        es.insert("validation", "Uno o más campos son inválidos.");
        es.insert("invalid_input", "Entrada inválida");
        es.insert("email_exists", "Este e-mail ya está en uso.");
        es.insert("invalid_credentials", "E-mail o contraseña inválidos.");
        es.insert("invalid_token", "Token de autenticación inválido o ausente.");
        es.insert("forbidden", "No tenés permiso para esta operación.");
        es.insert("not_found", "Recurso no encontrado.");
        es.insert("slot_unavailable", "El horario elegido ya no está disponible.");
        es.insert("internal_error", "Ocurrió un error inesperado.");
        languages.insert("es", es);

        // --- Inglês ---
        let mut en = Catalog::new();
        en.insert("validation", "One or more fields are invalid.");
        en.insert("invalid_input", "Invalid input");
        en.insert("email_exists", "This e-mail is already in use.");
        en.insert("invalid_credentials", "Invalid e-mail or password.");
        en.insert("invalid_token", "Missing or invalid authentication token.");
        en.insert("forbidden", "You do not have permission for this operation.");
        en.insert("not_found", "Resource not found.");
        en.insert("slot_unavailable", "The chosen time slot is no longer available.");
        en.insert("internal_error", "An unexpected error occurred.");
        languages.insert("en", en);

        // --- Português ---
        let mut pt = Catalog::new();
        pt.insert("validation", "Um ou mais campos são inválidos.");
        pt.insert("invalid_input", "Entrada inválida");
        pt.insert("email_exists", "Este e-mail já está em uso.");
        pt.insert("invalid_credentials", "E-mail ou senha inválidos.");
        pt.insert("invalid_token", "Token de autenticação inválido ou ausente.");
        pt.insert("forbidden", "Você não tem permissão para esta operação.");
        pt.insert("not_found", "Recurso não encontrado.");
        pt.insert("slot_unavailable", "O horário escolhido não está mais disponível.");
        pt.insert("internal_error", "Ocorreu um erro inesperado.");
        languages.insert("pt", pt);

        Self { languages }
    }

    // Busca a mensagem no idioma pedido, caindo para o espanhol se o
    // idioma (ou a chave nesse idioma) não existir no catálogo.
    pub fn msg(&self, lang: &str, key: &str) -> String {
        self.languages
            .get(lang)
            .and_then(|catalog| catalog.get(key))
            .or_else(|| {
                self.languages
                    .get(DEFAULT_LANG)
                    .and_then(|catalog| catalog.get(key))
            })
            .map(|m| (*m).to_string())
            .unwrap_or_else(|| key.to_string())
    }
}

impl Default for I18nStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_falls_back_to_spanish() {
        let store = I18nStore::new();
        assert_eq!(store.msg("de", "not_found"), store.msg("es", "not_found"));
    }

    #[test]
    fn unknown_key_returns_the_key_itself() {
        let store = I18nStore::new();
        assert_eq!(store.msg("es", "missing_key"), "missing_key");
    }
}
