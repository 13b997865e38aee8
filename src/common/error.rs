// src/common/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::common::i18n::I18nStore;
use crate::middleware::i18n::Locale;

// Nosso tipo de erro interno, com `thiserror` para melhor ergonomia.
// As mensagens aqui são técnicas; a mensagem para o usuário final sai
// do catálogo i18n via `to_api_error`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Entrada malformada rejeitada pelo núcleo (intervalo invertido,
    // duração não-positiva, valor negativo). Nunca coagida em silêncio.
    #[error("Entrada inválida: {0}")]
    InvalidInput(String),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Acesso negado")]
    Forbidden,

    #[error("{0} não encontrado")]
    NotFound(&'static str),

    // O horário pedido já está ocupado (conflito de agenda)
    #[error("Horário indisponível")]
    SlotUnavailable,

    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    // Traduz o erro interno para a resposta HTTP, já com a mensagem
    // no idioma do cliente.
    pub fn to_api_error(&self, locale: &Locale, store: &I18nStore) -> ApiError {
        match self {
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                ApiError {
                    status: StatusCode::BAD_REQUEST,
                    message: store.msg(&locale.0, "validation"),
                    details: Some(details),
                }
            }
            AppError::InvalidInput(detail) => ApiError {
                status: StatusCode::BAD_REQUEST,
                message: format!("{}: {}", store.msg(&locale.0, "invalid_input"), detail),
                details: None,
            },
            AppError::EmailAlreadyExists => {
                ApiError::simple(StatusCode::CONFLICT, store.msg(&locale.0, "email_exists"))
            }
            AppError::InvalidCredentials => ApiError::simple(
                StatusCode::UNAUTHORIZED,
                store.msg(&locale.0, "invalid_credentials"),
            ),
            AppError::InvalidToken => ApiError::simple(
                StatusCode::UNAUTHORIZED,
                store.msg(&locale.0, "invalid_token"),
            ),
            AppError::Forbidden => {
                ApiError::simple(StatusCode::FORBIDDEN, store.msg(&locale.0, "forbidden"))
            }
            AppError::NotFound(_) => {
                ApiError::simple(StatusCode::NOT_FOUND, store.msg(&locale.0, "not_found"))
            }
            AppError::SlotUnavailable => ApiError::simple(
                StatusCode::CONFLICT,
                store.msg(&locale.0, "slot_unavailable"),
            ),
            // Todos os outros (banco, bcrypt, jwt interno, anyhow) viram 500.
            // O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
            e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                ApiError::simple(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    store.msg(&locale.0, "internal_error"),
                )
            }
        }
    }
}

// O erro "de borda": status + mensagem já traduzida, pronta para virar JSON.
// Também é usado como Rejection dos extratores (BranchContext, etc).
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<std::collections::HashMap<String, Vec<String>>>,
}

impl ApiError {
    pub fn simple(status: StatusCode, message: String) -> Self {
        Self { status, message, details: None }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => Json(json!({ "error": self.message, "details": details })),
            None => Json(json!({ "error": self.message })),
        };
        (self.status, body).into_response()
    }
}

// Fallback sem tradução, para os pontos (middleware) onde não há Locale.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(_) | AppError::InvalidInput(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::EmailAlreadyExists => (StatusCode::CONFLICT, self.to_string()),
            AppError::InvalidCredentials | AppError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            AppError::Forbidden => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::SlotUnavailable => (StatusCode::CONFLICT, self.to_string()),
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
