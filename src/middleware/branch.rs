// src/middleware/branch.rs

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use uuid::Uuid;

use crate::common::error::ApiError;

// O nome do nosso cabeçalho HTTP customizado
const BRANCH_ID_HEADER: &str = "x-branch-id";

// O extrator de contexto de sucursal.
// Ele armazena o UUID da sucursal que o utilizador quer aceder.
#[derive(Debug, Clone)]
pub struct BranchContext(pub Uuid);

impl<S> FromRequestParts<S> for BranchContext
where
    S: Send + Sync,
{
    // Usamos ApiError como rejeição, pois ele já implementa IntoResponse
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        // Tenta ler o cabeçalho X-Branch-Id
        let header_value = parts.headers.get(BRANCH_ID_HEADER);

        match header_value {
            Some(value) => {
                // Tenta converter o valor do cabeçalho para uma string
                let value_str = value.to_str().map_err(|_| ApiError::simple(
                    StatusCode::BAD_REQUEST,
                    "El encabezado X-Branch-Id contiene caracteres inválidos.".to_string(),
                ))?;

                // Tenta converter a string para um UUID
                let branch_id = Uuid::parse_str(value_str).map_err(|_| ApiError::simple(
                    StatusCode::BAD_REQUEST,
                    "Encabezado X-Branch-Id inválido (no es un UUID).".to_string(),
                ))?;

                Ok(BranchContext(branch_id))
            }
            None => Err(ApiError::simple(
                StatusCode::BAD_REQUEST,
                "El encabezado X-Branch-Id es obligatorio.".to_string(),
            )),
        }
    }
}
