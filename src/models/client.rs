// src/models/client.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,

    #[schema(ignore)]
    pub branch_id: Uuid,

    #[schema(example = "María da Silva")]
    pub full_name: String,

    // O telefone é obrigatório: é o canal do lembrete de WhatsApp
    #[schema(example = "+54 9 11 5555-1234")]
    pub phone: String,

    #[schema(example = "maria@email.com")]
    pub email: Option<String>,

    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres."))]
    #[schema(example = "María da Silva")]
    pub full_name: String,

    #[validate(length(min = 6, message = "invalid_phone"))]
    #[schema(example = "+54 9 11 5555-1234")]
    pub phone: String,

    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,

    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres."))]
    pub full_name: String,

    #[validate(length(min = 6, message = "invalid_phone"))]
    pub phone: String,

    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,

    pub notes: Option<String>,
}
