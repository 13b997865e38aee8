// src/models/branch.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Uma sucursal da barbearia
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,

    #[schema(example = "MiBarber Centro")]
    pub name: String,

    #[schema(example = "Av. Corrientes 1234")]
    pub address: Option<String>,

    #[schema(example = "+54 11 4444-5555")]
    pub phone: Option<String>,

    // Passo, em minutos, entre horários candidatos da agenda.
    // Sempre explícito: o sistema nunca infere a granularidade.
    #[schema(example = 30)]
    pub slot_granularity_minutes: i32,

    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBranchPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres."))]
    #[schema(example = "MiBarber Centro")]
    pub name: String,

    pub address: Option<String>,
    pub phone: Option<String>,

    #[validate(range(min = 5, max = 120, message = "granularity_out_of_range"))]
    #[schema(example = 30)]
    pub slot_granularity_minutes: i32,
}
