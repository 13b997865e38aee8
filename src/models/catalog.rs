// src/models/catalog.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Um serviço do catálogo da sucursal (corte, barba, combo...)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub id: Uuid,

    #[schema(ignore)]
    pub branch_id: Uuid,

    #[schema(example = "Corte clásico")]
    pub name: String,

    // Duração padrão do serviço: é ela que dita o tamanho do slot
    #[schema(example = 30)]
    pub duration_minutes: i32,

    #[schema(example = "3500.00")]
    pub price: Decimal,

    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServicePayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres."))]
    #[schema(example = "Corte clásico")]
    pub name: String,

    #[validate(range(min = 5, max = 480, message = "duration_out_of_range"))]
    #[schema(example = 30)]
    pub duration_minutes: i32,

    #[validate(custom(function = crate::models::cash::validate_non_negative_amount))]
    #[schema(example = "3500.00")]
    pub price: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServicePayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres."))]
    pub name: String,

    #[validate(range(min = 5, max = 480, message = "duration_out_of_range"))]
    pub duration_minutes: i32,

    #[validate(custom(function = crate::models::cash::validate_non_negative_amount))]
    pub price: Decimal,

    pub is_active: bool,
}
