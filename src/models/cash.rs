// src/models/cash.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "movement_kind", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementKind {
    Income,  // Entrada
    Expense, // Saída
}

// --- Structs ---

// Um movimento do caixa. O sinal mora no `kind`: amount é sempre >= 0.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CashMovement {
    pub id: Uuid,

    #[schema(ignore)]
    pub branch_id: Uuid,

    pub occurred_at: DateTime<Utc>,

    #[schema(example = "3500.00")]
    pub amount: Decimal,

    pub kind: MovementKind,

    #[schema(example = "Cobro de servicio (corte clásico)")]
    pub description: String,

    // Vínculos opcionais, usados pelos filtros de texto da tela de caixa
    pub appointment_id: Option<Uuid>,
    pub client_id: Option<Uuid>,

    pub created_at: DateTime<Utc>,
}

// Filtro da listagem de movimentos. Campos ausentes não restringem nada;
// os presentes combinam com AND.
#[derive(Debug, Clone, Default)]
pub struct MovementFilter {
    pub date_from: Option<NaiveDate>,
    // Inclusivo do dia inteiro (a borda avança um dia e compara com `<`)
    pub date_to: Option<NaiveDate>,
    // Substring, sem diferenciar maiúsculas, contra o id do movimento
    // e o id do turno vinculado
    pub reference: Option<String>,
    // Substring, sem diferenciar maiúsculas, contra o id do cliente
    pub client: Option<String>,
}

// Totais derivados de um conjunto de movimentos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CashTotals {
    #[schema(example = "100.00")]
    pub income: Decimal,

    #[schema(example = "40.00")]
    pub expense: Decimal,

    #[schema(example = "60.00")]
    pub balance: Decimal,
}

// Resumo do período com comparação contra o período anterior de mesma
// duração. As variações percentuais são `null` quando o denominador do
// período anterior é zero -- indefinido, não infinito.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CashSummary {
    pub current: CashTotals,
    pub previous: CashTotals,

    #[schema(value_type = Option<String>, example = "25.00")]
    pub income_change_pct: Option<Decimal>,

    #[schema(value_type = Option<String>, example = "-10.00")]
    pub expense_change_pct: Option<Decimal>,

    #[schema(value_type = Option<String>, example = "40.00")]
    pub balance_change_pct: Option<Decimal>,
}

// --- Payloads / Query params ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovementPayload {
    #[validate(custom(function = validate_non_negative_amount))]
    #[schema(example = "3500.00")]
    pub amount: Decimal,

    pub kind: MovementKind,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Venta de pomada")]
    pub description: String,

    // Ausente = agora
    pub occurred_at: Option<DateTime<Utc>>,

    pub appointment_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListMovementsParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub reference: Option<String>,
    pub client: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SummaryParams {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

// O valor nunca carrega sinal: negativo é erro de entrada, não "saída"
pub fn validate_non_negative_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() {
        return Err(ValidationError::new("negative_amount"));
    }
    Ok(())
}
