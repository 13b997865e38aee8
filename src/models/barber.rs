// src/models/barber.rs

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Barber {
    pub id: Uuid,

    #[schema(ignore)]
    pub branch_id: Uuid,

    #[schema(example = "Lucas Pereyra")]
    pub full_name: String,

    #[schema(example = "+54 9 11 6666-7777")]
    pub phone: Option<String>,

    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

// Horário de trabalho de um dia da semana (0 = domingo ... 6 = sábado).
// Dia sem registro = barbeiro não atende nesse dia.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BarberSchedule {
    pub id: Uuid,

    #[schema(ignore)]
    pub barber_id: Uuid,

    #[schema(example = 1)]
    pub weekday: i16,

    #[schema(value_type = String, example = "09:00:00")]
    pub start_time: NaiveTime,

    #[schema(value_type = String, example = "18:00:00")]
    pub end_time: NaiveTime,
}

// Bloqueio de agenda: dia inteiro (sem horários) ou parcial (com ambos)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BarberBlock {
    pub id: Uuid,

    #[schema(ignore)]
    pub barber_id: Uuid,

    #[schema(value_type = String, format = Date, example = "2025-03-15")]
    pub date: NaiveDate,

    #[schema(value_type = Option<String>, example = "14:00:00")]
    pub start_time: Option<NaiveTime>,

    #[schema(value_type = Option<String>, example = "15:00:00")]
    pub end_time: Option<NaiveTime>,

    #[schema(example = "Trámite personal")]
    pub reason: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl BarberBlock {
    pub fn is_full_day(&self) -> bool {
        self.start_time.is_none() && self.end_time.is_none()
    }
}

// --- Payloads ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBarberPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres."))]
    #[schema(example = "Lucas Pereyra")]
    pub full_name: String,

    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBarberPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres."))]
    pub full_name: String,

    pub phone: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntryPayload {
    #[validate(range(min = 0, max = 6, message = "weekday_out_of_range"))]
    #[schema(example = 1)]
    pub weekday: i16,

    #[schema(value_type = String, example = "09:00:00")]
    pub start_time: NaiveTime,

    #[schema(value_type = String, example = "18:00:00")]
    pub end_time: NaiveTime,
}

// Substitui a grade completa do barbeiro de uma vez (a UI manda a semana inteira)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSchedulePayload {
    #[validate(nested)]
    pub entries: Vec<ScheduleEntryPayload>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlockPayload {
    #[schema(value_type = String, format = Date, example = "2025-03-15")]
    pub date: NaiveDate,

    // Ambos ausentes = bloqueio de dia inteiro
    #[schema(value_type = Option<String>, example = "14:00:00")]
    pub start_time: Option<NaiveTime>,

    #[schema(value_type = Option<String>, example = "15:00:00")]
    pub end_time: Option<NaiveTime>,

    pub reason: Option<String>,
}
