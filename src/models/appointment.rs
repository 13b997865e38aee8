// src/models/appointment.rs

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "appointment_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Pending,   // Reservado, aguardando confirmação
    Confirmed, // Confirmado pelo cliente
    Completed, // Atendido (gera movimento de caixa)
    Cancelled, // Cancelado (não ocupa horário)
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,

    #[schema(ignore)]
    pub branch_id: Uuid,

    pub barber_id: Uuid,
    pub client_id: Uuid,
    pub service_id: Uuid,

    #[schema(value_type = String, format = Date, example = "2025-03-15")]
    pub date: NaiveDate,

    #[schema(value_type = String, example = "10:00:00")]
    pub start_time: NaiveTime,

    #[schema(example = 30)]
    pub duration_minutes: i32,

    pub status: AppointmentStatus,

    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Um intervalo semiaberto [start, end) dentro de um dia.
// Invariante: start < end (verificada pelo núcleo de disponibilidade).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    #[schema(value_type = String, example = "10:00:00")]
    pub start: NaiveTime,

    #[schema(value_type = String, example = "10:30:00")]
    pub end: NaiveTime,
}

// Consulta de disponibilidade montada por requisição; nunca persistida
#[derive(Debug, Clone)]
pub struct AvailabilityQuery {
    pub branch_id: Uuid,
    pub barber_id: Uuid,
    pub date: NaiveDate,
    pub service_duration: i32,
    pub exclude_appointment_id: Option<Uuid>,
}

// --- Payloads / Query params ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentPayload {
    pub barber_id: Uuid,
    pub client_id: Uuid,
    pub service_id: Uuid,

    #[schema(value_type = String, format = Date, example = "2025-03-15")]
    pub date: NaiveDate,

    #[schema(value_type = String, example = "10:00:00")]
    pub start_time: NaiveTime,

    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleAppointmentPayload {
    #[schema(value_type = String, format = Date, example = "2025-03-16")]
    pub date: NaiveDate,

    #[schema(value_type = String, example = "11:30:00")]
    pub start_time: NaiveTime,

    // Permite trocar de barbeiro junto com o horário
    pub barber_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusPayload {
    pub status: AppointmentStatus,
}

// Parâmetros da listagem do dia
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListAppointmentsParams {
    pub date: NaiveDate,
    pub barber_id: Option<Uuid>,
}

// Parâmetros da consulta de disponibilidade. Todos opcionais: sem os
// obrigatórios (barbeiro, data, serviço) a resposta é uma lista vazia,
// nunca um erro -- é o "ainda não há o que mostrar" da tela de agenda.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AvailabilityParams {
    pub barber_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub service_id: Option<Uuid>,
    pub exclude_id: Option<Uuid>,
}
