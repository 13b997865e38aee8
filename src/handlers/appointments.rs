// src/handlers/appointments.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{branch::BranchContext, i18n::Locale},
    models::appointment::{
        Appointment, AvailabilityParams, CreateAppointmentPayload, ListAppointmentsParams,
        RescheduleAppointmentPayload, TimeRange, UpdateStatusPayload,
    },
};

// POST /api/appointments
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = "Appointments",
    request_body = CreateAppointmentPayload,
    responses(
        (status = 201, description = "Turno criado", body = Appointment),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "Horário indisponível")
    ),
    params(("x-branch-id" = Uuid, Header, description = "ID da Sucursal")),
    security(("api_jwt" = []))
)]
pub async fn create_appointment(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
    Json(payload): Json<CreateAppointmentPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let appointment = app_state
        .appointment_service
        .create_appointment(branch.0, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

// GET /api/appointments?date=...&barberId=...
#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = "Appointments",
    responses(
        (status = 200, description = "Agenda do dia", body = Vec<Appointment>)
    ),
    params(
        ("x-branch-id" = Uuid, Header, description = "ID da Sucursal"),
        ListAppointmentsParams
    ),
    security(("api_jwt" = []))
)]
pub async fn list_appointments(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
    Query(params): Query<ListAppointmentsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let appointments = app_state
        .appointment_service
        .list_for_day(branch.0, params.date, params.barber_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(appointments)))
}

// GET /api/appointments/availability
// Os horários livres do barbeiro no dia. Sem os parâmetros obrigatórios
// a resposta é uma lista vazia, não um erro.
#[utoipa::path(
    get,
    path = "/api/appointments/availability",
    tag = "Appointments",
    responses(
        (status = 200, description = "Horários livres, em ordem crescente", body = Vec<TimeRange>)
    ),
    params(
        ("x-branch-id" = Uuid, Header, description = "ID da Sucursal"),
        AvailabilityParams
    ),
    security(("api_jwt" = []))
)]
pub async fn get_availability(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
    Query(params): Query<AvailabilityParams>,
) -> Result<impl IntoResponse, ApiError> {
    let slots = app_state
        .appointment_service
        .availability(branch.0, &params)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(slots)))
}

// PUT /api/appointments/{id} (remarcação)
#[utoipa::path(
    put,
    path = "/api/appointments/{id}",
    tag = "Appointments",
    request_body = RescheduleAppointmentPayload,
    responses(
        (status = 200, description = "Turno remarcado", body = Appointment),
        (status = 404, description = "Turno não encontrado"),
        (status = 409, description = "Horário indisponível")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do Turno"),
        ("x-branch-id" = Uuid, Header, description = "ID da Sucursal")
    ),
    security(("api_jwt" = []))
)]
pub async fn reschedule_appointment(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
    Path(appointment_id): Path<Uuid>,
    Json(payload): Json<RescheduleAppointmentPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let appointment = app_state
        .appointment_service
        .reschedule(branch.0, appointment_id, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(appointment)))
}

// PATCH /api/appointments/{id}/status
#[utoipa::path(
    patch,
    path = "/api/appointments/{id}/status",
    tag = "Appointments",
    request_body = UpdateStatusPayload,
    responses(
        (status = 200, description = "Status atualizado (concluir lança a cobrança no caixa)", body = Appointment),
        (status = 404, description = "Turno não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do Turno"),
        ("x-branch-id" = Uuid, Header, description = "ID da Sucursal")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_status(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
    Path(appointment_id): Path<Uuid>,
    Json(payload): Json<UpdateStatusPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let appointment = app_state
        .appointment_service
        .set_status(branch.0, appointment_id, payload.status)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(appointment)))
}

// DELETE /api/appointments/{id} (cancela, não apaga)
#[utoipa::path(
    delete,
    path = "/api/appointments/{id}",
    tag = "Appointments",
    responses(
        (status = 200, description = "Turno cancelado", body = Appointment),
        (status = 404, description = "Turno não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do Turno"),
        ("x-branch-id" = Uuid, Header, description = "ID da Sucursal")
    ),
    security(("api_jwt" = []))
)]
pub async fn cancel_appointment(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
    Path(appointment_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let appointment = app_state
        .appointment_service
        .cancel(branch.0, appointment_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(appointment)))
}
