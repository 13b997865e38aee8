// src/handlers/barbers.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{branch::BranchContext, i18n::Locale},
    models::barber::{
        Barber, BarberBlock, BarberSchedule, CreateBarberPayload, CreateBlockPayload,
        UpdateBarberPayload, UpdateSchedulePayload,
    },
};

// =============================================================================
//  ÁREA 1: CADASTRO DE BARBEIROS
// =============================================================================

// POST /api/barbers
#[utoipa::path(
    post,
    path = "/api/barbers",
    tag = "Barbers",
    request_body = CreateBarberPayload,
    responses(
        (status = 201, description = "Barbeiro criado", body = Barber),
        (status = 400, description = "Dados inválidos")
    ),
    params(("x-branch-id" = Uuid, Header, description = "ID da Sucursal")),
    security(("api_jwt" = []))
)]
pub async fn create_barber(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
    Json(payload): Json<CreateBarberPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let barber = app_state
        .barber_service
        .create_barber(branch.0, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(barber)))
}

// GET /api/barbers
#[utoipa::path(
    get,
    path = "/api/barbers",
    tag = "Barbers",
    responses(
        (status = 200, description = "Lista de barbeiros da sucursal", body = Vec<Barber>)
    ),
    params(("x-branch-id" = Uuid, Header, description = "ID da Sucursal")),
    security(("api_jwt" = []))
)]
pub async fn list_barbers(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
) -> Result<impl IntoResponse, ApiError> {
    let barbers = app_state
        .barber_service
        .list_barbers(branch.0)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(barbers)))
}

// GET /api/barbers/{id}
#[utoipa::path(
    get,
    path = "/api/barbers/{id}",
    tag = "Barbers",
    responses(
        (status = 200, description = "Dados do barbeiro", body = Barber),
        (status = 404, description = "Barbeiro não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do Barbeiro"),
        ("x-branch-id" = Uuid, Header, description = "ID da Sucursal")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_barber(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
    Path(barber_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let barber = app_state
        .barber_service
        .get_barber(branch.0, barber_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(barber)))
}

// PUT /api/barbers/{id}
#[utoipa::path(
    put,
    path = "/api/barbers/{id}",
    tag = "Barbers",
    request_body = UpdateBarberPayload,
    responses(
        (status = 200, description = "Barbeiro atualizado", body = Barber),
        (status = 404, description = "Barbeiro não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do Barbeiro"),
        ("x-branch-id" = Uuid, Header, description = "ID da Sucursal")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_barber(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
    Path(barber_id): Path<Uuid>,
    Json(payload): Json<UpdateBarberPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let barber = app_state
        .barber_service
        .update_barber(branch.0, barber_id, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(barber)))
}

// DELETE /api/barbers/{id} (desativação lógica)
#[utoipa::path(
    delete,
    path = "/api/barbers/{id}",
    tag = "Barbers",
    responses(
        (status = 204, description = "Barbeiro desativado"),
        (status = 404, description = "Barbeiro não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do Barbeiro"),
        ("x-branch-id" = Uuid, Header, description = "ID da Sucursal")
    ),
    security(("api_jwt" = []))
)]
pub async fn deactivate_barber(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
    Path(barber_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .barber_service
        .deactivate_barber(branch.0, barber_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  ÁREA 2: GRADE DE HORÁRIOS
// =============================================================================

// GET /api/barbers/{id}/schedule
#[utoipa::path(
    get,
    path = "/api/barbers/{id}/schedule",
    tag = "Barbers",
    responses(
        (status = 200, description = "Grade semanal do barbeiro", body = Vec<BarberSchedule>)
    ),
    params(
        ("id" = Uuid, Path, description = "ID do Barbeiro"),
        ("x-branch-id" = Uuid, Header, description = "ID da Sucursal")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_schedule(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
    Path(barber_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let schedule = app_state
        .barber_service
        .get_schedule(branch.0, barber_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(schedule)))
}

// PUT /api/barbers/{id}/schedule (substitui a semana inteira)
#[utoipa::path(
    put,
    path = "/api/barbers/{id}/schedule",
    tag = "Barbers",
    request_body = UpdateSchedulePayload,
    responses(
        (status = 200, description = "Grade atualizada", body = Vec<BarberSchedule>),
        (status = 400, description = "Intervalo inválido")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do Barbeiro"),
        ("x-branch-id" = Uuid, Header, description = "ID da Sucursal")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_schedule(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
    Path(barber_id): Path<Uuid>,
    Json(payload): Json<UpdateSchedulePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let schedule = app_state
        .barber_service
        .replace_schedule(branch.0, barber_id, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(schedule)))
}

// =============================================================================
//  ÁREA 3: BLOQUEIOS DE AGENDA
// =============================================================================

// POST /api/barbers/{id}/blocks
#[utoipa::path(
    post,
    path = "/api/barbers/{id}/blocks",
    tag = "Barbers",
    request_body = CreateBlockPayload,
    responses(
        (status = 201, description = "Bloqueio criado", body = BarberBlock),
        (status = 400, description = "Bloqueio malformado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do Barbeiro"),
        ("x-branch-id" = Uuid, Header, description = "ID da Sucursal")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_block(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
    Path(barber_id): Path<Uuid>,
    Json(payload): Json<CreateBlockPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let block = app_state
        .barber_service
        .create_block(branch.0, barber_id, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(block)))
}

// GET /api/barbers/{id}/blocks
#[utoipa::path(
    get,
    path = "/api/barbers/{id}/blocks",
    tag = "Barbers",
    responses(
        (status = 200, description = "Bloqueios do barbeiro", body = Vec<BarberBlock>)
    ),
    params(
        ("id" = Uuid, Path, description = "ID do Barbeiro"),
        ("x-branch-id" = Uuid, Header, description = "ID da Sucursal")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_blocks(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
    Path(barber_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let blocks = app_state
        .barber_service
        .list_blocks(branch.0, barber_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(blocks)))
}

// DELETE /api/barbers/{id}/blocks/{block_id}
#[utoipa::path(
    delete,
    path = "/api/barbers/{id}/blocks/{block_id}",
    tag = "Barbers",
    responses(
        (status = 204, description = "Bloqueio removido"),
        (status = 404, description = "Bloqueio não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do Barbeiro"),
        ("block_id" = Uuid, Path, description = "ID do Bloqueio"),
        ("x-branch-id" = Uuid, Header, description = "ID da Sucursal")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_block(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
    Path((barber_id, block_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .barber_service
        .delete_block(branch.0, barber_id, block_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
