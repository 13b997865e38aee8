// src/handlers/cash.rs

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{branch::BranchContext, i18n::Locale},
    models::cash::{
        CashMovement, CashSummary, CreateMovementPayload, ListMovementsParams, SummaryParams,
    },
};

// POST /api/cash/movements
#[utoipa::path(
    post,
    path = "/api/cash/movements",
    tag = "Cash",
    request_body = CreateMovementPayload,
    responses(
        (status = 201, description = "Movimento lançado", body = CashMovement),
        (status = 400, description = "Dados inválidos (valor negativo, etc.)")
    ),
    params(("x-branch-id" = Uuid, Header, description = "ID da Sucursal")),
    security(("api_jwt" = []))
)]
pub async fn create_movement(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
    Json(payload): Json<CreateMovementPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let movement = app_state
        .cash_service
        .create_movement(branch.0, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(movement)))
}

// GET /api/cash/movements
// A borda `to` inclui o dia inteiro (recorte por dia em UTC).
#[utoipa::path(
    get,
    path = "/api/cash/movements",
    tag = "Cash",
    responses(
        (status = 200, description = "Movimentos filtrados", body = Vec<CashMovement>)
    ),
    params(
        ("x-branch-id" = Uuid, Header, description = "ID da Sucursal"),
        ListMovementsParams
    ),
    security(("api_jwt" = []))
)]
pub async fn list_movements(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
    Query(params): Query<ListMovementsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let movements = app_state
        .cash_service
        .list_movements(branch.0, &params)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(movements)))
}

// GET /api/cash/summary
#[utoipa::path(
    get,
    path = "/api/cash/summary",
    tag = "Cash",
    responses(
        (status = 200, description = "Totais do período + comparação com o anterior", body = CashSummary),
        (status = 400, description = "Período inválido")
    ),
    params(
        ("x-branch-id" = Uuid, Header, description = "ID da Sucursal"),
        SummaryParams
    ),
    security(("api_jwt" = []))
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
    Query(params): Query<SummaryParams>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = app_state
        .cash_service
        .summary(branch.0, params.from, params.to)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(summary)))
}
