// src/handlers/dashboard.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use uuid::Uuid;

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{branch::BranchContext, i18n::Locale},
    models::dashboard::{
        AppointmentsChartEntry, DashboardSummary, TopBarberEntry, TopServiceEntry,
    },
};

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Resumo do dia da sucursal", body = DashboardSummary),
        (status = 401, description = "Não autorizado")
    ),
    params(("x-branch-id" = Uuid, Header, description = "ID da Sucursal")),
    security(("api_jwt" = []))
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
) -> Result<impl IntoResponse, ApiError> {
    let summary = app_state
        .dashboard_service
        .get_summary(branch.0)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(summary)))
}

// GET /api/dashboard/appointments-chart
#[utoipa::path(
    get,
    path = "/api/dashboard/appointments-chart",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Turnos por dia (últimos 30 dias)", body = Vec<AppointmentsChartEntry>)
    ),
    params(("x-branch-id" = Uuid, Header, description = "ID da Sucursal")),
    security(("api_jwt" = []))
)]
pub async fn get_appointments_chart(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
) -> Result<impl IntoResponse, ApiError> {
    let chart = app_state
        .dashboard_service
        .get_appointments_chart(branch.0)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(chart)))
}

// GET /api/dashboard/top-services
#[utoipa::path(
    get,
    path = "/api/dashboard/top-services",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Serviços mais vendidos", body = Vec<TopServiceEntry>)
    ),
    params(("x-branch-id" = Uuid, Header, description = "ID da Sucursal")),
    security(("api_jwt" = []))
)]
pub async fn get_top_services(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
) -> Result<impl IntoResponse, ApiError> {
    let services = app_state
        .dashboard_service
        .get_top_services(branch.0)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(services)))
}

// GET /api/dashboard/top-barbers
#[utoipa::path(
    get,
    path = "/api/dashboard/top-barbers",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Barbeiros com mais atendimentos", body = Vec<TopBarberEntry>)
    ),
    params(("x-branch-id" = Uuid, Header, description = "ID da Sucursal")),
    security(("api_jwt" = []))
)]
pub async fn get_top_barbers(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
) -> Result<impl IntoResponse, ApiError> {
    let barbers = app_state
        .dashboard_service
        .get_top_barbers(branch.0)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(barbers)))
}
