// src/handlers/whatsapp.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{branch::BranchContext, i18n::Locale},
    models::whatsapp::ReminderLink,
};

// GET /api/whatsapp/appointments/{id}/reminder
// O painel abre esse link e o WhatsApp já vem com o lembrete digitado.
#[utoipa::path(
    get,
    path = "/api/whatsapp/appointments/{id}/reminder",
    tag = "WhatsApp",
    responses(
        (status = 200, description = "Link wa.me com o lembrete do turno", body = ReminderLink),
        (status = 404, description = "Turno não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do Turno"),
        ("x-branch-id" = Uuid, Header, description = "ID da Sucursal")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_reminder_link(
    State(app_state): State<AppState>,
    locale: Locale,
    branch: BranchContext,
    Path(appointment_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let reminder = app_state
        .whatsapp_service
        .reminder_link(branch.0, appointment_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(reminder)))
}
