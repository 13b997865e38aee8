// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::logout,

        // --- Users ---
        handlers::auth::get_me,

        // --- Branches ---
        handlers::branches::create_branch,
        handlers::branches::list_branches,

        // --- Barbers ---
        handlers::barbers::create_barber,
        handlers::barbers::list_barbers,
        handlers::barbers::get_barber,
        handlers::barbers::update_barber,
        handlers::barbers::deactivate_barber,
        handlers::barbers::get_schedule,
        handlers::barbers::update_schedule,
        handlers::barbers::create_block,
        handlers::barbers::list_blocks,
        handlers::barbers::delete_block,

        // --- Clients ---
        handlers::clients::create_client,
        handlers::clients::list_clients,
        handlers::clients::get_client,
        handlers::clients::update_client,
        handlers::clients::delete_client,

        // --- Catalog ---
        handlers::catalog::create_service,
        handlers::catalog::list_services,
        handlers::catalog::update_service,

        // --- Appointments ---
        handlers::appointments::create_appointment,
        handlers::appointments::list_appointments,
        handlers::appointments::get_availability,
        handlers::appointments::reschedule_appointment,
        handlers::appointments::update_status,
        handlers::appointments::cancel_appointment,

        // --- Cash ---
        handlers::cash::create_movement,
        handlers::cash::list_movements,
        handlers::cash::get_summary,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
        handlers::dashboard::get_appointments_chart,
        handlers::dashboard::get_top_services,
        handlers::dashboard::get_top_barbers,

        // --- WhatsApp ---
        handlers::whatsapp::get_reminder_link,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::UserRole,
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            // --- Branches ---
            models::branch::Branch,
            models::branch::CreateBranchPayload,

            // --- Barbers ---
            models::barber::Barber,
            models::barber::BarberSchedule,
            models::barber::BarberBlock,
            models::barber::CreateBarberPayload,
            models::barber::UpdateBarberPayload,
            models::barber::ScheduleEntryPayload,
            models::barber::UpdateSchedulePayload,
            models::barber::CreateBlockPayload,

            // --- Clients ---
            models::client::Client,
            models::client::CreateClientPayload,
            models::client::UpdateClientPayload,

            // --- Catalog ---
            models::catalog::ServiceItem,
            models::catalog::CreateServicePayload,
            models::catalog::UpdateServicePayload,

            // --- Appointments ---
            models::appointment::AppointmentStatus,
            models::appointment::Appointment,
            models::appointment::TimeRange,
            models::appointment::CreateAppointmentPayload,
            models::appointment::RescheduleAppointmentPayload,
            models::appointment::UpdateStatusPayload,

            // --- Cash ---
            models::cash::MovementKind,
            models::cash::CashMovement,
            models::cash::CashTotals,
            models::cash::CashSummary,
            models::cash::CreateMovementPayload,

            // --- Dashboard ---
            models::dashboard::DashboardSummary,
            models::dashboard::AppointmentsChartEntry,
            models::dashboard::TopServiceEntry,
            models::dashboard::TopBarberEntry,

            // --- WhatsApp ---
            models::whatsapp::ReminderLink,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Sessão"),
        (name = "Users", description = "Dados do Usuário"),
        (name = "Branches", description = "Gestão de Sucursais"),
        (name = "Barbers", description = "Barbeiros, Horários e Bloqueios"),
        (name = "Clients", description = "Gestão de Clientes"),
        (name = "Catalog", description = "Catálogo de Serviços"),
        (name = "Appointments", description = "Agenda e Disponibilidade"),
        (name = "Cash", description = "Caixa (Entradas e Saídas)"),
        (name = "Dashboard", description = "Indicadores e Gráficos Gerenciais"),
        (name = "WhatsApp", description = "Lembretes via WhatsApp")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
