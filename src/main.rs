// src/main.rs

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

// Importações principais
use crate::config::AppState;
use crate::docs::ApiDoc;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas de sessão (protegidas); o logout revoga o token atual
    let session_routes = Router::new()
        .route("/logout", post(handlers::auth::logout))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Rotas de autenticação (públicas) + sessão, sob o mesmo prefixo
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .merge(session_routes);

    let user_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let branch_routes = Router::new()
        .route("/"
               ,post(handlers::branches::create_branch)
               .get(handlers::branches::list_branches)
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let barber_routes = Router::new()
        .route("/"
               ,post(handlers::barbers::create_barber)
               .get(handlers::barbers::list_barbers)
        )
        .route("/{id}"
               ,get(handlers::barbers::get_barber)
               .put(handlers::barbers::update_barber)
               .delete(handlers::barbers::deactivate_barber)
        )
        .route("/{id}/schedule"
               ,get(handlers::barbers::get_schedule)
               .put(handlers::barbers::update_schedule)
        )
        .route("/{id}/blocks"
               ,post(handlers::barbers::create_block)
               .get(handlers::barbers::list_blocks)
        )
        .route("/{id}/blocks/{block_id}"
               ,axum::routing::delete(handlers::barbers::delete_block)
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let client_routes = Router::new()
        .route("/"
               ,post(handlers::clients::create_client)
               .get(handlers::clients::list_clients)
        )
        .route("/{id}"
               ,get(handlers::clients::get_client)
               .put(handlers::clients::update_client)
               .delete(handlers::clients::delete_client)
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let catalog_routes = Router::new()
        .route("/"
               ,post(handlers::catalog::create_service)
               .get(handlers::catalog::list_services)
        )
        .route("/{id}", put(handlers::catalog::update_service))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let appointment_routes = Router::new()
        .route("/"
               ,post(handlers::appointments::create_appointment)
               .get(handlers::appointments::list_appointments)
        )
        // A consulta de horários livres da tela de agendamento
        .route("/availability", get(handlers::appointments::get_availability))
        .route("/{id}"
               ,put(handlers::appointments::reschedule_appointment)
               .delete(handlers::appointments::cancel_appointment)
        )
        .route("/{id}/status"
               ,axum::routing::patch(handlers::appointments::update_status)
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let cash_routes = Router::new()
        .route("/movements"
               ,post(handlers::cash::create_movement)
               .get(handlers::cash::list_movements)
        )
        .route("/summary", get(handlers::cash::get_summary))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let dashboard_routes = Router::new()
        .route("/summary", get(handlers::dashboard::get_summary))
        .route("/appointments-chart", get(handlers::dashboard::get_appointments_chart))
        .route("/top-services", get(handlers::dashboard::get_top_services))
        .route("/top-barbers", get(handlers::dashboard::get_top_barbers))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let whatsapp_routes = Router::new()
        .route(
            "/appointments/{id}/reminder",
            get(handlers::whatsapp::get_reminder_link),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api/users", user_routes)
        .nest("/api/branches", branch_routes)
        .nest("/api/barbers", barber_routes)
        .nest("/api/clients", client_routes)
        .nest("/api/services", catalog_routes)
        .nest("/api/appointments", appointment_routes)
        .nest("/api/cash", cash_routes)
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/whatsapp", whatsapp_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", addr);
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
