// src/config.rs

use std::sync::Arc;

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, time::Duration};

use crate::{
    common::i18n::I18nStore,
    db::{
        AppointmentRepository, BarberRepository, BranchRepository, CashRepository,
        CatalogRepository, ClientRepository, DashboardRepository, UserRepository,
    },
    services::{
        AppointmentService, AuthService, BarberService, BranchService, CashService,
        CatalogService, ClientService, DashboardService, WhatsappService,
        whatsapp::WaLinkGateway,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub i18n_store: I18nStore,

    pub auth_service: AuthService,
    pub branch_service: BranchService,
    pub barber_service: BarberService,
    pub client_service: ClientService,
    pub catalog_service: CatalogService,
    pub appointment_service: AppointmentService,
    pub cash_service: CashService,
    pub dashboard_service: DashboardService,
    pub whatsapp_service: WhatsappService,
}

impl AppState {
    // O único ponto de inicialização: env + pool + grafo de dependências.
    // Se algo aqui falhar, a aplicação não deve subir.
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")?;
        let jwt_secret = env::var("JWT_SECRET")?;

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o grafo de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let branch_repo = BranchRepository::new(db_pool.clone());
        let barber_repo = BarberRepository::new(db_pool.clone());
        let client_repo = ClientRepository::new(db_pool.clone());
        let catalog_repo = CatalogRepository::new(db_pool.clone());
        let appointment_repo = AppointmentRepository::new(db_pool.clone());
        let cash_repo = CashRepository::new(db_pool.clone());
        let dashboard_repo = DashboardRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo, jwt_secret, db_pool.clone());
        let branch_service = BranchService::new(branch_repo.clone(), db_pool.clone());
        let barber_service = BarberService::new(barber_repo.clone(), db_pool.clone());
        let client_service = ClientService::new(client_repo.clone(), db_pool.clone());
        let catalog_service = CatalogService::new(catalog_repo.clone(), db_pool.clone());
        let appointment_service = AppointmentService::new(
            appointment_repo.clone(),
            barber_repo,
            branch_repo.clone(),
            catalog_repo.clone(),
            cash_repo.clone(),
            db_pool.clone(),
        );
        let cash_service = CashService::new(cash_repo, db_pool.clone());
        let dashboard_service = DashboardService::new(dashboard_repo, db_pool.clone());

        // O gateway é injetado: trocar o gerador de links por um envio
        // real não mexe em mais nada
        let whatsapp_service = WhatsappService::new(
            appointment_repo,
            client_repo,
            branch_repo,
            catalog_repo,
            Arc::new(WaLinkGateway),
            db_pool.clone(),
        );

        Ok(Self {
            db_pool,
            i18n_store: I18nStore::new(),
            auth_service,
            branch_service,
            barber_service,
            client_service,
            catalog_service,
            appointment_service,
            cash_service,
            dashboard_service,
            whatsapp_service,
        })
    }
}
