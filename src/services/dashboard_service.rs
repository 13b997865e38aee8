// src/services/dashboard_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::DashboardRepository,
    models::dashboard::{
        AppointmentsChartEntry, DashboardSummary, TopBarberEntry, TopServiceEntry,
    },
};

#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
    pool: PgPool,
}

impl DashboardService {
    pub fn new(repo: DashboardRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn get_summary(&self, branch_id: Uuid) -> Result<DashboardSummary, AppError> {
        self.repo.get_summary(&self.pool, branch_id).await
    }

    pub async fn get_appointments_chart(
        &self,
        branch_id: Uuid,
    ) -> Result<Vec<AppointmentsChartEntry>, AppError> {
        self.repo.get_appointments_last_30_days(&self.pool, branch_id).await
    }

    pub async fn get_top_services(
        &self,
        branch_id: Uuid,
    ) -> Result<Vec<TopServiceEntry>, AppError> {
        self.repo.get_top_services(&self.pool, branch_id).await
    }

    pub async fn get_top_barbers(
        &self,
        branch_id: Uuid,
    ) -> Result<Vec<TopBarberEntry>, AppError> {
        self.repo.get_top_barbers(&self.pool, branch_id).await
    }
}
