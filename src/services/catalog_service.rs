// src/services/catalog_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::CatalogRepository,
    models::catalog::{CreateServicePayload, ServiceItem, UpdateServicePayload},
};

#[derive(Clone)]
pub struct CatalogService {
    repo: CatalogRepository,
    pool: PgPool,
}

impl CatalogService {
    pub fn new(repo: CatalogRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn create_service(
        &self,
        branch_id: Uuid,
        payload: &CreateServicePayload,
    ) -> Result<ServiceItem, AppError> {
        self.repo
            .create_service(
                &self.pool,
                branch_id,
                &payload.name,
                payload.duration_minutes,
                payload.price,
            )
            .await
    }

    pub async fn list_services(&self, branch_id: Uuid) -> Result<Vec<ServiceItem>, AppError> {
        self.repo.get_all_services(&self.pool, branch_id).await
    }

    pub async fn update_service(
        &self,
        branch_id: Uuid,
        service_id: Uuid,
        payload: &UpdateServicePayload,
    ) -> Result<ServiceItem, AppError> {
        self.repo
            .update_service(
                &self.pool,
                branch_id,
                service_id,
                &payload.name,
                payload.duration_minutes,
                payload.price,
                payload.is_active,
            )
            .await?
            .ok_or(AppError::NotFound("Serviço"))
    }
}
