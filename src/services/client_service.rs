// src/services/client_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::ClientRepository,
    models::client::{Client, CreateClientPayload, UpdateClientPayload},
};

#[derive(Clone)]
pub struct ClientService {
    repo: ClientRepository,
    pool: PgPool,
}

impl ClientService {
    pub fn new(repo: ClientRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn create_client(
        &self,
        branch_id: Uuid,
        payload: &CreateClientPayload,
    ) -> Result<Client, AppError> {
        self.repo
            .create_client(
                &self.pool,
                branch_id,
                &payload.full_name,
                &payload.phone,
                payload.email.as_deref(),
                payload.notes.as_deref(),
            )
            .await
    }

    pub async fn list_clients(
        &self,
        branch_id: Uuid,
        search: Option<&str>,
    ) -> Result<Vec<Client>, AppError> {
        self.repo.get_all_clients(&self.pool, branch_id, search).await
    }

    pub async fn get_client(&self, branch_id: Uuid, client_id: Uuid) -> Result<Client, AppError> {
        self.repo
            .find_by_id(&self.pool, branch_id, client_id)
            .await?
            .ok_or(AppError::NotFound("Cliente"))
    }

    pub async fn update_client(
        &self,
        branch_id: Uuid,
        client_id: Uuid,
        payload: &UpdateClientPayload,
    ) -> Result<Client, AppError> {
        self.repo
            .update_client(
                &self.pool,
                branch_id,
                client_id,
                &payload.full_name,
                &payload.phone,
                payload.email.as_deref(),
                payload.notes.as_deref(),
            )
            .await?
            .ok_or(AppError::NotFound("Cliente"))
    }

    pub async fn delete_client(&self, branch_id: Uuid, client_id: Uuid) -> Result<(), AppError> {
        let found = self.repo.delete_client(&self.pool, branch_id, client_id).await?;
        if !found {
            return Err(AppError::NotFound("Cliente"));
        }
        Ok(())
    }
}
