// src/services/branch_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::BranchRepository,
    models::branch::{Branch, CreateBranchPayload},
};

#[derive(Clone)]
pub struct BranchService {
    repo: BranchRepository,
    pool: PgPool,
}

impl BranchService {
    pub fn new(repo: BranchRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn create_branch(&self, payload: &CreateBranchPayload) -> Result<Branch, AppError> {
        self.repo
            .create_branch(
                &self.pool,
                &payload.name,
                payload.address.as_deref(),
                payload.phone.as_deref(),
                payload.slot_granularity_minutes,
            )
            .await
    }

    pub async fn list_branches(&self) -> Result<Vec<Branch>, AppError> {
        self.repo.get_all_branches(&self.pool).await
    }
}
