// src/db/branch_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::branch::Branch};

#[derive(Clone)]
pub struct BranchRepository {
    pool: PgPool,
}

impl BranchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_branch<'e, E>(
        &self,
        executor: E,
        name: &str,
        address: Option<&str>,
        phone: Option<&str>,
        slot_granularity_minutes: i32,
    ) -> Result<Branch, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let branch = sqlx::query_as::<_, Branch>(
            r#"
            INSERT INTO branches (name, address, phone, slot_granularity_minutes)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, address, phone, slot_granularity_minutes, is_active, created_at
            "#,
        )
        .bind(name)
        .bind(address)
        .bind(phone)
        .bind(slot_granularity_minutes)
        .fetch_one(executor)
        .await?;

        Ok(branch)
    }

    pub async fn get_all_branches<'e, E>(&self, executor: E) -> Result<Vec<Branch>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let branches = sqlx::query_as::<_, Branch>(
            "SELECT * FROM branches WHERE is_active = true ORDER BY name ASC",
        )
        .fetch_all(executor)
        .await?;

        Ok(branches)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
    ) -> Result<Option<Branch>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let branch = sqlx::query_as::<_, Branch>("SELECT * FROM branches WHERE id = $1")
            .bind(branch_id)
            .fetch_optional(executor)
            .await?;

        Ok(branch)
    }
}
