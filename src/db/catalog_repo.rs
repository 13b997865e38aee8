// src/db/catalog_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::catalog::ServiceItem};

#[derive(Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_service<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        name: &str,
        duration_minutes: i32,
        price: Decimal,
    ) -> Result<ServiceItem, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let service = sqlx::query_as::<_, ServiceItem>(
            r#"
            INSERT INTO services (branch_id, name, duration_minutes, price)
            VALUES ($1, $2, $3, $4)
            RETURNING id, branch_id, name, duration_minutes, price, is_active, created_at
            "#,
        )
        .bind(branch_id)
        .bind(name)
        .bind(duration_minutes)
        .bind(price)
        .fetch_one(executor)
        .await?;

        Ok(service)
    }

    pub async fn get_all_services<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
    ) -> Result<Vec<ServiceItem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let services = sqlx::query_as::<_, ServiceItem>(
            "SELECT * FROM services WHERE branch_id = $1 ORDER BY name ASC",
        )
        .bind(branch_id)
        .fetch_all(executor)
        .await?;

        Ok(services)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        service_id: Uuid,
    ) -> Result<Option<ServiceItem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let service = sqlx::query_as::<_, ServiceItem>(
            "SELECT * FROM services WHERE id = $1 AND branch_id = $2",
        )
        .bind(service_id)
        .bind(branch_id)
        .fetch_optional(executor)
        .await?;

        Ok(service)
    }

    pub async fn update_service<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        service_id: Uuid,
        name: &str,
        duration_minutes: i32,
        price: Decimal,
        is_active: bool,
    ) -> Result<Option<ServiceItem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let service = sqlx::query_as::<_, ServiceItem>(
            r#"
            UPDATE services
            SET name = $3, duration_minutes = $4, price = $5, is_active = $6
            WHERE id = $1 AND branch_id = $2
            RETURNING id, branch_id, name, duration_minutes, price, is_active, created_at
            "#,
        )
        .bind(service_id)
        .bind(branch_id)
        .bind(name)
        .bind(duration_minutes)
        .bind(price)
        .bind(is_active)
        .fetch_optional(executor)
        .await?;

        Ok(service)
    }
}
