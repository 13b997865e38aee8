// src/db/cash_repo.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::cash::{CashMovement, MovementKind},
};

#[derive(Clone)]
pub struct CashRepository {
    pool: PgPool,
}

impl CashRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_movement<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        occurred_at: DateTime<Utc>,
        amount: Decimal,
        kind: MovementKind,
        description: &str,
        appointment_id: Option<Uuid>,
        client_id: Option<Uuid>,
    ) -> Result<CashMovement, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let movement = sqlx::query_as::<_, CashMovement>(
            r#"
            INSERT INTO cash_movements (
                branch_id, occurred_at, amount, kind,
                description, appointment_id, client_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING
                id, branch_id, occurred_at, amount, kind,
                description, appointment_id, client_id, created_at
            "#,
        )
        .bind(branch_id)
        .bind(occurred_at)
        .bind(amount)
        .bind(kind)
        .bind(description)
        .bind(appointment_id)
        .bind(client_id)
        .fetch_one(executor)
        .await?;

        Ok(movement)
    }

    // Recorte grosso por período, feito no servidor; o refinamento
    // (texto, borda inclusiva) fica com o agregador em memória.
    pub async fn movements_between<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        from: Option<DateTime<Utc>>,
        to_exclusive: Option<DateTime<Utc>>,
    ) -> Result<Vec<CashMovement>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let movements = sqlx::query_as::<_, CashMovement>(
            r#"
            SELECT * FROM cash_movements
            WHERE branch_id = $1
              AND ($2::timestamptz IS NULL OR occurred_at >= $2)
              AND ($3::timestamptz IS NULL OR occurred_at < $3)
            ORDER BY occurred_at DESC
            "#,
        )
        .bind(branch_id)
        .bind(from)
        .bind(to_exclusive)
        .fetch_all(executor)
        .await?;

        Ok(movements)
    }
}
