// src/db/barber_repo.rs

use chrono::NaiveDate;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::barber::{Barber, BarberBlock, BarberSchedule, ScheduleEntryPayload},
};

#[derive(Clone)]
pub struct BarberRepository {
    pool: PgPool,
}

impl BarberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  BARBEIROS
    // =========================================================================

    pub async fn create_barber<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        full_name: &str,
        phone: Option<&str>,
    ) -> Result<Barber, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let barber = sqlx::query_as::<_, Barber>(
            r#"
            INSERT INTO barbers (branch_id, full_name, phone)
            VALUES ($1, $2, $3)
            RETURNING id, branch_id, full_name, phone, is_active, created_at
            "#,
        )
        .bind(branch_id)
        .bind(full_name)
        .bind(phone)
        .fetch_one(executor)
        .await?;

        Ok(barber)
    }

    pub async fn get_all_barbers<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
    ) -> Result<Vec<Barber>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let barbers = sqlx::query_as::<_, Barber>(
            "SELECT * FROM barbers WHERE branch_id = $1 ORDER BY full_name ASC",
        )
        .bind(branch_id)
        .fetch_all(executor)
        .await?;

        Ok(barbers)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        barber_id: Uuid,
    ) -> Result<Option<Barber>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let barber = sqlx::query_as::<_, Barber>(
            "SELECT * FROM barbers WHERE id = $1 AND branch_id = $2",
        )
        .bind(barber_id)
        .bind(branch_id)
        .fetch_optional(executor)
        .await?;

        Ok(barber)
    }

    pub async fn update_barber<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        barber_id: Uuid,
        full_name: &str,
        phone: Option<&str>,
        is_active: bool,
    ) -> Result<Option<Barber>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let barber = sqlx::query_as::<_, Barber>(
            r#"
            UPDATE barbers
            SET full_name = $3, phone = $4, is_active = $5
            WHERE id = $1 AND branch_id = $2
            RETURNING id, branch_id, full_name, phone, is_active, created_at
            "#,
        )
        .bind(barber_id)
        .bind(branch_id)
        .bind(full_name)
        .bind(phone)
        .bind(is_active)
        .fetch_optional(executor)
        .await?;

        Ok(barber)
    }

    // Desativação lógica: o histórico de turnos continua apontando para ele
    pub async fn deactivate_barber<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        barber_id: Uuid,
    ) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            "UPDATE barbers SET is_active = false WHERE id = $1 AND branch_id = $2",
        )
        .bind(barber_id)
        .bind(branch_id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    // =========================================================================
    //  GRADE DE HORÁRIOS (Working Hours)
    // =========================================================================

    pub async fn get_schedule<'e, E>(
        &self,
        executor: E,
        barber_id: Uuid,
    ) -> Result<Vec<BarberSchedule>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let schedule = sqlx::query_as::<_, BarberSchedule>(
            "SELECT * FROM barber_schedules WHERE barber_id = $1 ORDER BY weekday ASC",
        )
        .bind(barber_id)
        .fetch_all(executor)
        .await?;

        Ok(schedule)
    }

    pub async fn schedule_for_weekday<'e, E>(
        &self,
        executor: E,
        barber_id: Uuid,
        weekday: i16,
    ) -> Result<Option<BarberSchedule>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let entry = sqlx::query_as::<_, BarberSchedule>(
            "SELECT * FROM barber_schedules WHERE barber_id = $1 AND weekday = $2",
        )
        .bind(barber_id)
        .bind(weekday)
        .fetch_optional(executor)
        .await?;

        Ok(entry)
    }

    // A UI manda a semana inteira de uma vez: apagamos e reinserimos
    // dentro de uma transação única.
    pub async fn replace_schedule(
        &self,
        barber_id: Uuid,
        entries: &[ScheduleEntryPayload],
    ) -> Result<Vec<BarberSchedule>, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM barber_schedules WHERE barber_id = $1")
            .bind(barber_id)
            .execute(&mut *tx)
            .await?;

        let mut saved = Vec::with_capacity(entries.len());
        for entry in entries {
            let row = sqlx::query_as::<_, BarberSchedule>(
                r#"
                INSERT INTO barber_schedules (barber_id, weekday, start_time, end_time)
                VALUES ($1, $2, $3, $4)
                RETURNING id, barber_id, weekday, start_time, end_time
                "#,
            )
            .bind(barber_id)
            .bind(entry.weekday)
            .bind(entry.start_time)
            .bind(entry.end_time)
            .fetch_one(&mut *tx)
            .await?;

            saved.push(row);
        }

        tx.commit().await?;
        Ok(saved)
    }

    // =========================================================================
    //  BLOQUEIOS DE AGENDA
    // =========================================================================

    pub async fn create_block<'e, E>(
        &self,
        executor: E,
        barber_id: Uuid,
        date: NaiveDate,
        start_time: Option<chrono::NaiveTime>,
        end_time: Option<chrono::NaiveTime>,
        reason: Option<&str>,
    ) -> Result<BarberBlock, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let block = sqlx::query_as::<_, BarberBlock>(
            r#"
            INSERT INTO barber_blocks (barber_id, date, start_time, end_time, reason)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, barber_id, date, start_time, end_time, reason, created_at
            "#,
        )
        .bind(barber_id)
        .bind(date)
        .bind(start_time)
        .bind(end_time)
        .bind(reason)
        .fetch_one(executor)
        .await?;

        Ok(block)
    }

    pub async fn get_blocks<'e, E>(
        &self,
        executor: E,
        barber_id: Uuid,
    ) -> Result<Vec<BarberBlock>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let blocks = sqlx::query_as::<_, BarberBlock>(
            "SELECT * FROM barber_blocks WHERE barber_id = $1 ORDER BY date ASC, start_time ASC",
        )
        .bind(barber_id)
        .fetch_all(executor)
        .await?;

        Ok(blocks)
    }

    pub async fn blocks_for_date<'e, E>(
        &self,
        executor: E,
        barber_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<BarberBlock>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let blocks = sqlx::query_as::<_, BarberBlock>(
            "SELECT * FROM barber_blocks WHERE barber_id = $1 AND date = $2",
        )
        .bind(barber_id)
        .bind(date)
        .fetch_all(executor)
        .await?;

        Ok(blocks)
    }

    pub async fn delete_block<'e, E>(
        &self,
        executor: E,
        barber_id: Uuid,
        block_id: Uuid,
    ) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            "DELETE FROM barber_blocks WHERE id = $1 AND barber_id = $2",
        )
        .bind(block_id)
        .bind(barber_id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
