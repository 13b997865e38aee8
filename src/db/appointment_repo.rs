// src/db/appointment_repo.rs

use chrono::{NaiveDate, NaiveTime};
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::appointment::{Appointment, AppointmentStatus},
};

#[derive(Clone)]
pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_appointment<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        barber_id: Uuid,
        client_id: Uuid,
        service_id: Uuid,
        date: NaiveDate,
        start_time: NaiveTime,
        duration_minutes: i32,
        notes: Option<&str>,
    ) -> Result<Appointment, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (
                branch_id, barber_id, client_id, service_id,
                date, start_time, duration_minutes, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING
                id, branch_id, barber_id, client_id, service_id,
                date, start_time, duration_minutes, status, notes,
                created_at, updated_at
            "#,
        )
        .bind(branch_id)
        .bind(barber_id)
        .bind(client_id)
        .bind(service_id)
        .bind(date)
        .bind(start_time)
        .bind(duration_minutes)
        .bind(notes)
        .fetch_one(executor)
        .await?;

        Ok(appointment)
    }

    // Agenda do dia, opcionalmente filtrada por barbeiro
    pub async fn list_for_day<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        date: NaiveDate,
        barber_id: Option<Uuid>,
    ) -> Result<Vec<Appointment>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let appointments = match barber_id {
            Some(barber) => {
                sqlx::query_as::<_, Appointment>(
                    r#"
                    SELECT * FROM appointments
                    WHERE branch_id = $1 AND date = $2 AND barber_id = $3
                    ORDER BY start_time ASC
                    "#,
                )
                .bind(branch_id)
                .bind(date)
                .bind(barber)
                .fetch_all(executor)
                .await?
            }
            None => {
                sqlx::query_as::<_, Appointment>(
                    r#"
                    SELECT * FROM appointments
                    WHERE branch_id = $1 AND date = $2
                    ORDER BY start_time ASC
                    "#,
                )
                .bind(branch_id)
                .bind(date)
                .fetch_all(executor)
                .await?
            }
        };

        Ok(appointments)
    }

    // Os turnos que ocupam a agenda de um barbeiro num dia.
    // Cancelados ficam de fora: não ocupam horário.
    pub async fn occupying_for_barber_date<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        barber_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let appointments = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT * FROM appointments
            WHERE branch_id = $1 AND barber_id = $2 AND date = $3
              AND status <> 'CANCELLED'
            ORDER BY start_time ASC
            "#,
        )
        .bind(branch_id)
        .bind(barber_id)
        .bind(date)
        .fetch_all(executor)
        .await?;

        Ok(appointments)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        appointment_id: Uuid,
    ) -> Result<Option<Appointment>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let appointment = sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments WHERE id = $1 AND branch_id = $2",
        )
        .bind(appointment_id)
        .bind(branch_id)
        .fetch_optional(executor)
        .await?;

        Ok(appointment)
    }

    pub async fn reschedule<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        appointment_id: Uuid,
        barber_id: Uuid,
        date: NaiveDate,
        start_time: NaiveTime,
    ) -> Result<Option<Appointment>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            UPDATE appointments
            SET barber_id = $3, date = $4, start_time = $5, updated_at = now()
            WHERE id = $1 AND branch_id = $2
            RETURNING
                id, branch_id, barber_id, client_id, service_id,
                date, start_time, duration_minutes, status, notes,
                created_at, updated_at
            "#,
        )
        .bind(appointment_id)
        .bind(branch_id)
        .bind(barber_id)
        .bind(date)
        .bind(start_time)
        .fetch_optional(executor)
        .await?;

        Ok(appointment)
    }

    pub async fn set_status<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        appointment_id: Uuid,
        status: AppointmentStatus,
    ) -> Result<Option<Appointment>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            UPDATE appointments
            SET status = $3, updated_at = now()
            WHERE id = $1 AND branch_id = $2
            RETURNING
                id, branch_id, barber_id, client_id, service_id,
                date, start_time, duration_minutes, status, notes,
                created_at, updated_at
            "#,
        )
        .bind(appointment_id)
        .bind(branch_id)
        .bind(status)
        .fetch_optional(executor)
        .await?;

        Ok(appointment)
    }
}
