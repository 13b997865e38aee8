// src/db/dashboard_repo.rs

use rust_decimal::Decimal;
use sqlx::{Acquire, Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::dashboard::{AppointmentsChartEntry, DashboardSummary, TopBarberEntry, TopServiceEntry},
};

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // 1. Resumo Geral (os cards do topo do painel)
    pub async fn get_summary<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
    ) -> Result<DashboardSummary, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        // Iniciamos uma transação (Snapshot consistente dos dados)
        let mut tx = executor.begin().await?;

        // A. Turnos de hoje (todos os status menos cancelado)
        let appointments_today = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM appointments
            WHERE branch_id = $1
              AND date = CURRENT_DATE
              AND status <> 'CANCELLED'
            "#,
        )
        .bind(branch_id)
        .fetch_one(&mut *tx)
        .await?;

        // B. Turnos já atendidos hoje
        let completed_today = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM appointments
            WHERE branch_id = $1
              AND date = CURRENT_DATE
              AND status = 'COMPLETED'
            "#,
        )
        .bind(branch_id)
        .fetch_one(&mut *tx)
        .await?;

        // C. Entradas de caixa de hoje
        let income_today = sqlx::query_scalar::<_, Option<Decimal>>(
            r#"
            SELECT SUM(amount) FROM cash_movements
            WHERE branch_id = $1
              AND kind = 'INCOME'
              AND occurred_at::date = CURRENT_DATE
            "#,
        )
        .bind(branch_id)
        .fetch_one(&mut *tx)
        .await?
        .unwrap_or(Decimal::ZERO);

        // D. Saldo acumulado (entradas - saídas)
        let balance = sqlx::query_scalar::<_, Option<Decimal>>(
            r#"
            SELECT SUM(CASE WHEN kind = 'INCOME' THEN amount ELSE -amount END)
            FROM cash_movements
            WHERE branch_id = $1
            "#,
        )
        .bind(branch_id)
        .fetch_one(&mut *tx)
        .await?
        .unwrap_or(Decimal::ZERO);

        tx.commit().await?;

        Ok(DashboardSummary {
            appointments_today,
            completed_today,
            income_today,
            balance,
        })
    }

    // 2. Gráfico de Linha (turnos por dia, últimos 30 dias)
    pub async fn get_appointments_last_30_days<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
    ) -> Result<Vec<AppointmentsChartEntry>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let data = sqlx::query_as::<_, AppointmentsChartEntry>(
            r#"
            SELECT
                to_char(date, 'YYYY-MM-DD') as date,
                COUNT(*) as total
            FROM appointments
            WHERE branch_id = $1
              AND status <> 'CANCELLED'
              AND date >= (CURRENT_DATE - INTERVAL '30 days')
            GROUP BY 1
            ORDER BY 1 ASC
            "#,
        )
        .bind(branch_id)
        .fetch_all(executor)
        .await?;

        Ok(data)
    }

    // 3. Top 5 serviços por faturamento
    pub async fn get_top_services<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
    ) -> Result<Vec<TopServiceEntry>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let data = sqlx::query_as::<_, TopServiceEntry>(
            r#"
            SELECT
                s.name as service_name,
                COUNT(*) as total_count,
                SUM(s.price) as total_revenue
            FROM appointments a
            JOIN services s ON a.service_id = s.id
            WHERE a.branch_id = $1
              AND a.status = 'COMPLETED'
            GROUP BY s.id, s.name
            ORDER BY total_revenue DESC
            LIMIT 5
            "#,
        )
        .bind(branch_id)
        .fetch_all(executor)
        .await?;

        Ok(data)
    }

    // 4. Top 5 barbeiros por atendimentos concluídos
    pub async fn get_top_barbers<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
    ) -> Result<Vec<TopBarberEntry>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let data = sqlx::query_as::<_, TopBarberEntry>(
            r#"
            SELECT
                b.full_name as barber_name,
                COUNT(*) as total_count
            FROM appointments a
            JOIN barbers b ON a.barber_id = b.id
            WHERE a.branch_id = $1
              AND a.status = 'COMPLETED'
            GROUP BY b.id, b.full_name
            ORDER BY total_count DESC
            LIMIT 5
            "#,
        )
        .bind(branch_id)
        .fetch_all(executor)
        .await?;

        Ok(data)
    }
}
