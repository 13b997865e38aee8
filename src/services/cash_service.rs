// src/services/cash_service.rs

use chrono::{Days, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::CashRepository,
    models::cash::{
        CashMovement, CashSummary, CreateMovementPayload, ListMovementsParams, MovementFilter,
    },
    services::ledger::{self, day_end_exclusive_utc, day_start_utc},
};

#[derive(Clone)]
pub struct CashService {
    repo: CashRepository,
    pool: PgPool,
}

impl CashService {
    pub fn new(repo: CashRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn create_movement(
        &self,
        branch_id: Uuid,
        payload: &CreateMovementPayload,
    ) -> Result<CashMovement, AppError> {
        // O validator já barrou na borda; o núcleo reafirma a regra
        if payload.amount.is_sign_negative() {
            return Err(AppError::InvalidInput(
                "movement amount must not be negative".to_string(),
            ));
        }

        self.repo
            .create_movement(
                &self.pool,
                branch_id,
                payload.occurred_at.unwrap_or_else(Utc::now),
                payload.amount,
                payload.kind,
                &payload.description,
                payload.appointment_id,
                payload.client_id,
            )
            .await
    }

    // Recorte grosso por data no servidor, refinamento (texto + borda
    // inclusiva do dia inteiro) no agregador em memória.
    pub async fn list_movements(
        &self,
        branch_id: Uuid,
        params: &ListMovementsParams,
    ) -> Result<Vec<CashMovement>, AppError> {
        let movements = self
            .repo
            .movements_between(
                &self.pool,
                branch_id,
                params.from.map(day_start_utc),
                params.to.map(day_end_exclusive_utc),
            )
            .await?;

        let filter = MovementFilter {
            date_from: params.from,
            date_to: params.to,
            reference: params.reference.clone(),
            client: params.client.clone(),
        };

        Ok(ledger::filter_movements(&movements, &filter))
    }

    /// Totais do período pedido mais a comparação com o período
    /// imediatamente anterior de mesma duração. Percentual indefinido
    /// (período anterior zerado) sai como `None`/`null`.
    pub async fn summary(
        &self,
        branch_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<CashSummary, AppError> {
        if from > to {
            return Err(AppError::InvalidInput(
                "`from` must not be after `to`".to_string(),
            ));
        }

        let current_movements = self
            .repo
            .movements_between(
                &self.pool,
                branch_id,
                Some(day_start_utc(from)),
                Some(day_end_exclusive_utc(to)),
            )
            .await?;
        let current = ledger::aggregate(&current_movements)?;

        // Período anterior: mesma quantidade de dias, terminando na
        // véspera do início do período atual
        let period_days = (to - from).num_days() as u64;
        let prev_to = from.checked_sub_days(Days::new(1)).unwrap_or(from);
        let prev_from = prev_to.checked_sub_days(Days::new(period_days)).unwrap_or(prev_to);

        let previous_movements = self
            .repo
            .movements_between(
                &self.pool,
                branch_id,
                Some(day_start_utc(prev_from)),
                Some(day_end_exclusive_utc(prev_to)),
            )
            .await?;
        let previous = ledger::aggregate(&previous_movements)?;

        Ok(CashSummary {
            current,
            previous,
            income_change_pct: ledger::percent_change(current.income, previous.income),
            expense_change_pct: ledger::percent_change(current.expense, previous.expense),
            balance_change_pct: ledger::percent_change(current.balance, previous.balance),
        })
    }
}
