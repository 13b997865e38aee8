// src/services/barber_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::BarberRepository,
    models::barber::{
        Barber, BarberBlock, BarberSchedule, CreateBarberPayload, CreateBlockPayload,
        UpdateBarberPayload, UpdateSchedulePayload,
    },
};

#[derive(Clone)]
pub struct BarberService {
    repo: BarberRepository,
    pool: PgPool,
}

impl BarberService {
    pub fn new(repo: BarberRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn create_barber(
        &self,
        branch_id: Uuid,
        payload: &CreateBarberPayload,
    ) -> Result<Barber, AppError> {
        self.repo
            .create_barber(&self.pool, branch_id, &payload.full_name, payload.phone.as_deref())
            .await
    }

    pub async fn list_barbers(&self, branch_id: Uuid) -> Result<Vec<Barber>, AppError> {
        self.repo.get_all_barbers(&self.pool, branch_id).await
    }

    pub async fn get_barber(&self, branch_id: Uuid, barber_id: Uuid) -> Result<Barber, AppError> {
        self.repo
            .find_by_id(&self.pool, branch_id, barber_id)
            .await?
            .ok_or(AppError::NotFound("Barbeiro"))
    }

    pub async fn update_barber(
        &self,
        branch_id: Uuid,
        barber_id: Uuid,
        payload: &UpdateBarberPayload,
    ) -> Result<Barber, AppError> {
        self.repo
            .update_barber(
                &self.pool,
                branch_id,
                barber_id,
                &payload.full_name,
                payload.phone.as_deref(),
                payload.is_active,
            )
            .await?
            .ok_or(AppError::NotFound("Barbeiro"))
    }

    pub async fn deactivate_barber(
        &self,
        branch_id: Uuid,
        barber_id: Uuid,
    ) -> Result<(), AppError> {
        let found = self.repo.deactivate_barber(&self.pool, branch_id, barber_id).await?;
        if !found {
            return Err(AppError::NotFound("Barbeiro"));
        }
        Ok(())
    }

    // --- Grade de horários ---

    pub async fn get_schedule(
        &self,
        branch_id: Uuid,
        barber_id: Uuid,
    ) -> Result<Vec<BarberSchedule>, AppError> {
        self.get_barber(branch_id, barber_id).await?;
        self.repo.get_schedule(&self.pool, barber_id).await
    }

    pub async fn replace_schedule(
        &self,
        branch_id: Uuid,
        barber_id: Uuid,
        payload: &UpdateSchedulePayload,
    ) -> Result<Vec<BarberSchedule>, AppError> {
        self.get_barber(branch_id, barber_id).await?;

        // Intervalo invertido é erro de entrada, nunca gravado
        for entry in &payload.entries {
            if entry.start_time >= entry.end_time {
                return Err(AppError::InvalidInput(format!(
                    "schedule for weekday {} has start >= end",
                    entry.weekday
                )));
            }
        }

        self.repo.replace_schedule(barber_id, &payload.entries).await
    }

    // --- Bloqueios ---

    pub async fn create_block(
        &self,
        branch_id: Uuid,
        barber_id: Uuid,
        payload: &CreateBlockPayload,
    ) -> Result<BarberBlock, AppError> {
        self.get_barber(branch_id, barber_id).await?;

        // Ou dia inteiro (nada de horário), ou parcial (ambos, em ordem)
        match (payload.start_time, payload.end_time) {
            (None, None) => {}
            (Some(start), Some(end)) if start < end => {}
            (Some(_), Some(_)) => {
                return Err(AppError::InvalidInput(
                    "block start must be before end".to_string(),
                ));
            }
            _ => {
                return Err(AppError::InvalidInput(
                    "partial block needs both start and end".to_string(),
                ));
            }
        }

        self.repo
            .create_block(
                &self.pool,
                barber_id,
                payload.date,
                payload.start_time,
                payload.end_time,
                payload.reason.as_deref(),
            )
            .await
    }

    pub async fn list_blocks(
        &self,
        branch_id: Uuid,
        barber_id: Uuid,
    ) -> Result<Vec<BarberBlock>, AppError> {
        self.get_barber(branch_id, barber_id).await?;
        self.repo.get_blocks(&self.pool, barber_id).await
    }

    pub async fn delete_block(
        &self,
        branch_id: Uuid,
        barber_id: Uuid,
        block_id: Uuid,
    ) -> Result<(), AppError> {
        self.get_barber(branch_id, barber_id).await?;

        let found = self.repo.delete_block(&self.pool, barber_id, block_id).await?;
        if !found {
            return Err(AppError::NotFound("Bloqueio"));
        }
        Ok(())
    }
}
