// src/services/appointment_service.rs

use chrono::{Datelike, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{
        AppointmentRepository, BarberRepository, BranchRepository, CashRepository,
        CatalogRepository,
    },
    models::{
        appointment::{
            Appointment, AppointmentStatus, AvailabilityParams, AvailabilityQuery,
            CreateAppointmentPayload, RescheduleAppointmentPayload, TimeRange,
        },
        barber::BarberSchedule,
        cash::MovementKind,
    },
    services::availability,
};

#[derive(Clone)]
pub struct AppointmentService {
    appointment_repo: AppointmentRepository,
    barber_repo: BarberRepository,
    branch_repo: BranchRepository,
    catalog_repo: CatalogRepository,
    cash_repo: CashRepository,
    pool: PgPool,
}

impl AppointmentService {
    pub fn new(
        appointment_repo: AppointmentRepository,
        barber_repo: BarberRepository,
        branch_repo: BranchRepository,
        catalog_repo: CatalogRepository,
        cash_repo: CashRepository,
        pool: PgPool,
    ) -> Self {
        Self {
            appointment_repo,
            barber_repo,
            branch_repo,
            catalog_repo,
            cash_repo,
            pool,
        }
    }

    // O expediente do barbeiro no dia consultado. Dia da semana sem
    // registro = não atende = None (não é erro).
    async fn working_hours_for(
        &self,
        barber_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<BarberSchedule>, AppError> {
        let weekday = date.weekday().num_days_from_sunday() as i16;
        self.barber_repo
            .schedule_for_weekday(&self.pool, barber_id, weekday)
            .await
    }

    /// Lista os horários livres para a tela de agendamento.
    ///
    /// Sem os parâmetros obrigatórios (barbeiro, data, serviço) devolve
    /// lista vazia: é o "ainda não há o que mostrar" do formulário, não
    /// um erro.
    pub async fn availability(
        &self,
        branch_id: Uuid,
        params: &AvailabilityParams,
    ) -> Result<Vec<TimeRange>, AppError> {
        let (Some(barber_id), Some(date), Some(service_id)) =
            (params.barber_id, params.date, params.service_id)
        else {
            return Ok(Vec::new());
        };

        let branch = self
            .branch_repo
            .find_by_id(&self.pool, branch_id)
            .await?
            .ok_or(AppError::NotFound("Sucursal"))?;

        let service = self
            .catalog_repo
            .find_by_id(&self.pool, branch_id, service_id)
            .await?
            .ok_or(AppError::NotFound("Serviço"))?;

        let Some(schedule) = self.working_hours_for(barber_id, date).await? else {
            return Ok(Vec::new());
        };

        let appointments = self
            .appointment_repo
            .occupying_for_barber_date(&self.pool, branch_id, barber_id, date)
            .await?;
        let blocks = self
            .barber_repo
            .blocks_for_date(&self.pool, barber_id, date)
            .await?;

        let query = AvailabilityQuery {
            branch_id,
            barber_id,
            date,
            service_duration: service.duration_minutes,
            exclude_appointment_id: params.exclude_id,
        };
        let working_hours = TimeRange { start: schedule.start_time, end: schedule.end_time };

        availability::compute_available_slots(
            &working_hours,
            &appointments,
            &blocks,
            &query,
            branch.slot_granularity_minutes,
        )
    }

    // Veto de conflito compartilhado entre criação e remarcação
    async fn ensure_slot_free(
        &self,
        branch_id: Uuid,
        barber_id: Uuid,
        date: NaiveDate,
        start_time: chrono::NaiveTime,
        service_duration: i32,
        exclude_appointment_id: Option<Uuid>,
    ) -> Result<(), AppError> {
        let Some(schedule) = self.working_hours_for(barber_id, date).await? else {
            // Dia sem expediente: nenhum horário é válido
            return Err(AppError::SlotUnavailable);
        };

        let appointments = self
            .appointment_repo
            .occupying_for_barber_date(&self.pool, branch_id, barber_id, date)
            .await?;
        let blocks = self
            .barber_repo
            .blocks_for_date(&self.pool, barber_id, date)
            .await?;

        let query = AvailabilityQuery {
            branch_id,
            barber_id,
            date,
            service_duration,
            exclude_appointment_id,
        };
        let working_hours = TimeRange { start: schedule.start_time, end: schedule.end_time };

        let free = availability::is_interval_free(
            &working_hours,
            &appointments,
            &blocks,
            &query,
            start_time,
        )?;

        if !free {
            return Err(AppError::SlotUnavailable);
        }
        Ok(())
    }

    pub async fn create_appointment(
        &self,
        branch_id: Uuid,
        payload: &CreateAppointmentPayload,
    ) -> Result<Appointment, AppError> {
        // O barbeiro precisa existir E pertencer à sucursal do cabeçalho
        self.barber_repo
            .find_by_id(&self.pool, branch_id, payload.barber_id)
            .await?
            .ok_or(AppError::NotFound("Barbeiro"))?;

        let service = self
            .catalog_repo
            .find_by_id(&self.pool, branch_id, payload.service_id)
            .await?
            .ok_or(AppError::NotFound("Serviço"))?;

        self.ensure_slot_free(
            branch_id,
            payload.barber_id,
            payload.date,
            payload.start_time,
            service.duration_minutes,
            None,
        )
        .await?;

        self.appointment_repo
            .create_appointment(
                &self.pool,
                branch_id,
                payload.barber_id,
                payload.client_id,
                payload.service_id,
                payload.date,
                payload.start_time,
                service.duration_minutes,
                payload.notes.as_deref(),
            )
            .await
    }

    pub async fn list_for_day(
        &self,
        branch_id: Uuid,
        date: NaiveDate,
        barber_id: Option<Uuid>,
    ) -> Result<Vec<Appointment>, AppError> {
        self.appointment_repo
            .list_for_day(&self.pool, branch_id, date, barber_id)
            .await
    }

    pub async fn reschedule(
        &self,
        branch_id: Uuid,
        appointment_id: Uuid,
        payload: &RescheduleAppointmentPayload,
    ) -> Result<Appointment, AppError> {
        let existing = self
            .appointment_repo
            .find_by_id(&self.pool, branch_id, appointment_id)
            .await?
            .ok_or(AppError::NotFound("Turno"))?;

        let barber_id = payload.barber_id.unwrap_or(existing.barber_id);

        if payload.barber_id.is_some() {
            self.barber_repo
                .find_by_id(&self.pool, branch_id, barber_id)
                .await?
                .ok_or(AppError::NotFound("Barbeiro"))?;
        }

        // O próprio turno não conta como conflito (excludeId)
        self.ensure_slot_free(
            branch_id,
            barber_id,
            payload.date,
            payload.start_time,
            existing.duration_minutes,
            Some(appointment_id),
        )
        .await?;

        self.appointment_repo
            .reschedule(
                &self.pool,
                branch_id,
                appointment_id,
                barber_id,
                payload.date,
                payload.start_time,
            )
            .await?
            .ok_or(AppError::NotFound("Turno"))
    }

    // Mudança de status. Concluir um turno lança a cobrança do serviço no
    // caixa, na mesma transação -- ou grava tudo, ou nada.
    pub async fn set_status(
        &self,
        branch_id: Uuid,
        appointment_id: Uuid,
        status: AppointmentStatus,
    ) -> Result<Appointment, AppError> {
        let existing = self
            .appointment_repo
            .find_by_id(&self.pool, branch_id, appointment_id)
            .await?
            .ok_or(AppError::NotFound("Turno"))?;

        let mut tx = self.pool.begin().await?;

        let updated = self
            .appointment_repo
            .set_status(&mut *tx, branch_id, appointment_id, status)
            .await?
            .ok_or(AppError::NotFound("Turno"))?;

        let completing =
            status == AppointmentStatus::Completed && existing.status != AppointmentStatus::Completed;
        if completing {
            let service = self
                .catalog_repo
                .find_by_id(&mut *tx, branch_id, existing.service_id)
                .await?
                .ok_or(AppError::NotFound("Serviço"))?;

            if service.price > rust_decimal::Decimal::ZERO {
                let description = format!("Cobro de servicio ({})", service.name);
                self.cash_repo
                    .create_movement(
                        &mut *tx,
                        branch_id,
                        Utc::now(),
                        service.price,
                        MovementKind::Income,
                        &description,
                        Some(appointment_id),
                        Some(existing.client_id),
                    )
                    .await?;
            }
        }

        tx.commit().await?;
        Ok(updated)
    }

    pub async fn cancel(
        &self,
        branch_id: Uuid,
        appointment_id: Uuid,
    ) -> Result<Appointment, AppError> {
        self.appointment_repo
            .set_status(&self.pool, branch_id, appointment_id, AppointmentStatus::Cancelled)
            .await?
            .ok_or(AppError::NotFound("Turno"))
    }
}
