// src/services/whatsapp.rs

// O lembrete de WhatsApp é um comando explícito: montamos a mensagem,
// entregamos ao gateway injetado e devolvemos o resultado. O gateway
// padrão não fala com rede nenhuma -- só constrói o deep link wa.me que
// o painel abre no navegador.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{AppointmentRepository, BranchRepository, CatalogRepository, ClientRepository},
    models::{
        appointment::Appointment,
        branch::Branch,
        catalog::ServiceItem,
        client::Client,
        whatsapp::{ReminderLink, ReminderMessage},
    },
};

// A costura para o mundo externo. Hoje só existe o gerador de links;
// um envio real via API do WhatsApp entraria como outra implementação.
#[async_trait]
pub trait MessageGateway: Send + Sync {
    async fn deliver(&self, message: &ReminderMessage) -> Result<String, AppError>;
}

pub struct WaLinkGateway;

#[async_trait]
impl MessageGateway for WaLinkGateway {
    async fn deliver(&self, message: &ReminderMessage) -> Result<String, AppError> {
        let phone = sanitize_phone(&message.phone);
        if phone.is_empty() {
            return Err(AppError::InvalidInput(
                "client phone has no digits".to_string(),
            ));
        }

        Ok(format!(
            "https://wa.me/{}?text={}",
            phone,
            urlencoding::encode(&message.body)
        ))
    }
}

// wa.me só aceita dígitos (código do país incluído, sem '+')
fn sanitize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

// O texto do lembrete, no idioma dos clientes da barbearia
pub fn render_reminder(
    appointment: &Appointment,
    client: &Client,
    branch: &Branch,
    service: &ServiceItem,
) -> ReminderMessage {
    let time = appointment.start_time.format("%H:%M");
    let date = appointment.date.format("%d/%m/%Y");

    let body = format!(
        "¡Hola {}! Te recordamos tu turno de {} en {} el {} a las {}. ¡Te esperamos!",
        client.full_name, service.name, branch.name, date, time
    );

    ReminderMessage { phone: client.phone.clone(), body }
}

#[derive(Clone)]
pub struct WhatsappService {
    appointment_repo: AppointmentRepository,
    client_repo: ClientRepository,
    branch_repo: BranchRepository,
    catalog_repo: CatalogRepository,
    gateway: Arc<dyn MessageGateway>,
    pool: PgPool,
}

impl WhatsappService {
    pub fn new(
        appointment_repo: AppointmentRepository,
        client_repo: ClientRepository,
        branch_repo: BranchRepository,
        catalog_repo: CatalogRepository,
        gateway: Arc<dyn MessageGateway>,
        pool: PgPool,
    ) -> Self {
        Self {
            appointment_repo,
            client_repo,
            branch_repo,
            catalog_repo,
            gateway,
            pool,
        }
    }

    pub async fn reminder_link(
        &self,
        branch_id: Uuid,
        appointment_id: Uuid,
    ) -> Result<ReminderLink, AppError> {
        let appointment = self
            .appointment_repo
            .find_by_id(&self.pool, branch_id, appointment_id)
            .await?
            .ok_or(AppError::NotFound("Turno"))?;

        let client = self
            .client_repo
            .find_by_id(&self.pool, branch_id, appointment.client_id)
            .await?
            .ok_or(AppError::NotFound("Cliente"))?;

        let branch = self
            .branch_repo
            .find_by_id(&self.pool, branch_id)
            .await?
            .ok_or(AppError::NotFound("Sucursal"))?;

        let service = self
            .catalog_repo
            .find_by_id(&self.pool, branch_id, appointment.service_id)
            .await?
            .ok_or(AppError::NotFound("Serviço"))?;

        let message = render_reminder(&appointment, &client, &branch, &service);
        let link = self.gateway.deliver(&message).await?;

        Ok(ReminderLink { phone: message.phone, message: message.body, link })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appointment::AppointmentStatus;
    use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
    use rust_decimal::Decimal;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-03-01T12:00:00Z")
            .expect("timestamp válido")
            .with_timezone(&Utc)
    }

    fn fixture() -> (Appointment, Client, Branch, ServiceItem) {
        let branch_id = Uuid::new_v4();
        let client_id = Uuid::new_v4();
        let service_id = Uuid::new_v4();

        let appointment = Appointment {
            id: Uuid::new_v4(),
            branch_id,
            barber_id: Uuid::new_v4(),
            client_id,
            service_id,
            date: NaiveDate::from_ymd_opt(2025, 3, 15).expect("data válida"),
            start_time: NaiveTime::from_hms_opt(10, 0, 0).expect("hora válida"),
            duration_minutes: 30,
            status: AppointmentStatus::Confirmed,
            notes: None,
            created_at: now(),
            updated_at: now(),
        };
        let client = Client {
            id: client_id,
            branch_id,
            full_name: "María da Silva".to_string(),
            phone: "+54 9 11 5555-1234".to_string(),
            email: None,
            notes: None,
            created_at: now(),
            updated_at: now(),
        };
        let branch = Branch {
            id: branch_id,
            name: "MiBarber Centro".to_string(),
            address: None,
            phone: None,
            slot_granularity_minutes: 30,
            is_active: true,
            created_at: now(),
        };
        let service = ServiceItem {
            id: service_id,
            branch_id,
            name: "Corte clásico".to_string(),
            duration_minutes: 30,
            price: Decimal::from(3500),
            is_active: true,
            created_at: now(),
        };

        (appointment, client, branch, service)
    }

    #[test]
    fn reminder_carries_client_service_and_time() {
        let (appointment, client, branch, service) = fixture();
        let message = render_reminder(&appointment, &client, &branch, &service);

        assert_eq!(message.phone, client.phone);
        assert!(message.body.contains("María da Silva"));
        assert!(message.body.contains("Corte clásico"));
        assert!(message.body.contains("MiBarber Centro"));
        assert!(message.body.contains("15/03/2025"));
        assert!(message.body.contains("10:00"));
    }

    #[tokio::test]
    async fn link_strips_phone_and_encodes_text() {
        let (appointment, client, branch, service) = fixture();
        let message = render_reminder(&appointment, &client, &branch, &service);

        let link = WaLinkGateway
            .deliver(&message)
            .await
            .expect("link válido");

        assert!(link.starts_with("https://wa.me/5491155551234?text="));
        // Nada de espaço cru na query string
        assert!(!link.contains(' '));
    }

    #[tokio::test]
    async fn phone_without_digits_is_rejected() {
        let message = ReminderMessage { phone: "sin teléfono".to_string(), body: "hola".to_string() };

        let result = WaLinkGateway.deliver(&message).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
