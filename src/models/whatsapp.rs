// src/models/whatsapp.rs

use serde::Serialize;
use utoipa::ToSchema;

// O "comando" de lembrete: destino + corpo, pronto para o gateway.
// Nada de dispatch ambiente: quem quer enviar monta um desses e entrega
// ao MessageGateway injetado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderMessage {
    pub phone: String,
    pub body: String,
}

// Resposta da API: o link wa.me pronto para abrir no painel
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReminderLink {
    #[schema(example = "+54 9 11 5555-1234")]
    pub phone: String,

    #[schema(example = "¡Hola María! Te recordamos tu turno...")]
    pub message: String,

    #[schema(example = "https://wa.me/5491155551234?text=...")]
    pub link: String,
}
