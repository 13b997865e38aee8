// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

// 1. Resumo do Dia (Os Cards do Topo)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub appointments_today: i64, // Turnos agendados para hoje
    pub completed_today: i64,    // Turnos já atendidos hoje
    pub income_today: Decimal,   // Entradas de caixa de hoje
    pub balance: Decimal,        // Saldo acumulado do caixa (entradas - saídas)
}

// 2. Gráfico de Turnos (Últimos 30 dias)
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentsChartEntry {
    pub date: Option<String>, // O SQL retorna a data como string (YYYY-MM-DD)
    pub total: Option<i64>,
}

// 3. Ranking de serviços mais vendidos
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopServiceEntry {
    pub service_name: String,
    pub total_count: Option<i64>,
    pub total_revenue: Option<Decimal>,
}

// 4. Ranking de barbeiros por atendimentos
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopBarberEntry {
    pub barber_name: String,
    pub total_count: Option<i64>,
}
